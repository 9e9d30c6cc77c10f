use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{compare::CompareArgs, optimize::OptimizeArgs};

mod compare;
mod file_utils;
mod optimize;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimizes a request file and prints the response as JSON
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Runs every algorithm on the same request and prints a summary table
    #[command(visible_alias = "c")]
    Compare {
        #[command(flatten)]
        args: CompareArgs,
    },
    /// Prints the JSON schema of the request and response bodies
    Schema,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Optimize { args }) => optimize::run(args)?,
        Some(Commands::Compare { args }) => compare::run(args)?,
        Some(Commands::Schema) => {
            println!("{}", courier_optimizer::json::schema::generate_json_schema()?);
            println!(
                "{}",
                courier_optimizer::json::schema::generate_response_json_schema()?
            );
        }
        None => {}
    }

    Ok(())
}
