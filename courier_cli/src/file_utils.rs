use std::path::Path;

use anyhow::Context;
use courier_optimizer::json::types::JsonOptimizeRouteRequest;

pub fn read_request(path: &Path) -> Result<JsonOptimizeRouteRequest, anyhow::Error> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a valid optimization request", path.display()))
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_read_request() {
        let path = env::current_dir()
            .unwrap()
            .join("tests/fixtures/riyadh.json");
        let request = read_request(&path).unwrap();

        assert_eq!(request.locations.as_ref().map(Vec::len), Some(4));
        assert_eq!(request.algorithm.as_deref(), Some("nearest-neighbor"));
        assert!(request.start_location.is_some());
    }

    #[test]
    fn test_read_missing_file() {
        let error = read_request(Path::new("tests/fixtures/missing.json")).unwrap_err();

        assert!(error.to_string().contains("missing.json"));
    }
}
