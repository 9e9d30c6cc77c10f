use super::{coordinate::Coordinate, kilometers::Kilometers};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates on a sphere of radius
/// [`EARTH_RADIUS_KM`].
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> Kilometers {
    let from_lat = from.lat().to_radians();
    let to_lat = to.lat().to_radians();
    let delta_lat = (to.lat() - from.lat()).to_radians();
    let delta_lng = (to.lng() - from.lng()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Kilometers::new(EARTH_RADIUS_KM * c)
}
