//! Directions deep link.

use url::Url;

use crate::error::{Result, RoutingError};
use crate::models::Route;

/// Default directions endpoint.
pub const DEFAULT_DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

/// Builds a directions URL for the route.
///
/// The query carries `api=1`, the start as `origin`, the last stop as
/// `destination`, the intermediate stops as `|`-separated `waypoints` (only
/// when there are any), and the route's travel mode as `travelmode`.
///
/// Returns [`RoutingError::EmptyInput`] for a route without stops.
///
/// # Examples
///
/// ```
/// use spot_routing::models::{Coordinate, Spot, TravelMode};
/// use spot_routing::ordering::nearest_neighbor;
/// use spot_routing::export::{directions_url, DEFAULT_DIRECTIONS_BASE};
///
/// let start = Coordinate::new(33.32, 130.93).unwrap();
/// let spots = vec![Spot::new("A", Coordinate::new(33.322, 130.926).unwrap())];
/// let route = nearest_neighbor(start, &spots, TravelMode::Walking);
/// let url = directions_url(&route, DEFAULT_DIRECTIONS_BASE).unwrap();
/// assert!(url.as_str().contains("destination=33.322%2C130.926"));
/// assert!(url.as_str().ends_with("travelmode=walking"));
/// ```
pub fn directions_url(route: &Route, base: &str) -> Result<Url> {
    let stops = route.stop_coordinates();
    let (destination, waypoints) = stops.split_last().ok_or(RoutingError::EmptyInput)?;

    let mut url = Url::parse(base)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("api", "1");
        query.append_pair("origin", &route.start().to_string());
        query.append_pair("destination", &destination.to_string());
        if !waypoints.is_empty() {
            let joined = waypoints
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("|");
            query.append_pair("waypoints", &joined);
        }
        query.append_pair("travelmode", route.mode().as_str());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, Spot, TravelMode};
    use crate::ordering::nearest_neighbor;

    fn at(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("valid")
    }

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_url_with_waypoints() {
        let spots = vec![
            Spot::new("a", at(0.0, 0.01)),
            Spot::new("b", at(0.0, 0.02)),
            Spot::new("c", at(0.0, 0.03)),
        ];
        let route = nearest_neighbor(at(0.0, 0.0), &spots, TravelMode::Driving);
        let url = directions_url(&route, DEFAULT_DIRECTIONS_BASE).expect("ok");
        assert_eq!(
            pairs(&url),
            vec![
                ("api".to_string(), "1".to_string()),
                ("origin".to_string(), "0,0".to_string()),
                ("destination".to_string(), "0,0.03".to_string()),
                ("waypoints".to_string(), "0,0.01|0,0.02".to_string()),
                ("travelmode".to_string(), "driving".to_string()),
            ]
        );
        assert!(url.as_str().starts_with(DEFAULT_DIRECTIONS_BASE));
    }

    #[test]
    fn test_url_single_stop_has_no_waypoints() {
        let spots = vec![Spot::new("a", at(1.5, 2.5))];
        let route = nearest_neighbor(at(1.0, 2.0), &spots, TravelMode::Walking);
        let url = directions_url(&route, DEFAULT_DIRECTIONS_BASE).expect("ok");
        assert!(pairs(&url).iter().all(|(k, _)| k != "waypoints"));
    }

    #[test]
    fn test_url_empty_route() {
        let route = nearest_neighbor(at(1.0, 2.0), &[], TravelMode::Walking);
        assert!(matches!(
            directions_url(&route, DEFAULT_DIRECTIONS_BASE),
            Err(RoutingError::EmptyInput)
        ));
    }

    #[test]
    fn test_url_bad_base() {
        let spots = vec![Spot::new("a", at(1.5, 2.5))];
        let route = nearest_neighbor(at(1.0, 2.0), &spots, TravelMode::Walking);
        assert!(matches!(
            directions_url(&route, "not a url"),
            Err(RoutingError::Url(_))
        ));
    }
}
