//! Spot lists from CSV.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{ensure_unique_names, Coordinate, Spot};

#[derive(Debug, Deserialize)]
struct SpotRecord {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    wait_minutes: Option<f64>,
    #[serde(default)]
    visit_minutes: Option<f64>,
}

impl SpotRecord {
    fn into_spot(self) -> Result<Spot> {
        let coordinate = Coordinate::new(self.latitude, self.longitude)?;
        let mut spot = Spot::new(self.name.trim(), coordinate);
        if let Some(w) = self.wait_minutes {
            spot = spot.with_wait_minutes(w)?;
        }
        if let Some(v) = self.visit_minutes {
            spot = spot.with_visit_minutes(v)?;
        }
        Ok(spot)
    }
}

/// Reads spots from CSV with a header row.
///
/// Columns: `name,latitude,longitude`, optionally followed by `wait_minutes`
/// and `visit_minutes` (empty cells mean unknown). Coordinates and attributes
/// are validated and duplicate names are rejected.
///
/// # Examples
///
/// ```
/// use spot_routing::loader::load_spots_csv;
///
/// let data = "name,latitude,longitude,wait_minutes\nCastle,33.322,130.926,15\nPark,33.324,130.932,\n";
/// let spots = load_spots_csv(data.as_bytes()).unwrap();
/// assert_eq!(spots.len(), 2);
/// assert_eq!(spots[0].wait_minutes(), 15.0);
/// assert_eq!(spots[1].wait_minutes(), 0.0);
/// ```
pub fn load_spots_csv<R: Read>(reader: R) -> Result<Vec<Spot>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut spots = Vec::new();
    for record in rdr.deserialize::<SpotRecord>() {
        spots.push(record?.into_spot()?);
    }
    ensure_unique_names(&spots)?;
    debug!(count = spots.len(), "loaded spots");
    Ok(spots)
}

/// Reads spots from a CSV file. See [`load_spots_csv`].
pub fn load_spots_file<P: AsRef<Path>>(path: P) -> Result<Vec<Spot>> {
    let file = std::fs::File::open(path)?;
    load_spots_csv(file)
}
