//! Loading candidate spots from tabular files.

mod spots_csv;

pub use spots_csv::{load_spots_csv, load_spots_file};
