use std::io::{BufReader, Read};
use std::path::Path;

use log::trace;
use serde_json::Value as JsonValue;

use super::open_file;
use crate::{Error, model::Building};

/// Load buildings with their apartments from a JSON array file
pub fn load_buildings(path: &Path) -> Result<Vec<Building>, Error> {
    read_buildings(BufReader::new(open_file(path)?))
}

/// Read buildings from a JSON array; malformed entries are skipped
pub fn read_buildings<R: Read>(reader: R) -> Result<Vec<Building>, Error> {
    let records: Vec<JsonValue> = serde_json::from_reader(reader)?;

    Ok(records
        .into_iter()
        .filter_map(|record| {
            serde_json::from_value::<Building>(record)
                .map_err(|e| trace!("Skipping building record: {e}"))
                .ok()
        })
        .collect())
}
