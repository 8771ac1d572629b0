use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{trace, warn};
use serde_json::Value as JsonValue;

use super::open_file;
use crate::{Error, model::MapNode};

/// Load map nodes from a CSV or JSON file, chosen by extension.
///
/// Records that fail to decode or carry invalid coordinates are skipped.
pub fn load_nodes(path: &Path) -> Result<Vec<MapNode>, Error> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let file: File = open_file(path)?;
    let reader = BufReader::new(file);

    match extension.as_deref() {
        Some("csv") => read_nodes_csv(reader),
        Some("json") => read_nodes_json(reader),
        _ => Err(Error::InvalidData(format!(
            "Unsupported node file format: {}",
            path.display()
        ))),
    }
}

/// Read nodes from CSV with an `id,latitude,longitude,description` header
pub fn read_nodes_csv<R: Read>(reader: R) -> Result<Vec<MapNode>, Error> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut nodes = Vec::new();
    let mut rejected = 0usize;

    for record in reader.deserialize::<MapNode>() {
        match record {
            Ok(node) => nodes.push(node),
            Err(e) => {
                trace!("Skipping node record: {e}");
                rejected += 1;
            }
        }
    }

    Ok(retain_valid(nodes, rejected))
}

/// Read nodes from a JSON array of node objects
pub fn read_nodes_json<R: Read>(reader: R) -> Result<Vec<MapNode>, Error> {
    let records: Vec<JsonValue> = serde_json::from_reader(reader)?;
    let mut nodes = Vec::with_capacity(records.len());
    let mut rejected = 0usize;

    for record in records {
        match serde_json::from_value::<MapNode>(record) {
            Ok(node) => nodes.push(node),
            Err(e) => {
                trace!("Skipping node record: {e}");
                rejected += 1;
            }
        }
    }

    Ok(retain_valid(nodes, rejected))
}

fn retain_valid(mut nodes: Vec<MapNode>, rejected: usize) -> Vec<MapNode> {
    let before = nodes.len();
    nodes.retain(MapNode::has_valid_coordinates);
    let rejected = rejected + (before - nodes.len());

    if rejected > 0 {
        warn!(
            "{rejected} node records were malformed or had invalid coordinates and were skipped"
        );
    }
    nodes
}
