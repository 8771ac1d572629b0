use std::io::Read;
use std::path::Path;

use geo::LineString;
use geojson::{Feature, GeoJson};
use log::{trace, warn};

use super::{labels::parse_endpoint_label, open_file};
use crate::{
    Error,
    model::{DecorationKind, SegmentDescriptor},
};

/// Segment descriptors together with how many raw features were dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedSegments {
    pub segments: Vec<SegmentDescriptor>,
    pub skipped: usize,
}

/// Load segment descriptors from a GeoJSON `FeatureCollection` file
pub fn load_segments(path: &Path) -> Result<LoadedSegments, Error> {
    read_segments(open_file(path)?)
}

/// Read segment descriptors from GeoJSON.
///
/// Each feature carries a `kind` property (`path`, `road`, `arrow` or
/// `underground`). Path features name their endpoints in a `label` (or
/// `name`) property such as `"between nodes 12 and 13"`; decorations keep
/// their `LineString` geometry. Features that cannot be interpreted are
/// skipped and counted.
pub fn read_segments<R: Read>(mut reader: R) -> Result<LoadedSegments, Error> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;

    let geojson: GeoJson = raw
        .parse()
        .map_err(|e: geojson::Error| Error::GeoJsonError(e.to_string()))?;

    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(Error::InvalidData(
            "Segment data must be a GeoJSON FeatureCollection".to_string(),
        ));
    };

    let total = collection.features.len();
    let segments: Vec<SegmentDescriptor> = collection
        .features
        .iter()
        .filter_map(segment_from_feature)
        .collect();

    let skipped = total - segments.len();
    if skipped > 0 {
        warn!("{skipped} of {total} segment features could not be interpreted and were skipped");
    }

    Ok(LoadedSegments { segments, skipped })
}

fn segment_from_feature(feature: &Feature) -> Option<SegmentDescriptor> {
    let kind = feature
        .property("kind")
        .and_then(|value| value.as_str())
        .unwrap_or("path");

    let decoration = match kind {
        "path" => return path_from_feature(feature),
        "road" => DecorationKind::Road,
        "arrow" => DecorationKind::Arrow,
        "underground" => DecorationKind::Underground,
        other => {
            trace!("Skipping segment with unknown kind '{other}'");
            return None;
        }
    };

    let coordinates = feature
        .geometry
        .as_ref()
        .and_then(|geometry| LineString::<f64>::try_from(geometry.value.clone()).ok());

    match coordinates {
        Some(coordinates) => Some(SegmentDescriptor::Decoration {
            kind: decoration,
            coordinates,
        }),
        None => {
            trace!("Skipping {kind} segment without LineString geometry");
            None
        }
    }
}

fn path_from_feature(feature: &Feature) -> Option<SegmentDescriptor> {
    let label = feature
        .property("label")
        .or_else(|| feature.property("name"))
        .and_then(|value| value.as_str())?;

    match parse_endpoint_label(label) {
        Some((a, b)) => Some(SegmentDescriptor::PathEdge { a, b }),
        None => {
            trace!("Skipping path segment with unparseable label '{label}'");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEGMENTS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[34.78, 32.08], [34.78, 32.081]]},
                "properties": {"kind": "path", "label": "between nodes 1 and 2"}
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": {"name": "nodes 2 and 3"}
            },
            {
                "type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[34.78, 32.08], [34.79, 32.08]]},
                "properties": {"kind": "underground", "label": "tunnel under nodes 1 and 3"}
            },
            {
                "type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[34.78, 32.08], [34.79, 32.09]]},
                "properties": {"kind": "road"}
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": {"kind": "path", "label": "service lane"}
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": {"kind": "arrow"}
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": {"kind": "bridge", "label": "nodes 4 and 5"}
            }
        ]
    }"#;

    #[test]
    fn interprets_paths_and_decorations() {
        let loaded = read_segments(SEGMENTS.as_bytes()).unwrap();

        assert_eq!(loaded.segments.len(), 4);
        assert_eq!(loaded.segments[0], SegmentDescriptor::path(1, 2));
        assert_eq!(loaded.segments[1], SegmentDescriptor::path(2, 3));
        assert!(matches!(
            loaded.segments[2],
            SegmentDescriptor::Decoration {
                kind: DecorationKind::Underground,
                ..
            }
        ));
        assert!(matches!(
            loaded.segments[3],
            SegmentDescriptor::Decoration {
                kind: DecorationKind::Road,
                ..
            }
        ));
        // unparseable label, arrow without geometry, unknown kind
        assert_eq!(loaded.skipped, 3);
    }

    #[test]
    fn rejects_non_collection() {
        let single = r#"{"type": "Point", "coordinates": [34.78, 32.08]}"#;
        assert!(matches!(
            read_segments(single.as_bytes()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            read_segments("not geojson".as_bytes()),
            Err(Error::GeoJsonError(_))
        ));
    }
}
