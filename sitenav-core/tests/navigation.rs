use std::fs;

use geo::{LineString, Point};
use sitenav_core::prelude::*;

// Small site: a loop 1-2-3-4-1 with a spur 4-5, a separate courtyard 6-7,
// node 8 reachable only through a tunnel and node 9 never referenced.
fn site_nodes() -> Vec<MapNode> {
    vec![
        MapNode::new(1, 32.0800, 34.7800).with_description("gate.main"),
        MapNode::new(2, 32.0800, 34.7812),
        MapNode::new(3, 32.0809, 34.7812),
        MapNode::new(4, 32.0809, 34.7800),
        MapNode::new(5, 32.0815, 34.7800),
        MapNode::new(6, 32.0900, 34.7900),
        MapNode::new(7, 32.0903, 34.7904),
        MapNode::new(8, 32.0820, 34.7820),
        MapNode::new(9, 32.0700, 34.7700),
    ]
}

fn site_segments() -> Vec<SegmentDescriptor> {
    vec![
        SegmentDescriptor::path(1, 2),
        SegmentDescriptor::path(2, 3),
        SegmentDescriptor::path(3, 4),
        SegmentDescriptor::path(4, 1),
        SegmentDescriptor::path(4, 5),
        SegmentDescriptor::path(6, 7),
        // authoring errors kept from the field data
        SegmentDescriptor::path(5, 5),
        SegmentDescriptor::path(2, 3),
        SegmentDescriptor::path(3, 99),
        SegmentDescriptor::Decoration {
            kind: DecorationKind::Underground,
            coordinates: LineString::from(vec![(34.7812, 32.0809), (34.7820, 32.0820)]),
        },
        SegmentDescriptor::Decoration {
            kind: DecorationKind::Arrow,
            coordinates: LineString::from(vec![(34.7800, 32.0800), (34.7805, 32.0800)]),
        },
    ]
}

fn site() -> NavigationMap {
    NavigationMap::new(site_nodes(), site_segments())
}

fn route_length(graph: &NavigationGraph, route: &Route) -> Meters {
    route
        .legs()
        .map(|(from, to)| graph.weight(from, to).expect("route follows graph edges"))
        .sum()
}

#[test]
fn graph_is_symmetric_and_non_negative() {
    let map = site();
    let graph = map.graph();

    for node in graph.node_ids() {
        for (next, weight) in graph.neighbors(node) {
            assert_eq!(graph.weight(next, node), Some(weight));
        }
    }
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn graceful_skip_from_the_field() {
    let nodes = vec![
        MapNode::new(1, 32.0800, 34.7800),
        MapNode::new(2, 32.0805, 34.7800),
        MapNode::new(3, 32.0810, 34.7800),
    ];
    let segments = ["nodes 1 and 2", "nodes 2 and 99"]
        .iter()
        .filter_map(|label| sitenav_core::loading::parse_endpoint_label(label))
        .map(|(a, b)| SegmentDescriptor::path(a, b))
        .collect::<Vec<_>>();

    let graph = build_graph(&nodes, &segments);

    assert!(graph.weight(1, 2).is_some());
    assert_eq!(graph.degree(3), 0);
    assert!(graph.contains(3));
    assert!(!graph.contains(99));
    assert_eq!(graph.degree(2), 1);
}

#[test]
fn route_distance_equals_sum_of_its_edges() {
    let map = site();
    let paths = map.shortest_paths(1);

    for target in [2, 3, 4, 5] {
        let route = Route::from_shortest_paths(&paths, target);
        assert_eq!(route.source(), Some(1));
        assert_eq!(route.target(), Some(target));
        assert_eq!(route_length(map.graph(), &route), paths.distance_to(target).unwrap());
        assert_eq!(route.distance, paths.distance_to(target).unwrap());
    }
}

#[test]
fn route_takes_the_short_side_of_the_loop() {
    let map = site();
    let route = map.route(1, 5);

    // 1-4-5 is far shorter than 1-2-3-4-5
    assert_eq!(route.nodes, vec![1, 4, 5]);
    assert_eq!(
        route.cumulative_distances(map.graph()),
        vec![
            0,
            map.graph().weight(1, 4).unwrap(),
            map.graph().weight(1, 4).unwrap() + map.graph().weight(4, 5).unwrap()
        ]
    );
}

#[test]
fn disconnected_components_have_no_route() {
    let map = site();

    assert!(map.route(1, 7).is_empty());
    assert!(reconstruct_path(map.shortest_paths(1).predecessors(), 1, 6).is_empty());
}

#[test]
fn tunnels_are_not_walkable() {
    let map = site();

    assert!(map.route(3, 8).is_empty());
    assert_eq!(map.graph().degree(8), 0);
}

#[test]
fn self_loop_and_duplicate_do_not_change_routes() {
    let clean = NavigationMap::new(
        site_nodes(),
        site_segments()
            .into_iter()
            .filter(|segment| {
                !matches!(segment.endpoints(), Some((5, 5)) | Some((3, 99)))
            })
            .collect(),
    );
    let noisy = site();

    for target in [2, 3, 4, 5] {
        assert_eq!(clean.route(1, target), noisy.route(1, target));
    }
    assert_eq!(noisy.graph().weight(5, 5), None);
}

#[test]
fn same_source_and_target_is_an_empty_route() {
    assert!(site().route(2, 2).is_empty());
}

#[test]
fn unknown_route_endpoints_degrade_to_empty_routes() {
    let map = site();

    assert!(map.route(1, 404).is_empty());
    assert!(map.route(404, 1).is_empty());
}

#[test]
fn walkable_nodes_exclude_isolated_ones() {
    let map = site();
    let walkable: Vec<NodeId> = map.walkable_nodes().map(|node| node.id).collect();

    assert_eq!(walkable, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(map.isolated_node_count(), 2);
}

#[test]
fn gps_fix_snaps_to_nearest_walkable_node() {
    let map = site();

    // right next to the unreferenced node 9, but 9 is not walkable
    let near_nine = Point::new(34.7701, 32.0701);
    assert_eq!(map.nearest_walkable_node(near_nine).map(|n| n.id), Some(1));

    let near_three = Point::new(34.78121, 32.08091);
    let route = map.route_from_point(near_three, 5).unwrap();
    assert_eq!(route.source(), Some(3));
    assert_eq!(route.target(), Some(5));
}

#[test]
fn map_without_walkable_nodes_cannot_route_from_a_point() {
    let map = NavigationMap::new(site_nodes(), Vec::new());

    assert!(map.nearest_walkable_node(Point::new(34.78, 32.08)).is_none());
    assert!(map.route_from_point(Point::new(34.78, 32.08), 1).is_none());
}

#[test]
fn reachable_within_is_sorted_and_bounded() {
    let map = site();
    let limit = map.graph().weight(1, 4).unwrap();
    let reached = map.reachable_within(1, limit);

    assert_eq!(reached.first(), Some(&(1, 0)));
    assert!(reached.iter().all(|&(_, d)| d <= limit));
    assert!(reached.windows(2).all(|w| w[0].1 <= w[1].1));
    assert!(reached.iter().any(|&(node, _)| node == 4));
}

#[test]
fn distance_matrix_matches_single_runs() {
    let map = site();
    let matrix = distance_matrix(&map, &[1, 6], &[5, 7]);

    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix[0][0], map.shortest_paths(1).distance_to(5));
    assert_eq!(matrix[0][1], None);
    assert_eq!(matrix[1][0], None);
    assert_eq!(matrix[1][1], map.graph().weight(6, 7));
}

#[test]
fn route_exports_as_geojson_line() {
    let map = site();
    let route = map.route(1, 5);
    let feature = route.to_geojson(&map).unwrap();

    let json = serde_json::to_value(&feature).unwrap();
    assert_eq!(json["geometry"]["type"], "LineString");
    assert_eq!(json["geometry"]["coordinates"].as_array().unwrap().len(), 3);
    assert_eq!(json["properties"]["distance"], route.distance);
    assert_eq!(json["properties"]["nodes"], serde_json::json!([1, 4, 5]));
}

#[test]
fn search_then_route_to_destination() {
    let buildings = vec![
        Building {
            id: 1,
            name: "מועדון".to_string(),
            node_id: Some(5),
            apartments: vec![],
        },
        Building {
            id: 2,
            name: "Cedar".to_string(),
            node_id: Some(3),
            apartments: vec![Apartment {
                id: 7,
                number: "12".to_string(),
                name: None,
            }],
        },
    ];
    let map = site().with_destinations(flatten_buildings(&buildings, &Untranslated));

    let matches = map.search("מועדונ", &SearchConfig::default());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, MatchKind::Typo);

    let route = map.route_to_destination(1, &matches[0].candidate);
    assert_eq!(route.nodes, vec![1, 4, 5]);

    let apartments = map.search("cedar 12", &SearchConfig::default());
    assert_eq!(apartments[0].kind, MatchKind::Exact);
    assert_eq!(
        apartments[0].candidate.entity,
        DestinationEntity::Apartment {
            building_id: 2,
            apartment_id: 7
        }
    );
}

#[test]
fn loads_map_data_from_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let nodes_path = dir.path().join("nodes.csv");
    let segments_path = dir.path().join("segments.geojson");
    let destinations_path = dir.path().join("buildings.json");

    fs::write(
        &nodes_path,
        "id,latitude,longitude,description\n\
         1,32.0800,34.7800,gate.main\n\
         2,32.0800,34.7812,\n\
         3,32.0809,34.7812,\n",
    )
    .unwrap();
    fs::write(
        &segments_path,
        r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": null, "properties": {"kind": "path", "label": "between nodes 1 and 2"}},
            {"type": "Feature", "geometry": null, "properties": {"kind": "path", "label": "between nodes 2 and 3"}},
            {"type": "Feature", "geometry": null, "properties": {"kind": "path", "label": "nodes 2 and 99"}},
            {"type": "Feature", "geometry": null, "properties": {"kind": "path", "label": "broken"}}
        ]}"#,
    )
    .unwrap();
    fs::write(
        &destinations_path,
        r#"[{"id": 1, "name": "Gym", "nodeId": 3}]"#,
    )
    .unwrap();

    let config = MapDataConfig {
        nodes_path,
        segments_path,
        destinations_path: Some(destinations_path),
    };
    let map = create_navigation_map(&config).unwrap();

    assert_eq!(map.node_count(), 3);
    assert_eq!(map.edge_count(), 2);
    assert_eq!(map.node(1).and_then(|n| n.description.as_deref()), Some("gate.main"));
    assert_eq!(map.route(1, 3).nodes, vec![1, 2, 3]);
    assert_eq!(map.search("gym", &SearchConfig::default()).len(), 1);
}

#[test]
fn missing_files_are_reported() {
    let config = MapDataConfig {
        nodes_path: "/nonexistent/nodes.csv".into(),
        segments_path: "/nonexistent/segments.geojson".into(),
        destinations_path: None,
    };

    assert!(matches!(
        create_navigation_map(&config),
        Err(Error::InvalidData(_))
    ));
}

#[test]
fn very_long_routes_saturate_instead_of_overflowing() {
    // Every leg spans half the globe, so the total exceeds `Meters::MAX`
    let nodes: Vec<MapNode> = (0..230)
        .map(|id| MapNode::new(id, 0.0, if id % 2 == 0 { 0.0 } else { 180.0 }))
        .collect();
    let segments: Vec<SegmentDescriptor> = (1..230)
        .map(|id| SegmentDescriptor::path(id - 1, id))
        .collect();
    let map = NavigationMap::new(nodes, segments);

    let route = map.route(0, 229);
    assert_eq!(route.nodes.len(), 230);
    assert_eq!(route.distance, Meters::MAX);

    let cumulative = route.cumulative_distances(map.graph());
    assert_eq!(cumulative.len(), 230);
    assert_eq!(cumulative.last().copied(), Some(route.distance));
    assert!(cumulative.windows(2).all(|pair| pair[0] <= pair[1]));

    assert!(route.to_geojson(&map).is_ok());
}
