use geo::Point;

use crate::model::{MapNode, map::haversine_distance};

/// Snap a GPS fix to the closest walkable node.
///
/// Linear scan by great-circle distance. On equal distances the first node
/// wins. Returns `None` for an empty candidate list.
pub fn nearest_walkable_node<'a, I>(point: Point<f64>, walkable_nodes: I) -> Option<&'a MapNode>
where
    I: IntoIterator<Item = &'a MapNode>,
{
    nearest_walkable_node_with_distance(point, walkable_nodes).map(|(node, _)| node)
}

/// Same as [`nearest_walkable_node`], also returning the distance in meters
pub fn nearest_walkable_node_with_distance<'a, I>(
    point: Point<f64>,
    walkable_nodes: I,
) -> Option<(&'a MapNode, f64)>
where
    I: IntoIterator<Item = &'a MapNode>,
{
    walkable_nodes
        .into_iter()
        .map(|node| (node, haversine_distance(point, node.geometry())))
        .filter(|(_, distance)| distance.is_finite())
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<MapNode> {
        vec![
            MapNode::new(1, 32.0800, 34.7800),
            MapNode::new(2, 32.0850, 34.7850),
            MapNode::new(3, 32.0900, 34.7900),
        ]
    }

    #[test]
    fn picks_the_closest_candidate() {
        let nodes = candidates();
        let fix = Point::new(34.7852, 32.0849);

        assert_eq!(nearest_walkable_node(fix, &nodes).map(|n| n.id), Some(2));
    }

    #[test]
    fn reports_distance_to_the_snapped_node() {
        let nodes = candidates();
        let fix = Point::new(34.7800, 32.0801);

        let (node, distance) = nearest_walkable_node_with_distance(fix, &nodes).unwrap();
        assert_eq!(node.id, 1);
        assert!((distance - 11.1).abs() < 0.5);
    }

    #[test]
    fn empty_list_has_no_nearest_node() {
        let fix = Point::new(34.78, 32.08);
        assert!(nearest_walkable_node(fix, &Vec::<MapNode>::new()).is_none());
    }

    #[test]
    fn nodes_with_broken_coordinates_are_ignored() {
        let mut nodes = candidates();
        nodes.insert(0, MapNode::new(9, f64::NAN, f64::NAN));
        let fix = Point::new(34.7899, 32.0899);

        assert_eq!(nearest_walkable_node(fix, &nodes).map(|n| n.id), Some(3));
    }
}
