//! Shortest walking paths over the navigation graph

mod dijkstra;
mod matrix;
mod path;
mod route;

pub use dijkstra::{ShortestPaths, shortest_paths, shortest_paths_bounded};
pub use matrix::distance_matrix;
pub use path::reconstruct_path;
pub use route::Route;
