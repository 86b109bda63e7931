pub mod error;
pub mod marks;
pub mod pad;
pub mod scene_graph;
pub mod surface;
