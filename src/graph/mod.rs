pub mod weight;
pub mod traits;
pub mod matrix;
pub mod parse;
pub mod display;
pub mod generators;

pub use traits::Graph;
pub use matrix::AdjacencyMatrix;
pub use parse::{parse_graph, parse_graph_as, read_graph_file, ParsedGraph};
pub use weight::EdgeWeight;
