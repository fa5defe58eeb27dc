pub mod traits;
pub mod split;
pub mod floyd;
pub mod paths;

pub use floyd::{FloydWarshall, ShortestPathEngine, SolverConfig};
pub use paths::{AllPaths, ShortestPath};
pub use split::SplitPoint;
pub use traits::{AllPairsResult, AllPairsShortestPath};
