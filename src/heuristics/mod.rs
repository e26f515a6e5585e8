pub mod loader;
pub mod registry;

pub use loader::{Heuristic, HeuristicDescriptor, HEURISTIC_EXTENSIONS};
pub use registry::HeuristicRegistry;
