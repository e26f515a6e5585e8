pub mod heuristics;
pub mod sidecar;
pub mod utils;

pub use heuristics::{Heuristic, HeuristicDescriptor, HeuristicRegistry};
pub use sidecar::{json_dumps_pretty, load_json, save_json, update_json};
pub use utils::datetime::{get_datetime, strptime_micr};
pub use utils::error::{ConvError, Result};
pub use utils::strings::{remove_prefix, remove_suffix};
