pub mod format;
pub mod store;

pub use format::json_dumps_pretty;
pub use store::{load_json, save_json, update_json};
