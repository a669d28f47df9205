mod search_path;

pub use search_path::{SearchPath, DEFAULT_SEARCH_PATH};
