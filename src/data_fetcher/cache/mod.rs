pub mod http_response_cache;
pub mod types;

// Re-export cache types
pub use types::*;
// Re-export HTTP response cache functions
pub use http_response_cache::*;
