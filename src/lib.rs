//! EMaster Fuchiboli match-result capture library
//!
//! This library loads a match's detail from the league backend, lets an
//! administrator capture goals, cards, injuries, own goals and result images,
//! and closes the match with a single save request.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fuchiboli_admin::data_fetcher::ApiClient;
//! use fuchiboli_admin::data_fetcher::models::Session;
//! use fuchiboli_admin::error::AppError;
//! use fuchiboli_admin::match_editor::{MatchEditor, Side, StatUpdate, SubmitOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let session = Session::new("token", "admin");
//!     let api = ApiClient::new("https://api.fuchiboli.example", 30, Some(session))?;
//!
//!     let mut editor = MatchEditor::new(api.load_match_info(81).await?);
//!     editor.set_field(Side::Local, 10, StatUpdate::Goals(2));
//!     editor.increment_own_goals(Side::Visitor);
//!     editor.update_image_url(0, "https://img.example/result.png");
//!
//!     let outcome = editor.submit(&api, |_prompt| async { Ok(true) }).await?;
//!     assert_eq!(outcome, SubmitOutcome::Saved);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod match_editor;
pub mod result_sheet;
pub mod teletext_ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::ApiClient;
pub use data_fetcher::models::{MatchInfo, PlayerStat, SaveMatchPayload, Session};
pub use data_fetcher::processors::normalize_match_info;
pub use error::AppError;
pub use match_editor::{MatchEditor, Side, StatUpdate, SubmitOutcome};
pub use result_sheet::ResultSheet;

// Re-export cache functions for external tools
pub use data_fetcher::cache::{
    CacheInfo, clear_http_response_cache, get_http_response_cache_info, invalidate_match_lists,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
