//! Affilscan Core - shared infrastructure for the affiliation scanner
//!
//! Logging, progress display and the blocking HTTP layer used by the
//! PubMed client.

pub mod http;
pub mod logging;
pub mod progress;

// Re-exports for convenience
pub use http::{HttpError, get_text, post_form_text};
pub use logging::{IndicatifLogger, init_logging};
pub use progress::{ProgressContext, SharedProgress, finish_stage, plural};
