//! wordcheck-api crate
//!
//! Web server exposing the dictionary word validity check as HTTP API.
//!
//! ## Endpoints
//! - `GET /v1/word/valid?word=<word>` - Word validity (`{"valid": <bool>}`)
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl "http://127.0.0.1:8080/v1/word/valid?word=caf%C3%A9"
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{WordQuery, WordValidityResponse};
pub use service::WordcheckApiServiceFull;
