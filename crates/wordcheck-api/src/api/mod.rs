//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_word_valid, health_check};
pub use routes::{create_router, run_server};
pub use state::AppState;
