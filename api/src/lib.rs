pub mod ask_handler;
pub mod error_response;
pub mod routes;

pub use routes::{app, AppState};
