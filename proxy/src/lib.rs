pub mod config;
pub mod error;
pub mod models;
pub mod chat_gpt_service;

pub use config::Config;
pub use error::{RequestError, UpstreamError};
pub use models::*;
pub use chat_gpt_service::ChatGptService;
