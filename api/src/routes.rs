use axum::{routing::get, Router};
use chatgpt_proxy::ChatGptService;
use std::sync::Arc;

use crate::ask_handler::ask_chat_gpt;

pub const ASK_PATH: &str = "/ask_chat_gpt";

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub chat_gpt: Arc<ChatGptService>,
}

impl AppState {
    pub fn new(chat_gpt: ChatGptService) -> Self {
        Self {
            chat_gpt: Arc::new(chat_gpt),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(ASK_PATH, get(ask_chat_gpt))
        .with_state(state)
}
