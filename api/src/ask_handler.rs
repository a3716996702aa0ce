use axum::{body::Bytes, extract::State, Json};
use chatgpt_proxy::Questions;
use serde_json::Value;

use crate::error_response::ApiError;
use crate::routes::AppState;

/// `GET /ask_chat_gpt`
///
/// Validates the `questions` batch, makes one call to the external API and
/// relays its JSON answer. A non-JSON answer is relayed as `null`.
pub async fn ask_chat_gpt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let questions = Questions::from_body(&body)?;

    let answers = state.chat_gpt.ask(&questions).await?;

    Ok(Json(answers.unwrap_or(Value::Null)))
}
