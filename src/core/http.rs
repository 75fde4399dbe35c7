use reqwest::{Response, StatusCode};
use serde::Deserialize;

use crate::core::AppError;

/// Error body shape the backend uses for failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Map a non-2xx response to an [`AppError`], preferring the
/// server-supplied message when the body parses, else a generic fallback.
/// No 4xx/5xx distinction is made beyond flagging auth failures.
pub async fn error_from_response(context: &str, response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let server_message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message.or(b.error));

    let message = match server_message {
        Some(msg) if !msg.trim().is_empty() => {
            format!("{} failed: {}", context, msg)
        }
        _ => format!("{} failed with HTTP {}", context, status.as_u16()),
    };

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        AppError::unauthorized(message)
    } else {
        AppError::api(message)
    }
}
