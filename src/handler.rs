use lambda_runtime::LambdaEvent;
use serde::Serialize;
use serde_json::Value;

use crate::response::ApiResponse;

/// Message carried in every response body.
pub const GREETING_MESSAGE: &str = "Hello from a secure Lambda!";

/// Body payload of the greeting response.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Entry point invoked by the Lambda runtime for each incoming request.
///
/// The event payload and the invocation context are accepted but never
/// inspected: every invocation yields the same response.
pub async fn handle(event: LambdaEvent<Value>) -> crate::Result<ApiResponse> {
    let (_payload, _context) = event.into_parts();
    greeting_response()
}

/// Build the constant greeting response.
pub fn greeting_response() -> crate::Result<ApiResponse> {
    ApiResponse::ok_json(&Greeting {
        message: GREETING_MESSAGE,
    })
}
