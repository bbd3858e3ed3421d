use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response record handed back to the hosting platform, shaped like an
/// API Gateway proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    /// Build a 200 response whose body is `payload` serialized as JSON.
    pub fn ok_json<T: Serialize>(payload: &T) -> crate::Result<Self> {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Ok(Self {
            status_code: 200,
            headers,
            body: serde_json::to_string(payload)?,
        })
    }
}
