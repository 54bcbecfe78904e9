//! Error shape surfaced by the HTTP adapter.

use gloo_net::http::Response;

/// Fallback when the backend gives no usable message.
pub const GENERIC_ERROR: &str = "An unexpected error occurred";

#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
    aborted: bool,
}

impl ApiError {
    /// Failure before a response arrived (network error, serialization,
    /// aborted fetch).
    pub fn transport(err: gloo_net::Error) -> Self {
        let aborted = matches!(&err, gloo_net::Error::JsError(js) if js.name == "AbortError");
        Self {
            message: if aborted {
                "Request aborted".to_string()
            } else {
                err.to_string()
            },
            status: None,
            aborted,
        }
    }

    /// Failure inside a browser API call.
    pub fn js(value: wasm_bindgen::JsValue) -> Self {
        Self {
            message: format!("{value:?}"),
            status: None,
            aborted: false,
        }
    }

    /// Non-2xx response: use the backend's `{ "message": … }` when it
    /// parses, otherwise the generic fallback.
    pub async fn from_response(response: &Response) -> Self {
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| GENERIC_ERROR.to_string()),
            Err(_) => GENERIC_ERROR.to_string(),
        };
        Self {
            message,
            status: Some(response.status()),
            aborted: false,
        }
    }

    pub fn decode(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            status: None,
            aborted: false,
        }
    }

    /// The session is gone; callers hand this to `Session::expire`.
    pub fn unauthorized(&self) -> bool {
        matches!(self.status, Some(401) | Some(419))
    }

    /// The caller went away; the resolution must be discarded, not shown.
    pub fn aborted(&self) -> bool {
        self.aborted
    }
}
