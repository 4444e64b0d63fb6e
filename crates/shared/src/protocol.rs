use serde_json::Value;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const ERROR_FIELD: &str = "error";
pub const DEFAULT_SERVER_ERROR_MESSAGE: &str = "Something went wrong";

/// Message carried by a failed response body. Falsy values (missing, null,
/// false, zero, empty string) fall back to the default; other non-string
/// values are rendered as JSON.
pub fn server_error_message(body: &Value) -> String {
    match body.get(ERROR_FIELD) {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        None | Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::String(_)) => {
            DEFAULT_SERVER_ERROR_MESSAGE.to_string()
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
            DEFAULT_SERVER_ERROR_MESSAGE.to_string()
        }
        Some(other) => other.to_string(),
    }
}
