//! Shared HTTP helpers: auth headers, multipart bodies, status mapping.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::error::{MedAssistError, Result};

/// Build default headers for the Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Add a `multipart/form-data` content type for the given boundary.
pub fn with_multipart_content_type(mut headers: HeaderMap, boundary: &str) -> Result<HeaderMap> {
    let value = HeaderValue::from_str(&format!("multipart/form-data; boundary={boundary}"))
        .map_err(|e| {
            MedAssistError::InvalidArgument(format!("Failed to build multipart content-type: {e}"))
        })?;
    headers.insert(CONTENT_TYPE, value);
    Ok(headers)
}

/// Build a single-file multipart body under the form field `file`.
pub fn build_file_multipart(
    boundary: &str,
    filename: &str,
    mime_type: &str,
    bytes: &[u8],
) -> Vec<u8> {
    let mut body = Vec::with_capacity(bytes.len() + 256);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            escape_quoted(filename)
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {mime_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Guess a MIME type from the file extension.
pub fn mime_for_filename(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "html" | "htm" => "text/html",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Map a non-success HTTP status to a classified error.
pub fn status_to_error(status: u16, body: &str) -> MedAssistError {
    let message = extract_error_message(body).unwrap_or_else(|| body.to_string());
    match status {
        401 | 403 => MedAssistError::Authentication(message),
        404 => MedAssistError::NotFound(message),
        _ => MedAssistError::api(status, message),
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    let message = value
        .get("message")
        .or_else(|| value.get("detail"))
        .or_else(|| value.get("error").and_then(|e| e.get("message")))?;
    match message {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Check the status and decode a JSON body.
pub async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(status_to_error(status.as_u16(), &body));
    }

    Ok(serde_json::from_str(&body)?)
}

/// Check the status and discard the body.
pub async fn expect_success(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_to_error(status.as_u16(), &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    #[test]
    fn status_mapping_extracts_json_message() {
        let err = status_to_error(422, r#"{"message": "datastore_ids must not be empty"}"#);
        match err {
            MedAssistError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "datastore_ids must not be empty");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn status_mapping_classifies_auth_and_missing() {
        assert!(matches!(
            status_to_error(401, "nope"),
            MedAssistError::Authentication(m) if m == "nope"
        ));
        assert!(matches!(
            status_to_error(404, r#"{"detail": "Agent not found"}"#),
            MedAssistError::NotFound(m) if m == "Agent not found"
        ));
    }

    #[test]
    fn gateway_timeouts_keep_the_server_message() {
        let err = status_to_error(504, r#"{"message": "upstream timed out"}"#);
        assert_eq!(err.to_string(), "API error (status 504): upstream timed out");
        assert_eq!(err.category(), ErrorCategory::Timeout);
        assert!(err.is_transient());
    }

    #[test]
    fn multipart_body_wraps_file_bytes() {
        let body = build_file_multipart("b0undary", "guide \"v2\".pdf", "application/pdf", b"%PDF");
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("--b0undary\r\n"));
        assert!(text.contains("filename=\"guide \\\"v2\\\".pdf\""));
        assert!(text.contains("Content-Type: application/pdf\r\n\r\n%PDF\r\n"));
        assert!(text.ends_with("--b0undary--\r\n"));
    }

    #[test]
    fn mime_guess_is_extension_based() {
        assert_eq!(mime_for_filename("A.PDF"), "application/pdf");
        assert_eq!(mime_for_filename("notes"), "application/octet-stream");
    }
}
