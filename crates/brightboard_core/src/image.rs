//! External image-generation collaborator.
//!
//! # Responsibility
//! - Turn a text prompt into an image URL for post creation.
//!
//! # Invariants
//! - `generate_image_url` never fails visibly: any internal error falls back
//!   to a deterministic placeholder URL derived from the prompt. Post
//!   creation has no other error path for image generation.

use log::{error, info};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/600x400.png?text=";

/// Collaborator contract consumed by the post service at creation time.
pub trait ImageGenerator {
    /// Returns an image URL for the prompt. Must not fail; implementations
    /// substitute a fallback URL on any internal error.
    fn generate_image_url(&self, prompt: &str) -> String;
}

/// Response payload of the hosted generation endpoint.
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: String,
}

/// Blocking HTTP client for a hosted text-to-image endpoint.
///
/// With no endpoint configured every call resolves to the placeholder URL,
/// which keeps post creation fully functional in development setups.
pub struct ImageClient {
    endpoint: Option<String>,
    api_key: Option<String>,
    http: Option<reqwest::blocking::Client>,
}

impl ImageClient {
    pub fn new(endpoint: Option<String>, api_key: Option<String>) -> Self {
        // A client that failed to build degrades to the placeholder path
        // instead of aborting construction.
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .ok();
        Self {
            endpoint,
            api_key,
            http,
        }
    }

    /// Reads `BRIGHTBOARD_IMAGE_ENDPOINT` and `BRIGHTBOARD_IMAGE_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("BRIGHTBOARD_IMAGE_ENDPOINT").ok(),
            std::env::var("BRIGHTBOARD_IMAGE_API_KEY").ok(),
        )
    }

    /// Deterministic fallback URL with the prompt encoded into it.
    pub fn placeholder_url(prompt: &str) -> String {
        format!("{PLACEHOLDER_BASE}{}", urlencoding::encode(prompt))
    }

    fn request_image(&self, endpoint: &str, prompt: &str) -> Result<String, String> {
        let http = self
            .http
            .as_ref()
            .ok_or_else(|| "http client unavailable".to_string())?;

        let payload = json!({ "prompt": prompt, "sample_count": 1 });
        let mut request = http.post(endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().map_err(|err| err.to_string())?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("endpoint returned {status}"));
        }

        let body: GenerationResponse = response.json().map_err(|err| err.to_string())?;
        Ok(format!(
            "data:image/png;base64,{}",
            body.bytes_base64_encoded
        ))
    }
}

impl ImageGenerator for ImageClient {
    fn generate_image_url(&self, prompt: &str) -> String {
        let Some(endpoint) = self.endpoint.as_deref() else {
            return Self::placeholder_url(prompt);
        };

        match self.request_image(endpoint, prompt) {
            Ok(url) => {
                info!("event=image_generate module=image status=ok");
                url
            }
            Err(reason) => {
                error!("event=image_generate module=image status=error error={reason}");
                Self::placeholder_url(prompt)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageClient, ImageGenerator};

    #[test]
    fn unconfigured_client_returns_placeholder() {
        let client = ImageClient::new(None, None);
        assert_eq!(
            client.generate_image_url("sunny meadow"),
            "https://via.placeholder.com/600x400.png?text=sunny%20meadow"
        );
    }

    #[test]
    fn placeholder_is_deterministic_for_same_prompt() {
        assert_eq!(
            ImageClient::placeholder_url("a & b"),
            ImageClient::placeholder_url("a & b")
        );
    }

    #[test]
    fn unreachable_endpoint_falls_back_to_placeholder() {
        // Nothing listens on the discard port; the request is refused and the
        // caller still gets a usable URL.
        let client = ImageClient::new(Some("http://127.0.0.1:9/generate".to_string()), None);
        let url = client.generate_image_url("fallback");
        assert_eq!(url, ImageClient::placeholder_url("fallback"));
    }
}
