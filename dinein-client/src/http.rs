//! HTTP client for network-based API calls

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the DineIn server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ClientResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .query(params)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a multipart form
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(parse_api_error(status.as_u16(), &text));
        }

        response.json().await.map_err(Into::into)
    }
}

/// Turn an error response body into a [`ClientError::Api`], falling back to
/// the raw text when the body is not the server's JSON error shape.
fn parse_api_error(status: u16, text: &str) -> ClientError {
    #[derive(serde::Deserialize)]
    struct WireError {
        error: String,
        #[serde(default)]
        details: Option<serde_json::Value>,
    }

    match serde_json::from_str::<WireError>(text) {
        Ok(body) => {
            let details = match body.details {
                Some(serde_json::Value::Array(items)) => items
                    .into_iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
                Some(serde_json::Value::String(s)) => vec![s],
                _ => Vec::new(),
            };
            ClientError::api(status, body.error, details)
        }
        Err(_) => {
            let message = if text.is_empty() {
                format!("HTTP {status}")
            } else {
                text.to_string()
            };
            ClientError::api(status, message, Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_body_becomes_the_message() {
        let err = parse_api_error(404, r#"{"error":"Order not found"}"#);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Order not found");
        assert!(err.details().is_empty());
    }

    #[test]
    fn itemized_error_body_keeps_the_details() {
        let body = r#"{"error":"Order validation failed","details":["items array is empty","totalAmount must be a non-negative number, got: -1"],"received":{"itemsLength":0}}"#;
        let err = parse_api_error(400, body);
        assert_eq!(err.to_string(), "Order validation failed");
        assert_eq!(err.details().len(), 2);
        assert!(err.details()[0].contains("items array"));
    }

    #[test]
    fn non_json_body_falls_back_to_raw_text() {
        let err = parse_api_error(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Bad Gateway");

        let err = parse_api_error(500, "");
        assert_eq!(err.to_string(), "HTTP 500");
    }
}
