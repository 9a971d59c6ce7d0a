use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::resume::ResumeFile;
use crate::routing::navigator::{Navigator, LOGIN_PATH};
use crate::storage::{Storage, ACCESS_TOKEN_KEY};

/// Authenticated JSON/multipart client for the platform API. Attaches the
/// stored bearer token to every request; a 401 on any response clears the
/// token and sends the navigator to `/login` before the caller sees the
/// error, so individual call sites never handle auth expiry themselves.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    storage: Arc<dyn Storage>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(config: &Config, storage: Arc<dyn Storage>, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| Error::Config(format!("Invalid API_BASE_URL: {}", e)))?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url,
            storage,
            navigator,
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.request(Method::GET, path)?).await?;
        Ok(response.json().await?)
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T> {
        let response = self.execute(self.request(Method::POST, path)?.json(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T> {
        let response = self.execute(self.request(Method::PUT, path)?.json(body)).await?;
        Ok(response.json().await?)
    }

    /// POST with no body; the apply endpoint takes everything from the path.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.request(Method::POST, path)?).await?;
        Ok(response.json().await?)
    }

    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let response = self.execute(self.request(Method::POST, path)?.multipart(form)).await?;
        Ok(response.json().await?)
    }

    pub async fn put_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let response = self.execute(self.request(Method::PUT, path)?.multipart(form)).await?;
        Ok(response.json().await?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::Config(format!("Invalid request path {}: {}", path, e)))?;
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.storage.get(ACCESS_TOKEN_KEY) {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "api response");

        if status == StatusCode::UNAUTHORIZED {
            // Global interceptor: drop the stale token and land on /login.
            warn!(url = %response.url(), "401 from API, clearing token");
            self.storage.remove(ACCESS_TOKEN_KEY);
            self.navigator.navigate(LOGIN_PATH);
            let message = extract_error_message(response, status).await;
            return Err(Error::Unauthorized(message));
        }
        if !status.is_success() {
            let message = extract_error_message(response, status).await;
            if status == StatusCode::NOT_FOUND {
                return Err(Error::NotFound(message));
            }
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

/// Pulls the server's message out of an error body. The platform API answers
/// with `{"detail": …}`, some surfaces with `{"error": …}`; anything else
/// falls back to the status line.
async fn extract_error_message(response: reqwest::Response, status: StatusCode) -> String {
    let fallback = status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string();
    let Ok(body) = response.text().await else {
        return fallback;
    };
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) => value
            .get("detail")
            .or_else(|| value.get("error"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or(fallback),
        Err(_) => fallback,
    }
}

/// Builds the single-file multipart part used by the resume and CV uploads.
pub fn file_part(file: &ResumeFile) -> Result<Part> {
    let part = Part::bytes(file.data.to_vec())
        .file_name(file.file_name.clone())
        .mime_str(&file.content_type)?;
    Ok(part)
}
