//! HTTP client for the site backend.
//!
//! Every request goes through [`BackendClient::send`], which turns any
//! non-2xx response into [`CliError::Status`] so callers only see success
//! bodies.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use content::{ContactSubmission, GalleryItem, Testimonial, paths};
use reqwest::{Method, Response, Url};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{method} {path} returned HTTP {status}")]
    Status { method: Method, path: &'static str, status: u16 },
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// What `reseed` did, for the operator's report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedReport {
    pub cleared: bool,
    pub seeded: bool,
}

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base: String,
}

impl BackendClient {
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] unless `base_url` is an absolute
    /// `http` or `https` URL.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let parsed = Url::parse(base_url.trim()).map_err(|_| CliError::InvalidBaseUrl(base_url.to_owned()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self { http: reqwest::Client::new(), base: base_url.to_owned() })
    }

    pub fn url(&self, path: &str) -> String {
        paths::api_url(&self.base, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &'static str,
        body: Option<&ContactSubmission>,
    ) -> Result<Response, CliError> {
        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%method, path, status = status.as_u16(), "backend response");
        if !status.is_success() {
            return Err(CliError::Status { method, path, status: status.as_u16() });
        }
        Ok(response)
    }

    /// # Errors
    ///
    /// Transport failure, non-2xx status, or an undecodable body.
    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, CliError> {
        Ok(self.send(Method::GET, paths::TESTIMONIALS, None).await?.json().await?)
    }

    /// # Errors
    ///
    /// Transport failure, non-2xx status, or an undecodable body.
    pub async fn gallery(&self) -> Result<Vec<GalleryItem>, CliError> {
        Ok(self.send(Method::GET, paths::GALLERY, None).await?.json().await?)
    }

    /// Delete every gallery item. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Transport failure or non-2xx status.
    pub async fn clear_gallery(&self) -> Result<(), CliError> {
        self.send(Method::DELETE, paths::GALLERY, None).await?;
        Ok(())
    }

    /// Ask the backend to repopulate its default content. The response body
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Transport failure or non-2xx status.
    pub async fn seed(&self) -> Result<(), CliError> {
        self.send(Method::POST, paths::SEED, None).await?;
        Ok(())
    }

    /// Clear then seed, in that order. Stops at the first failure; with
    /// `keep_existing` the clear step is skipped.
    ///
    /// # Errors
    ///
    /// The first step's error.
    pub async fn reseed(&self, keep_existing: bool) -> Result<SeedReport, CliError> {
        if !keep_existing {
            self.clear_gallery().await?;
        }
        self.seed().await?;
        Ok(SeedReport { cleared: !keep_existing, seeded: true })
    }

    /// # Errors
    ///
    /// Transport failure or non-2xx status.
    pub async fn submit_contact(&self, body: &ContactSubmission) -> Result<(), CliError> {
        self.send(Method::POST, paths::CONTACT, Some(body)).await?;
        Ok(())
    }

    /// Probe the gallery endpoint and return its status code.
    ///
    /// # Errors
    ///
    /// Transport failure or non-2xx status.
    pub async fn ping(&self) -> Result<u16, CliError> {
        let response = self.send(Method::GET, paths::GALLERY, None).await?;
        Ok(response.status().as_u16())
    }
}
