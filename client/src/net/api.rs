//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! sections only fetch after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `Result` and decide how to degrade. The page sections
//! treat every variant the same way (fallback data or an error toast), the
//! variants only exist to make the diagnostic log useful.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use content::{ContactSubmission, GalleryItem, Testimonial, paths};

use crate::util::config;

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("{method} {path} returned {status}")]
    Status { method: &'static str, path: &'static str, status: u16 },
    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Backend operations used by the page sections.
///
/// The browser uses [`HttpApi`]; tests script their own implementation.
#[allow(async_fn_in_trait)]
pub trait SiteApi {
    /// `GET /api/testimonials`.
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ApiError>;
    /// `DELETE /api/gallery`. Response body is ignored.
    async fn clear_gallery(&self) -> Result<(), ApiError>;
    /// `POST /api/seed`. Response body is ignored.
    async fn seed(&self) -> Result<(), ApiError>;
    /// `GET /api/gallery`.
    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ApiError>;
    /// `POST /api/contact` with the submission as JSON. Response body is ignored.
    async fn submit_contact(&self, body: &ContactSubmission) -> Result<(), ApiError>;
}

/// Map an HTTP status to success or [`ApiError::Status`].
#[cfg(any(test, feature = "hydrate"))]
fn ensure_success(method: &'static str, path: &'static str, status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { method, path, status })
    }
}

/// [`SiteApi`] over `fetch`, rooted at a backend base address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client rooted at the base address baked in at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(config::backend_base())
    }

    /// Absolute (or same-origin) URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        paths::api_url(&self.base, path)
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, ensure_success};

    pub(super) fn network(e: gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }

    pub(super) fn check(resp: &Response, method: &'static str, path: &'static str) -> Result<(), ApiError> {
        ensure_success(method, path, resp.status())
    }

    pub(super) async fn get_json<T: DeserializeOwned>(url: &str, path: &'static str) -> Result<T, ApiError> {
        let resp = Request::get(url).send().await.map_err(network)?;
        check(&resp, "GET", path)?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl SiteApi for HttpApi {
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            browser::get_json(&self.url(paths::TESTIMONIALS), paths::TESTIMONIALS).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn clear_gallery(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&self.url(paths::GALLERY))
                .send()
                .await
                .map_err(browser::network)?;
            browser::check(&resp, "DELETE", paths::GALLERY)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn seed(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(paths::SEED))
                .send()
                .await
                .map_err(browser::network)?;
            browser::check(&resp, "POST", paths::SEED)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            browser::get_json(&self.url(paths::GALLERY), paths::GALLERY).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn submit_contact(&self, body: &ContactSubmission) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(paths::CONTACT))
                .json(body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(browser::network)?;
            browser::check(&resp, "POST", paths::CONTACT)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(ApiError::Unavailable)
        }
    }
}
