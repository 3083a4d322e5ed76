//! Static HTTP asset host.
//!
//! Existence is checked with `HEAD` (falling back to `GET` on 405). Any 2xx
//! counts as "exists" unless the body is HTML: single-page dev servers answer
//! 200 with an HTML shell for any unknown path. Photos served as
//! `application/octet-stream` or `binary/*` by object stores still count.

use std::time::Duration;

use reqwest::{StatusCode, Url, header::CONTENT_TYPE};
use way_core::AssetPath;

use crate::{AssetError, AssetStore};

/// Route photos served over HTTP from a base URL.
#[derive(Debug, Clone)]
pub struct HttpAssetStore {
    http: reqwest::Client,
    base: Url,
}

impl HttpAssetStore {
    /// Create a store rooted at `base_url`.
    ///
    /// A trailing `/` is added when missing so asset paths are appended
    /// rather than replacing the last segment.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::InvalidUrl`] if `base_url` does not parse and
    /// [`AssetError::Http`] if the client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AssetError> {
        let mut normalized = base_url.to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base = Url::parse(&normalized)
            .map_err(|e| AssetError::InvalidUrl(format!("{base_url}: {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent("wayfinder/0.1")
            .timeout(timeout)
            .build()?;
        Ok(Self { http, base })
    }

    /// Absolute URL of a logical asset path.
    ///
    /// Each segment is appended percent-encoded, so `#`, `?` and `%` in a
    /// destination stay inside its path segment.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::OutsideRoot`] for `.` or `..` segments and
    /// [`AssetError::InvalidUrl`] when the base cannot carry a path.
    pub fn url_for(&self, path: &AssetPath) -> Result<Url, AssetError> {
        if path.segments().any(|segment| segment == "." || segment == "..") {
            return Err(AssetError::OutsideRoot(path.to_string()));
        }
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| AssetError::InvalidUrl(format!("{}: cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(path.segments());
        Ok(url)
    }
}

impl AssetStore for HttpAssetStore {
    async fn probe(&self, path: &AssetPath) -> Result<bool, AssetError> {
        let url = match self.url_for(path) {
            Ok(url) => url,
            Err(AssetError::OutsideRoot(_)) => {
                tracing::warn!(%path, "asset path escapes the asset root, treating as absent");
                return Ok(false);
            }
            Err(error) => return Err(error),
        };
        let mut resp = self.http.head(url.clone()).send().await?;
        if resp.status() == StatusCode::METHOD_NOT_ALLOWED {
            tracing::debug!(%url, "HEAD not allowed, retrying probe with GET");
            resp = self.http.get(url).send().await?;
        }
        classify_probe(&resp)
    }

    async fn fetch(&self, path: &AssetPath) -> Result<u64, AssetError> {
        let url = self.url_for(path)?;
        let resp = check_response(self.http.get(url).send().await?)?;
        let body = resp.bytes().await?;
        Ok(body.len() as u64)
    }

    fn location(&self, path: &AssetPath) -> String {
        self.url_for(path)
            .map_or_else(|_| format!("{}{path}", self.base), String::from)
    }
}

/// Map a probe response onto exists / absent / error.
fn classify_probe(resp: &reqwest::Response) -> Result<bool, AssetError> {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
        return Ok(false);
    }
    if !status.is_success() {
        return Err(AssetError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }
    if let Some(content_type) = resp.headers().get(CONTENT_TYPE) {
        if is_html(content_type.to_str().unwrap_or_default()) {
            tracing::debug!(url = %resp.url(), ?content_type, "HTML response, treating as absent");
            return Ok(false);
        }
    }
    Ok(true)
}

fn is_html(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "text/html" || mime == "application/xhtml+xml"
}

/// Return the response unchanged on success, [`AssetError::Status`] otherwise.
fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AssetError> {
    if !resp.status().is_success() {
        return Err(AssetError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp)
}
