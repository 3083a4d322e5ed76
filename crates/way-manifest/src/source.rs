use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use way_config::ManifestConfig;

use crate::error::ManifestError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the manifest document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    File(PathBuf),
    Url(String),
}

impl ManifestSource {
    /// `http://` and `https://` locations are URLs, anything else a path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    #[must_use]
    pub fn from_config(config: &ManifestConfig) -> Self {
        Self::parse(&config.source)
    }

    /// Read the raw document.
    ///
    /// # Errors
    ///
    /// [`ManifestError::Io`] for unreadable files, [`ManifestError::Http`] or
    /// [`ManifestError::Api`] when the host cannot serve the document.
    pub async fn read(&self) -> Result<String, ManifestError> {
        match self {
            Self::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ManifestError::Io {
                    path: path.clone(),
                    source,
                }),
            Self::Url(url) => {
                let http = reqwest::Client::builder()
                    .timeout(FETCH_TIMEOUT)
                    .user_agent("wayfinder/0.1")
                    .build()?;
                let resp = http.get(url).send().await?;
                if !resp.status().is_success() {
                    return Err(ManifestError::Api {
                        status: resp.status().as_u16(),
                        message: resp.text().await.unwrap_or_default(),
                    });
                }
                Ok(resp.text().await?)
            }
        }
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}
