//! Specification source resolution and fetching
//!
//! The viewer reads three text resources: the primary document (parsed into
//! the tree), and the raw YAML and JSON listings (shown verbatim). Their
//! locations are resolved against a base that is either an HTTP(S) URL, a
//! local directory or a single YAML file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use specview_core::prelude::*;
use url::Url;

use crate::config::SourceSettings;

/// Serialization format of a raw listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    pub fn label(&self) -> &'static str {
        match self {
            SourceFormat::Yaml => "YAML",
            SourceFormat::Json => "JSON",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Yaml => "yaml",
            SourceFormat::Json => "json",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a text resource lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Url(Url),
    File(PathBuf),
}

impl SourceLocation {
    /// Last path component, used as the download file name
    pub fn file_name(&self, fallback: SourceFormat) -> String {
        let name = match self {
            SourceLocation::Url(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string)),
            SourceLocation::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
        };
        name.filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("opencli.{}", fallback.extension()))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Url(url) => write!(f, "{}", url),
            SourceLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Locations of the primary document and both raw listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    pub document: SourceLocation,
    pub yaml: SourceLocation,
    pub json: SourceLocation,
}

impl SourceSet {
    /// Resolve the configured paths against `base`
    pub fn resolve(base: &str, settings: &SourceSettings) -> Result<Self> {
        if base.starts_with("http://") || base.starts_with("https://") {
            let mut url = Url::parse(base).map_err(|e| Error::invalid_source(base, e.to_string()))?;
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            let join = |path: &str| -> Result<SourceLocation> {
                url.join(path.trim_start_matches('/'))
                    .map(SourceLocation::Url)
                    .map_err(|e| Error::invalid_source(base, e.to_string()))
            };
            return Ok(Self {
                document: join(&settings.document_path)?,
                yaml: join(&settings.yaml_path)?,
                json: join(&settings.json_path)?,
            });
        }

        if base.contains("://") {
            return Err(Error::invalid_source(base, "unsupported URL scheme"));
        }

        let base_path = Path::new(base);
        if base_path.is_file() {
            return Ok(Self {
                document: SourceLocation::File(base_path.to_path_buf()),
                yaml: SourceLocation::File(base_path.to_path_buf()),
                json: SourceLocation::File(base_path.with_extension("json")),
            });
        }

        let join = |path: &str| SourceLocation::File(base_path.join(path.trim_start_matches('/')));
        Ok(Self {
            document: join(&settings.document_path),
            yaml: join(&settings.yaml_path),
            json: join(&settings.json_path),
        })
    }

    /// Location of the raw listing for `format`
    pub fn raw(&self, format: SourceFormat) -> &SourceLocation {
        match format {
            SourceFormat::Yaml => &self.yaml,
            SourceFormat::Json => &self.json,
        }
    }
}

/// Fetches text resources
#[trait_variant::make(SourceFetcher: Send)]
pub trait LocalSourceFetcher {
    /// Read the full text at `location`
    async fn fetch(&self, location: &SourceLocation) -> Result<String>;
}

/// HTTP and filesystem fetcher used by the application
#[derive(Debug, Clone)]
pub struct SourceClient {
    http: reqwest::Client,
}

impl SourceClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("specview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http })
    }
}

impl SourceFetcher for SourceClient {
    async fn fetch(&self, location: &SourceLocation) -> Result<String> {
        match location {
            SourceLocation::Url(url) => fetch_url(&self.http, url).await,
            SourceLocation::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| Error::fetch(path.display().to_string(), e.to_string())),
        }
    }
}

async fn fetch_url(client: &reqwest::Client, url: &Url) -> Result<String> {
    debug!("GET {}", url);
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| Error::fetch(url.as_str(), e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::http_status(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status"),
        ));
    }

    response
        .text()
        .await
        .map_err(|e| Error::fetch(url.as_str(), e.to_string()))
}
