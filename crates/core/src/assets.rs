//! Static page assets: the headshot image and the optional resume document.

use crate::config::CoreConfig;
use crate::{PortfolioError, PortfolioResult};
use std::path::{Path, PathBuf};

/// Stylesheet embedded in every rendered page.
pub const STYLES: &str = include_str!("styles.css");

/// Asset locations verified at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    headshot: PathBuf,
    resume: Option<PathBuf>,
}

impl AssetPaths {
    /// Check the configured assets.
    ///
    /// The headshot is required. The resume is optional; when it is absent the download link is
    /// left off the page.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::AssetMissing` if the headshot is not a file.
    pub fn resolve(cfg: &CoreConfig) -> PortfolioResult<Self> {
        let headshot = cfg.headshot_path().to_path_buf();
        if !headshot.is_file() {
            return Err(PortfolioError::AssetMissing { path: headshot });
        }

        let resume = cfg.resume_path();
        let resume = if resume.is_file() {
            Some(resume.to_path_buf())
        } else {
            tracing::info!(path = %resume.display(), "no resume found; download link disabled");
            None
        };

        Ok(Self { headshot, resume })
    }

    pub fn new(headshot: PathBuf, resume: Option<PathBuf>) -> Self {
        Self { headshot, resume }
    }

    pub fn headshot(&self) -> &Path {
        &self.headshot
    }

    pub fn resume(&self) -> Option<&Path> {
        self.resume.as_deref()
    }

    /// File name offered to the browser for the resume download.
    pub fn resume_file_name(&self) -> Option<String> {
        self.resume
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
    }
}

/// Detect the content type of an asset from its leading bytes.
///
/// Formats without a binary signature (SVG is the one a headshot is likely to use) fall back to
/// the file extension; anything else unknown is served as `application/octet-stream`.
pub fn content_type_for(path: &Path, bytes: &[u8]) -> &'static str {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type();
    }

    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        "image/svg+xml"
    } else {
        "application/octet-stream"
    }
}
