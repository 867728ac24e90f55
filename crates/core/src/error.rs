use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("project data file not found: {}", path.display())]
    DataFileMissing { path: PathBuf },
    #[error("failed to read project data file {}: {source}", path.display())]
    DataFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("project data file is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("project data does not match the expected shape at {path}: {message}")]
    Schema { path: String, message: String },
    #[error("required asset is missing: {}", path.display())]
    AssetMissing { path: PathBuf },
    #[error("failed to read asset {}: {source}", path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PortfolioError {
    /// True for failures of the data file itself: missing, unreadable, not JSON, or bad config.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PortfolioError::InvalidConfig(_)
                | PortfolioError::DataFileMissing { .. }
                | PortfolioError::DataFileRead { .. }
                | PortfolioError::InvalidJson(_)
        )
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, PortfolioError::Schema { .. })
    }

    pub fn is_asset_missing(&self) -> bool {
        matches!(self, PortfolioError::AssetMissing { .. })
    }
}

pub type PortfolioResult<T> = std::result::Result<T, PortfolioError>;
