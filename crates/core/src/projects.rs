//! Project records and the memoising project loader.
//!
//! The data file is a JSON array of objects with the fields `title`, `role`, `description`,
//! `tech`, `demo`, `repo` and `post`. Only `title` and `description` are required; a record
//! where either is missing, blank or not a string is skipped with a warning rather than failing the whole page.
//!
//! [`ProjectLoader`] reads the file through a [`ProjectSource`] at most once and hands out the
//! same `Arc<ProjectCollection>` on every later call until it is explicitly invalidated.

use crate::constants::{
    DEFAULT_ROLE, DEMO_LINK_LABEL, POST_LINK_LABEL, REPO_LINK_LABEL, TECH_SEPARATOR,
};
use crate::{PortfolioError, PortfolioResult};
use folio_types::NonEmptyText;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One portfolio project, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: NonEmptyText,
    pub role: Option<NonEmptyText>,
    pub description: NonEmptyText,
    pub tech: Vec<String>,
    pub demo: Option<NonEmptyText>,
    pub repo: Option<NonEmptyText>,
    pub post: Option<NonEmptyText>,
}

/// Which external link a [`ProjectLink`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Demo,
    Repo,
    Post,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Demo => DEMO_LINK_LABEL,
            LinkKind::Repo => REPO_LINK_LABEL,
            LinkKind::Post => POST_LINK_LABEL,
        }
    }
}

/// A labelled link shown on a project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink<'a> {
    pub kind: LinkKind,
    pub href: &'a str,
}

impl ProjectLink<'_> {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

impl ProjectRecord {
    /// The record's role, or `"Project"` when it has none.
    pub fn role_or_default(&self) -> &str {
        self.role
            .as_ref()
            .map(NonEmptyText::as_str)
            .unwrap_or(DEFAULT_ROLE)
    }

    /// The tech list joined with `", "`. Empty when the record lists no tech.
    pub fn tech_line(&self) -> String {
        self.tech.join(TECH_SEPARATOR)
    }

    /// Links present on the record, always in demo, repo, post order.
    pub fn links(&self) -> Vec<ProjectLink<'_>> {
        [
            (LinkKind::Demo, &self.demo),
            (LinkKind::Repo, &self.repo),
            (LinkKind::Post, &self.post),
        ]
        .into_iter()
        .filter_map(|(kind, href)| {
            href.as_ref().map(|h| ProjectLink {
                kind,
                href: h.as_str(),
            })
        })
        .collect()
    }
}

/// A record that was present in the data file but could not be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Zero-based position in the data file.
    pub index: usize,
    pub reason: String,
}

/// The ordered set of displayable projects, in data file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCollection {
    records: Vec<ProjectRecord>,
    skipped: Vec<SkippedRecord>,
}

impl ProjectCollection {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self {
            records,
            skipped: Vec::new(),
        }
    }

    pub fn as_slice(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records dropped during loading because `title` or `description` was unusable.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }
}

impl<'a> IntoIterator for &'a ProjectCollection {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// On-disk shape of a single record. Every field is optional here, and the required fields accept
/// any JSON value, so that a record with a missing or malformed `title` or `description` can be
/// reported and skipped instead of rejecting the file.
#[derive(Debug, Deserialize)]
struct ProjectRecordWire {
    title: Option<serde_json::Value>,
    role: Option<String>,
    description: Option<serde_json::Value>,
    tech: Option<Vec<String>>,
    demo: Option<String>,
    repo: Option<String>,
    post: Option<String>,
}

/// A required text field: present, a JSON string, and not blank.
fn required_text(value: Option<serde_json::Value>) -> Option<NonEmptyText> {
    match value {
        Some(serde_json::Value::String(s)) => NonEmptyText::new(s).ok(),
        _ => None,
    }
}

impl ProjectRecordWire {
    fn into_record(self) -> Result<ProjectRecord, String> {
        let title = required_text(self.title);
        let description = required_text(self.description);

        let (title, description) = match (title, description) {
            (Some(t), Some(d)) => (t, d),
            (None, Some(_)) => return Err("missing, empty or non-text title".into()),
            (Some(t), None) => {
                return Err(format!(
                    "'{}' has missing, empty or non-text description",
                    t
                ))
            }
            (None, None) => return Err("missing, empty or non-text title and description".into()),
        };

        Ok(ProjectRecord {
            title,
            role: NonEmptyText::from_optional(self.role),
            description,
            tech: self.tech.unwrap_or_default(),
            demo: NonEmptyText::from_optional(self.demo),
            repo: NonEmptyText::from_optional(self.repo),
            post: NonEmptyText::from_optional(self.post),
        })
    }
}

/// Parse the contents of a project data file.
///
/// This uses `serde_path_to_error` so that a shape mismatch names the offending value (for
/// example `[2].tech`).
///
/// # Errors
///
/// - `PortfolioError::InvalidJson` if the bytes are not well-formed JSON
/// - `PortfolioError::Schema` if the top-level value is not an array of objects, or an optional
///   field has the wrong type
pub fn parse_projects(bytes: &[u8]) -> PortfolioResult<ProjectCollection> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);

    let wire: Vec<ProjectRecordWire> = match serde_path_to_error::deserialize(&mut deserializer)
    {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            if source.classify() != serde_json::error::Category::Data {
                return Err(PortfolioError::InvalidJson(source));
            }
            let path = if path.is_empty() || path == "." {
                "<root>".to_string()
            } else {
                path
            };
            return Err(PortfolioError::Schema {
                path,
                message: source.to_string(),
            });
        }
    };
    deserializer.end().map_err(PortfolioError::InvalidJson)?;

    let mut collection = ProjectCollection::default();
    for (index, record) in wire.into_iter().enumerate() {
        match record.into_record() {
            Ok(record) => collection.records.push(record),
            Err(reason) => {
                tracing::warn!(index, %reason, "skipping project record");
                collection.skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    Ok(collection)
}

/// Where project data comes from.
pub trait ProjectSource: Send + Sync {
    /// Human-readable location, used in log lines.
    fn location(&self) -> String;

    /// Read the raw bytes of the data file.
    fn read(&self) -> PortfolioResult<Vec<u8>>;
}

/// Reads project data from a file on disk.
#[derive(Debug, Clone)]
pub struct FileProjectSource {
    path: PathBuf,
}

impl FileProjectSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectSource for FileProjectSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> PortfolioResult<Vec<u8>> {
        std::fs::read(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => PortfolioError::DataFileMissing {
                path: self.path.clone(),
            },
            _ => PortfolioError::DataFileRead {
                path: self.path.clone(),
                source,
            },
        })
    }
}

/// Loads the project collection once and memoises it.
#[derive(Debug)]
pub struct ProjectLoader<S = FileProjectSource> {
    source: S,
    cache: Mutex<Option<Arc<ProjectCollection>>>,
}

impl ProjectLoader<FileProjectSource> {
    /// A loader reading from the data file at `path`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FileProjectSource::new(path))
    }
}

impl<S: ProjectSource> ProjectLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the project collection, reading and parsing the source on the first call only.
    ///
    /// A failed load is not cached; the next call tries again.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ProjectSource::read`] or [`parse_projects`].
    pub fn load_projects(&self) -> PortfolioResult<Arc<ProjectCollection>> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(collection) = cache.as_ref() {
            return Ok(Arc::clone(collection));
        }

        let bytes = self.source.read()?;
        let collection = Arc::new(parse_projects(&bytes)?);
        tracing::info!(
            source = %self.source.location(),
            projects = collection.len(),
            skipped = collection.skipped().len(),
            "loaded project data"
        );

        *cache = Some(Arc::clone(&collection));
        Ok(collection)
    }

    /// Drop the cached collection so the next [`load_projects`](Self::load_projects) re-reads.
    pub fn invalidate(&mut self) {
        let cache = self.cache.get_mut().unwrap_or_else(|e| e.into_inner());
        if cache.take().is_some() {
            tracing::debug!(source = %self.source.location(), "project cache invalidated");
        }
    }
}
