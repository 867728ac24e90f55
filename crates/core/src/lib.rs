//! # Folio Core
//!
//! Core logic for the Folio portfolio page.
//!
//! This crate contains pure data operations:
//! - Loading and memoising project records from the JSON data file
//! - Partitioning projects into grid rows and building project cards
//! - Rendering the whole page into a markup tree and HTML
//!
//! **No hosting concerns**: HTTP serving and the CLI belong in `api-rest` and `folio-cli`.

pub mod assets;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod markup;
pub mod page;
pub mod profile;
pub mod projects;

pub use assets::AssetPaths;
pub use config::{ConfigOverrides, CoreConfig};
pub use error::{PortfolioError, PortfolioResult};
pub use grid::{partition, render_grid, GridRow, ProjectCard};
pub use markup::{Element, Node};
pub use page::{render_document, render_page, PortfolioData};
pub use profile::Profile;
pub use projects::{
    parse_projects, FileProjectSource, LinkKind, ProjectCollection, ProjectLink, ProjectLoader,
    ProjectRecord, ProjectSource, SkippedRecord,
};

pub use folio_types::{GridColumns, NonEmptyText};
