//! Constants used throughout the Folio core crate.
//!
//! Default file locations are relative to the configured root directory.

/// Default project data file.
pub const DEFAULT_PROJECTS_PATH: &str = "projects.json";

/// Default headshot image.
pub const DEFAULT_HEADSHOT_PATH: &str = "assets/headshot.jpg";

/// Default resume document.
pub const DEFAULT_RESUME_PATH: &str = "resume/James_Simelus_Resume.pdf";

/// Default listen address for the web host.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8501";

/// Role shown on a card when the record has none.
pub const DEFAULT_ROLE: &str = "Project";

/// Separator used when joining a record's tech list.
pub const TECH_SEPARATOR: &str = ", ";

/// Link labels, in the order they are emitted on a card.
pub const DEMO_LINK_LABEL: &str = "Live Demo";
pub const REPO_LINK_LABEL: &str = "Git Repo";
pub const POST_LINK_LABEL: &str = "Write-up";

/// Route the page uses to reference the headshot.
pub const HEADSHOT_ROUTE: &str = "/assets/headshot";

/// Route the page uses for the resume download.
pub const RESUME_ROUTE: &str = "/resume";
