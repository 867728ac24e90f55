//! Whole-page rendering.
//!
//! [`PortfolioData`] is the immutable snapshot built once at startup. [`render_page`] is a pure
//! function from that snapshot (plus the current year) to a markup tree; the host calls it on
//! every page view.

use crate::assets::{AssetPaths, STYLES};
use crate::config::CoreConfig;
use crate::constants::{HEADSHOT_ROUTE, RESUME_ROUTE};
use crate::grid::render_grid;
use crate::markup::{Element, Node};
use crate::profile::{Profile, ProfileLink};
use crate::projects::{ProjectCollection, ProjectLoader};
use crate::PortfolioResult;
use folio_types::GridColumns;
use std::sync::Arc;

/// Everything needed to render the page, loaded once per process.
#[derive(Debug, Clone)]
pub struct PortfolioData {
    profile: Profile,
    projects: Arc<ProjectCollection>,
    assets: AssetPaths,
    columns: GridColumns,
}

impl PortfolioData {
    pub fn new(
        profile: Profile,
        projects: Arc<ProjectCollection>,
        assets: AssetPaths,
        columns: GridColumns,
    ) -> Self {
        Self {
            profile,
            projects,
            assets,
            columns,
        }
    }

    /// Build the snapshot from configuration: verify assets and load the project data file.
    ///
    /// # Errors
    ///
    /// Fails if the data file is missing, unreadable or malformed, or if the headshot is missing.
    /// Callers should treat any error as fatal and not serve a partial page.
    pub fn load(cfg: &CoreConfig) -> PortfolioResult<Self> {
        let loader = ProjectLoader::from_path(cfg.projects_path());
        let projects = loader.load_projects()?;
        let assets = AssetPaths::resolve(cfg)?;

        Ok(Self::new(
            Profile::builtin(),
            projects,
            assets,
            cfg.grid_columns(),
        ))
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn projects(&self) -> &ProjectCollection {
        &self.projects
    }

    pub fn assets(&self) -> &AssetPaths {
        &self.assets
    }

    pub fn columns(&self) -> GridColumns {
        self.columns
    }
}

fn favicon_href(icon: &str) -> String {
    format!(
        "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{}</text></svg>",
        icon
    )
}

fn external_link(link: &ProfileLink) -> Element {
    Element::new("a").attr("href", link.href).text(link.label)
}

fn headshot(profile: &Profile) -> Element {
    Element::new("img")
        .attr("src", HEADSHOT_ROUTE)
        .attr("alt", profile.name)
}

fn sidebar(data: &PortfolioData) -> Element {
    let profile = &data.profile;
    let links = profile
        .links
        .iter()
        .map(|link| Element::new("li").child(external_link(link)));

    let mut aside = Element::new("aside")
        .class("sidebar")
        .child(headshot(profile))
        .child(Element::new("p").child(Element::new("strong").text(profile.name)))
        .child(Element::new("p").class("muted").text(profile.credential))
        .child(Element::new("hr"))
        .child(Element::new("p").child(Element::new("strong").text("Links")))
        .child(Element::new("ul").class("links").children(links));

    if let Some(file_name) = data.assets.resume_file_name() {
        aside = aside.child(
            Element::new("a")
                .class("download")
                .attr("href", RESUME_ROUTE)
                .attr("download", file_name)
                .text("Download Resume (PDF)"),
        );
    }

    aside
}

fn header(profile: &Profile) -> Element {
    Element::new("section")
        .class("header")
        .child(Element::new("div").child(headshot(profile)))
        .child(
            Element::new("div")
                .child(Element::new("h1").text(profile.name))
                .child(Element::new("p").class("subtitle").text(profile.subtitle))
                .child(Element::new("p").text(profile.tagline)),
        )
}

fn skills(profile: &Profile) -> Element {
    let chips = profile
        .skills
        .iter()
        .map(|skill| Element::new("span").class("chip").text(*skill));

    Element::new("section")
        .class("skills")
        .child(Element::new("h2").text("Skills"))
        .child(Element::new("div").children(chips))
}

fn about(profile: &Profile) -> Element {
    Element::new("section")
        .class("about")
        .child(Element::new("h2").text("About"))
        .child(Element::new("p").text(profile.about))
}

fn projects(data: &PortfolioData) -> Element {
    Element::new("section")
        .class("projects")
        .child(Element::new("h2").text("Projects"))
        .child(render_grid(&data.projects, data.columns))
}

fn writing(profile: &Profile) -> Element {
    let posts = profile
        .writing
        .iter()
        .map(|link| Element::new("li").child(external_link(link)));

    Element::new("section")
        .class("writing")
        .child(Element::new("h2").text("Writing"))
        .child(Element::new("ul").children(posts))
}

fn footer(profile: &Profile, year: i32) -> Element {
    Element::new("footer").child(
        Element::new("p")
            .class("caption")
            .text(profile.copyright(year)),
    )
}

/// Render the page for `year` (shown in the footer).
pub fn render_page(data: &PortfolioData, year: i32) -> Node {
    let profile = &data.profile;

    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(profile.page_title))
        .child(
            Element::new("link")
                .attr("rel", "icon")
                .attr("href", favicon_href(profile.page_icon)),
        )
        .child(Element::new("style").child(Node::Raw(STYLES.to_string())));

    let main = Element::new("main")
        .class("main")
        .child(header(profile))
        .child(skills(profile))
        .child(about(profile))
        .child(projects(data))
        .child(writing(profile))
        .child(footer(profile, year));

    Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(
            Element::new("body").child(
                Element::new("div")
                    .class("layout")
                    .child(sidebar(data))
                    .child(main),
            ),
        )
        .into()
}

/// Render the page as a complete HTML document.
pub fn render_document(data: &PortfolioData, year: i32) -> String {
    format!("<!DOCTYPE html>\n{}", render_page(data, year).to_html())
}
