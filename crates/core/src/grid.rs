//! Project grid layout.
//!
//! The collection is partitioned into consecutive rows of `columns` slots. Slots are filled left
//! to right in collection order and the final row is padded with empty slots.

use crate::markup::{Element, Node};
use crate::projects::{ProjectCollection, ProjectLink, ProjectRecord};
use folio_types::GridColumns;

/// One row of the project grid. Always holds exactly `columns` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow<'a> {
    slots: Vec<Option<&'a ProjectRecord>>,
}

impl<'a> GridRow<'a> {
    pub fn slots(&self) -> &[Option<&'a ProjectRecord>] {
        &self.slots
    }

    /// Populated slots only, left to right.
    pub fn records(&self) -> impl Iterator<Item = &'a ProjectRecord> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn empty_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }
}

/// Split `projects` into rows of `columns` slots.
///
/// Produces `ceil(len / columns)` rows; an empty slice produces no rows.
pub fn partition(projects: &[ProjectRecord], columns: GridColumns) -> Vec<GridRow<'_>> {
    let width = columns.get();
    projects
        .chunks(width)
        .map(|chunk| {
            let mut slots: Vec<Option<&ProjectRecord>> = chunk.iter().map(Some).collect();
            slots.resize(width, None);
            GridRow { slots }
        })
        .collect()
}

/// Everything a project card displays, resolved from a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard<'a> {
    pub title: &'a str,
    pub role: &'a str,
    pub description: &'a str,
    pub tech_line: String,
    pub links: Vec<ProjectLink<'a>>,
}

impl<'a> From<&'a ProjectRecord> for ProjectCard<'a> {
    fn from(record: &'a ProjectRecord) -> Self {
        Self {
            title: record.title.as_str(),
            role: record.role_or_default(),
            description: record.description.as_str(),
            tech_line: record.tech_line(),
            links: record.links(),
        }
    }
}

impl ProjectCard<'_> {
    pub fn render(&self) -> Node {
        let links = self.links.iter().map(|link| {
            Element::new("a")
                .attr("href", link.href)
                .attr("target", "_blank")
                .attr("rel", "noopener")
                .text(link.label())
        });

        Element::new("div")
            .class("card")
            .child(Element::new("h3").class("card-title").text(self.title))
            .child(Element::new("p").class("caption").text(self.role))
            .child(Element::new("p").class("description").text(self.description))
            .child(
                Element::new("p")
                    .class("tech")
                    .child(Element::new("strong").text("Tech:"))
                    .text(" ")
                    .child(
                        Element::new("span")
                            .class("tech-list")
                            .text(self.tech_line.as_str()),
                    ),
            )
            .child(Element::new("div").class("btn").children(links))
            .into()
    }
}

/// Render the whole project grid.
pub fn render_grid(projects: &ProjectCollection, columns: GridColumns) -> Node {
    let rows = partition(projects.as_slice(), columns).into_iter().map(|row| {
        let slots = row.slots().iter().map(|slot| match slot {
            Some(record) => Element::new("div")
                .class("grid-slot")
                .child(ProjectCard::from(*record).render()),
            None => Element::new("div").class("grid-slot empty"),
        });

        Element::new("div")
            .class("grid-row")
            .attr(
                "style",
                format!("grid-template-columns: repeat({}, 1fr)", columns.get()),
            )
            .children(slots)
    });

    Element::new("div")
        .class("project-grid")
        .children(rows)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::parse_projects;
    use folio_types::NonEmptyText;

    fn record(title: &str) -> ProjectRecord {
        ProjectRecord {
            title: NonEmptyText::new(title).unwrap(),
            role: None,
            description: NonEmptyText::new("description").unwrap(),
            tech: Vec::new(),
            demo: None,
            repo: None,
            post: None,
        }
    }

    fn records(n: usize) -> Vec<ProjectRecord> {
        (0..n).map(|i| record(&format!("P{i}"))).collect()
    }

    #[test]
    fn test_partition_row_count_is_ceiling() {
        for len in 1..=10 {
            for k in 1..=4 {
                let projects = records(len);
                let rows = partition(&projects, GridColumns::new(k).unwrap());
                assert_eq!(rows.len(), len.div_ceil(k), "len={len} k={k}");
                assert!(rows.iter().all(|r| r.slots().len() == k));
            }
        }
    }

    #[test]
    fn test_partition_is_order_preserving_and_lossless() {
        let projects = records(7);
        let rows = partition(&projects, GridColumns::new(3).unwrap());

        let flattened: Vec<&ProjectRecord> = rows.iter().flat_map(|r| r.records()).collect();
        let original: Vec<&ProjectRecord> = projects.iter().collect();
        assert_eq!(flattened, original);
    }

    #[test]
    fn test_partition_pads_last_row_only() {
        let projects = records(7);
        let rows = partition(&projects, GridColumns::new(3).unwrap());

        assert_eq!(rows[0].empty_slots(), 0);
        assert_eq!(rows[1].empty_slots(), 0);
        assert_eq!(rows[2].empty_slots(), 2);
        assert!(rows[2].slots()[0].is_some());
    }

    #[test]
    fn test_partition_empty_collection_has_no_rows() {
        assert!(partition(&[], GridColumns::default()).is_empty());
    }

    #[test]
    fn test_card_without_tech_has_empty_tech_line() {
        let r = record("A");
        let card = ProjectCard::from(&r);
        assert_eq!(card.tech_line, "");
        assert_eq!(card.role, "Project");
        assert!(card.links.is_empty());
    }

    #[test]
    fn test_card_render_escapes_text() {
        let mut r = record("<script>alert(1)</script>");
        r.repo = Some(NonEmptyText::new("https://git.example/a?x=\"y\"").unwrap());
        let html = ProjectCard::from(&r).render().to_html();

        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"href="https://git.example/a?x=&quot;y&quot;""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_grid_end_to_end_single_row() {
        let json = r#"[{"title":"A","description":"d1"},{"title":"B","description":"d2","tech":["x","y"]}]"#;
        let collection = parse_projects(json.as_bytes()).unwrap();
        let grid = render_grid(&collection, GridColumns::new(3).unwrap());

        let rows = grid.find_by_class("grid-row");
        assert_eq!(rows.len(), 1);

        let slots = grid.find_by_class("grid-slot");
        assert_eq!(slots.len(), 3);
        assert_eq!(grid.find_by_class("empty").len(), 1);

        let tech: Vec<String> = grid
            .find_by_class("tech-list")
            .into_iter()
            .map(|e| Node::Element(e.clone()).text_content())
            .collect();
        assert_eq!(tech, vec!["".to_string(), "x, y".to_string()]);

        let titles: Vec<String> = grid
            .find_by_class("card-title")
            .into_iter()
            .map(|e| Node::Element(e.clone()).text_content())
            .collect();
        assert_eq!(titles, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_render_grid_repo_only_emits_one_link() {
        let json = r#"[{"title":"A","description":"d","repo":"https://git.example/a"}]"#;
        let collection = parse_projects(json.as_bytes()).unwrap();
        let html = render_grid(&collection, GridColumns::default()).to_html();

        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains(">Git Repo</a>"));
        assert!(!html.contains("Live Demo"));
        assert!(!html.contains("Write-up"));
    }
}
