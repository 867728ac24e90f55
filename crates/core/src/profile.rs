//! Static profile content shown around the project grid.

/// A labelled external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Everything on the page that does not come from the project data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub page_title: &'static str,
    pub page_icon: &'static str,
    pub name: &'static str,
    pub credential: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub links: &'static [ProfileLink],
    pub skills: &'static [&'static str],
    pub about: &'static str,
    pub writing: &'static [ProfileLink],
    pub email: &'static str,
}

const LINKS: &[ProfileLink] = &[
    ProfileLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/YOUR-LINKEDIN",
    },
    ProfileLink {
        label: "GitHub",
        href: "https://github.com/YOUR-GITHUB",
    },
    ProfileLink {
        label: "GitLab",
        href: "https://gitlab.com/YOUR-GITLAB",
    },
];

const SKILLS: &[&str] = &[
    "Python (pandas, scikit-learn, NumPy)",
    "SQL (PostgreSQL)",
    "NLP (spaCy, transformers)",
    "Visualization (Plotly, Matplotlib, Power BI)",
    "ETL & Orchestration",
    "Docker & Kubernetes",
    "Windows Server, AD, GPO",
    "PowerShell Automation",
];

// Placeholder targets until the posts are published.
const WRITING: &[ProfileLink] = &[
    ProfileLink {
        label: "From SysAdmin to Data Scientist: Deploying ML That Actually Runs",
        href: "#",
    },
    ProfileLink {
        label: "Hardening a Data Stack: Security Considerations for Analytics Teams",
        href: "#",
    },
];

const ABOUT: &str = "I'm a data scientist with a Master's in Data Science & Analytics and years of \
experience as a Windows System Administrator. My background in AD/Group Policy, PowerShell \
automation, and server performance helps me deploy reliable, secure data systems.";

impl Profile {
    /// The profile compiled into this build.
    pub const fn builtin() -> Self {
        Self {
            page_title: "James Simelus \u{2014} Data Scientist & Ex-SysAdmin",
            page_icon: "\u{1F4CA}",
            name: "James Simelus",
            credential: "M.S. in Data Science & Analytics \u{2022} Former Windows System Administrator",
            subtitle: "Data Scientist & Former Windows System Administrator",
            tagline: "I build analytics and ML solutions that are production-ready, secure, and easy to run in enterprise environments.",
            links: LINKS,
            skills: SKILLS,
            about: ABOUT,
            writing: WRITING,
            email: "james.simelus@example.com",
        }
    }

    /// Footer line for the given year.
    pub fn copyright(&self, year: i32) -> String {
        format!("\u{00A9} {} {} \u{2022} {}", year, self.name, self.email)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::builtin()
    }
}
