use chrono::Datelike;
use clap::{Parser, Subcommand};
use folio_core::{render_document, ConfigOverrides, CoreConfig, PortfolioData, ProjectLoader};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio portfolio page CLI")]
struct Cli {
    /// Base directory for the data file and assets (overrides FOLIO_ROOT)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Project data file (overrides FOLIO_PROJECTS_PATH)
    #[arg(long, global = true)]
    projects: Option<PathBuf>,
    /// Headshot image (overrides FOLIO_HEADSHOT_PATH)
    #[arg(long, global = true)]
    headshot: Option<PathBuf>,
    /// Resume document (overrides FOLIO_RESUME_PATH)
    #[arg(long, global = true)]
    resume: Option<PathBuf>,
    /// Cards per grid row (overrides FOLIO_GRID_COLUMNS)
    #[arg(long, global = true)]
    columns: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration, assets and the project data file
    Check,
    /// List projects in display order
    Projects,
    /// Render the page to static HTML
    Render {
        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Year shown in the footer (current year if omitted)
        #[arg(long)]
        year: Option<i32>,
    },
}

impl Cli {
    /// Command-line flags win over environment variables.
    fn overrides(&self) -> ConfigOverrides {
        let env = ConfigOverrides::from_env();
        ConfigOverrides {
            root: self.root.clone().or(env.root),
            projects_path: self.projects.clone().or(env.projects_path),
            headshot_path: self.headshot.clone().or(env.headshot_path),
            resume_path: self.resume.clone().or(env.resume_path),
            grid_columns: self.columns.clone().or(env.grid_columns),
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so `render` output on stdout stays clean.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("folio=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = CoreConfig::resolve(cli.overrides())?;

    match cli.command {
        Some(Commands::Check) => {
            let data = PortfolioData::load(&cfg)?;
            let projects = data.projects();
            println!(
                "OK: {} project(s) from {}",
                projects.len(),
                cfg.projects_path().display()
            );
            for skipped in projects.skipped() {
                println!("  skipped record {}: {}", skipped.index, skipped.reason);
            }
            match data.assets().resume() {
                Some(path) => println!("Resume: {}", path.display()),
                None => println!("Resume: not found, download link disabled"),
            }
        }
        Some(Commands::Projects) => {
            let loader = ProjectLoader::from_path(cfg.projects_path());
            let projects = loader.load_projects()?;
            if projects.is_empty() {
                println!("No projects found.");
            } else {
                for project in projects.iter() {
                    println!(
                        "{} ({}): {}",
                        project.title,
                        project.role_or_default(),
                        project.tech_line()
                    );
                }
            }
        }
        Some(Commands::Render { out, year }) => {
            let data = PortfolioData::load(&cfg)?;
            let year = year.unwrap_or_else(|| chrono::Local::now().year());
            let html = render_document(&data, year);
            match out {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    tracing::info!(
                        "wrote {} ({} project(s))",
                        path.display(),
                        data.projects().len()
                    );
                }
                None => println!("{}", html),
            }
        }
        None => {
            println!("Use 'folio --help' for commands");
        }
    }

    Ok(())
}
