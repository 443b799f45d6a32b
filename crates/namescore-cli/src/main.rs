mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use namescore_core::{load_profile, PresentationProfile};
use namescore_report::{RenderContext, Viewer};
use namescore_store::ReportStore;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "namescore-cli")]
#[command(about = "Render and manage brand-name evaluation reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render a raw report file into a view model (JSON on stdout)
    Render {
        /// Path to a raw report JSON file
        file: PathBuf,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Save a report file as the current report
    Load {
        /// Path to a raw report JSON file
        file: PathBuf,
        /// Path to the JSON query that produced the report
        #[arg(long)]
        query: Option<PathBuf>,
    },
    /// Render the current stored report
    Current {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Remove the current stored report and query
    Clear,
    /// Run the text sanitizer over a string
    Sanitize {
        /// Raw text, e.g. an executive summary
        text: String,
    },
}

#[derive(Debug, Clone, Copy, Args)]
struct ViewArgs {
    /// Render as an authenticated viewer (no locked sections)
    #[arg(long)]
    authenticated: bool,
    /// Use the print context (page breaks, print density)
    #[arg(long)]
    print: bool,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl ViewArgs {
    fn viewer(self) -> Viewer {
        if self.authenticated {
            Viewer::authenticated()
        } else {
            Viewer::anonymous()
        }
    }

    fn context(self) -> RenderContext {
        if self.print {
            RenderContext::Print
        } else {
            RenderContext::Screen
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = namescore_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let profile = match &config.profile_path {
        Some(path) => load_profile(path)?,
        None => PresentationProfile::default(),
    };
    let store = ReportStore::new(config.store_dir.clone());

    match cli.command {
        Commands::Render { file, view } => {
            let out = report::run_render(&file, view.viewer(), view.context(), &profile, view.pretty)?;
            println!("{out}");
        }
        Commands::Load { file, query } => {
            let stored = report::run_load(&store, &file, query.as_deref())?;
            println!(
                "saved current report {} at {}",
                stored.digest,
                stored.saved_at.to_rfc3339()
            );
        }
        Commands::Current { view } => {
            let out =
                report::run_current(&store, view.viewer(), view.context(), &profile, view.pretty)?;
            println!("{out}");
        }
        Commands::Clear => {
            store.clear()?;
            println!("cleared current report");
        }
        Commands::Sanitize { text } => println!("{}", namescore_report::sanitize(&text)),
    }

    Ok(())
}
