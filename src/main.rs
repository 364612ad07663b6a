//! specview - A terminal viewer for the OpenCLI specification
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use tracing::{error, info};

use specview_app::actions::load_document;
use specview_app::config::{init_config_dir, load_settings, Settings};
use specview_app::{Page, SourceClient, SourceSet};
use specview_core::{rows_to_text, visible_rows, ExpansionState};

/// specview - A terminal viewer for the OpenCLI specification
#[derive(Parser, Debug)]
#[command(name = "specview")]
#[command(about = "Browse the OpenCLI specification in your terminal", long_about = None)]
struct Args {
    /// Base URL, directory, or YAML file holding the specification
    #[arg(value_name = "SOURCE")]
    source: Option<String>,

    /// Page to open on startup
    #[arg(long, value_enum, default_value_t = StartPage::Home)]
    page: StartPage,

    /// Print the document tree to stdout instead of starting the TUI
    #[arg(long)]
    print: bool,

    /// With --print, expand every container
    #[arg(long, requires = "print")]
    expand_all: bool,

    /// With --print, write the parsed document as JSON instead of tree rows
    #[arg(long, requires = "print", conflicts_with = "expand_all")]
    json: bool,

    /// Write a commented .specview/config.toml to the current directory and exit
    #[arg(long, conflicts_with = "print")]
    init_config: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StartPage {
    Home,
    Spec,
    Reference,
}

impl From<StartPage> for Page {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Home => Page::Home,
            StartPage::Spec => Page::Spec,
            StartPage::Reference => Page::Reference,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    // Logging goes to a file, since the TUI owns stdout
    if let Err(e) = specview_core::logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if args.init_config {
        init_config_dir(&cwd)?;
        println!("Wrote {}", cwd.join(".specview").join("config.toml").display());
        return Ok(());
    }
    let settings = load_settings(&cwd);

    let base = args
        .source
        .clone()
        .unwrap_or_else(|| settings.source.base.clone());
    let sources = SourceSet::resolve(&base, &settings.source)?;
    info!("Source base: {}", base);

    if args.print {
        return match print_document(&settings, &sources, &args).await {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };
    }

    let result = specview_tui::run(settings, sources, args.page.into()).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("specview exiting");
    Ok(result?)
}

/// Load the document headlessly and write it to stdout
async fn print_document(
    settings: &Settings,
    sources: &SourceSet,
    args: &Args,
) -> specview_core::Result<()> {
    let client = SourceClient::new(settings.source.timeout())?;
    let document = load_document(&client, &sources.document).await?;

    if args.json {
        println!("{}", document.to_json_pretty()?);
        return Ok(());
    }

    let mut expansion = ExpansionState::new();
    if args.expand_all {
        expansion.expand_all(&document);
    }

    let rows = visible_rows(&document, &expansion);
    print!("{}", rows_to_text(&rows, settings.ui.tree_indent));
    Ok(())
}
