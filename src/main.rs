use clap::{Parser, Subcommand};
use read_rail::{config, markdown, output, pager};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "read-rail")]
#[command(about = "Inspect reading-position tracking for docs pages")]
#[command(long_about = "\
Inspect reading-position tracking for docs pages

Derives the same outline anchors and pager wiring the tracker produces at
runtime, so docs authors can check deep links and reading order before
publishing.

Anchors are derived from heading text (levels 2-4): lowercased, symbols
stripped, whitespace hyphenated, duplicates suffixed -1, -2, … in document
order. Explicit anchors ({#id} heading attributes) are kept verbatim:

  ## Getting Started        →  #getting-started
  ## Getting Started        →  #getting-started-1
  ## Installing {#install}  →  #install

The pager reads a pages.toml with the fixed reading order:

  [[pages]]
  title = \"Overview\"
  url = \"/docs/cli/overview\"

Run 'read-rail gen-config' to print a documented pages.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Tracker config file (reading band + page table)
    #[arg(long, default_value = "pages.toml", global = true)]
    pages: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the outline (anchors included) of a markdown document
    Outline {
        /// Markdown file to outline
        file: PathBuf,
        /// Emit the outline as JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
    /// Resolve prev/next pager links for a location
    Pager {
        /// Current location, e.g. /docs/cli/commands
        location: String,
    },
    /// Print a stock pages.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Outline { file, json } => {
            let document = std::fs::read_to_string(&file)?;
            let outline = markdown::outline(&document);
            if json {
                println!("{}", serde_json::to_string_pretty(&outline)?);
            } else {
                output::print_outline(&outline);
            }
        }
        Command::Pager { location } => {
            let config = config::load_config(&cli.pages)?;
            let result = pager::sequence(&config.pages, &location);
            output::print_pager(&location, result);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
