//! unidomains CLI
//!
//! Look up universities and their web domains by country.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use unidomains::{
    error::Result,
    models::{Config, FilterSelection, PageSize},
    services::{DataSource, HttpSource, StaticSource},
    view::{Action, ViewController, provenance, render, render_countries, render_list},
};

/// unidomains - World University Domains Directory
#[derive(Parser, Debug)]
#[command(
    name = "unidomains",
    version,
    about = "Browse universities and their domains by country"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "unidomains.toml")]
    config: PathBuf,

    /// Read records from a local JSON file instead of the dataset URL
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the countries present in the dataset
    Countries,

    /// Print one page of results
    List {
        /// Only show universities from this country (exact match)
        #[arg(long, default_value = "")]
        country: String,

        /// Items per page: a positive number or "all"
        #[arg(long)]
        per_page: Option<PageSize>,

        /// Page to show, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Interactive session with selectors and Previous/Next
    Browse,

    /// Validate the configuration file
    Validate,
}

/// Pick the default log level: `-v`, else the config file's level when it loaded.
fn log_level(verbose: bool, loaded: &Result<Config>) -> &str {
    if verbose {
        "debug"
    } else {
        loaded
            .as_ref()
            .map_or("info", |config| config.logging.level.as_str())
    }
}

/// Initialize logging; `RUST_LOG` overrides the default level.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn build_source(cli: &Cli, config: &Config) -> Result<Box<dyn DataSource>> {
    Ok(match &cli.dataset {
        Some(path) => Box::new(StaticSource::from_file(path)?),
        None => Box::new(HttpSource::new(&config.source)?),
    })
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load(&cli.config);
    init_logging(log_level(cli.verbose, &loaded));

    if let Command::Validate = cli.command {
        log::info!("Validating configuration {}...", cli.config.display());
        if let Err(e) = Config::load_validated(&cli.config) {
            log::error!("Config validation failed: {}", e);
            return Err(e);
        }
        log::info!("✓ Config OK");
        return Ok(());
    }

    let config = Config::or_default(&cli.config, loaded);

    let source = build_source(&cli, &config)?;
    let mut controller = ViewController::new(source, config.view.default_page_size);
    controller.load().await;

    match cli.command {
        Command::Countries => {
            for country in &controller.state().countries {
                println!("{country}");
            }
            log::info!("{} countries", controller.state().countries.len());
        }

        Command::List {
            country,
            per_page,
            page,
        } => {
            controller.dispatch(Action::SelectCountry(FilterSelection::from_input(&country)));
            if let Some(size) = per_page {
                controller.dispatch(Action::SelectPageSize(size));
            }
            controller.dispatch(Action::ApplyFilters);
            for _ in 1..page {
                if !controller.state().can_next() {
                    log::warn!(
                        "Stopped at page {}: Next is disabled",
                        controller.state().page.page()
                    );
                    break;
                }
                controller.dispatch(Action::NextPage);
            }

            print!("{}", render_list(controller.state(), &config.view));
            let view = controller.view();
            log::info!(
                "Page {} of {}, {} universities found for {}",
                view.current_page,
                view.total_pages,
                view.total_matches,
                controller.state().selection.label()
            );
            if let Some(line) = provenance(controller.state()) {
                log::info!("{line}");
            }
        }

        Command::Browse => browse(&mut controller, &config).await?,

        // Validated above, before any fetch.
        Command::Validate => {}
    }

    if controller.state().is_error {
        log::error!("The university list could not be loaded.");
    }

    Ok(())
}

const BROWSE_HELP: &str = "\
Commands:
  country <name>   select a country (exact, case-sensitive)
  country          select All Countries
  countries        list the country options
  size <n|all>     select items per page (5, 10, 20, all)
  apply            apply filters (back to page 1)
  next | prev      change page
  show             redraw
  help             this text
  quit             leave";

/// Read commands from stdin and redraw after each one.
async fn browse(controller: &mut ViewController, config: &Config) -> Result<()> {
    println!("{}", render(controller.state(), &config.view));
    println!("{BROWSE_HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        let action = match command {
            "" | "show" => None,
            "country" => Some(Action::SelectCountry(FilterSelection::from_input(arg))),
            "size" => match arg.parse::<PageSize>() {
                Ok(size) => Some(Action::SelectPageSize(size)),
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
            "countries" => {
                print!("{}", render_countries(controller.state()));
                continue;
            }
            "apply" => Some(Action::ApplyFilters),
            "next" => Some(Action::NextPage),
            "prev" | "previous" => Some(Action::PreviousPage),
            "help" => {
                println!("{BROWSE_HELP}");
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("Unknown command '{other}'. Type 'help'.");
                continue;
            }
        };

        if let Some(action) = action {
            controller.dispatch(action);
        }
        println!("{}", render(controller.state(), &config.view));
    }

    Ok(())
}
