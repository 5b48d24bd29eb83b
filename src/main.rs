//! Courtside CLI
//!
//! Command-line front end for the stats backend:
//! - Home page with the fantasy leaders chart
//! - Player table with name search
//! - Single player lookup
//! - Interactive player browser

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courtside::config::generate_default_config;
use courtside::render::{
    render_daily_leaders, render_home, render_leaders, render_nav, render_player_detail,
    render_players_page, render_teams, to_csv, to_json, Route, DEFAULT_BAR_WIDTH,
};
use courtside::render::table::LOADING_TEXT;
use courtside::{
    Config, DetailState, LoggingConfig, PlayerDetail, PlayerTable, StatsClient, TableState,
    TopScorersChart, ViewPhase,
};

#[derive(Parser)]
#[command(name = "courtside")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "NBA player statistics and fantasy leaders in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: <config dir>/courtside/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Stats backend URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dashboard home with the fantasy leaders chart
    Home,

    /// Player statistics table
    Players {
        /// Only players whose name matches
        #[arg(short, long)]
        search: Option<String>,
    },

    /// One player's season line
    Player {
        /// Player id
        id: i64,
    },

    /// Fantasy leaders chart only
    Leaders,

    /// Browse players interactively
    Browse,

    /// Team rosters and performance
    Teams,

    /// Daily top performers
    DailyLeaders,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_tracing(&config.logging)?;
    tracing::debug!(base_url = %config.api.base_url, "Courtside v{}", env!("CARGO_PKG_VERSION"));

    let client = StatsClient::new(&config.api)?;

    match cli.command {
        Commands::Home => show_leaders(client, &config, cli.format, true).await?,

        Commands::Leaders => show_leaders(client, &config, cli.format, false).await?,

        Commands::Players { search } => {
            let mut table = PlayerTable::new(client);
            let rx = table.subscribe();
            let notice = cli.format == OutputFormat::Table;

            match search {
                Some(term) => with_loading_notice(rx, notice, table.search(&term)).await,
                None => with_loading_notice(rx, notice, table.mount()).await,
            }

            let state = table.state();
            match cli.format {
                OutputFormat::Table => {
                    print!("{}\n{}", render_nav(Route::Players), render_players_page(&state));
                }
                OutputFormat::Json if state.error.is_none() => {
                    println!("{}", to_json(&state.players)?)
                }
                OutputFormat::Csv if state.error.is_none() => print!("{}", to_csv(&state.players)?),
                _ => {}
            }

            if let Some(message) = &state.error {
                if cli.format != OutputFormat::Table {
                    eprintln!("{}", message);
                }
                std::process::exit(1);
            }
        }

        Commands::Player { id } => {
            let mut detail = PlayerDetail::new(client);
            detail.load(id).await;

            match (cli.format, detail.state()) {
                (OutputFormat::Json, DetailState::Found(player)) => {
                    println!("{}", to_json(player)?)
                }
                (OutputFormat::Csv, DetailState::Found(player)) => {
                    print!("{}", to_csv(std::slice::from_ref(player))?)
                }
                (OutputFormat::Table, state) => {
                    print!("{}\n{}", render_nav(Route::Players), render_player_detail(state));
                }
                (_, state) => eprint!("{}", render_player_detail(state)),
            }

            if !matches!(detail.state(), DetailState::Found(_)) {
                std::process::exit(1);
            }
        }

        Commands::Browse => browse(client).await?,

        Commands::Teams => print!("{}\n{}", render_nav(Route::Teams), render_teams()),

        Commands::DailyLeaders => {
            print!(
                "{}\n{}",
                render_nav(Route::DailyLeaders),
                render_daily_leaders()
            )
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Leaders chart, either alone or as part of the home page
async fn show_leaders(
    client: StatsClient,
    config: &Config,
    format: OutputFormat,
    with_home: bool,
) -> Result<()> {
    let mut chart = TopScorersChart::new(client, config.dashboard.clone());
    chart.mount().await;
    let state = chart.state();

    match format {
        OutputFormat::Json => println!("{}", to_json(&state.dataset)?),
        OutputFormat::Csv => print!("{}", to_csv(&state.dataset)?),
        OutputFormat::Table if with_home => {
            print!("{}\n{}", render_nav(Route::Home), render_home(&state));
        }
        OutputFormat::Table => print!("{}", render_leaders(&state, DEFAULT_BAR_WIDTH)),
    }

    if state.error.is_some() {
        std::process::exit(1);
    }
    Ok(())
}

/// Interactive players page
///
/// A line searches by name, an empty line reloads everything, `:clear`
/// empties the search, `:q` quits.
async fn browse(client: StatsClient) -> Result<()> {
    let mut table = PlayerTable::new(client);

    with_loading_notice(table.subscribe(), true, table.mount()).await;
    print_players(&table.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("search> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await.context("reading stdin")? else {
            println!();
            break;
        };

        match line.trim() {
            ":q" | ":quit" => break,
            ":clear" => with_loading_notice(table.subscribe(), true, table.clear()).await,
            _ => with_loading_notice(table.subscribe(), true, table.search(&line)).await,
        }
        print_players(&table.state());
    }

    Ok(())
}

fn print_players(state: &TableState) {
    print!("\n{}\n{}", render_nav(Route::Players), render_players_page(state));
}

/// Drive `work` to completion, printing the loading line to stderr once the
/// table enters `Loading`
async fn with_loading_notice<F>(mut rx: watch::Receiver<TableState>, enabled: bool, work: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(work);
    let mut announced = !enabled;

    loop {
        tokio::select! {
            _ = &mut work => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    (&mut work).await;
                    break;
                }
                let loading = rx.borrow_and_update().phase == ViewPhase::Loading;
                if loading && !announced {
                    eprintln!("{}", LOADING_TEXT);
                    announced = true;
                }
            }
        }
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("courtside={}", logging.level).into());

    // Logs never go to stdout; that is where pages are printed
    let writer = match &logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path))?;
            BoxMakeWriter::new(std::sync::Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(writer);
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer).init();
    }

    Ok(())
}
