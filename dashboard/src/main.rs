//! Main entry point for the dashboard binary

use clap::Parser;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::signal;

use dashboard::{
    AnalyticsEngine, DashboardResult, RosterStore, ShellSession, SimulatedBackend, export_view,
    cli::{Cli, Command, OutputFormat},
    render::{render_report, render_table},
    services::{load_roster, seed_source},
    view,
};
use shared::{Component, component_info, logging};

async fn write_stdout(text: &str) -> DashboardResult<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> DashboardResult<()> {
    // .env values become defaults for the env-backed flags
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = cli.to_config();
    config.validate()?;

    logging::init_tracing_with_level(Some(&config.log_level));
    logging::log_startup(Component::Cli, "staff roster dashboard");

    let roster = load_roster(seed_source(&config.seed).as_ref()).await?;
    let store = RosterStore::new(roster, SimulatedBackend::with_latency(config.latency));
    let prefs = &config.preferences;

    match cli.command {
        Command::List { view: args, format } => {
            let state = args.to_view_state(config.default_page_size);
            let page = view(&store.snapshot(), &state);
            let text = match format {
                OutputFormat::Text => render_table(&page, &state, prefs),
                OutputFormat::Json => serde_json::to_string_pretty(&page)?,
            };
            write_stdout(&text).await?;
        }
        Command::Stats { format } => {
            let report = AnalyticsEngine::new().report(&store.snapshot());
            let text = match format {
                OutputFormat::Text => render_report(&report, prefs),
                OutputFormat::Json => serde_json::to_string_pretty(&report)?,
            };
            write_stdout(&text).await?;
        }
        Command::Export { view: args, output } => {
            let state = args.to_view_state(config.default_page_size);
            let export = export_view(&store.snapshot(), &state, prefs.allow_export)?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, &export.content).await?;
                    component_info!(Component::Export, "💾 Wrote {} rows to {}", export.rows, path.display());
                }
                None => write_stdout(&export.content).await?,
            }
        }
        Command::Shell => {
            let mut session = ShellSession::new(&store, prefs.clone(), config.default_page_size);
            let input = BufReader::new(tokio::io::stdin());

            tokio::select! {
                result = session.run(input, tokio::io::stdout()) => result?,
                signal = signal::ctrl_c() => match signal {
                    Ok(()) => logging::log_shutdown(Component::Cli, "Received Ctrl+C signal"),
                    Err(err) => logging::log_error(Component::Cli, "Signal handling", &err),
                },
            }
        }
    }

    logging::log_success(Component::Cli, "Dashboard stopped gracefully");
    Ok(())
}
