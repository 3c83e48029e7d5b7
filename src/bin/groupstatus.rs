//! Interactive console for editing groups and loading their task status.
//!
//! Usage:
//!
//! ```text
//! groupstatus [--base-url URL]
//! ```
//!
//! Commands are read from standard input one per line (`help` lists them).
//! `add` and `show` first validate the groups and refuse while they are not a
//! valid partition. `show` then starts loading status in the background,
//! so the groups can still be listed or edited while requests are in flight;
//! a pass overtaken by a newer `show` is discarded when it finishes.
//!
//! The status endpoint and partition bounds come from `GROUPSTATUS_BASE_URL`,
//! `GROUPSTATUS_LOWER` and `GROUPSTATUS_UPPER`; `--base-url` takes precedence
//! over the environment.

#[path = "groupstatus/command.rs"]
mod command;


use clap::Parser;
use command::{Command, HELP, render_groups, render_partition_error, render_results};
use groupstatus::{
    config::GroupStatusConfig,
    partition::{
        adapters::HttpStatusProvider,
        domain::{GroupBound, GroupRange},
        services::{GroupBoard, ShowStatusError, ShowStatusOutcome, StatusAggregationService},
        validation::DefaultPartitionValidator,
    },
};
use mockable::DefaultClock;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type ConsoleService = StatusAggregationService<DefaultPartitionValidator, HttpStatusProvider, DefaultClock>;

#[derive(Debug, Parser)]
#[command(name = "groupstatus", about = "Partition 1-10 into groups and load their task status")]
struct Cli {
    /// Status endpoint base URL; item ids are appended as a path segment.
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "groupstatus=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = GroupStatusConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    info!(base_url = %config.base_url, bounds = %config.bounds, "configuration loaded");

    let runtime = Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(run(config))
}

async fn run(config: GroupStatusConfig) -> Result<(), BoxError> {
    let board = GroupBoard::new(config.bounds);
    let service = Arc::new(StatusAggregationService::new(
        board.clone(),
        Arc::new(DefaultPartitionValidator::new(config.bounds)),
        Arc::new(HttpStatusProvider::new(config.base_url)),
        Arc::new(DefaultClock),
    ));

    emit(&render_groups(&board.groups()))?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                emit(&[err.to_string()])?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        execute(command, &board, &service)?;
    }
    Ok(())
}

fn execute(command: Command, board: &GroupBoard, service: &Arc<ConsoleService>) -> io::Result<()> {
    match command {
        Command::List => emit(&render_groups(&board.groups())),
        Command::Add { from, to } => emit(&add_group(service, &from, &to)),
        Command::Delete { index } => match board.delete_group(index) {
            Ok(_) => emit(&render_groups(&board.groups())),
            Err(err) => emit(&[err.to_string()]),
        },
        Command::Set { index, field, raw } => match board.update_group(index, field, &raw) {
            Ok(_) => emit(&render_groups(&board.groups())),
            Err(err) => emit(&[err.to_string()]),
        },
        Command::Show => {
            if let Err(err) = service.validate() {
                return emit(&[render_partition_error(&err)]);
            }
            emit(&["...Loading task status".to_owned()])?;
            let pass = Arc::clone(service);
            tokio::spawn(async move {
                let lines = report(pass.show_status().await);
                if let Err(err) = emit(&lines) {
                    warn!(error = %err, "failed to write status report");
                }
            });
            Ok(())
        }
        Command::Results => match board.results() {
            Some(results) => emit(&render_results(&results)),
            None => emit(&["no status loaded yet".to_owned()]),
        },
        Command::Status => {
            let state = if board.is_loading() { "loading" } else { "idle" };
            emit(&[state.to_owned()])
        }
        Command::Help => emit(&[HELP.to_owned()]),
        Command::Quit => Ok(()),
    }
}

/// Appends a group unless the current groups are invalid, in which case the
/// validation message is returned and nothing is added.
fn add_group(service: &ConsoleService, from: &str, to: &str) -> Vec<String> {
    if let Err(err) = service.validate() {
        return vec![render_partition_error(&err)];
    }
    let board = service.board();
    board.add_group(GroupRange::new(
        GroupBound::parse_lenient(from),
        GroupBound::parse_lenient(to),
    ));
    render_groups(&board.groups())
}

fn report(outcome: Result<ShowStatusOutcome, ShowStatusError>) -> Vec<String> {
    match outcome {
        Ok(ShowStatusOutcome::Applied { results, .. }) => render_results(&results),
        Ok(ShowStatusOutcome::Superseded { .. }) => Vec::new(),
        Err(ShowStatusError::Validation(err)) => vec![render_partition_error(&err)],
        Err(err @ ShowStatusError::Lookup { .. }) => vec![err.to_string()],
    }
}

fn emit(lines: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()
}
