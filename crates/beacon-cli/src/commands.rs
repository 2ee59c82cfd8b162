use beacon_gate::{ValidationError, Validator};
use beacon_server::{BeaconServer, ServerConfig};
use beacon_types::{build_event, Event, ParameterSet};
use colored::Colorize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    tracing::debug!(?config, "resolved server config");
    let server = BeaconServer::from_config(config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

/// File values first, then flag overrides.
fn resolve_config(args: ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(path) = args.path {
        config.collect_path = path;
    }
    if let Some(store) = args.store {
        config.store = store;
    }
    config.validate()?;
    Ok(config)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    match check_query(&args.query)? {
        Ok(event) => {
            println!("{} Hit accepted", "✓".green().bold());
            println!("{}", serde_json::to_string_pretty(&event)?);
            Ok(())
        }
        Err(err) => {
            println!("{} Hit rejected", "✗".red().bold());
            for reason in err.reasons() {
                println!("  {} {}", "-".red(), reason);
            }
            anyhow::bail!(err)
        }
    }
}

fn check_query(query: &str) -> anyhow::Result<Result<Event, ValidationError>> {
    let params = ParameterSet::from_query(query)?;
    Ok(Validator::measurement_protocol()
        .validate(&params)
        .map(|()| build_event(&params)))
}
