//! CLI entrypoint for lunch-poll
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use clap::Parser;
use lunch_application::{
    ChooseDishInput, ChooseDishUseCase, ListPollResultsUseCase, VotingParams,
};
use lunch_domain::{DishId, EmployeeId, PollId};
use lunch_infrastructure::{ConfigLoader, DataFile, FileConfig, InMemoryStore, JsonlVoteAuditLog};
use lunch_presentation::{ChooseArgs, Cli, Command, ConsoleFormatter, OutputFormat};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting lunch-poll");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        warn!("{}", issue);
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Configuration has errors; fix them or run with --no-config");
    }

    let (params, _) = config.voting.to_voting_params();
    let data_path = cli.data.clone().unwrap_or_else(|| config.data.path.clone());

    match &cli.command {
        Command::ShowConfig => {
            show_config(&cli, &config, &params, &data_path);
            Ok(ExitCode::SUCCESS)
        }
        Command::Results { poll } => {
            list_results(cli.output, &data_path, PollId::new(*poll)).await
        }
        Command::Choose(args) => choose(cli.output, &config, params, &data_path, args).await,
    }
}

async fn choose(
    output: OutputFormat,
    config: &FileConfig,
    params: VotingParams,
    data_path: &Path,
    args: &ChooseArgs,
) -> Result<ExitCode> {
    let (mut data, store) = open_store(data_path)?;

    // === Dependency Injection ===
    let mut use_case =
        ChooseDishUseCase::new(store.clone(), store.clone(), store.clone(), store.clone())
            .with_params(params);

    if config.audit.enabled {
        match JsonlVoteAuditLog::new(&config.audit.path) {
            Some(audit_log) => {
                info!("Auditing votes to {}", audit_log.path().display());
                use_case = use_case.with_audit_log(Arc::new(audit_log));
            }
            None => warn!(
                "Vote audit log disabled: could not open {}",
                config.audit.path.display()
            ),
        }
    }

    let at = args.at.unwrap_or_else(|| Local::now().naive_local());
    let input = ChooseDishInput::new(
        EmployeeId::new(args.employee),
        PollId::new(args.poll),
        DishId::new(args.dish),
        at,
    );

    match use_case.execute(input).await {
        Ok(result) => {
            data.set_results(&store.results_snapshot()?);
            data.save(data_path)
                .with_context(|| format!("Vote recorded but not saved to {}", data_path.display()))?;

            let rendered = match output {
                OutputFormat::Text => ConsoleFormatter::format_result(&result),
                OutputFormat::Json => ConsoleFormatter::format_json(&result),
            };
            println!("{}", rendered);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            match output {
                OutputFormat::Text => eprintln!("{}", ConsoleFormatter::format_rejection(&e)),
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_error_json(e.code(), &e.to_string()))
                }
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn list_results(output: OutputFormat, data_path: &Path, poll_id: PollId) -> Result<ExitCode> {
    let (_, store) = open_store(data_path)?;
    let use_case = ListPollResultsUseCase::new(store.clone(), store);

    match use_case.execute(poll_id).await {
        Ok(results) => {
            let rendered = match output {
                OutputFormat::Text => ConsoleFormatter::format_results(poll_id, &results),
                OutputFormat::Json => ConsoleFormatter::format_json(&results),
            };
            println!("{}", rendered);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            match output {
                OutputFormat::Text => eprintln!("Error: {}", e),
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_error_json(e.code(), &e.to_string()))
                }
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn show_config(cli: &Cli, config: &FileConfig, params: &VotingParams, data_path: &Path) {
    let audit_path = config
        .audit
        .enabled
        .then(|| config.audit.path.display().to_string());

    match cli.output {
        OutputFormat::Text => {
            if cli.no_config {
                println!("Configuration files disabled (--no-config)");
            } else {
                println!("{}", ConfigLoader::describe_sources(cli.config.as_ref()));
            }
            println!();
            print!(
                "{}",
                ConsoleFormatter::format_settings(
                    params,
                    &data_path.display().to_string(),
                    audit_path.as_deref()
                )
            );
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "voting": params,
                "data_path": data_path,
                "audit_path": audit_path,
            });
            println!("{}", ConsoleFormatter::format_json(&value));
        }
    }
}

fn open_store(path: &Path) -> Result<(DataFile, Arc<InMemoryStore>)> {
    let data = if path.exists() {
        DataFile::load(path)
            .with_context(|| format!("Failed to load data file {}", path.display()))?
    } else {
        warn!("Data file {} not found, starting empty", path.display());
        DataFile::default()
    };

    let store = data
        .to_store()
        .with_context(|| format!("Invalid data file {}", path.display()))?;
    info!(
        "Loaded {} employees and {} polls from {}",
        store.employee_count(),
        store.poll_count(),
        path.display()
    );

    Ok((data, Arc::new(store)))
}
