//! gulp-targets CLI entry point
//!
//! Usage:
//!   gulp-targets mcp              Start MCP server over stdio
//!   gulp-targets check            Check whether the project has a gulpfile
//!   gulp-targets targets          List gulp tasks as build targets
//!   gulp-targets detect           Report how gulp would be found
//!   gulp-targets config           Show configuration

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gulp_targets::cli::{
    commands::{CheckArgs, DetectArgs, OutputFormat, TargetsArgs},
    run_mcp_server, Cli, Commands,
};
use gulp_targets::config::{find_config_files, load_config};
use gulp_targets::project::{expand_project_path, resolve_project_dir};
use gulp_targets::provider::{detect_gulp, BuildProvider, GulpBuilder};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gulp_targets={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Mcp => {
            run_mcp_server(config_path).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(args) => Ok(if check(args, config_path)? {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }),
        Commands::Targets(args) => {
            list_targets(args, config_path, cli.verbose).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Detect(args) => {
            detect(args, config_path)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config => {
            show_config(config_path)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Check eligibility; the caller turns the answer into the exit code
fn check(args: CheckArgs, config_path: Option<&str>) -> Result<bool> {
    let builder = GulpBuilder::with_config(load_config(config_path)?);
    let project_path = expand_project_path(args.project.as_deref())?;

    let eligible = builder.is_eligible(&project_path);
    if !args.quiet {
        println!("{}", eligible);
    }

    Ok(eligible)
}

/// List build targets for a project
async fn list_targets(args: TargetsArgs, config_path: Option<&str>, verbose: bool) -> Result<()> {
    let builder = GulpBuilder::with_config(load_config(config_path)?);
    let project_path = resolve_project_dir(args.project.as_deref())?;

    if !builder.is_eligible(&project_path) {
        anyhow::bail!("No gulpfile found in {}", project_path.display());
    }

    if verbose {
        eprintln!("{}: {}", "project".cyan(), project_path.display());
    }

    let targets = builder
        .settings(&project_path)
        .await
        .context("Failed to list gulp targets")?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&targets)?);
        }
        OutputFormat::Plain => {
            for target in &targets {
                println!("{}", target.name);
            }
        }
        OutputFormat::Table => {
            if targets.is_empty() {
                println!("No targets found.");
            } else {
                let max_name_width = targets.iter().map(|t| t.name.len()).max().unwrap_or(10);

                for target in &targets {
                    println!(
                        "  {:width$}  {}",
                        target.name.green(),
                        target.command_line().dimmed(),
                        width = max_name_width
                    );
                }
            }
        }
    }

    Ok(())
}

/// Report gulpfile, local gulp and global gulp
fn detect(args: DetectArgs, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let project_path = resolve_project_dir(args.project.as_deref())?;

    let detection = detect_gulp(&project_path, &config.gulp);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&detection)?);
        }
        OutputFormat::Plain => {
            println!("{}", detection.eligible);
        }
        OutputFormat::Table => {
            let none = || "None".yellow().to_string();

            println!("{}: {}", "Path".cyan(), project_path.display());
            println!();
            if detection.eligible {
                println!("{}: {}", "Eligible".green(), "yes");
            } else {
                println!("{}: {}", "Eligible".yellow(), "no");
            }
            println!(
                "{}: {}",
                "Gulpfile".cyan(),
                detection.gulpfile.clone().unwrap_or_else(none)
            );
            println!(
                "{}: {}",
                "Local gulp".cyan(),
                detection.local_gulp.clone().unwrap_or_else(none)
            );
            println!(
                "{}: {}",
                "Global gulp".cyan(),
                detection.global_gulp.clone().unwrap_or_else(none)
            );
        }
    }

    Ok(())
}

/// Show the resolved configuration as TOML
fn show_config(config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;

    let files = find_config_files();
    if files.is_empty() {
        eprintln!("{}", "# No config files found, showing defaults".dimmed());
    } else {
        for file in &files {
            eprintln!("{} {}", "# Loaded".dimmed(), file.display());
        }
    }

    print!(
        "{}",
        toml::to_string_pretty(&config).context("Failed to render configuration")?
    );

    Ok(())
}
