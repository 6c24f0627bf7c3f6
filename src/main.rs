//! writedisk CLI entry point

use anyhow::{Context, Result};
use std::time::Instant;
use writedisk::config::{cli::Cli, cli_convert, validator};
use writedisk::output::{json, text};
use writedisk::Coordinator;

fn main() -> Result<()> {
    let parse_start = Instant::now();
    let cli = Cli::parse_args();
    cli.validate()?;

    let config = cli_convert::build_config(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;
    if cli.debug {
        eprintln!(
            "DEBUG TIMING: Config build: {:.3}s",
            parse_start.elapsed().as_secs_f64()
        );
    }

    println!("{}", text::format_banner(&config));

    if config.logging || cli.dry_run {
        text::print_configuration(&config);
    }

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let coordinator = Coordinator::new(config);
    if cli.debug {
        eprintln!("DEBUG: run: {}", coordinator.config());
        eprintln!("DEBUG: file base token: {}", coordinator.namer().base());
    }

    let result = coordinator
        .run()
        .with_context(|| format!("Run aborted for {}", coordinator.config().path.display()))?;

    text::print_results(&result);

    if let Some(ref path) = cli.json_output {
        let output = json::build_run_output(coordinator.config(), &result);
        json::write_json_output(path, &output, true)?;
        println!("Results written to {}", path.display());
    }

    Ok(())
}
