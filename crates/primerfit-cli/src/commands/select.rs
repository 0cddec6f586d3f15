use crate::cli::SelectArgs;
use crate::config;
use crate::error::Result;
use crate::input;
use crate::report::ConsoleReporter;
use crate::utils::progress::CliProgressHandler;
use primerfit::engine::progress::ProgressReporter;
use primerfit::workflows;
use std::io;
use tracing::{info, warn};

pub fn run(args: SelectArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = config::build_config(&args)?;

    let requests = input::collect_requests(&args)?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let progress = ProgressReporter::with_callback(progress_handler.get_callback());
    let mut reporter = ConsoleReporter::new(io::stdout(), app_config.trace_dir.clone());

    info!("Invoking the primer selection workflow...");
    let results = workflows::select::select_primers(
        &requests,
        &app_config.core_config,
        &mut reporter,
        &progress,
    )?;
    reporter.finish()?;

    info!("Workflow finished with {} primer(s).", results.len());
    let empty = results.iter().filter(|r| r.is_empty()).count();
    if empty > 0 {
        warn!("{} input(s) produced an empty primer.", empty);
    }
    if let Some(dir) = &app_config.trace_dir {
        println!("Loss curves written to: {}", dir.display());
    }

    Ok(())
}
