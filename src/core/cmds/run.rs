use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use log::info;

use crate::core::cli::RunArgs;
use crate::core::report::{RunReport, print_summary};
use crate::core::runner::{RunnerOptions, SuiteRunner};
use crate::core::suite::builtin_suite;
use crate::types::config::config;
use crate::types::{AppError, AppResult};

fn resolve_options(args: &RunArgs) -> RunnerOptions {
    let cfg = config();
    let tool = cfg.tool();

    RunnerOptions {
        projdir: args
            .projdir
            .clone()
            .unwrap_or_else(|| cfg.projdir().to_string()),
        list_dir: cfg.list_dir().to_string(),
        tool_cmd: args
            .tool_cmd
            .clone()
            .unwrap_or_else(|| tool.cmd().to_string()),
        timeout_secs: args.tool_timeout.unwrap_or_else(|| tool.timeout()),
        echo_output: !args.quiet,
    }
}

pub async fn execute_run(args: RunArgs, running: Arc<AtomicBool>) -> AppResult<()> {
    let options = resolve_options(&args);
    if options.tool_cmd.trim().is_empty() {
        return Err(AppError::Custom(
            "No checker command configured".to_string(),
        ));
    }
    let targets = builtin_suite();

    info!(
        "Running {} benchmark targets under {}",
        targets.len(),
        options.projdir
    );

    let runner = SuiteRunner::new(options);
    let started = Instant::now();
    let results = runner.run_suite(&targets, running).await?;
    let total_elapsed_secs = started.elapsed().as_secs_f64();

    match args.format.as_str() {
        "json" => {
            let report = RunReport::new(results, total_elapsed_secs);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            print_summary(&results, total_elapsed_secs);
        }
    }

    Ok(())
}
