use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths will be interpreted relative to this directory.
    /// All child processes will be run in this directory.
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    /// Logging level (overrides env/config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in benchmark suite against the checker
    Run(RunArgs),

    /// Print various information about the suite and configuration
    Print {
        #[command(subcommand)]
        command: PrintArgs,
    },
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Command prefix used to invoke the checker.
    /// Replaces config [tool].cmd if provided.
    #[arg(long = "tool.cmd")]
    pub tool_cmd: Option<String>,

    /// Advisory timeout in seconds forwarded to the checker via --time.
    /// The runner itself never kills a child process.
    /// Replaces config [tool].timeout if provided.
    #[arg(long = "tool.timeout")]
    pub tool_timeout: Option<u32>,

    /// Directory holding the benchmark sources.
    /// Replaces config projdir if provided.
    #[arg(long)]
    pub projdir: Option<String>,

    /// Suppress the per-run echo of each checker's raw output
    #[arg(long)]
    pub quiet: bool,

    /// Output format for the final summary: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print command
#[derive(Subcommand, Debug)]
pub enum PrintArgs {
    /// List the built-in benchmark suite and per-property counts
    Suite(PrintSuiteArgs),

    /// Print the effective global configuration
    Config(PrintConfigArgs),
}

/// Arguments for the print suite subcommand
#[derive(Parser, Debug)]
pub struct PrintSuiteArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print config subcommand
#[derive(Parser, Debug)]
pub struct PrintConfigArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}
