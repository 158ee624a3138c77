use console::style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

fn colored_level(level: Level) -> String {
    let styled = match level {
        Level::Error => style(level).red().bold(),
        Level::Warn => style(level).yellow(),
        Level::Info => style(level).green(),
        Level::Debug => style(level).blue(),
        Level::Trace => style(level).magenta(),
    };
    styled.to_string()
}

/// Install the fern dispatcher. Level and color come from the resolved
/// configuration, so call this after `init_with_overrides`.
pub fn init_logging() {
    let colors = colors_enabled();
    let result = fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = if colors {
                colored_level(record.level())
            } else {
                record.level().to_string()
            };
            out.finish(format_args!("[{level:<5}] {message}"))
        })
        .level(level_filter(config().log().level()))
        .chain(std::io::stdout())
        .apply();

    // A second init (e.g. in tests) keeps the first dispatcher
    let _ = result;
}
