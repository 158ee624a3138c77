use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "refbench.toml";

const DEFAULT_PROJDIR: &str = "../liquidhaskell-study/wi15/smallcheck/benchmarks/";
const DEFAULT_TOOL_CMD: &str = "cabal run G2 --";
const DEFAULT_TIMEOUT: u32 = 300;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ToolConfig {
    pub cmd: Option<String>,
    pub timeout: Option<u32>,
}

impl ToolConfig {
    /// Command prefix the benchmark arguments are appended to
    pub fn cmd(&self) -> &str {
        self.cmd.as_deref().unwrap_or(DEFAULT_TOOL_CMD)
    }

    /// Advisory timeout in seconds, forwarded to the checker via `--time`.
    /// The runner never enforces it.
    pub fn timeout(&self) -> u32 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            cmd: Some(self.cmd().to_string()),
            timeout: Some(self.timeout()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    // Top-level fields
    pub projdir: Option<String>,
    pub list_dir: Option<String>,

    // Nested sections
    pub log: Option<LogConfig>,
    pub tool: Option<ToolConfig>,
}

impl Config {
    /// Directory holding the benchmark sources
    pub fn projdir(&self) -> &str {
        self.projdir.as_deref().unwrap_or(DEFAULT_PROJDIR)
    }

    /// Optional sub-listing directory joined between projdir and file name
    pub fn list_dir(&self) -> &str {
        self.list_dir.as_deref().unwrap_or("")
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn tool(&self) -> ToolConfig {
        self.tool.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            projdir: Some(self.projdir().to_string()),
            list_dir: Some(self.list_dir().to_string()),
            log: Some(self.log().to_effective()),
            tool: Some(self.tool().to_effective()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub projdir: Option<String>,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
    pub tool_cmd: Option<String>,
    pub tool_timeout: Option<u32>,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        // Apply nearest config file found by walking up from cwd
        if let Some(path) = find_nearest_config_file() {
            if let Some(file_cfg) = read_config_file(&path) {
                apply_file_config(&mut cfg, &file_cfg);
            }
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) {
    let mut cfg = Config::default();

    // 1) Config file: walk up from cwd and use the first config file found
    if let Some(path) = find_nearest_config_file() {
        if let Some(file_cfg) = read_config_file(&path) {
            apply_file_config(&mut cfg, &file_cfg);
        }
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
}

fn read_config_file(path: &Path) -> Option<Config> {
    match fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<Config>(&contents).ok(),
        Err(_) => None,
    }
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    // Merge top-level fields
    if file.projdir.is_some() {
        cfg.projdir = file.projdir.clone();
    }
    if file.list_dir.is_some() {
        cfg.list_dir = file.list_dir.clone();
    }

    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    // Merge tool section
    if let Some(file_tool) = &file.tool {
        let mut tool = cfg.tool.clone().unwrap_or_default();
        if file_tool.cmd.is_some() {
            tool.cmd = file_tool.cmd.clone();
        }
        if file_tool.timeout.is_some() {
            tool.timeout = file_tool.timeout;
        }
        cfg.tool = Some(tool);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    if let Some(projdir) = &overrides.projdir {
        if !projdir.trim().is_empty() {
            cfg.projdir = Some(projdir.clone());
        }
    }

    // Log overrides
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level {
        if !level.trim().is_empty() {
            log.level = Some(level.trim().to_string());
        }
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }

    // Tool overrides
    let mut tool = cfg.tool.clone().unwrap_or_default();
    if let Some(cmd) = &overrides.tool_cmd {
        if !cmd.trim().is_empty() {
            tool.cmd = Some(cmd.clone());
        }
    }
    if overrides.tool_timeout.is_some() {
        tool.timeout = overrides.tool_timeout;
    }
    if overrides.tool_cmd.is_some() || overrides.tool_timeout.is_some() {
        cfg.tool = Some(tool);
    }
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}
