use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::utilities::error::Error;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "elevator", about = "Cycle-stepped single-car elevator controller")]
pub struct Args {
    /// JSON configuration file
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,
    /// JSON scenario to replay, one entry per cycle. Reads commands from stdin when absent.
    #[arg(long)]
    pub script: Option<PathBuf>,
    #[arg(long)]
    pub period_ms: Option<u64>,
    #[arg(long)]
    pub settle_cycles: Option<u32>,
    /// Write every cycle and a summary to this JSON file
    #[arg(long)]
    pub trace: Option<PathBuf>,
    #[arg(long)]
    pub no_status: bool,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub cycle_period_ms: u64,
    pub settle_cycles: u32,
    pub show_status: bool,
    pub trace_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            cycle_period_ms: 500,
            settle_cycles: 20,
            show_status: true,
            trace_path: None,
            log_filter: String::from("info"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub cycle_period: Duration,
    pub settle_cycles: u32,
    pub show_status: bool,
    pub script: Option<PathBuf>,
    pub trace_path: Option<PathBuf>,
    pub log_filter: String,
    /// `None` when no configuration file was found and defaults are in use.
    pub loaded_from: Option<PathBuf>,
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, Error> {
        match read_config_file(&args.config)? {
            Some(config_file) => Ok(Config {
                loaded_from: Some(args.config.clone()),
                ..Config::merge(config_file, args)
            }),
            None => Ok(Config::merge(ConfigFile::default(), args)),
        }
    }

    /// Command line flags take precedence over the file.
    pub fn merge(config_file: ConfigFile, args: &Args) -> Self {
        Config {
            cycle_period: Duration::from_millis(args.period_ms.unwrap_or(config_file.cycle_period_ms)),
            settle_cycles: args.settle_cycles.unwrap_or(config_file.settle_cycles),
            show_status: config_file.show_status && !args.no_status,
            script: args.script.clone(),
            trace_path: args.trace.clone().or(config_file.trace_path),
            log_filter: config_file.log_filter,
            loaded_from: None,
        }
    }
}

fn read_config_file(path: &Path) -> Result<Option<ConfigFile>, Error> {
    let config_contents = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(Error::ConfigRead { path: path.to_path_buf(), source });
        }
    };
    serde_json::from_str(&config_contents)
        .map(Some)
        .map_err(|source| Error::ConfigParse { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(config: PathBuf) -> Args {
        Args { config, ..Args::default() }
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&args_for(dir.path().join("absent.json"))).unwrap();
        assert_eq!(config.cycle_period, Duration::from_millis(500));
        assert_eq!(config.settle_cycles, 20);
        assert!(config.show_status);
        assert_eq!(config.trace_path, None);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.loaded_from, None);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "cycle_period_ms": 50, "show_status": false }"#).unwrap();

        let config = Config::load(&args_for(path.clone())).unwrap();
        assert_eq!(config.loaded_from, Some(path));
        assert_eq!(config.cycle_period, Duration::from_millis(50));
        assert!(!config.show_status);
        assert_eq!(config.settle_cycles, 20);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ cycle_period_ms: ").unwrap();
        assert!(matches!(Config::load(&args_for(path)), Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn flags_override_file() {
        let file = ConfigFile {
            cycle_period_ms: 250,
            settle_cycles: 3,
            show_status: true,
            trace_path: Some(PathBuf::from("from_file.json")),
            log_filter: String::from("debug"),
        };
        let args = Args {
            period_ms: Some(0),
            settle_cycles: Some(9),
            trace: Some(PathBuf::from("from_flag.json")),
            no_status: true,
            ..Args::default()
        };
        let config = Config::merge(file, &args);
        assert_eq!(config.cycle_period, Duration::ZERO);
        assert_eq!(config.settle_cycles, 9);
        assert!(!config.show_status);
        assert_eq!(config.trace_path, Some(PathBuf::from("from_flag.json")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn parses_command_line() {
        let args = Args::parse_from(["elevator", "--script", "up.json", "--period-ms", "10", "--no-status"]);
        assert_eq!(args.script, Some(PathBuf::from("up.json")));
        assert_eq!(args.period_ms, Some(10));
        assert!(args.no_status);
        assert_eq!(args.config, PathBuf::from("config.json"));
    }
}
