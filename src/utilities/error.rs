use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },
    #[error("invalid config file {}: {source}", .path.display())]
    ConfigParse { path: PathBuf, source: serde_json::Error },
    #[error("failed to read script {}: {source}", .path.display())]
    ScriptRead { path: PathBuf, source: io::Error },
    #[error("invalid script {}: {source}", .path.display())]
    ScriptParse { path: PathBuf, source: serde_json::Error },
    #[error("unrecognised command {0:?}")]
    Command(String),
    #[error("failed to write trace {}: {source}", .path.display())]
    TraceWrite { path: PathBuf, source: io::Error },
    #[error("failed to encode trace: {0}")]
    TraceEncode(#[from] serde_json::Error),
    #[error("terminal output failed: {0}")]
    Terminal(#[source] io::Error),
    #[error("failed to spawn {name} thread: {source}")]
    ThreadSpawn { name: &'static str, source: io::Error },
    #[error("{0} thread panicked")]
    ThreadPanicked(&'static str),
}
