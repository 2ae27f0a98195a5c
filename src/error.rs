use std::path::PathBuf;

use crate::source::Stage;

pub const UNKNOWN_COMPILE_ERROR: &str = "Unknown shader compile error";
pub const UNKNOWN_LINK_ERROR: &str = "Unknown program link error";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SourceRead,
    StageCompile,
    ProgramLink,
}

/// Failure of loading a shader program. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read shader source {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to compile {stage} shader: {log}")]
    StageCompile { stage: Stage, log: String },
    #[error("failed to link program: {log}")]
    ProgramLink { log: String },
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::SourceRead { .. } => ErrorKind::SourceRead,
            LoadError::StageCompile { .. } => ErrorKind::StageCompile,
            LoadError::ProgramLink { .. } => ErrorKind::ProgramLink,
        }
    }

    /// Diagnostic text reported by the driver for compile and link failures.
    pub fn info_log(&self) -> Option<&str> {
        match self {
            LoadError::SourceRead { .. } => None,
            LoadError::StageCompile { log, .. } | LoadError::ProgramLink { log } => Some(log.as_str()),
        }
    }

    pub(crate) fn compile(stage: Stage, log: String) -> Self {
        LoadError::StageCompile {
            stage,
            log: non_empty_or(log, UNKNOWN_COMPILE_ERROR),
        }
    }

    pub(crate) fn link(log: String) -> Self {
        LoadError::ProgramLink {
            log: non_empty_or(log, UNKNOWN_LINK_ERROR),
        }
    }
}

fn non_empty_or(log: String, fallback: &str) -> String {
    if log.is_empty() {
        fallback.to_string()
    } else {
        log
    }
}
