use crate::errors::ShellResult;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Snapshot of the environment variables the shell reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub search_path: Vec<PathBuf>,
    pub home: Option<PathBuf>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self::from_vars(env::var_os("PATH"), env::var_os("HOME"))
    }

    /// Build from raw `PATH` and `HOME` values. Empty `PATH` entries are skipped.
    pub fn from_vars(path: Option<OsString>, home: Option<OsString>) -> Self {
        let search_path = path
            .map(|p| {
                env::split_paths(&p)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            search_path,
            home: home.filter(|h| !h.is_empty()).map(PathBuf::from),
        }
    }
}

/// Process-lifetime state owned by the dispatcher.
///
/// The working directory lives here instead of in the process: `cd` updates
/// it, and every spawn, redirection target and relative lookup reads it.
#[derive(Debug, Clone)]
pub struct Session {
    cwd: PathBuf,
    env: Environment,
}

impl Session {
    pub fn new(cwd: PathBuf, env: Environment) -> Self {
        Self { cwd, env }
    }

    pub fn from_process() -> ShellResult<Self> {
        Ok(Self::new(env::current_dir()?, Environment::from_process()))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub(crate) fn set_cwd(&mut self, cwd: PathBuf) {
        self.cwd = cwd;
    }

    /// Resolve a possibly relative path against the working directory
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.cwd.join(path)
    }
}
