//! Platform-specific behavior behind a single capability trait.
//!
//! Callers hold a `Box<dyn Platform>` obtained from [`current`] and never
//! branch on the target OS themselves.

mod path_resolver;
#[cfg(unix)]
mod unix;
mod windows;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub use path_resolver::PathResolver;
#[cfg(unix)]
pub use unix::UnixPlatform;
pub use windows::WindowsPlatform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsKind {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl OsKind {
    pub fn detect() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "linux" => OsKind::Linux,
            "macos" => OsKind::MacOs,
            "windows" => OsKind::Windows,
            _ => OsKind::Other,
        }
    }

    pub fn is_linux(self) -> bool {
        self == OsKind::Linux
    }

    pub fn is_macos(self) -> bool {
        self == OsKind::MacOs
    }

    pub fn is_windows(self) -> bool {
        self == OsKind::Windows
    }

    pub fn is_not_windows(self) -> bool {
        !self.is_windows()
    }

    pub fn name(self) -> &'static str {
        match self {
            OsKind::Linux => "linux",
            OsKind::MacOs => "macos",
            OsKind::Windows => "windows",
            OsKind::Other => "other",
        }
    }
}

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Failed to find executable \"{0}\"")]
    ExecutableNotFound(String),
    #[error("failed to terminate process {pid}: {source}")]
    Terminate {
        pid: u32,
        #[source]
        source: io::Error,
    },
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("operation not supported on {0}")]
    Unsupported(&'static str),
}

pub trait Platform: Send + Sync {
    fn os(&self) -> OsKind;

    fn is_32bit_windows(&self) -> bool {
        false
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf>;

    fn python3_path(&self) -> Option<PathBuf>;

    /// Default location offered to the user for saving files.
    fn home_path(&self) -> Option<PathBuf>;

    fn open_folder(&self, path: &Path) -> Result<(), PlatformError>;

    /// Asks the process to stop. Returns once the request is sent.
    fn terminate(&self, pid: u32) -> Result<(), PlatformError>;

    fn require_executable(&self, name: &str) -> Result<PathBuf, PlatformError> {
        self.find_executable(name)
            .ok_or_else(|| PlatformError::ExecutableNotFound(name.to_string()))
    }
}

pub fn is_relative_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_relative()
}

/// Picks the implementation matching the running OS.
pub fn current() -> Box<dyn Platform> {
    select(OsKind::detect())
}

fn select(os: OsKind) -> Box<dyn Platform> {
    debug!(os = os.name(), "selecting platform");
    match os {
        OsKind::Windows => Box::new(WindowsPlatform::new()),
        #[cfg(unix)]
        _ => Box::new(UnixPlatform::new(os)),
        #[cfg(not(unix))]
        _ => Box::new(WindowsPlatform::new()),
    }
}
