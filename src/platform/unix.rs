use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use tracing::{debug, info};

use super::{OsKind, PathResolver, Platform, PlatformError};

/// Linux, macOS and the other Unix-likes.
pub struct UnixPlatform {
    os: OsKind,
}

impl UnixPlatform {
    pub fn new(os: OsKind) -> Self {
        UnixPlatform { os }
    }

    fn opener(&self) -> &'static str {
        if self.os.is_macos() { "open" } else { "xdg-open" }
    }
}

impl Platform for UnixPlatform {
    fn os(&self) -> OsKind {
        self.os
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        PathResolver::from_env().resolve(name)
    }

    fn python3_path(&self) -> Option<PathBuf> {
        self.find_executable("python3")
    }

    fn home_path(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn open_folder(&self, path: &Path) -> Result<(), PlatformError> {
        let program = self.opener();
        debug!(program, path = %path.display(), "opening folder");
        Command::new(program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|source| PlatformError::Launch {
                program: program.to_string(),
                source,
            })
    }

    fn terminate(&self, pid: u32) -> Result<(), PlatformError> {
        // kill(0, ..) would signal our whole process group
        let raw = match i32::try_from(pid) {
            Ok(raw) if raw > 0 => raw,
            _ => {
                return Err(PlatformError::Terminate {
                    pid,
                    source: io::Error::new(io::ErrorKind::InvalidInput, "pid out of range"),
                })
            }
        };
        kill(Pid::from_raw(raw), Signal::SIGTERM).map_err(|errno| PlatformError::Terminate {
            pid,
            source: io::Error::from(errno),
        })?;
        info!(pid, "sent SIGTERM");
        Ok(())
    }
}
