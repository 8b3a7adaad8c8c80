use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use super::{OsKind, PathResolver, Platform, PlatformError};

pub struct WindowsPlatform {
    arch: &'static str,
}

impl WindowsPlatform {
    pub fn new() -> Self {
        Self::with_arch(std::env::consts::ARCH)
    }

    pub fn with_arch(arch: &'static str) -> Self {
        WindowsPlatform { arch }
    }

    fn spawn_detached(&self, program: &str, args: &[&str]) -> std::io::Result<()> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

impl Default for WindowsPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for WindowsPlatform {
    fn os(&self) -> OsKind {
        OsKind::Windows
    }

    fn is_32bit_windows(&self) -> bool {
        self.arch != "x86_64"
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        find_exe(&PathResolver::from_env(), name)
    }

    fn python3_path(&self) -> Option<PathBuf> {
        python3_with(&PathResolver::from_env())
    }

    fn home_path(&self) -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join("Desktop"))
    }

    fn open_folder(&self, path: &Path) -> Result<(), PlatformError> {
        let native = path.to_string_lossy().replace('/', "\\");
        debug!(path = %native, "opening folder with explorer");
        self.spawn_detached("explorer.exe", &[&native])
            .map_err(|source| PlatformError::Launch {
                program: "explorer.exe".to_string(),
                source,
            })
    }

    fn terminate(&self, pid: u32) -> Result<(), PlatformError> {
        if pid == 0 {
            return Err(PlatformError::Terminate {
                pid,
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "pid out of range"),
            });
        }
        let pid_arg = pid.to_string();
        self.spawn_detached("taskkill", &["/F", "/PID", &pid_arg])
            .map_err(|source| PlatformError::Terminate { pid, source })?;
        info!(pid, "requested taskkill");
        Ok(())
    }
}

// Bare names try `<name>.exe` first.
fn find_exe(resolver: &PathResolver, name: &str) -> Option<PathBuf> {
    if name.to_ascii_lowercase().ends_with(".exe") {
        return resolver.resolve(name);
    }
    resolver
        .resolve(&format!("{}.exe", name))
        .or_else(|| resolver.resolve(name))
}

fn python3_with(resolver: &PathResolver) -> Option<PathBuf> {
    find_exe(resolver, "python3.exe").or_else(|| find_exe(resolver, "python.exe"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_find_exe_prefers_exe_suffix() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("yt-dlp")).unwrap();
        File::create(dir.path().join("yt-dlp.exe")).unwrap();
        File::create(dir.path().join("ffmpeg")).unwrap();
        let resolver = PathResolver::with_search_path(dir.path());

        assert_eq!(find_exe(&resolver, "yt-dlp"), Some(dir.path().join("yt-dlp.exe")));
        assert_eq!(find_exe(&resolver, "ffmpeg"), Some(dir.path().join("ffmpeg")));
        assert_eq!(find_exe(&resolver, "yt-dlp.exe"), Some(dir.path().join("yt-dlp.exe")));
        assert_eq!(find_exe(&resolver, "ffmpeg.exe"), None);
        assert_eq!(find_exe(&resolver, "aria2c"), None);
    }

    #[test]
    fn test_python3_falls_back_to_python() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = PathResolver::with_search_path(dir.path());
        assert_eq!(python3_with(&resolver), None);

        File::create(dir.path().join("python.exe")).unwrap();
        assert_eq!(python3_with(&resolver), Some(dir.path().join("python.exe")));

        File::create(dir.path().join("python3.exe")).unwrap();
        assert_eq!(python3_with(&resolver), Some(dir.path().join("python3.exe")));
    }

    #[test]
    fn test_terminate_rejects_pid_zero() {
        let err = WindowsPlatform::new().terminate(0).unwrap_err();
        assert!(matches!(err, PlatformError::Terminate { pid: 0, .. }));
    }

    #[test]
    fn test_32bit_detection_follows_arch() {
        assert!(!WindowsPlatform::with_arch("x86_64").is_32bit_windows());
        assert!(WindowsPlatform::with_arch("x86").is_32bit_windows());
        assert!(WindowsPlatform::with_arch("aarch64").is_32bit_windows());
    }

    #[test]
    fn test_reports_windows() {
        let platform = WindowsPlatform::new();
        assert!(platform.os().is_windows());
    }

    #[test]
    fn test_home_path_is_desktop() {
        if let Some(path) = WindowsPlatform::new().home_path() {
            assert!(path.ends_with("Desktop"));
        }
    }
}
