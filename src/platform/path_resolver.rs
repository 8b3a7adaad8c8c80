use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

pub struct PathResolver {
    search_path: Option<std::ffi::OsString>,
}

impl PathResolver {
    pub fn from_env() -> Self {
        PathResolver {
            search_path: env::var_os("PATH"),
        }
    }

    pub fn with_search_path<S: AsRef<OsStr>>(search_path: S) -> Self {
        PathResolver {
            search_path: Some(search_path.as_ref().to_os_string()),
        }
    }

    pub fn resolve(&self, command: &str) -> Option<PathBuf> {
        if command.contains('/') || command.contains(std::path::MAIN_SEPARATOR) {
            let path = Path::new(command);
            return is_file(path).then(|| path.to_path_buf());
        }

        let paths = self.search_path.as_ref()?;
        env::split_paths(paths)
            .map(|dir| dir.join(command))
            .find(|full_path| is_file(full_path))
    }
}

fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
