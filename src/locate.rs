use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Partial result of dependency discovery. Either entry may still be missing
/// after a search; `config` merges explicit overrides on top.
#[derive(Debug, Clone, Default)]
pub struct DependencyPaths {
    pub vineflower: Option<PathBuf>,
    pub trufflehog: Option<PathBuf>,
}

impl DependencyPaths {
    pub fn is_complete(&self) -> bool {
        self.vineflower.is_some() && self.trufflehog.is_some()
    }

    /// Merge with `preferred`, whose entries win over `self`'s.
    pub fn merge(self, preferred: DependencyPaths) -> DependencyPaths {
        DependencyPaths {
            vineflower: preferred.vineflower.or(self.vineflower),
            trufflehog: preferred.trufflehog.or(self.trufflehog),
        }
    }
}

/// Search a directory for the bundled dependencies: a Vineflower decompiler
/// JAR and a Trufflehog scanner executable. Only regular files directly
/// inside the directory are considered. Entries are matched in lexicographic
/// file-name order; the last match for a role wins.
pub fn search_lib_dir(lib_dir: &Path) -> Result<DependencyPaths> {
    if !lib_dir.is_dir() {
        bail!("Dependencies directory does not exist: {}", lib_dir.display());
    }

    let mut files: Vec<PathBuf> = fs::read_dir(lib_dir)
        .with_context(|| {
            format!(
                "Failed to read dependencies directory: {}",
                lib_dir.display()
            )
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    let mut found = DependencyPaths::default();
    for path in files {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let name = name.to_ascii_lowercase();

        if name.contains("vineflower") && name.ends_with(".jar") {
            found.vineflower = Some(path);
        } else if name.contains("trufflehog") && is_executable(&path) {
            found.trufflehog = Some(path);
        }
    }

    Ok(found)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

// Windows has no execute bit; any matching file qualifies.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
