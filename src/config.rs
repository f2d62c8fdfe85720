use anyhow::{Result, bail};
use std::env;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::locate::{DependencyPaths, search_lib_dir};

/// The two external tools a scan needs, fully resolved. Built once at
/// startup and handed to the orchestrator; nothing else reads the
/// environment afterwards.
#[derive(Debug, Clone)]
pub struct Dependencies {
    pub vineflower: PathBuf,
    pub trufflehog: PathBuf,
}

/// Resolve both dependencies. Per dependency the precedence is CLI flag,
/// then environment variable (`VINEFLOWER_JAR` / `TRUFFLEHOG_BIN`), then
/// discovery in the lib directory. Discovery is skipped entirely when both
/// are already explicit.
pub fn resolve_dependencies(cli: &Cli) -> Result<Dependencies> {
    let explicit = DependencyPaths {
        vineflower: cli.vineflower.clone().or_else(|| env_path("VINEFLOWER_JAR")),
        trufflehog: cli.trufflehog.clone().or_else(|| env_path("TRUFFLEHOG_BIN")),
    };

    let (paths, searched) = if explicit.is_complete() {
        (explicit, None)
    } else {
        let lib_dir = resolve_lib_dir(cli)?;
        let merged = search_lib_dir(&lib_dir)?.merge(explicit);
        (merged, Some(lib_dir))
    };

    match (paths.vineflower, paths.trufflehog) {
        (Some(vineflower), Some(trufflehog)) => Ok(Dependencies {
            vineflower,
            trufflehog,
        }),
        (vineflower, trufflehog) => {
            let mut missing = Vec::new();
            if vineflower.is_none() {
                missing.push("vineflower (decompiler jar)");
            }
            if trufflehog.is_none() {
                missing.push("trufflehog (scanner binary)");
            }
            let searched = searched
                .map(|dir| format!("; searched {}", dir.display()))
                .unwrap_or_default();
            bail!(
                "Required dependencies not found: {}{searched}",
                missing.join(", ")
            )
        }
    }
}

/// The directory searched for bundled dependencies: `--lib-dir`, else
/// `JAR_SNIFFER_LIB`, else a `lib` directory next to the executable, else a
/// per-user `jar-sniffer/lib` data directory.
pub fn resolve_lib_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = cli.lib_dir.clone() {
        return Ok(dir);
    }

    if let Some(dir) = env::var_os("JAR_SNIFFER_LIB") {
        return Ok(PathBuf::from(dir));
    }

    if let Some(dir) = exe_adjacent_lib()
        && dir.is_dir()
    {
        return Ok(dir);
    }

    Ok(sniffer_home()?.join("lib"))
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).map(PathBuf::from)
}

fn exe_adjacent_lib() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    Some(exe.parent()?.join("lib"))
}

fn sniffer_home() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow::anyhow!("Failed to resolve data directory"))?;
    Ok(base.join("jar-sniffer"))
}
