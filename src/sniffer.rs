use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::Dependencies;
use crate::probe::count_class_entries;
use crate::trufflehog::Trufflehog;
use crate::vineflower::Vineflower;

/// Decompile-then-scan orchestrator. Holds the two resolved tools and runs
/// the strictly sequential pipeline: probe the archive, decompile it into a
/// per-archive working directory, scan that directory, deliver the result.
#[derive(Debug, Clone)]
pub struct Sniffer {
    vineflower: Vineflower,
    trufflehog: Trufflehog,
}

impl Sniffer {
    pub fn new(deps: Dependencies) -> Self {
        Self {
            vineflower: Vineflower::new(deps.vineflower),
            trufflehog: Trufflehog::new(deps.trufflehog),
        }
    }

    pub fn scan(&self, jar_path: &Path, output_file: Option<&Path>, as_json: bool) -> Result<()> {
        let classes = count_class_entries(jar_path)?;
        eprintln!(
            "[jar-sniffer] {} contains {classes} class file(s)",
            jar_path.display()
        );

        let target_dir = decompile_target_dir(jar_path)?;
        self.vineflower.decompile(jar_path, &target_dir)?;

        if count_recovered_sources(&target_dir) == 0 {
            eprintln!(
                "[jar-sniffer] Warning: no sources recovered in {}",
                target_dir.display()
            );
        }

        let report = self.trufflehog.scan_filesystem(&target_dir, as_json)?;
        write_scan_output(&report, output_file)
    }
}

/// Working directory for one archive: `<cwd>/.decompiled/<stem>/`, the stem
/// being the archive file name with its final extension stripped.
pub fn decompile_target_dir(jar_path: &Path) -> Result<PathBuf> {
    let stem = jar_path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .with_context(|| {
            format!(
                "Cannot derive a working directory from {}",
                jar_path.display()
            )
        })?;
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    Ok(cwd.join(".decompiled").join(stem))
}

fn count_recovered_sources(target_dir: &Path) -> usize {
    WalkBuilder::new(target_dir)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .count()
}

/// Deliver the captured scanner output: verbatim to the output file when one
/// was requested, to stdout otherwise. Progress stays on stderr so a
/// redirected stdout holds exactly the scanner payload.
pub fn write_scan_output(report: &str, output_file: Option<&Path>) -> Result<()> {
    let Some(path) = output_file else {
        print!("{report}");
        if !report.ends_with('\n') {
            println!();
        }
        return Ok(());
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }
    std::fs::write(path, report)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    eprintln!("[jar-sniffer] Output in {}", path.display());
    Ok(())
}
