use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::process::render_command;

#[derive(Debug, Clone)]
pub struct Trufflehog {
    bin: PathBuf,
}

impl Trufflehog {
    pub fn new(bin: PathBuf) -> Self {
        Self { bin }
    }

    /// Run a filesystem scan over `dir` and capture the scanner's stdout in
    /// full. The scanner's stderr (its progress log) streams straight to the
    /// user; stdout is the result payload and stays untouched.
    pub fn scan_filesystem(&self, dir: &Path, as_json: bool) -> Result<String> {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("filesystem").arg(dir).arg("--no-update");
        if as_json {
            cmd.arg("--json");
        }

        eprintln!();
        eprintln!("[jar-sniffer] Scanning secrets in {}", dir.display());
        eprintln!("  > {}", render_command(&cmd));

        let output = cmd
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("Failed to execute trufflehog: {}", self.bin.display()))?;

        if !output.status.success() {
            bail!("Trufflehog scan failed (exit: {})", output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
