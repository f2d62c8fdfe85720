use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::process::{java_command, render_command};

#[derive(Debug, Clone)]
pub struct Vineflower {
    jar: PathBuf,
}

impl Vineflower {
    pub fn new(jar: PathBuf) -> Self {
        Self { jar }
    }

    /// Decompile `jar_path` into `target_dir`. Vineflower's own log is
    /// capped at warn level and streams straight to the user; a non-success
    /// exit aborts the run before any scan happens.
    pub fn decompile(&self, jar_path: &Path, target_dir: &Path) -> Result<()> {
        let mut cmd = java_command();
        cmd.arg("-jar")
            .arg(&self.jar)
            .arg("--folder")
            .arg("--log-level=warn")
            .arg(jar_path)
            .arg(target_dir);

        eprintln!();
        eprintln!("[jar-sniffer] Decompiling JAR {}", jar_path.display());
        eprintln!("  > {}", render_command(&cmd));

        let status = cmd
            .status()
            .context("Failed to execute java (ensure JRE/JDK is installed)")?;

        if !status.success() {
            bail!("Vineflower decompilation failed (exit: {status})");
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::process::java_env_lock;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "jar_sniffer_vineflower_test_{}_{}_{}",
            std::process::id(),
            nanos,
            name
        ))
    }

    fn write_file(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    fn make_executable(path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
        Ok(())
    }

    fn with_fake_java<F>(script: &str, base: &Path, run: F) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        let fake_java = base.join("bin").join("java");
        write_file(&fake_java, script)?;
        make_executable(&fake_java)?;

        let _guard = java_env_lock().lock().expect("java env lock poisoned");
        // SAFETY: guarded by java_env_lock and removed before returning.
        unsafe { std::env::set_var("JAR_SNIFFER_JAVA", &fake_java) };
        let result = run();
        // SAFETY: guarded by java_env_lock.
        unsafe { std::env::remove_var("JAR_SNIFFER_JAVA") };
        result
    }

    #[test]
    fn decompile_passes_folder_and_log_level_flags() -> Result<()> {
        let base = temp_dir("flags");
        let args_log = base.join("args.txt");
        let script = format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > \"{}\"\n", args_log.display());

        with_fake_java(&script, &base, || {
            let vf = Vineflower::new(base.join("vineflower-1.0.jar"));
            vf.decompile(&base.join("demo.jar"), &base.join("out"))?;

            let recorded = fs::read_to_string(&args_log)?;
            let args: Vec<&str> = recorded.lines().collect();
            assert_eq!(args[0], "-jar");
            assert!(args[1].ends_with("vineflower-1.0.jar"));
            assert_eq!(args[2], "--folder");
            assert_eq!(args[3], "--log-level=warn");
            assert!(args[4].ends_with("demo.jar"));
            assert!(args[5].ends_with("out"));
            Ok(())
        })?;

        let _ = fs::remove_dir_all(base);
        Ok(())
    }

    #[test]
    fn decompile_fails_on_nonzero_exit() -> Result<()> {
        let base = temp_dir("failure");

        with_fake_java("#!/bin/sh\nexit 3\n", &base, || {
            let vf = Vineflower::new(base.join("vineflower-1.0.jar"));
            let err = vf
                .decompile(&base.join("demo.jar"), &base.join("out"))
                .unwrap_err()
                .to_string();
            assert!(err.contains("Vineflower decompilation failed"));
            Ok(())
        })?;

        let _ = fs::remove_dir_all(base);
        Ok(())
    }
}
