use std::env;
use std::process::Command;

/// Build a `java` invocation, honoring the `JAR_SNIFFER_JAVA` override.
pub fn java_command() -> Command {
    let java_bin = env::var("JAR_SNIFFER_JAVA").unwrap_or_else(|_| "java".to_string());

    #[cfg(windows)]
    {
        let lower = java_bin.to_ascii_lowercase();
        if lower.ends_with(".cmd") || lower.ends_with(".bat") {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&java_bin);
            return cmd;
        }
    }

    Command::new(java_bin)
}

/// Render a command for the `  > ...` echo line shown before each spawn.
pub fn render_command(cmd: &Command) -> String {
    let mut line = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

#[cfg(test)]
pub(crate) fn java_env_lock() -> &'static std::sync::Mutex<()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}
