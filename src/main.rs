use anyhow::{Result, bail};
use clap::Parser;
use jar_sniffer::cli::Cli;
use jar_sniffer::config::resolve_dependencies;
use jar_sniffer::sniffer::Sniffer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validate the target before touching dependencies or spawning anything.
    if !cli.jar.exists() {
        bail!("JAR file must exist: {}", cli.jar.display());
    }
    if !cli.jar.is_file() {
        bail!("JAR must be a regular file: {}", cli.jar.display());
    }

    let deps = resolve_dependencies(&cli)?;
    let sniffer = Sniffer::new(deps);
    sniffer.scan(&cli.jar, cli.output.as_deref(), cli.json)
}
