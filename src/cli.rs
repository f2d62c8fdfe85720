use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "jar-sniffer")]
#[command(about = "Find hard-coded secrets in compiled JARs")]
#[command(long_about = "jar-sniffer: Find hard-coded secrets in compiled JARs\n\
                        Powered by the Vineflower Java decompiler and the Trufflehog scanner")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Analyzed JAR path
    #[arg(short = 'f', long = "jar", value_name = "FILE")]
    pub jar: PathBuf,

    /// Results output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Vineflower decompiler JAR, bypassing lib-dir discovery
    #[arg(long, value_name = "FILE")]
    pub vineflower: Option<PathBuf>,

    /// Trufflehog scanner binary, bypassing lib-dir discovery
    #[arg(long, value_name = "FILE")]
    pub trufflehog: Option<PathBuf>,

    /// Directory searched for bundled dependencies
    #[arg(long, value_name = "DIR")]
    pub lib_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_is_an_error() {
        let parsed = Cli::try_parse_from(["jar-sniffer"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn short_flags_map_to_fields() {
        let cli = Cli::try_parse_from(["jar-sniffer", "-f", "demo.jar", "-o", "out.txt", "-j"])
            .expect("args should parse");
        assert_eq!(cli.jar, PathBuf::from("demo.jar"));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert!(cli.json);
        assert!(cli.vineflower.is_none());
        assert!(cli.trufflehog.is_none());
    }

    #[test]
    fn overrides_parse_as_paths() {
        let cli = Cli::try_parse_from([
            "jar-sniffer",
            "--jar",
            "demo.jar",
            "--vineflower",
            "/opt/vineflower.jar",
            "--trufflehog",
            "/usr/local/bin/trufflehog",
            "--lib-dir",
            "/opt/lib",
        ])
        .expect("args should parse");
        assert_eq!(cli.vineflower, Some(PathBuf::from("/opt/vineflower.jar")));
        assert_eq!(cli.trufflehog, Some(PathBuf::from("/usr/local/bin/trufflehog")));
        assert_eq!(cli.lib_dir, Some(PathBuf::from("/opt/lib")));
    }
}
