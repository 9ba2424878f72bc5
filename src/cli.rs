use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "snapdiff", about = "Compare a URL between the Wayback Machine and its current live version")]
pub struct Cli {
    /// URL to compare
    #[arg(long, required_unless_present = "web")]
    pub url: Option<String>,

    /// Wayback Machine timestamp (YYYYMMDD or YYYYMMDDHHMMSS)
    #[arg(short = 't', long)]
    pub timestamp: Option<String>,

    /// Output file for the HTML report
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Matching strategy for the comparison
    #[arg(long, value_enum, default_value_t = Strategy::Strict)]
    pub strategy: Strategy,

    /// Run as web application
    #[arg(short = 'w', long)]
    pub web: bool,

    /// Port for the web application
    #[arg(short = 'p', long)]
    pub port: Option<u16>,
}

/// Which change classifier to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Normalized-key matching with boilerplate and significance gates
    Strict,
    /// Looser raw-text best-match comparison
    Pairwise,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_required_without_web_mode() {
        assert!(Cli::try_parse_from(["snapdiff"]).is_err());
        assert!(Cli::try_parse_from(["snapdiff", "--url", "example.com"]).is_ok());
        assert!(Cli::try_parse_from(["snapdiff", "--web"]).is_ok());
    }

    #[test]
    fn strategy_defaults_to_strict() {
        let cli = Cli::try_parse_from(["snapdiff", "--url", "example.com"]).unwrap();
        assert_eq!(cli.strategy, Strategy::Strict);
        let cli = Cli::try_parse_from(["snapdiff", "--url", "example.com", "--strategy", "pairwise"]).unwrap();
        assert_eq!(cli.strategy, Strategy::Pairwise);
    }

    #[test]
    fn short_flags_match_the_long_forms() {
        let cli = Cli::try_parse_from([
            "snapdiff", "--url", "example.com", "-t", "20240101", "-o", "report.html",
        ])
        .unwrap();
        assert_eq!(cli.timestamp.as_deref(), Some("20240101"));
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("report.html")));
        let cli = Cli::try_parse_from(["snapdiff", "-w", "-p", "8080"]).unwrap();
        assert!(cli.web);
        assert_eq!(cli.port, Some(8080));
    }
}
