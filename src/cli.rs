// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are no subcommands: one invocation is one query. The domain is
// taken as an optional flag so that main.rs can print its own message
// (and exit 1) when it is missing, instead of clap's usage error.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct
// - Vec<T> fields: flags that take one or more values
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::cdx::{OutputMode, DEFAULT_CDX_ENDPOINT};

const EXAMPLES: &str = "\
Examples:
  wayrecon -u example.com
  wayrecon -u example.com --ext js php -v
  wayrecon -u example.com --text --ext zip -o zip_urls.txt
  wayrecon -u example.com -s 404 403
  wayrecon -u example.com --ext js --status 200 -o results.txt";

#[derive(Parser, Debug)]
#[command(
    name = "wayrecon",
    version,
    about = "Query the Wayback Machine CDX API for historical URLs of a domain",
    long_about = "wayrecon lists every URL the Wayback Machine has captured for a domain \
                  and its subdomains, optionally filtered by file extension or HTTP status code.",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Domain name to query (e.g., example.com)
    ///
    /// A full URL also works; the scheme, path and leading "www." are dropped.
    #[arg(short = 'u', long = "url", value_name = "DOMAIN")]
    pub url: Option<String>,

    /// Save the formatted result to this file instead of printing it
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Verbose mode: no animations, print the request URL, HTTP status,
    /// retries and record counts
    #[arg(short, long)]
    pub verbose: bool,

    /// Output plain text (only original URLs). Default is a JSON table
    #[arg(long)]
    pub text: bool,

    /// One or more file extensions to keep (e.g., --ext js php zip)
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub ext: Vec<String>,

    /// One or more HTTP status codes to keep (e.g., -s 404 403 200)
    ///
    /// Ignored with a warning in --text mode, which has no status codes.
    #[arg(short, long, num_args = 1.., value_name = "CODE")]
    pub status: Vec<u16>,

    /// CDX endpoint to query
    #[arg(long, hide = true, value_name = "URL", default_value = DEFAULT_CDX_ENDPOINT)]
    pub endpoint: String,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_text_flag(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full() {
        let cli = Cli::try_parse_from([
            "wayrecon", "-u", "example.com", "--ext", "js", "php", "-s", "404", "403", "-o", "out.txt", "-v",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("example.com"));
        assert_eq!(cli.ext, vec!["js", "php"]);
        assert_eq!(cli.status, vec![404, 403]);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert!(cli.verbose);
        assert_eq!(cli.output_mode(), OutputMode::Json);
        assert_eq!(cli.endpoint, DEFAULT_CDX_ENDPOINT);
    }

    #[test]
    fn test_parse_text_mode() {
        let cli = Cli::try_parse_from(["wayrecon", "--url", "example.com", "--text"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Text);
        assert!(cli.ext.is_empty());
        assert!(cli.status.is_empty());
    }

    #[test]
    fn test_url_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["wayrecon", "--text"]).unwrap();
        assert!(cli.url.is_none());
    }

    #[test]
    fn test_status_must_be_numeric() {
        assert!(Cli::try_parse_from(["wayrecon", "-u", "a.com", "-s", "abc"]).is_err());
    }

    #[test]
    fn test_status_must_fit_http_range() {
        assert!(Cli::try_parse_from(["wayrecon", "-u", "a.com", "-s", "70000"]).is_err());
        let cli = Cli::try_parse_from(["wayrecon", "-u", "a.com", "-s", "599"]).unwrap();
        assert_eq!(cli.status, vec![599]);
    }
}
