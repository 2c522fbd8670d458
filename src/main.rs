// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Normalize the domain and build the CDX request URL
// 3. Fetch the records, then filter by extension and by status code
// 4. Format them and print or save the result
// 5. Exit with proper code (0 = success or ctrl-c, 1 = any error)
//
// Every stage runs one after the other; the only background work is the
// spinner, which is always cleared before anything else is printed.
// =============================================================================

mod cdx;
mod cli;
mod error;
mod filter;
mod output;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cdx::{build_cdx_url, normalize_domain, FetchConfig, Fetcher, OutputMode};
use cli::Cli;
use error::{FetchError, SinkError};
use filter::{filter_by_extensions, filter_by_status_codes, FilterCriteria};
use output::{render, Console, OutputSink};
use ui::Spinner;

// How a run ended when it did not fail
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Completed,
    /// The user pressed ctrl-c; not an error
    Cancelled,
}

#[tokio::main]
async fn main() {
    // No arguments at all: show what the tool can do and leave quietly
    if std::env::args_os().len() <= 1 {
        let code = match print_usage_summary() {
            Ok(()) => 0,
            Err(e) => report_error(&e.into(), false),
        };
        std::process::exit(code);
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // An empty or blank -u is as good as a missing one
    let Some(domain) = cli.url.as_deref().map(normalize_domain).filter(|d| !d.is_empty()) else {
        eprintln!("Error: Domain name is required. Use -u or --url to specify a domain.");
        eprintln!("Example: wayrecon -u example.com");
        std::process::exit(1);
    };
    debug!(domain = %domain, "normalized domain");

    let verbose = cli.verbose;
    let exit_code = match run_until_cancelled(cli, domain).await {
        Ok(Outcome::Completed) => 0,
        Ok(Outcome::Cancelled) => {
            // Exiting either way; a failed write here changes nothing
            let _ = writeln!(std::io::stdout(), "\nOperation cancelled by user.");
            0
        }
        Err(e) => report_error(&e, verbose),
    };

    std::process::exit(exit_code);
}

fn print_usage_summary() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "No arguments provided.\n")?;
    write!(stdout, "{}", Cli::command().render_help())?;
    stdout.flush()
}

// Diagnostics go to stderr through tracing
//
// --verbose shows this crate's debug events; otherwise only warnings.
// RUST_LOG, when set, wins over both.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "wayrecon=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Runs the pipeline, racing it against ctrl-c
//
// If ctrl-c wins, the pipeline future is dropped where it stands, which
// drops any live spinner and clears its line before we print.
async fn run_until_cancelled(cli: Cli, domain: String) -> Result<Outcome> {
    tokio::select! {
        result = run(cli, domain) => result.map(|()| Outcome::Completed),
        () = interrupted() => Ok(Outcome::Cancelled),
    }
}

async fn interrupted() {
    // If the handler can't be installed, never report an interrupt
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

async fn run(cli: Cli, domain: String) -> Result<()> {
    let mode = cli.output_mode();
    let animate = !cli.verbose;
    let mut console = Console::stdout(animate);

    console.progress("🚀 Wayback Machine CDX Query Tool")?;
    console.progress("=".repeat(40))?;
    Spinner::start("Initializing", animate).stop();
    console.progress("✓ Ready to query Wayback Machine\n")?;

    console.progress(format!("🔍 Querying domain: {}\n", domain))?;

    let cdx_url = build_cdx_url(&cli.endpoint, &domain, mode);
    debug!(url = %cdx_url, "constructed CDX URL");

    let fetcher = Fetcher::new(FetchConfig::default())?.with_spinner(animate);
    let mut records = fetcher.fetch(&cdx_url).await?;

    debug!(count = records.len(), "retrieved records");
    console.progress(format!("✓ Retrieved {} records", records.len()))?;

    let criteria = FilterCriteria::new(&cli.ext, &cli.status);
    if criteria.is_empty() {
        debug!("no filters requested");
    }

    if !criteria.extensions.is_empty() {
        debug!(extensions = ?criteria.extensions, "filtering by extensions");
        let spinner = Spinner::start("Filtering by extensions", animate);
        records = filter_by_extensions(records, &criteria.extensions);
        spinner.stop();

        debug!(count = records.len(), "after extension filtering");
        console.progress(format!(
            "✓ Filtered to {} records matching extensions: {}",
            records.len(),
            cli.ext.join(", ")
        ))?;
    }

    if !criteria.status_codes.is_empty() {
        if mode == OutputMode::Text {
            console.say(
                "⚠️  Warning: Status code filtering is not available in text mode \
                 (status codes not included in text output)",
            )?;
        } else {
            debug!(status_codes = ?cli.status, "filtering by status codes");
            let spinner = Spinner::start("Filtering by status codes", animate);
            records = filter_by_status_codes(records, &criteria.status_codes);
            spinner.stop();

            debug!(count = records.len(), "after status code filtering");
            let codes: Vec<String> = cli.status.iter().map(u16::to_string).collect();
            console.progress(format!(
                "✓ Filtered to {} records matching status codes: {}",
                records.len(),
                codes.join(", ")
            ))?;
        }
    }

    let spinner = Spinner::start("Formatting results", animate);
    let formatted = render(&records, mode);
    spinner.stop();

    let sink = OutputSink::from_path(cli.output.as_deref());

    if let OutputSink::File(path) = &sink {
        let spinner = Spinner::start("Saving to file", animate);
        sink.write(&mut console, &formatted)?;
        spinner.stop();
        console.say(format!("✓ Results saved to {}", path.display()))?;
        return Ok(());
    }

    let rule = "=".repeat(60);
    console.progress(format!("\n{}\nRESULTS\n{}", rule, rule))?;
    sink.write(&mut console, &formatted)?;
    console.progress(format!(
        "\n{}\nQuery completed successfully! Found {} results.\n{}",
        rule,
        records.len(),
        rule
    ))?;

    Ok(())
}

// Prints a message for a failed run and returns its exit code
//
// Every failure exits 1; only the wording changes. The full error chain
// is shown for unexpected errors in verbose mode.
fn report_error(error: &anyhow::Error, verbose: bool) -> i32 {
    if let Some(fetch_error) = error.downcast_ref::<FetchError>() {
        if fetch_error.is_network() {
            eprintln!("Network error: {}", fetch_error);
        } else {
            eprintln!("JSON parsing error: {}", fetch_error);
        }
    } else if let Some(sink_error) = error.downcast_ref::<SinkError>() {
        match sink_error.path() {
            Some(path) => {
                let reason = std::error::Error::source(sink_error)
                    .map_or_else(|| sink_error.to_string(), ToString::to_string);
                eprintln!("Error saving to file {}: {}", path.display(), reason);
            }
            None => eprintln!("Error writing output: {}", sink_error),
        }
    } else {
        eprintln!("Unexpected error: {}", error);
        if verbose {
            eprintln!("{:?}", error);
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_report_error_exit_codes() {
        let network = anyhow::Error::new(FetchError::Status {
            url: "http://a.com".to_string(),
            status: 404,
        });
        assert_eq!(report_error(&network, false), 1);

        let decode = anyhow::Error::new(FetchError::MalformedRecord { index: 0, fields: 1 });
        assert_eq!(report_error(&decode, false), 1);

        let sink = anyhow::Error::new(SinkError::Write {
            path: PathBuf::from("/nope/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(report_error(&sink, false), 1);

        let stdout = anyhow::Error::new(SinkError::Stdout(std::io::Error::new(
            std::io::ErrorKind::Other,
            "no space left",
        )));
        assert_eq!(report_error(&stdout, false), 1);

        assert_eq!(report_error(&anyhow::anyhow!("boom"), true), 1);
    }
}
