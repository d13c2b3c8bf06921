mod ascvd;
mod prs;
mod report;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "genoreport";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const LOG_LEVEL_ARG: &str = "log-level";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Match a consumer genotype export against ClinVar and SNPedia, and compute polygenic and cardiovascular risk scores.")
        .subcommand_required(true)
        .arg(
            Arg::new(consts::LOG_LEVEL_ARG)
                .long(consts::LOG_LEVEL_ARG)
                .global(true)
                .help("Log filter, e.g. `info` or `genoreport_io=debug`. Falls back to RUST_LOG."),
        )
        .subcommand(report::cli::create_report_cli())
        .subcommand(prs::cli::create_prs_cli())
        .subcommand(ascvd::cli::create_ascvd_cli())
}

///
/// Logs go to stderr so JSON written to stdout stays clean. Records from the
/// `log` facade used by the library crates are forwarded as well.
///
fn init_logging(level: Option<&String>) -> Result<()> {
    let filter = match level {
        Some(level) => {
            EnvFilter::try_new(level).with_context(|| format!("Invalid log level '{}'", level))?
        }
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(consts::DEFAULT_LOG_LEVEL)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_one::<String>(consts::LOG_LEVEL_ARG))?;

    match matches.subcommand() {
        //
        // FULL REPORT
        //
        Some((report::cli::REPORT_CMD, matches)) => {
            report::handlers::run_report(matches)?;
        }

        //
        // POLYGENIC RISK SCORES
        //
        Some((prs::cli::PRS_CMD, matches)) => {
            prs::handlers::run_prs(matches)?;
        }

        //
        // ASCVD RISK
        //
        Some((ascvd::cli::ASCVD_CMD, matches)) => {
            ascvd::handlers::run_ascvd(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    #[case(&["genoreport", "ascvd", "--age", "55", "--total-cholesterol", "213", "--hdl", "50", "--systolic-bp", "120"])]
    #[case(&["genoreport", "--log-level", "debug", "report", "--config", "report.toml"])]
    #[case(&["genoreport", "prs", "--genome", "g.txt", "--prs-config", "c.json", "--prs-weights", "w.json", "--prs-index", "i.json", "--log-level", "info"])]
    fn test_accepts_valid_invocations(#[case] argv: &[&str]) {
        assert!(build_parser().try_get_matches_from(argv).is_ok());
    }

    #[rstest]
    #[case(&["genoreport"])]
    #[case(&["genoreport", "ascvd", "--age", "55"])]
    #[case(&["genoreport", "prs", "--genome", "g.txt"])]
    fn test_rejects_incomplete_invocations(#[case] argv: &[&str]) {
        assert!(build_parser().try_get_matches_from(argv).is_err());
    }
}
