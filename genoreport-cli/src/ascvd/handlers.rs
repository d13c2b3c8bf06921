use anyhow::Result;
use clap::ArgMatches;

use genoreport_scoring::{AscvdFactors, calculate_ascvd_risk};

pub const UNDEFINED_RISK: &str = "undefined";

fn factors_from_matches(matches: &ArgMatches) -> AscvdFactors {
    let value = |id: &str| {
        *matches
            .get_one::<f64>(id)
            .expect("All ASCVD measurements are required.")
    };

    AscvdFactors {
        age: value("age"),
        total_cholesterol: value("total-cholesterol"),
        hdl_cholesterol: value("hdl"),
        systolic_bp: value("systolic-bp"),
        is_hypertensive: matches.get_flag("hypertensive"),
        is_smoker: matches.get_flag("smoker"),
        is_diabetic: matches.get_flag("diabetic"),
        is_black: matches.get_flag("black"),
        is_male: matches.get_flag("male"),
    }
}

pub fn format_risk(risk: Option<f64>) -> String {
    match risk {
        Some(risk) => format!("{:.1}", risk),
        None => UNDEFINED_RISK.to_string(),
    }
}

pub fn run_ascvd(matches: &ArgMatches) -> Result<()> {
    let factors = factors_from_matches(matches);
    println!("{}", format_risk(calculate_ascvd_risk(&factors)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::ascvd::cli::create_ascvd_cli;

    fn risk_for(args: &[&str]) -> String {
        let mut argv = vec!["ascvd"];
        argv.extend_from_slice(args);
        let matches = create_ascvd_cli().get_matches_from(argv);
        format_risk(calculate_ascvd_risk(&factors_from_matches(&matches)))
    }

    #[rstest]
    #[case(&[], "2.1")]
    #[case(&["--male"], "5.4")]
    #[case(&["--black"], "3.0")]
    #[case(&["--black", "--male"], "6.1")]
    fn test_reference_patient(#[case] extra: &[&str], #[case] expected: &str) {
        let mut args = vec![
            "--age",
            "55",
            "--total-cholesterol",
            "213",
            "--hdl",
            "50",
            "--systolic-bp",
            "120",
        ];
        args.extend_from_slice(extra);
        assert_eq!(risk_for(&args), expected);
    }

    #[rstest]
    fn test_out_of_range_is_undefined_not_zero() {
        let risk = risk_for(&[
            "--age",
            "80",
            "--total-cholesterol",
            "213",
            "--hdl",
            "50",
            "--systolic-bp",
            "120",
        ]);
        assert_eq!(risk, UNDEFINED_RISK);
    }
}
