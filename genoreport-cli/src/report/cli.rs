use clap::{Arg, ArgAction, Command, arg};

pub const REPORT_CMD: &str = "report";

pub fn create_report_cli() -> Command {
    Command::new(REPORT_CMD)
        .about("Match a genotype export against ClinVar/SNPedia and write a JSON report.")
        .long_about(
            "Match a genotype export against ClinVar/SNPedia and write a JSON report.\n\n\
             Inputs can come from a TOML config (--config); any path given as a flag \
             overrides the config value. PRS scores are included when all three PRS \
             assets are known.",
        )
        .arg(arg!(--config <config> "TOML report config"))
        .arg(arg!(--genome <genome> "Genotype export (.txt or .txt.gz, `-` for stdin)"))
        .arg(arg!(--clinvar <clinvar> "ClinVar JSON export"))
        .arg(arg!(--snpedia <snpedia> "SNPedia JSON export"))
        .arg(Arg::new("prs-config").long("prs-config").help("prs_config.json"))
        .arg(Arg::new("prs-weights").long("prs-weights").help("prs_weights.json"))
        .arg(Arg::new("prs-index").long("prs-index").help("rsid -> weight index JSON"))
        .arg(arg!(--output <output> "Write the report here instead of stdout"))
        .arg(
            Arg::new("all-matches")
                .long("all-matches")
                .help("Also include every genotype match, not only the projected mutations")
                .action(ArgAction::SetTrue),
        )
}
