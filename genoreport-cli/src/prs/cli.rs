use clap::{Arg, Command, arg};

pub const PRS_CMD: &str = "prs";

pub fn create_prs_cli() -> Command {
    Command::new(PRS_CMD)
        .about("Compute polygenic risk scores for a genotype export.")
        .arg(arg!(--genome <genome> "Genotype export (.txt or .txt.gz, `-` for stdin)").required(true))
        .arg(
            Arg::new("prs-config")
                .long("prs-config")
                .required(true)
                .help("prs_config.json"),
        )
        .arg(
            Arg::new("prs-weights")
                .long("prs-weights")
                .required(true)
                .help("prs_weights.json"),
        )
        .arg(
            Arg::new("prs-index")
                .long("prs-index")
                .required(true)
                .help("rsid -> weight index JSON"),
        )
        .arg(arg!(--output <output> "Write the scores here instead of stdout"))
}
