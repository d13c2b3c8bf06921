use clap::{Arg, ArgAction, Command, value_parser};

pub const ASCVD_CMD: &str = "ascvd";

fn measurement(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .required(true)
        .value_parser(value_parser!(f64))
        .help(help)
}

fn switch(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).action(ArgAction::SetTrue).help(help)
}

pub fn create_ascvd_cli() -> Command {
    Command::new(ASCVD_CMD)
        .about("10-year ASCVD risk (Pooled Cohort Equations), in percent.")
        .long_about(
            "10-year ASCVD risk (Pooled Cohort Equations), in percent.\n\n\
             Prints `undefined` for ages outside 40-79, where the equations are not validated.",
        )
        .arg(measurement("age", "Age in years"))
        .arg(measurement("total-cholesterol", "Total cholesterol, mg/dL"))
        .arg(measurement("hdl", "HDL cholesterol, mg/dL"))
        .arg(measurement("systolic-bp", "Systolic blood pressure, mmHg"))
        .arg(switch("hypertensive", "Blood pressure is being treated"))
        .arg(switch("smoker", "Current smoker"))
        .arg(switch("diabetic", "Diabetes"))
        .arg(switch("black", "Use the African American equations"))
        .arg(switch("male", "Use the male equations"))
}
