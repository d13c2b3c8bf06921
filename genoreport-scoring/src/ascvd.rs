use crate::consts::{
    AFRICAN_AMERICAN_FEMALE, AFRICAN_AMERICAN_MALE, ASCVD_MAX_AGE, ASCVD_MIN_AGE, WHITE_FEMALE,
    WHITE_MALE,
};
use crate::models::{AscvdFactors, PooledCohortCoefficients};

fn coefficients_for(factors: &AscvdFactors) -> &'static PooledCohortCoefficients {
    match (factors.is_black, factors.is_male) {
        (false, false) => &WHITE_FEMALE,
        (true, false) => &AFRICAN_AMERICAN_FEMALE,
        (false, true) => &WHITE_MALE,
        (true, true) => &AFRICAN_AMERICAN_MALE,
    }
}

///
/// 10-year ASCVD risk in percent, rounded to one decimal.
///
/// Returns `None` outside ages 40 to 79, where the equations are not
/// validated. A `None` means the risk is undefined, not zero. No other input
/// is checked.
///
pub fn calculate_ascvd_risk(factors: &AscvdFactors) -> Option<f64> {
    if factors.age < ASCVD_MIN_AGE || factors.age > ASCVD_MAX_AGE {
        return None;
    }

    let c = coefficients_for(factors);

    let ln_age = factors.age.ln();
    let ln_total = factors.total_cholesterol.ln();
    let ln_hdl = factors.hdl_cholesterol.ln();
    let ln_sbp = factors.systolic_bp.ln();
    let (ln_treated, ln_untreated) = if factors.is_hypertensive {
        (ln_sbp, 0.0)
    } else {
        (0.0, ln_sbp)
    };
    let smoker = if factors.is_smoker { 1.0 } else { 0.0 };
    let diabetic = if factors.is_diabetic { 1.0 } else { 0.0 };

    let sum = c.ln_age * ln_age
        + c.ln_age_squared * ln_age * ln_age
        + c.ln_total_cholesterol * ln_total
        + c.ln_age_x_ln_total_cholesterol * ln_age * ln_total
        + c.ln_hdl * ln_hdl
        + c.ln_age_x_ln_hdl * ln_age * ln_hdl
        + c.ln_treated_sbp * ln_treated
        + c.ln_age_x_ln_treated_sbp * ln_age * ln_treated
        + c.ln_untreated_sbp * ln_untreated
        + c.ln_age_x_ln_untreated_sbp * ln_age * ln_untreated
        + c.smoker * smoker
        + c.ln_age_x_smoker * ln_age * smoker
        + c.diabetes * diabetic;

    let risk = 1.0 - c.baseline_survival.powf((sum - c.mean_sum).exp());

    Some((risk * 1000.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn reference_patient() -> AscvdFactors {
        AscvdFactors {
            age: 55.0,
            total_cholesterol: 213.0,
            hdl_cholesterol: 50.0,
            systolic_bp: 120.0,
            is_hypertensive: false,
            is_smoker: false,
            is_diabetic: false,
            is_black: false,
            is_male: false,
        }
    }

    #[rstest]
    fn test_published_white_male_reference(mut reference_patient: AscvdFactors) {
        reference_patient.is_male = true;
        let risk = calculate_ascvd_risk(&reference_patient).unwrap();
        // Goff et al. 2013 report 5.3%; the unrounded equation gives 5.38
        assert_eq!(risk, 5.4);
        assert!((risk - 5.3).abs() <= 0.1 + 1e-9, "got {}", risk);
    }

    // Same patient evaluated with the Goff et al. 2013 coefficient sets and
    // rounded to one decimal.
    #[rstest]
    #[case(false, false, 2.1)]
    #[case(true, false, 3.0)]
    #[case(true, true, 6.1)]
    fn test_reference_patient_per_group(
        mut reference_patient: AscvdFactors,
        #[case] is_black: bool,
        #[case] is_male: bool,
        #[case] expected: f64,
    ) {
        reference_patient.is_black = is_black;
        reference_patient.is_male = is_male;
        assert_eq!(calculate_ascvd_risk(&reference_patient), Some(expected));
    }

    #[rstest]
    #[case(60.0, 200.0, 40.0, 140.0, true, true, true, false, true, 37.0)]
    #[case(45.0, 180.0, 60.0, 110.0, false, true, false, true, false, 0.8)]
    #[case(70.0, 250.0, 35.0, 160.0, true, false, true, true, true, 52.0)]
    #[case(79.0, 300.0, 30.0, 180.0, true, true, true, false, true, 85.4)]
    #[case(40.0, 170.0, 50.0, 110.0, false, false, false, false, false, 0.4)]
    fn test_risk_factor_combinations(
        #[case] age: f64,
        #[case] total_cholesterol: f64,
        #[case] hdl_cholesterol: f64,
        #[case] systolic_bp: f64,
        #[case] is_hypertensive: bool,
        #[case] is_smoker: bool,
        #[case] is_diabetic: bool,
        #[case] is_black: bool,
        #[case] is_male: bool,
        #[case] expected: f64,
    ) {
        let factors = AscvdFactors {
            age,
            total_cholesterol,
            hdl_cholesterol,
            systolic_bp,
            is_hypertensive,
            is_smoker,
            is_diabetic,
            is_black,
            is_male,
        };
        assert_eq!(calculate_ascvd_risk(&factors), Some(expected));
    }

    #[rstest]
    #[case(39.0)]
    #[case(39.9)]
    #[case(80.0)]
    #[case(95.0)]
    fn test_out_of_range_age_is_undefined(mut reference_patient: AscvdFactors, #[case] age: f64) {
        reference_patient.age = age;
        assert_eq!(calculate_ascvd_risk(&reference_patient), None);
    }

    #[rstest]
    fn test_treatment_raises_risk(mut reference_patient: AscvdFactors) {
        let untreated = calculate_ascvd_risk(&reference_patient).unwrap();
        reference_patient.is_hypertensive = true;
        let treated = calculate_ascvd_risk(&reference_patient).unwrap();
        assert!(treated > untreated);
    }
}
