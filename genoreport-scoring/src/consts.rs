use crate::models::PooledCohortCoefficients;

/// Youngest age the Pooled Cohort Equations are validated for.
pub const ASCVD_MIN_AGE: f64 = 40.0;
/// Oldest age the Pooled Cohort Equations are validated for.
pub const ASCVD_MAX_AGE: f64 = 79.0;

// Goff et al. 2013, Table A. Terms a set doesn't use are zero.

pub const WHITE_FEMALE: PooledCohortCoefficients = PooledCohortCoefficients {
    ln_age: -29.799,
    ln_age_squared: 4.884,
    ln_total_cholesterol: 13.540,
    ln_age_x_ln_total_cholesterol: -3.114,
    ln_hdl: -13.578,
    ln_age_x_ln_hdl: 3.149,
    ln_treated_sbp: 2.019,
    ln_age_x_ln_treated_sbp: 0.0,
    ln_untreated_sbp: 1.957,
    ln_age_x_ln_untreated_sbp: 0.0,
    smoker: 7.574,
    ln_age_x_smoker: -1.665,
    diabetes: 0.661,
    baseline_survival: 0.9665,
    mean_sum: -29.18,
};

pub const AFRICAN_AMERICAN_FEMALE: PooledCohortCoefficients = PooledCohortCoefficients {
    ln_age: 17.114,
    ln_age_squared: 0.0,
    ln_total_cholesterol: 0.940,
    ln_age_x_ln_total_cholesterol: 0.0,
    ln_hdl: -18.920,
    ln_age_x_ln_hdl: 4.475,
    ln_treated_sbp: 29.291,
    ln_age_x_ln_treated_sbp: -6.432,
    ln_untreated_sbp: 27.820,
    ln_age_x_ln_untreated_sbp: -6.087,
    smoker: 0.691,
    ln_age_x_smoker: 0.0,
    diabetes: 0.874,
    baseline_survival: 0.9533,
    mean_sum: 86.61,
};

pub const WHITE_MALE: PooledCohortCoefficients = PooledCohortCoefficients {
    ln_age: 12.344,
    ln_age_squared: 0.0,
    ln_total_cholesterol: 11.853,
    ln_age_x_ln_total_cholesterol: -2.664,
    ln_hdl: -7.990,
    ln_age_x_ln_hdl: 1.769,
    ln_treated_sbp: 1.797,
    ln_age_x_ln_treated_sbp: 0.0,
    ln_untreated_sbp: 1.764,
    ln_age_x_ln_untreated_sbp: 0.0,
    smoker: 7.837,
    ln_age_x_smoker: -1.795,
    diabetes: 0.658,
    baseline_survival: 0.9144,
    mean_sum: 61.18,
};

pub const AFRICAN_AMERICAN_MALE: PooledCohortCoefficients = PooledCohortCoefficients {
    ln_age: 2.469,
    ln_age_squared: 0.0,
    ln_total_cholesterol: 0.302,
    ln_age_x_ln_total_cholesterol: 0.0,
    ln_hdl: -0.307,
    ln_age_x_ln_hdl: 0.0,
    ln_treated_sbp: 1.916,
    ln_age_x_ln_treated_sbp: 0.0,
    ln_untreated_sbp: 1.809,
    ln_age_x_ln_untreated_sbp: 0.0,
    smoker: 0.549,
    ln_age_x_smoker: 0.0,
    diabetes: 0.645,
    baseline_survival: 0.8954,
    mean_sum: 19.54,
};
