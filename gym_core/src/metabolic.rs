//! Calorie and macro calculator.
//!
//! Pipeline for one request:
//! - Normalize imperial input to metric
//! - BMR (Mifflin-St Jeor)
//! - TDEE = BMR x activity multiplier
//! - Calorie target for the goal
//! - Protein range and hydration guideline
//!
//! Every function here is total: out-of-range ages or weights are not
//! rejected, they just produce out-of-range numbers.

use crate::units::{kg_to_lb, to_metric};
use crate::{
    ActivityLevel, CalorieRequest, CalorieTarget, Goal, MetabolicResult, ProteinBasis,
    ProteinRange, Sex,
};

/// Litres of water per kilogram of body weight
pub const HYDRATION_L_PER_KG: f64 = 0.035;

/// US fluid ounces per litre
pub const OZ_PER_LITER: f64 = 33.814;

/// Basal metabolic rate in kcal/day, Mifflin-St Jeor
pub fn compute_bmr(sex: Sex, age_years: u32, height_cm: f64, weight_kg: f64) -> i64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    let male = base + 5.0;
    let female = base - 161.0;

    let bmr = match sex {
        Sex::Male => male,
        Sex::Female => female,
        Sex::Unspecified => (male + female) / 2.0,
    };
    bmr.round() as i64
}

/// Total daily energy expenditure in kcal/day
pub fn compute_tdee(bmr: i64, activity: ActivityLevel) -> i64 {
    (bmr as f64 * activity.multiplier()).round() as i64
}

/// Calorie target for a goal
pub fn compute_target(tdee: i64, goal: Goal) -> CalorieTarget {
    let (scale, surplus_fraction) = match goal {
        Goal::Maintain => (1.0, 0.0),
        Goal::Lose => (0.9, -0.10),
        Goal::Gain => (1.1, 0.10),
        Goal::Muscle => (1.08, 0.08),
    };

    CalorieTarget {
        calories: (tdee as f64 * scale).round() as i64,
        surplus_fraction,
    }
}

/// Grams of protein per pound of body weight for a goal
pub fn protein_per_lb(goal: Goal) -> f64 {
    match goal {
        Goal::Muscle | Goal::Gain => 1.0,
        Goal::Lose => 1.1,
        Goal::Maintain => 0.8,
    }
}

/// Daily protein range, +/-10% around `weight * coefficient`.
///
/// The coefficient is per pound but `weight` is used exactly as given; no
/// unit conversion happens here.
pub fn compute_protein_range(weight: f64, goal: Goal) -> ProteinRange {
    let grams = weight * protein_per_lb(goal);
    ProteinRange {
        min_g: (grams * 0.9).round() as i64,
        max_g: (grams * 1.1).round() as i64,
    }
}

/// Daily water guideline as (litres to one decimal, whole ounces)
pub fn compute_hydration(weight_kg: f64) -> (f64, i64) {
    let liters = round1(weight_kg * HYDRATION_L_PER_KG);
    let oz = (liters * OZ_PER_LITER).round() as i64;
    (liters, oz)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Run the full calculator for one request
pub fn calculate(request: &CalorieRequest, basis: ProteinBasis) -> MetabolicResult {
    let body = to_metric(request);
    let weight_kg = body.weight_kg;

    let bmr = compute_bmr(body.sex, body.age_years, body.height_cm, weight_kg);
    let tdee = compute_tdee(bmr, request.activity);
    let target = compute_target(tdee, request.goal);

    let protein_weight = match basis {
        ProteinBasis::AsEntered => weight_kg,
        ProteinBasis::Pounds => kg_to_lb(weight_kg),
    };
    let protein = compute_protein_range(protein_weight, request.goal);
    let (hydration_liters, hydration_oz) = compute_hydration(weight_kg);

    tracing::debug!(
        "Calculated bmr={} tdee={} target={} for goal {}",
        bmr,
        tdee,
        target.calories,
        request.goal
    );

    MetabolicResult {
        bmr,
        tdee,
        target_calories: target.calories,
        surplus_fraction: target.surplus_fraction,
        protein_min_g: protein.min_g,
        protein_max_g: protein.max_g,
        hydration_liters,
        hydration_oz,
    }
}

/// Signed whole-percent change from TDEE, e.g. "+8%" or "-10%"
pub fn format_surplus(surplus_fraction: f64) -> String {
    let percent = (surplus_fraction * 100.0).round() as i64;
    if surplus_fraction > 0.0 {
        format!("+{}%", percent)
    } else {
        format!("{}%", percent)
    }
}

/// Plain-text calorie report
pub fn render_report(result: &MetabolicResult) -> String {
    let protein = result.protein_range();
    let mut out = String::new();

    out.push_str(&format!("Resting Metabolic Rate (BMR): {} cal/day\n", result.bmr));
    out.push_str(&format!(
        "Total Daily Energy Expenditure (TDEE): {} cal/day\n",
        result.tdee
    ));
    out.push('\n');
    out.push_str("Nutrition Targets\n");
    out.push_str(&format!(
        "  Target Daily Calories: {} cal/day ({} from TDEE)\n",
        result.target_calories,
        format_surplus(result.surplus_fraction)
    ));
    out.push_str(&format!(
        "  Daily Protein Range: {} - {}g (aim for ~{}g)\n",
        protein.min_g,
        protein.max_g,
        protein.midpoint()
    ));
    out.push_str(&format!(
        "  Daily Hydration Guideline: {:.1}L ({} oz)\n",
        result.hydration_liters, result.hydration_oz
    ));
    out.push('\n');
    out.push_str(
        "Safety Note: These are general guidelines. Avoid extreme deficits or surpluses.\n\
         Aim for 0.5-1% of body weight change per week. Consult a registered dietitian\n\
         for personalized advice.\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitSystem;

    fn male_formula(age: u32, h: f64, w: f64) -> f64 {
        10.0 * w + 6.25 * h - 5.0 * age as f64 + 5.0
    }

    fn female_formula(age: u32, h: f64, w: f64) -> f64 {
        10.0 * w + 6.25 * h - 5.0 * age as f64 - 161.0
    }

    #[test]
    fn test_bmr_male() {
        assert_eq!(compute_bmr(Sex::Male, 30, 180.0, 80.0), 1780);
    }

    #[test]
    fn test_bmr_female() {
        assert_eq!(compute_bmr(Sex::Female, 30, 180.0, 80.0), 1614);
    }

    #[test]
    fn test_bmr_unspecified_is_mean_of_formulas() {
        let cases = [
            (30, 180.0, 80.0),
            (45, 165.5, 62.3),
            (19, 190.0, 101.7),
            (70, 150.0, 48.0),
        ];
        for (age, h, w) in cases {
            let expected = ((male_formula(age, h, w) + female_formula(age, h, w)) / 2.0).round();
            assert_eq!(compute_bmr(Sex::Unspecified, age, h, w), expected as i64);
        }
        assert_eq!(compute_bmr(Sex::Unspecified, 30, 180.0, 80.0), 1697);
    }

    #[test]
    fn test_tdee_uses_multiplier() {
        assert_eq!(compute_tdee(1780, ActivityLevel::Sedentary), 2136);
        assert_eq!(compute_tdee(1780, ActivityLevel::Moderate), 2759);
        assert_eq!(compute_tdee(1780, ActivityLevel::VeryActive), 3382);
    }

    #[test]
    fn test_tdee_unknown_activity_is_sedentary() {
        let unknown = ActivityLevel::from_key("unknown-level");
        assert_eq!(
            compute_tdee(1780, unknown),
            compute_tdee(1780, ActivityLevel::Sedentary)
        );
        assert_eq!(ActivityLevel::from_key(""), ActivityLevel::Sedentary);
        // lookups are exact, so a differently cased key is unknown too
        assert_eq!(
            compute_tdee(1780, ActivityLevel::from_key("Very-Active")),
            compute_tdee(1780, ActivityLevel::Sedentary)
        );
        assert_eq!(ActivityLevel::from_key(" moderate"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_key("very-active"), ActivityLevel::VeryActive);
    }

    #[test]
    fn test_target_per_goal() {
        assert_eq!(
            compute_target(2000, Goal::Lose),
            CalorieTarget {
                calories: 1800,
                surplus_fraction: -0.1
            }
        );
        assert_eq!(compute_target(2000, Goal::Gain).calories, 2200);
        assert_eq!(compute_target(2000, Goal::Muscle).calories, 2160);
        assert_eq!(compute_target(2000, Goal::Muscle).surplus_fraction, 0.08);

        let maintain = compute_target(2000, Goal::Maintain);
        assert_eq!(maintain.calories, 2000);
        assert_eq!(maintain.surplus_fraction, 0.0);
    }

    #[test]
    fn test_target_unknown_goal_is_maintain() {
        assert_eq!(
            compute_target(2000, Goal::from_key("bogus-goal")),
            compute_target(2000, Goal::Maintain)
        );
        assert_eq!(Goal::from_key("LOSE"), Goal::Maintain);
        assert_eq!(Goal::from_key("lose"), Goal::Lose);
    }

    #[test]
    fn test_bmr_cased_sex_is_unspecified() {
        assert_eq!(Sex::from_key("MALE"), Sex::Unspecified);
        assert_eq!(
            compute_bmr(Sex::from_key("MALE"), 30, 180.0, 80.0),
            compute_bmr(Sex::Unspecified, 30, 180.0, 80.0)
        );
        assert_eq!(Sex::from_key("male"), Sex::Male);
    }

    #[test]
    fn test_protein_range_coefficients() {
        assert_eq!(
            compute_protein_range(80.0, Goal::Muscle),
            ProteinRange { min_g: 72, max_g: 88 }
        );
        assert_eq!(
            compute_protein_range(80.0, Goal::Lose),
            ProteinRange { min_g: 79, max_g: 97 }
        );
        assert_eq!(
            compute_protein_range(80.0, Goal::Maintain),
            ProteinRange { min_g: 58, max_g: 70 }
        );
    }

    #[test]
    fn test_hydration() {
        assert_eq!(compute_hydration(80.0), (2.8, 95));
        assert_eq!(compute_hydration(62.0), (2.2, 74));
    }

    fn request(unit_system: UnitSystem, height: f64, weight: f64) -> CalorieRequest {
        CalorieRequest {
            unit_system,
            sex: Sex::Male,
            age_years: 30,
            height,
            weight,
            activity: ActivityLevel::Moderate,
            goal: Goal::Muscle,
        }
    }

    #[test]
    fn test_calculate_metric() {
        let result = calculate(&request(UnitSystem::Metric, 180.0, 80.0), ProteinBasis::AsEntered);
        assert_eq!(result.bmr, 1780);
        assert_eq!(result.tdee, 2759);
        assert_eq!(result.target_calories, 2980);
        assert_eq!(result.surplus_fraction, 0.08);
        assert_eq!(result.protein_min_g, 72);
        assert_eq!(result.protein_max_g, 88);
        assert_eq!(result.hydration_liters, 2.8);
        assert_eq!(result.hydration_oz, 95);
    }

    #[test]
    fn test_calculate_imperial_matches_metric() {
        let metric = calculate(&request(UnitSystem::Metric, 177.8, 79.832), ProteinBasis::AsEntered);
        let imperial = calculate(
            &request(UnitSystem::Imperial, 70.0, 79.832 * crate::units::LB_PER_KG),
            ProteinBasis::AsEntered,
        );
        assert_eq!(metric.bmr, imperial.bmr);
        assert_eq!(metric.tdee, imperial.tdee);
        assert_eq!(metric.protein_min_g, imperial.protein_min_g);
    }

    #[test]
    fn test_protein_basis_pounds_converts_weight() {
        let literal = calculate(&request(UnitSystem::Metric, 180.0, 80.0), ProteinBasis::AsEntered);
        let pounds = calculate(&request(UnitSystem::Metric, 180.0, 80.0), ProteinBasis::Pounds);
        assert_eq!(pounds.protein_min_g, 159);
        assert_eq!(pounds.protein_max_g, 194);
        assert!(pounds.protein_min_g > literal.protein_min_g);
        assert_eq!(pounds.bmr, literal.bmr);
    }

    #[test]
    fn test_format_surplus() {
        assert_eq!(format_surplus(0.08), "+8%");
        assert_eq!(format_surplus(-0.1), "-10%");
        assert_eq!(format_surplus(0.0), "0%");
    }

    #[test]
    fn test_report_contents() {
        let result = calculate(&request(UnitSystem::Metric, 180.0, 80.0), ProteinBasis::AsEntered);
        let report = render_report(&result);
        assert!(report.contains("Resting Metabolic Rate (BMR): 1780 cal/day"));
        assert!(report.contains("2980 cal/day (+8% from TDEE)"));
        assert!(report.contains("72 - 88g (aim for ~80g)"));
        assert!(report.contains("2.8L (95 oz)"));
    }
}
