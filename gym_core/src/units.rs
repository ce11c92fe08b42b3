//! Unit conversion helpers.

use crate::{BodyMetrics, CalorieRequest, UnitSystem};

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;

/// Centimetres per inch
pub const CM_PER_INCH: f64 = 2.54;

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Body metrics of a request in centimetres and kilograms
pub fn to_metric(request: &CalorieRequest) -> BodyMetrics {
    let (height_cm, weight_kg) = match request.unit_system {
        UnitSystem::Metric => (request.height, request.weight),
        UnitSystem::Imperial => (inches_to_cm(request.height), lb_to_kg(request.weight)),
    };
    BodyMetrics {
        sex: request.sex,
        age_years: request.age_years,
        height_cm,
        weight_kg,
    }
}
