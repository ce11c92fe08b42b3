//! Core domain types for GymBuddy.
//!
//! This module defines the value types shared by the calculators:
//! - Body metrics and the keyed enums (sex, activity, goal, units)
//! - Metabolic results
//! - Weekly split records
//! - Workout parameters
//!
//! Keyed enums parse from the same kebab-case keys the UI submits. Keys for
//! activity level and goal never fail to parse: unknown values fall back to a
//! documented default.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Body Metrics
// ============================================================================

/// Biological sex used to pick the BMR constant
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Unspecified,
}

impl Sex {
    /// Parse a sex key; anything other than exactly male/female is unspecified.
    pub fn from_key(key: &str) -> Self {
        match key {
            "male" => Sex::Male,
            "female" => Sex::Female,
            _ => Sex::Unspecified,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unspecified => "unspecified",
        }
    }
}

/// Body measurements in metric units
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BodyMetrics {
    pub sex: Sex,
    pub age_years: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Daily activity level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier for this activity level
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        }
    }

    /// Parse an activity key.
    ///
    /// Keys match exactly. Unknown keys, including differently cased ones,
    /// resolve to [`ActivityLevel::Sedentary`] (multiplier 1.2).
    pub fn from_key(key: &str) -> Self {
        match Self::ALL.iter().find(|level| level.key() == key) {
            Some(level) => *level,
            None => {
                tracing::debug!("Unknown activity level {:?}, using sedentary", key);
                ActivityLevel::Sedentary
            }
        }
    }
}

/// Nutrition goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Maintain,
    Lose,
    Gain,
    Muscle,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::Maintain, Goal::Lose, Goal::Gain, Goal::Muscle];

    pub fn key(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
            Goal::Muscle => "muscle",
        }
    }

    /// Parse a goal key.
    ///
    /// Keys match exactly. Unknown keys resolve to [`Goal::Maintain`].
    pub fn from_key(key: &str) -> Self {
        match Self::ALL.iter().find(|goal| goal.key() == key) {
            Some(goal) => *goal,
            None => {
                tracing::debug!("Unknown goal {:?}, using maintain", key);
                Goal::Maintain
            }
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unit system the user entered height and weight in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "metric" => Some(UnitSystem::Metric),
            "imperial" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

/// Which weight value the per-pound protein coefficient is applied to
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProteinBasis {
    /// Apply the coefficient to the normalized (kilogram) weight as-is
    #[default]
    AsEntered,
    /// Convert kilograms to pounds before applying the coefficient
    Pounds,
}

// ============================================================================
// Metabolic Results
// ============================================================================

/// Calorie calculator input as the user entered it
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalorieRequest {
    pub unit_system: UnitSystem,
    pub sex: Sex,
    pub age_years: u32,
    /// Centimetres (metric) or inches (imperial)
    pub height: f64,
    /// Kilograms (metric) or pounds (imperial)
    pub weight: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

/// Calorie target for a goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalorieTarget {
    pub calories: i64,
    pub surplus_fraction: f64,
}

/// Daily protein range in grams
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProteinRange {
    pub min_g: i64,
    pub max_g: i64,
}

impl ProteinRange {
    /// Suggested daily intake, the rounded middle of the range
    pub fn midpoint(&self) -> i64 {
        ((self.min_g + self.max_g) as f64 / 2.0).round() as i64
    }
}

/// Full output of the calorie calculator
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MetabolicResult {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub surplus_fraction: f64,
    pub protein_min_g: i64,
    pub protein_max_g: i64,
    pub hydration_liters: f64,
    pub hydration_oz: i64,
}

impl MetabolicResult {
    pub fn protein_range(&self) -> ProteinRange {
        ProteinRange {
            min_g: self.protein_min_g,
            max_g: self.protein_max_g,
        }
    }
}

// ============================================================================
// Weekly Split Types
// ============================================================================

/// Weekly split style
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SplitType {
    FullBody,
    UpperLower,
    Ppl,
}

impl SplitType {
    pub const ALL: [SplitType; 3] = [SplitType::FullBody, SplitType::UpperLower, SplitType::Ppl];

    pub fn key(&self) -> &'static str {
        match self {
            SplitType::FullBody => "full-body",
            SplitType::UpperLower => "upper-lower",
            SplitType::Ppl => "ppl",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_lowercase();
        Self::ALL.iter().copied().find(|t| t.key() == normalized)
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Calendar week in display order
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One day of a weekly split
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayPlan {
    pub day: Weekday,
    /// Position in the week, Monday = 0
    pub day_num: u8,
    pub focus: String,
    pub is_rest_day: bool,
}

/// A generated weekly split
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklySplit {
    pub days_per_week: u8,
    pub split_type: SplitType,
    /// Display only
    pub goal: String,
    /// Display only
    pub level: String,
    pub schedule: Vec<DayPlan>,
    /// Training focus rotation, e.g. "Push → Pull → Legs"
    pub template: String,
}

impl WeeklySplit {
    pub fn training_days(&self) -> usize {
        self.schedule.iter().filter(|d| !d.is_rest_day).count()
    }
}

// ============================================================================
// Workout Types
// ============================================================================

/// Muscle group targeted by a workout
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 6] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Core,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Core => "core",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_lowercase();
        Self::ALL.iter().copied().find(|m| m.key() == normalized)
    }
}

/// Equipment available for a workout
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    FullGym,
    Dumbbells,
    Bodyweight,
}

impl Equipment {
    pub const ALL: [Equipment; 3] = [Equipment::FullGym, Equipment::Dumbbells, Equipment::Bodyweight];

    pub fn key(&self) -> &'static str {
        match self {
            Equipment::FullGym => "full-gym",
            Equipment::Dumbbells => "dumbbells",
            Equipment::Bodyweight => "bodyweight",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_lowercase();
        Self::ALL.iter().copied().find(|e| e.key() == normalized)
    }
}

/// Training experience
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn key(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "beginner" => Some(ExperienceLevel::Beginner),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "advanced" => Some(ExperienceLevel::Advanced),
            _ => None,
        }
    }
}

/// One exercise prescription
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub rest: String,
    pub alternative: String,
}

/// A generated single-session workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub goal: String,
    pub muscle: MuscleGroup,
    pub level: ExperienceLevel,
    pub equipment: Equipment,
    pub warm_up: String,
    pub exercises: Vec<Exercise>,
    pub form_cue: String,
    pub generated_at: DateTime<Utc>,
}
