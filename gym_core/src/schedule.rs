//! Weekly split templates and schedule generation.
//!
//! A template lists only the training days of a split; generation overlays it
//! onto the full Mon..Sun week and marks every other day as rest.

use crate::{DayPlan, Error, Result, SplitType, WeeklySplit, WEEK};
use chrono::{NaiveDate, Weekday};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Focus label for days the template does not train
pub const REST_FOCUS: &str = "Rest";

/// Training days of one split, paired index-wise with their focus labels
#[derive(Clone, Debug)]
pub struct SplitTemplate {
    pub days: Vec<Weekday>,
    pub focus: Vec<&'static str>,
}

impl SplitTemplate {
    /// Focus for a weekday, or `None` on rest days
    pub fn focus_for(&self, day: Weekday) -> Option<&'static str> {
        self.days
            .iter()
            .position(|d| *d == day)
            .and_then(|idx| self.focus.get(idx).copied())
    }

    pub fn summary(&self) -> String {
        self.focus.join(" → ")
    }
}

type TemplateTable = HashMap<(SplitType, u8), SplitTemplate>;

/// Cached template table - built once and shared read-only
static TEMPLATES: Lazy<TemplateTable> = Lazy::new(build_templates);

/// Get a reference to the cached template table
pub fn templates() -> &'static TemplateTable {
    &TEMPLATES
}

/// Template for a split type and weekly frequency, if one exists
pub fn find_template(split_type: SplitType, days_per_week: u8) -> Option<&'static SplitTemplate> {
    TEMPLATES.get(&(split_type, days_per_week))
}

fn build_templates() -> TemplateTable {
    use Weekday::*;

    const FB_A: &str = "Full Body A";
    const FB_B: &str = "Full Body B";
    const UA: &str = "Upper A";
    const LA: &str = "Lower A";
    const UB: &str = "Upper B";
    const LB: &str = "Lower B";

    let mut table = HashMap::new();
    let mut insert = |split: SplitType, days: &[Weekday], focus: &[&'static str]| {
        table.insert(
            (split, days.len() as u8),
            SplitTemplate {
                days: days.to_vec(),
                focus: focus.to_vec(),
            },
        );
    };

    // ========================================================================
    // Full body
    // ========================================================================

    insert(SplitType::FullBody, &[Mon, Thu], &[FB_A, FB_B]);
    insert(SplitType::FullBody, &[Mon, Wed, Fri], &[FB_A, FB_B, FB_A]);
    insert(SplitType::FullBody, &[Mon, Tue, Thu, Fri], &[FB_A, FB_B, FB_A, FB_B]);
    insert(
        SplitType::FullBody,
        &[Mon, Tue, Wed, Thu, Fri],
        &[FB_A, FB_B, FB_A, FB_B, FB_A],
    );
    insert(
        SplitType::FullBody,
        &[Mon, Tue, Wed, Thu, Fri, Sat],
        &[FB_A, FB_B, FB_A, FB_B, FB_A, FB_B],
    );

    // ========================================================================
    // Upper / lower
    // ========================================================================

    insert(SplitType::UpperLower, &[Mon, Thu], &[UA, LA]);
    insert(SplitType::UpperLower, &[Mon, Wed, Fri], &[UA, LA, UB]);
    insert(SplitType::UpperLower, &[Mon, Tue, Thu, Fri], &[UA, LA, UB, LB]);
    insert(
        SplitType::UpperLower,
        &[Mon, Tue, Wed, Thu, Fri],
        &[UA, LA, UB, LB, UA],
    );
    insert(
        SplitType::UpperLower,
        &[Mon, Tue, Wed, Thu, Fri, Sat],
        &[UA, LA, UB, LB, UA, LA],
    );

    // ========================================================================
    // Push / pull / legs (no 4-day variant)
    // ========================================================================

    insert(SplitType::Ppl, &[Mon, Thu], &["Push", "Pull"]);
    insert(SplitType::Ppl, &[Mon, Wed, Fri], &["Push", "Pull", "Legs"]);
    insert(
        SplitType::Ppl,
        &[Mon, Tue, Wed, Thu, Fri],
        &["Push", "Pull", "Legs", "Push", "Pull"],
    );
    insert(
        SplitType::Ppl,
        &[Mon, Tue, Wed, Thu, Fri, Sat],
        &["Push", "Pull", "Legs", "Push", "Pull", "Legs"],
    );

    table
}

/// Validate the template table for consistency
///
/// Returns a list of validation errors, or empty Vec if valid.
pub fn validate_templates(table: &TemplateTable) -> Vec<String> {
    let mut errors = Vec::new();

    for ((split, days_per_week), template) in table {
        if template.days.len() != template.focus.len() {
            errors.push(format!(
                "{} {}-day template has {} days but {} focus labels",
                split,
                days_per_week,
                template.days.len(),
                template.focus.len()
            ));
        }
        if template.days.len() != *days_per_week as usize {
            errors.push(format!(
                "{} {}-day template lists {} days",
                split,
                days_per_week,
                template.days.len()
            ));
        }
        let mut seen = Vec::new();
        for day in &template.days {
            if seen.contains(day) {
                errors.push(format!(
                    "{} {}-day template repeats {}",
                    split, days_per_week, day
                ));
            }
            seen.push(*day);
        }
        if template.focus.iter().any(|f| f.is_empty() || *f == REST_FOCUS) {
            errors.push(format!(
                "{} {}-day template has an invalid focus label",
                split, days_per_week
            ));
        }
    }

    errors
}

/// Generate a weekly split.
///
/// `goal` and `level` are carried into the result for display and do not
/// influence the schedule. Fails with [`Error::SplitNotFound`] when no
/// template exists for the combination (e.g. a 4-day push/pull/legs).
pub fn generate_split(
    days_per_week: u8,
    split_type: SplitType,
    goal: &str,
    level: &str,
) -> Result<WeeklySplit> {
    let template =
        find_template(split_type, days_per_week).ok_or_else(|| Error::SplitNotFound {
            split_type: split_type.key().to_string(),
            days: days_per_week,
        })?;

    let schedule = WEEK
        .iter()
        .enumerate()
        .map(|(idx, day)| {
            let focus = template.focus_for(*day);
            DayPlan {
                day: *day,
                day_num: idx as u8,
                focus: focus.unwrap_or(REST_FOCUS).to_string(),
                is_rest_day: focus.is_none(),
            }
        })
        .collect();

    tracing::debug!(
        "Generated {} split with {} training days",
        split_type,
        days_per_week
    );

    Ok(WeeklySplit {
        days_per_week,
        split_type,
        goal: goal.to_string(),
        level: level.to_string(),
        schedule,
        template: template.summary(),
    })
}

/// Generate a weekly split from a raw split-type key.
///
/// Unknown keys have no template and fail like a missing day count.
pub fn generate_split_by_key(
    days_per_week: u8,
    split_key: &str,
    goal: &str,
    level: &str,
) -> Result<WeeklySplit> {
    match SplitType::from_key(split_key) {
        Some(split_type) => generate_split(days_per_week, split_type, goal, level),
        None => Err(Error::SplitNotFound {
            split_type: split_key.to_string(),
            days: days_per_week,
        }),
    }
}

/// Render a split as plain text for export
pub fn export_as_text(split: &WeeklySplit, generated_on: NaiveDate) -> String {
    let mut text = String::from("GymBuddy HQ - Weekly Split\n");
    text.push_str(&format!("Generated: {}\n", generated_on.format("%-m/%-d/%Y")));
    text.push_str(&format!("Split Type: {}\n", split.split_type));
    text.push_str(&format!("Days per Week: {}\n", split.days_per_week));
    text.push_str(&format!("Goal: {}\n\n", split.goal));

    for day in &split.schedule {
        text.push_str(&format!("{}: {}\n", day.day, day.focus));
    }

    text
}

/// Default file name for an exported split
pub fn export_file_name(date: NaiveDate) -> String {
    format!("gymbuddy-split-{}.txt", date.format("%Y-%m-%d"))
}
