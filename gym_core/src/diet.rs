//! Goal-specific diet guides.
//!
//! Maintenance has no guide of its own.

use crate::Goal;

/// One section of the plate method, e.g. "1/3 Plate"
#[derive(Clone, Copy, Debug)]
pub struct PlateSection {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct DietGuide {
    pub goal: Goal,
    pub title: &'static str,
    pub template: &'static str,
    pub meal_items: &'static [PlateSection],
    pub protein_options: &'static [&'static str],
    pub snacks: &'static [&'static str],
    pub pre_workout: &'static str,
    pub post_workout: &'static str,
}

const PLATE_METHOD: &str = "Use the \"Plate Method\"";

static GAIN: DietGuide = DietGuide {
    goal: Goal::Gain,
    title: "Weight Gain Guide",
    template: PLATE_METHOD,
    meal_items: &[
        PlateSection {
            label: "1/3 Plate",
            items: &["Rice, potatoes, oats", "Whole grain bread"],
        },
        PlateSection {
            label: "1/3 Plate",
            items: &["Chicken, beef, fish", "Eggs, cottage cheese"],
        },
        PlateSection {
            label: "1/3 Plate",
            items: &["Vegetables", "Fruits (optional)"],
        },
        PlateSection {
            label: "Add-ons",
            items: &["Olive oil or nuts", "Sauces (moderation)"],
        },
    ],
    protein_options: &[
        "Chicken breast & thighs",
        "Beef & ground beef",
        "Salmon & fatty fish",
        "Eggs (whole)",
        "Cottage cheese",
        "Greek yogurt",
        "Protein powder (shakes)",
    ],
    snacks: &[
        "Nut butter + banana",
        "Granola + yogurt",
        "Trail mix",
        "Cheese + crackers",
        "Protein shake + oats",
    ],
    pre_workout: "Oats + banana + almond butter 60 min before",
    post_workout: "Protein + simple carbs within 1-2 hours",
};

static MUSCLE: DietGuide = DietGuide {
    goal: Goal::Muscle,
    title: "Muscle Building Guide",
    template: PLATE_METHOD,
    meal_items: &[
        PlateSection {
            label: "1/3 Plate",
            items: &["Rice, potatoes", "Whole grains (moderate)"],
        },
        PlateSection {
            label: "1/3 Plate",
            items: &["Chicken, lean beef", "Fish, eggs"],
        },
        PlateSection {
            label: "1/3 Plate",
            items: &["Vegetables (lots)", "Leafy greens"],
        },
        PlateSection {
            label: "Add-ons",
            items: &["Olive oil (light)", "Lemon juice, spices"],
        },
    ],
    protein_options: &[
        "Grilled chicken breast",
        "Lean ground beef (93%)",
        "White fish (cod, tilapia)",
        "Egg whites + 1-2 yolks",
        "Greek yogurt (non-fat)",
        "Cottage cheese (low-fat)",
        "Protein powder",
    ],
    snacks: &[
        "Protein shake + berries",
        "Greek yogurt + granola",
        "Tuna + crackers",
        "Cottage cheese",
        "Lean jerky",
    ],
    pre_workout: "Rice cakes + banana 45-60 min before",
    post_workout: "Protein + carbs within 30-60 min (crucial)",
};

static LOSE: DietGuide = DietGuide {
    goal: Goal::Lose,
    title: "Fat Loss Guide",
    template: PLATE_METHOD,
    meal_items: &[
        PlateSection {
            label: "1/2 Plate",
            items: &["Vegetables", "Leafy greens"],
        },
        PlateSection {
            label: "1/4 Plate",
            items: &["Lean protein", "Fish, chicken"],
        },
        PlateSection {
            label: "1/4 Plate",
            items: &["Whole grains", "Brown rice, oats"],
        },
        PlateSection {
            label: "Add-ons",
            items: &["Light olive oil", "Herbs & spices"],
        },
    ],
    protein_options: &[
        "Skinless chicken breast",
        "White fish (cod, tilapia)",
        "Turkey",
        "Lean ground turkey (99%)",
        "Egg whites",
        "Non-fat Greek yogurt",
        "Protein powder (low-cal)",
    ],
    snacks: &[
        "Vegetable + hummus",
        "Protein shake",
        "Air-popped popcorn",
        "Hard-boiled eggs (whites)",
        "Unsweetened Greek yogurt",
    ],
    pre_workout: "Banana alone or coffee 30 min before",
    post_workout: "Protein + modest carbs within 1-2 hours",
};

/// Diet guide for a goal; `None` for maintenance
pub fn guide_for(goal: Goal) -> Option<&'static DietGuide> {
    match goal {
        Goal::Gain => Some(&GAIN),
        Goal::Muscle => Some(&MUSCLE),
        Goal::Lose => Some(&LOSE),
        Goal::Maintain => None,
    }
}

pub fn render_guide(guide: &DietGuide) -> String {
    let mut out = format!("{}\n{}\n\n", guide.title, guide.template);

    for section in guide.meal_items {
        out.push_str(&format!("{}\n", section.label));
        for item in section.items {
            out.push_str(&format!("  - {}\n", item));
        }
    }

    out.push_str("\nEasy Protein Options\n");
    for protein in guide.protein_options {
        out.push_str(&format!("  - {}\n", protein));
    }

    out.push_str("\nSnack Ideas\n");
    for snack in guide.snacks {
        out.push_str(&format!("  - {}\n", snack));
    }

    out.push_str("\nMeal Timing\n");
    out.push_str(&format!("  Pre-workout: {}\n", guide.pre_workout));
    out.push_str(&format!("  Post-workout: {}\n", guide.post_workout));
    out
}
