//! Built-in exercise database and single-session workout builder.

use crate::{Equipment, ExperienceLevel, Exercise, MuscleGroup, Workout};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Exercises kept for beginners, taken from the front of the list
pub const BEGINNER_EXERCISE_LIMIT: usize = 3;

pub const DEFAULT_FORM_CUE: &str = "Focus on proper form and full range of motion.";

type ExerciseTable = HashMap<(MuscleGroup, Equipment), Vec<Exercise>>;

/// Cached exercise database
static EXERCISES: Lazy<ExerciseTable> = Lazy::new(build_exercise_table);

fn ex(name: &str, sets: u32, reps: &str, rest: &str, alternative: &str) -> Exercise {
    Exercise {
        name: name.into(),
        sets,
        reps: reps.into(),
        rest: rest.into(),
        alternative: alternative.into(),
    }
}

fn build_exercise_table() -> ExerciseTable {
    use Equipment::*;
    use MuscleGroup::*;

    let mut table = HashMap::new();

    // ========================================================================
    // Chest
    // ========================================================================

    table.insert(
        (Chest, FullGym),
        vec![
            ex("Barbell Bench Press", 4, "6-8", "2-3 min", "Dumbbell Bench Press"),
            ex("Incline Dumbbell Press", 3, "8-10", "90 sec", "Incline Barbell Press"),
            ex("Cable Flyes", 3, "10-12", "60 sec", "Machine Pec Flyes"),
            ex("Dips", 3, "8-12", "90 sec", "Assisted Dips"),
        ],
    );
    table.insert(
        (Chest, Dumbbells),
        vec![
            ex("Dumbbell Bench Press", 4, "8-10", "2 min", "Floor Press"),
            ex("Incline Dumbbell Press", 3, "8-10", "90 sec", "Pike Push-ups"),
            ex("Dumbbell Flyes", 3, "10-12", "60 sec", "Machine Flyes"),
        ],
    );
    table.insert(
        (Chest, Bodyweight),
        vec![
            ex("Push-ups", 4, "8-12", "60 sec", "Incline Push-ups"),
            ex("Wide-Grip Push-ups", 3, "8-12", "60 sec", "Archer Push-ups"),
            ex("Dips (Bench)", 3, "6-10", "90 sec", "Negative Dips"),
        ],
    );

    // ========================================================================
    // Back
    // ========================================================================

    table.insert(
        (Back, FullGym),
        vec![
            ex("Barbell Deadlift", 3, "4-6", "3 min", "Trap Bar Deadlift"),
            ex("Pull-ups (Weighted)", 3, "6-8", "2 min", "Assisted Pull-ups"),
            ex("Barbell Rows", 4, "6-8", "2 min", "Dumbbell Rows"),
            ex("Lat Pulldown", 3, "8-10", "90 sec", "Machine Rows"),
        ],
    );
    table.insert(
        (Back, Dumbbells),
        vec![
            ex("Dumbbell Rows", 4, "8-10", "90 sec", "Single-Arm Rows"),
            ex("Dumbbell Deadlifts", 3, "8-10", "90 sec", "Single-Leg Deadlifts"),
            ex("Farmer Carries", 3, "30-40 sec", "60 sec", "Shrugs"),
        ],
    );
    table.insert(
        (Back, Bodyweight),
        vec![
            ex("Pull-ups", 3, "5-10", "2 min", "Assisted Pull-ups"),
            ex("Inverted Rows", 3, "8-12", "90 sec", "Door Rows"),
            ex("Superman Holds", 3, "15-20 sec", "60 sec", "Reverse Snow Angels"),
        ],
    );

    // ========================================================================
    // Legs
    // ========================================================================

    table.insert(
        (Legs, FullGym),
        vec![
            ex("Barbell Back Squats", 4, "6-8", "2-3 min", "Goblet Squats"),
            ex("Romanian Deadlifts", 3, "8-10", "90 sec", "Leg Curls"),
            ex("Leg Press", 3, "10-12", "90 sec", "Smith Machine Squats"),
            ex("Leg Extensions", 3, "12-15", "60 sec", "Bulgarian Split Squats"),
        ],
    );
    table.insert(
        (Legs, Dumbbells),
        vec![
            ex("Goblet Squats", 4, "10-12", "90 sec", "Dumbbell Squats"),
            ex("Dumbbell Lunges", 3, "10 each", "60 sec", "Step-ups"),
            ex("Single-Leg Deadlifts", 3, "8-10 each", "90 sec", "Romanian Deadlifts"),
        ],
    );
    table.insert(
        (Legs, Bodyweight),
        vec![
            ex("Bodyweight Squats", 4, "15-20", "60 sec", "Sissy Squats"),
            ex("Bulgarian Split Squats", 3, "10 each", "60 sec", "Lunges"),
            ex("Step-ups", 3, "12 each", "60 sec", "Box Jumps"),
        ],
    );

    // ========================================================================
    // Shoulders
    // ========================================================================

    table.insert(
        (Shoulders, FullGym),
        vec![
            ex("Barbell Overhead Press", 4, "6-8", "2 min", "Dumbbell Press"),
            ex("Lateral Raises", 3, "12-15", "60 sec", "Machine Laterals"),
            ex("Face Pulls", 3, "12-15", "60 sec", "Reverse Flyes"),
            ex("Shrugs", 3, "10-12", "60 sec", "Machine Shrugs"),
        ],
    );
    table.insert(
        (Shoulders, Dumbbells),
        vec![
            ex("Dumbbell Press", 4, "8-10", "90 sec", "Floor Press"),
            ex("Lateral Raises", 3, "12-15", "60 sec", "Upright Rows"),
            ex("Reverse Flyes", 3, "12-15", "60 sec", "Band Pull-aparts"),
        ],
    );
    table.insert(
        (Shoulders, Bodyweight),
        vec![
            ex("Pike Push-ups", 3, "8-12", "90 sec", "Wall Push-ups"),
            ex("Handstand Holds", 3, "15-20 sec", "60 sec", "Shoulder Taps"),
        ],
    );

    // ========================================================================
    // Arms
    // ========================================================================

    table.insert(
        (Arms, FullGym),
        vec![
            ex("Barbell Curls", 3, "8-10", "90 sec", "EZ-Bar Curls"),
            ex("Tricep Rope Pushdowns", 3, "10-12", "60 sec", "Cable Overhead Extension"),
            ex("Dumbbell Curls", 3, "10-12", "60 sec", "Machine Curls"),
            ex("Skull Crushers", 3, "8-10", "90 sec", "Bench Dips"),
        ],
    );
    table.insert(
        (Arms, Dumbbells),
        vec![
            ex("Dumbbell Curls", 3, "10-12", "60 sec", "Hammer Curls"),
            ex("Tricep Extensions", 3, "10-12", "60 sec", "Kickbacks"),
            ex("Hammer Curls", 3, "10-12", "60 sec", "Preacher Curls"),
        ],
    );
    table.insert(
        (Arms, Bodyweight),
        vec![
            ex("Push-up Variations", 3, "10-15", "90 sec", "Dips"),
            ex("Reverse Curls (Towel)", 3, "12-15", "60 sec", "Door Frame Curls"),
        ],
    );

    // ========================================================================
    // Core
    // ========================================================================

    table.insert(
        (Core, FullGym),
        vec![
            ex("Cable Crunches", 3, "12-15", "60 sec", "Machine Crunches"),
            ex("Weighted Cable Woodchops", 3, "10-12 each", "60 sec", "Medicine Ball Twists"),
            ex("Ab Wheel Rollouts", 3, "8-12", "90 sec", "Decline Sit-ups"),
            ex("Machine Leg Raises", 3, "12-15", "60 sec", "Hanging Leg Raises"),
        ],
    );
    table.insert(
        (Core, Dumbbells),
        vec![
            ex("Dumbbell Woodchops", 3, "12-15 each", "60 sec", "Russian Twists"),
            ex("Pallof Press", 3, "10-12 each", "60 sec", "Single-Arm Carries"),
            ex("Dead Bugs", 3, "10-12 each", "60 sec", "Bird Dogs"),
        ],
    );
    table.insert(
        (Core, Bodyweight),
        vec![
            ex("Planks", 3, "30-60 sec", "60 sec", "Side Planks"),
            ex("Mountain Climbers", 3, "20 each", "60 sec", "Burpees"),
            ex("Leg Raises", 3, "8-12", "90 sec", "Lying Leg Raises"),
        ],
    );

    table
}

/// Exercises for a muscle group and equipment, in prescription order.
///
/// Empty when the combination has no entries.
pub fn exercises_for(muscle: MuscleGroup, equipment: Equipment) -> &'static [Exercise] {
    EXERCISES
        .get(&(muscle, equipment))
        .map(|list| list.as_slice())
        .unwrap_or(&[])
}

/// Technique cue for a muscle group
pub fn form_cue(muscle: MuscleGroup) -> &'static str {
    match muscle {
        MuscleGroup::Chest => {
            "Keep shoulders back, chest up. Control the negative, explosive positive."
        }
        MuscleGroup::Back => "Retract scapula first, then pull. Avoid rounding shoulders.",
        MuscleGroup::Legs => "Knees track over toes. Keep chest up, core tight throughout.",
        MuscleGroup::Shoulders => "Avoid momentum. Full range of motion, squeeze at the top.",
        MuscleGroup::Arms => "Isolate the muscle. No swinging or jerking motion.",
        MuscleGroup::Core => "Maintain neutral spine. Breathe steadily, no breath-holding.",
    }
}

/// Technique cue for a raw muscle key, with a generic fallback
pub fn form_cue_for_key(key: &str) -> &'static str {
    MuscleGroup::from_key(key)
        .map(form_cue)
        .unwrap_or(DEFAULT_FORM_CUE)
}

fn warm_up(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Beginner => {
            "Light cardio (2 min) + dynamic stretches + 1-2 warm-up sets at 50% weight"
        }
        _ => "Light cardio (3-5 min) + mobility work + progressive warm-up sets",
    }
}

/// Warm-up length in minutes, as displayed
pub fn warm_up_minutes(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Beginner => "5-7",
        _ => "8-10",
    }
}

/// Build a workout for one muscle group.
///
/// Beginners get the first [`BEGINNER_EXERCISE_LIMIT`] exercises; other
/// levels get the full list. `goal` is display only.
pub fn generate_workout(
    goal: &str,
    muscle: MuscleGroup,
    level: ExperienceLevel,
    equipment: Equipment,
    generated_at: DateTime<Utc>,
) -> Workout {
    let all = exercises_for(muscle, equipment);
    let selected = match level {
        ExperienceLevel::Beginner => &all[..all.len().min(BEGINNER_EXERCISE_LIMIT)],
        _ => all,
    };

    tracing::debug!(
        "Built {} workout: {} of {} exercises",
        muscle.key(),
        selected.len(),
        all.len()
    );

    Workout {
        goal: goal.to_string(),
        muscle,
        level,
        equipment,
        warm_up: warm_up(level).to_string(),
        exercises: selected.to_vec(),
        form_cue: form_cue(muscle).to_string(),
        generated_at,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Plain-text rendering of a workout
pub fn render_workout(workout: &Workout) -> String {
    let mut out = format!("{} Workout\n", capitalize(workout.muscle.key()));
    out.push_str(&format!("Goal: {}\n", capitalize(&workout.goal)));
    out.push_str(&format!("Level: {}\n", capitalize(workout.level.key())));
    out.push_str(&format!("Equipment: {}\n\n", capitalize(workout.equipment.key())));

    out.push_str(&format!(
        "Warm-up ({} min)\n  {}\n\n",
        warm_up_minutes(workout.level),
        workout.warm_up
    ));

    for (idx, exercise) in workout.exercises.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, exercise.name));
        out.push_str(&format!(
            "   Sets x Reps: {} x {}  |  Rest: {}\n",
            exercise.sets, exercise.reps, exercise.rest
        ));
        out.push_str(&format!("   Form Tip: {}\n", workout.form_cue));
        out.push_str(&format!("   Alternative: {}\n", exercise.alternative));
    }

    out
}
