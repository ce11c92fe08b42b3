use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use gym_core::metabolic::render_report;
use gym_core::schedule::{export_file_name, generate_split_by_key, templates, validate_templates};
use gym_core::workout::render_workout;
use gym_core::*;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "gymbuddy")]
#[command(about = "Workout plans, calorie targets and weekly training splits", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate BMR, TDEE, calorie target, protein and hydration
    ///
    /// Values left out are taken from the last saved settings.
    Calories {
        /// male, female or unspecified
        #[arg(long)]
        sex: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        /// Centimetres, or inches with --units imperial
        #[arg(long)]
        height: Option<f64>,

        /// Kilograms, or pounds with --units imperial
        #[arg(long)]
        weight: Option<f64>,

        /// sedentary, light, moderate, active, very-active
        #[arg(long)]
        activity: Option<String>,

        /// maintain, lose, gain, muscle
        #[arg(long)]
        goal: Option<String>,

        /// metric or imperial (defaults to saved settings, then config)
        #[arg(long)]
        units: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Save the result and remember these settings
        #[arg(long)]
        save: bool,
    },

    /// Generate a weekly training split
    Split {
        /// Training days per week
        #[arg(long)]
        days: u8,

        /// full-body, upper-lower or ppl
        #[arg(long = "type")]
        split_type: String,

        #[arg(long, default_value = "maintain")]
        goal: String,

        #[arg(long, default_value = "beginner")]
        level: String,

        /// Write the split as text to a file or into a directory
        #[arg(long)]
        export: Option<PathBuf>,

        /// Save the split
        #[arg(long)]
        save: bool,
    },

    /// Build a single-session workout for one muscle group
    Workout {
        #[arg(long, default_value = "strength")]
        goal: String,

        /// chest, back, legs, shoulders, arms, core
        #[arg(long)]
        muscle: String,

        /// beginner, intermediate, advanced
        #[arg(long, default_value = "beginner")]
        level: String,

        /// full-gym, dumbbells, bodyweight
        #[arg(long, default_value = "full-gym")]
        equipment: String,

        /// Save the workout
        #[arg(long)]
        save: bool,
    },

    /// Show the diet guide for a goal
    Diet {
        /// gain, muscle, lose
        #[arg(long)]
        goal: String,
    },

    /// Ask the coach a question
    Coach {
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Manage saved plans
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
}

#[derive(Subcommand)]
enum SavedAction {
    /// List saved plans
    List,
    /// Show one saved plan
    Show { id: String },
    /// Delete a saved plan
    Delete { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    gym_core::logging::init(cli.verbose);

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let plans_path = data_dir.join(gym_core::store::PLANS_FILE);

    match cli.command {
        Commands::Calories {
            sex,
            age,
            height,
            weight,
            activity,
            goal,
            units,
            json,
            save,
        } => {
            let units = match units {
                Some(key) => Some(UnitSystem::from_key(&key).ok_or_else(|| {
                    Error::InvalidInput(format!("Unknown unit system: {} (metric, imperial)", key))
                })?),
                None => None,
            };
            let flags = CalorieFlags {
                sex,
                age,
                height,
                weight,
                activity,
                goal,
                units,
            };
            let saved = SavedPlans::load(&plans_path)?.calorie_settings;
            let request = resolve_calorie_request(flags, saved.as_ref(), config.units.system)?;
            cmd_calories(&plans_path, request, &config, json, save)
        }
        Commands::Split {
            days,
            split_type,
            goal,
            level,
            export,
            save,
        } => cmd_split(&plans_path, days, &split_type, &goal, &level, export, save),
        Commands::Workout {
            goal,
            muscle,
            level,
            equipment,
            save,
        } => cmd_workout(&plans_path, &goal, &muscle, &level, &equipment, save),
        Commands::Diet { goal } => cmd_diet(&goal),
        Commands::Coach { message } => cmd_coach(&message.join(" "), &config),
        Commands::Saved { action } => cmd_saved(&plans_path, action),
    }
}

/// Calculator inputs given on the command line
struct CalorieFlags {
    sex: Option<String>,
    age: Option<u32>,
    height: Option<f64>,
    weight: Option<f64>,
    activity: Option<String>,
    goal: Option<String>,
    units: Option<UnitSystem>,
}

/// Fill missing flags from the saved settings
///
/// Saved height and weight are converted when the unit system differs.
fn resolve_calorie_request(
    flags: CalorieFlags,
    saved: Option<&CalorieRequest>,
    default_units: UnitSystem,
) -> Result<CalorieRequest> {
    let unit_system = flags
        .units
        .or(saved.map(|s| s.unit_system))
        .unwrap_or(default_units);

    let missing = |what: &str| {
        Error::InvalidInput(format!(
            "Missing --{} and no saved calorie settings to fall back on",
            what
        ))
    };

    let age_years = match (flags.age, saved) {
        (Some(age), _) => age,
        (None, Some(s)) => s.age_years,
        (None, None) => return Err(missing("age")),
    };
    let height = match (flags.height, saved) {
        (Some(height), _) => height,
        (None, Some(s)) => convert_height(s.height, s.unit_system, unit_system),
        (None, None) => return Err(missing("height")),
    };
    let weight = match (flags.weight, saved) {
        (Some(weight), _) => weight,
        (None, Some(s)) => convert_weight(s.weight, s.unit_system, unit_system),
        (None, None) => return Err(missing("weight")),
    };

    Ok(CalorieRequest {
        unit_system,
        sex: match flags.sex {
            Some(key) => Sex::from_key(&key),
            None => saved.map(|s| s.sex).unwrap_or(Sex::Unspecified),
        },
        age_years,
        height,
        weight,
        activity: match flags.activity {
            Some(key) => ActivityLevel::from_key(&key),
            None => saved.map(|s| s.activity).unwrap_or(ActivityLevel::Sedentary),
        },
        goal: match flags.goal {
            Some(key) => Goal::from_key(&key),
            None => saved.map(|s| s.goal).unwrap_or(Goal::Maintain),
        },
    })
}

fn convert_height(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::Metric, UnitSystem::Imperial) => gym_core::units::cm_to_inches(value),
        (UnitSystem::Imperial, UnitSystem::Metric) => gym_core::units::inches_to_cm(value),
        _ => value,
    }
}

fn convert_weight(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::Metric, UnitSystem::Imperial) => gym_core::units::kg_to_lb(value),
        (UnitSystem::Imperial, UnitSystem::Metric) => gym_core::units::lb_to_kg(value),
        _ => value,
    }
}

fn cmd_calories(
    plans_path: &Path,
    request: CalorieRequest,
    config: &Config,
    json: bool,
    save: bool,
) -> Result<()> {
    let result = calculate(&request, config.nutrition.protein_basis);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result));
    }

    if save {
        let id = SavedPlans::update(plans_path, |plans| {
            plans.calorie_settings = Some(request.clone());
            Ok(plans.add(SavedPlan::Calories { request, result }, Utc::now()))
        })?;
        println!("\n✓ Saved as {}", id);
    }

    Ok(())
}

fn cmd_split(
    plans_path: &Path,
    days: u8,
    split_type: &str,
    goal: &str,
    level: &str,
    export: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let errors = validate_templates(templates());
    if !errors.is_empty() {
        eprintln!("Split template errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::Config("Invalid split templates".into()));
    }

    let split = match generate_split_by_key(days, split_type, goal, level) {
        Ok(split) => split,
        Err(Error::SplitNotFound { split_type, days }) => {
            println!(
                "No template available for {} with {} days per week.",
                split_type, days
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    display_split(&split);

    if let Some(target) = export {
        let today = Local::now().date_naive();
        let path = if target.is_dir() {
            target.join(export_file_name(today))
        } else {
            target
        };
        std::fs::write(&path, export_as_text(&split, today))?;
        tracing::info!("Exported split to {:?}", path);
        println!("\n✓ Split exported to {}", path.display());
    }

    if save {
        let id = SavedPlans::update(plans_path, |plans| {
            Ok(plans.add(SavedPlan::Split(split), Utc::now()))
        })?;
        println!("\n✓ Saved as {}", id);
    }

    Ok(())
}

fn display_split(split: &WeeklySplit) {
    println!(
        "\n{} split, {} days per week (goal: {}, level: {})",
        split.split_type, split.days_per_week, split.goal, split.level
    );
    println!("  {}", split.template);
    println!();
    for day in &split.schedule {
        let badge = if day.is_rest_day { "REST" } else { "TRAIN" };
        println!("  {}  {:<12} {}", day.day, day.focus, badge);
    }
}

fn parse_key<T>(key: &str, what: &str, options: &[&str], parse: fn(&str) -> Option<T>) -> Result<T> {
    parse(key).ok_or_else(|| {
        Error::InvalidInput(format!(
            "Unknown {}: {} ({})",
            what,
            key,
            options.join(", ")
        ))
    })
}

fn cmd_workout(
    plans_path: &Path,
    goal: &str,
    muscle: &str,
    level: &str,
    equipment: &str,
    save: bool,
) -> Result<()> {
    let muscle_options: Vec<_> = MuscleGroup::ALL.iter().map(|m| m.key()).collect();
    let equipment_options: Vec<_> = Equipment::ALL.iter().map(|e| e.key()).collect();

    let muscle = parse_key(muscle, "muscle group", &muscle_options, MuscleGroup::from_key)?;
    let equipment = parse_key(equipment, "equipment", &equipment_options, Equipment::from_key)?;
    let level = parse_key(
        level,
        "level",
        &["beginner", "intermediate", "advanced"],
        ExperienceLevel::from_key,
    )?;

    let workout = generate_workout(goal, muscle, level, equipment, Utc::now());
    print!("{}", render_workout(&workout));

    if save {
        let id = SavedPlans::update(plans_path, |plans| {
            Ok(plans.add(SavedPlan::Workout(workout), Utc::now()))
        })?;
        println!("\n✓ Saved as {}", id);
    }

    Ok(())
}

fn cmd_diet(goal: &str) -> Result<()> {
    let goal = Goal::from_key(goal);
    match guide_for(goal) {
        Some(guide) => print!("{}", gym_core::diet::render_guide(guide)),
        None => println!("No diet guide for {}. Choose gain, muscle or lose.", goal),
    }
    Ok(())
}

fn cmd_coach(message: &str, config: &Config) -> Result<()> {
    let mut coach: Box<dyn Coach> = match config.coach.seed {
        Some(seed) => Box::new(KeywordCoach::seeded(seed)),
        None => Box::new(KeywordCoach::from_entropy()),
    };
    println!("{}", coach.reply(message));
    Ok(())
}

fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|e| Error::InvalidInput(format!("Invalid id {}: {}", id, e)))
}

fn cmd_saved(plans_path: &Path, action: SavedAction) -> Result<()> {
    match action {
        SavedAction::List => {
            let plans = SavedPlans::load(plans_path)?;
            if plans.list().is_empty() {
                println!("No saved plans.");
                return Ok(());
            }
            for entry in plans.list() {
                println!(
                    "{}  {:<8}  {}  {}",
                    entry.id,
                    entry.plan.kind(),
                    entry.saved_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
                    entry.plan.title()
                );
            }
        }
        SavedAction::Show { id } => {
            let id = parse_id(&id)?;
            let plans = SavedPlans::load(plans_path)?;
            let entry = plans.get(id).ok_or(Error::EntryNotFound(id))?;
            match &entry.plan {
                SavedPlan::Workout(workout) => print!("{}", render_workout(workout)),
                SavedPlan::Split(split) => print!(
                    "{}",
                    export_as_text(split, entry.saved_at.with_timezone(&Local).date_naive())
                ),
                SavedPlan::Calories { result, .. } => print!("{}", render_report(result)),
            }
        }
        SavedAction::Delete { id } => {
            let id = parse_id(&id)?;
            SavedPlans::update(plans_path, |plans| plans.remove(id))?;
            println!("✓ Deleted {}", id);
        }
    }
    Ok(())
}
