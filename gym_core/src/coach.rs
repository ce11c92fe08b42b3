//! "Ask the Coach" chat capability.
//!
//! [`Coach`] is the seam for a real chat backend. [`KeywordCoach`] is the
//! built-in placeholder: it answers from a canned table by keyword match.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Anything that can answer a user message
pub trait Coach {
    fn reply(&mut self, message: &str) -> String;
}

pub const DEFAULT_REPLY: &str = "Great question! For more detailed guidance, feel free to ask \
about specific workouts, nutrition, recovery, or your current goals. I'm here to help! 💪";

struct ResponseGroup {
    keywords: &'static [&'static str],
    responses: &'static [&'static str],
}

/// Checked in order; the first group with a matching keyword answers.
static RESPONSE_GROUPS: &[ResponseGroup] = &[
    ResponseGroup {
        keywords: &["workout", "exercise", "training"],
        responses: &[
            "Great question! Start with compound lifts (squats, deadlifts, presses) for maximum gains. Aim for 3-4 sets of 6-12 reps depending on your goal.",
            "The key to consistent progress is progressive overload. Add weight, reps, or sets each week. Even small increases matter!",
            "Form > Weight. Always. A perfect rep with lighter weight beats a sloppy rep with heavy weight. Slow down and control the movement.",
            "Remember: train hard, eat right, sleep well, and be patient. Muscle building takes time. Trust the process! 💪",
        ],
    },
    ResponseGroup {
        keywords: &["calorie", "nutrition", "diet", "food", "eat"],
        responses: &[
            "Your daily calories are the foundation. Don't go too extreme—aim for a small deficit (500 cal/day) for fat loss or small surplus for gains.",
            "Protein is your friend! Aim for 0.8-1.1g per lb of body weight. Spread it throughout the day for better muscle protein synthesis.",
            "Track your calories for 2-3 weeks to see what your typical intake is. Then make small adjustments. Consistency beats perfection!",
            "Don't eliminate food groups. Balance whole foods (80%) with some flexibility (20%). Sustainable > Extreme.",
        ],
    },
    ResponseGroup {
        keywords: &["split", "routine", "program", "plan"],
        responses: &[
            "A good split depends on your frequency. 3x/week? Full body. 4x/week? Upper/Lower. 5-6x/week? Push/Pull/Legs. Pick consistency over perfection.",
            "Make sure you're hitting each muscle group 2x per week minimum for optimal growth. Rest days between same muscle groups matter.",
            "New to training? Start with 3 days/week full body. Learn compound lifts. Build a strong foundation before advanced splits.",
            "Don't overthink your split. The best program is the one you'll stick to. Consistency > Optimal programming.",
        ],
    },
    ResponseGroup {
        keywords: &["recovery", "sleep", "rest", "soreness"],
        responses: &[
            "Sleep is where the magic happens! Aim for 7-9 hours. That's when your muscles repair and hormones regulate. Don't skip it!",
            "DOMS (soreness) is normal after new stimulus, but it's not required for progress. Soreness ≠ effective workout.",
            "Active recovery helps: light walking, yoga, or mobility work on off days. Boosts blood flow and reduces soreness.",
            "Listen to your body. Fatigue > Soreness. If you're always sore, dial back volume or increase recovery.",
        ],
    },
    ResponseGroup {
        keywords: &["beginner", "start", "new", "first"],
        responses: &[
            "Welcome! Start with basics: compound lifts (squat, bench, deadlift, rows), proper form, and consistency. Master these first!",
            "Don't compare yourself to advanced lifters. Everyone starts at day 1. Focus on YOUR progress. Celebrate small wins!",
            "First 3-6 months: build habit and learn technique. Expect fast progress. Keep a log to track lifts and stay motivated.",
            "Your main goal now: show up consistently and move well. Everything else follows from that.",
        ],
    },
    ResponseGroup {
        keywords: &["goal", "fat loss", "weight loss", "cut"],
        responses: &[
            "Fat loss = Consistent calorie deficit over weeks. Aim for 0.5-1% body weight loss per week (sustainable).",
            "Don't cut calories too low. You need energy to train hard. A moderate deficit (500 cal/day) + training = best results.",
            "Maintain high protein during a cut to preserve muscle. Strength training is essential—don't just do cardio!",
            "Fat loss isn't linear. Scale fluctuates. Track weekly averages instead. Take progress photos—they're honest!",
        ],
    },
    ResponseGroup {
        keywords: &["muscle", "gain", "bulk", "mass"],
        responses: &[
            "Muscle gain = slight calorie surplus + heavy lifting + protein. A small surplus (300-500 cal/day) minimizes fat gain.",
            "Lift heavy, progressively overload, eat enough protein. If you're not gaining weight over 2-3 weeks, eat more.",
            "Expect 0.5-1 lb weight gain per week on a bulk. Some fat gain is normal—don't stress about clean eating obsession.",
            "Patience. Building muscle takes time. 1-2 lbs of lean muscle per month is great progress. Stay consistent!",
        ],
    },
    ResponseGroup {
        keywords: &["strength", "strong", "power"],
        responses: &[
            "Strength comes from progressive overload + adequate rest. Aim for 3-6 reps per set with challenging weight.",
            "Compound lifts are king for strength. Squat, bench, deadlift, rows. Master these and everything else follows.",
            "Don't skip warm-ups or cool-downs. Your CNS needs preparation. 2-3 min rest between heavy sets ensures best performance.",
            "Track your lifts! Write down weights and reps. Aim to increase slightly each week. Small progress = big results over time.",
        ],
    },
    ResponseGroup {
        keywords: &["equipment", "gym", "home", "dumbbell", "bodyweight"],
        responses: &[
            "You can build serious muscle with minimal equipment! Dumbbells, a pull-up bar, and a bench are enough. Bodyweight works too.",
            "Limited equipment? Focus on density (more reps/sets). Quality execution matters more than fancy machines.",
            "Adjust exercises based on what you have. Dumbbell variations exist for almost every compound lift. Be creative!",
            "A full gym is nice, but consistency with limited equipment > fancy gym with no consistency.",
        ],
    },
];

/// Canned-response coach that picks a random reply from the first keyword
/// group contained in the message.
pub struct KeywordCoach<R: Rng> {
    rng: R,
}

impl KeywordCoach<StdRng> {
    /// Coach seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Coach with reproducible replies
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> KeywordCoach<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Keyword group that answers `message`, if any
    fn matching_group(message: &str) -> Option<&'static ResponseGroup> {
        let lower = message.to_lowercase();
        RESPONSE_GROUPS
            .iter()
            .find(|group| group.keywords.iter().any(|k| lower.contains(k)))
    }
}

impl<R: Rng> Coach for KeywordCoach<R> {
    fn reply(&mut self, message: &str) -> String {
        match Self::matching_group(message) {
            Some(group) => group
                .responses
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(DEFAULT_REPLY)
                .to_string(),
            None => {
                tracing::debug!("No coach keyword matched, using default reply");
                DEFAULT_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_containing(reply: &str) -> Option<usize> {
        RESPONSE_GROUPS
            .iter()
            .position(|g| g.responses.contains(&reply))
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let mut coach = KeywordCoach::seeded(7);
        let reply = coach.reply("How should I plan my WORKOUT?");
        // "workout" group is checked before "plan"
        assert_eq!(group_containing(&reply), Some(0));
    }

    #[test]
    fn test_nutrition_keywords() {
        let mut coach = KeywordCoach::seeded(1);
        let reply = coach.reply("What should I eat after lifting?");
        assert_eq!(group_containing(&reply), Some(1));
    }

    #[test]
    fn test_no_match_gives_default() {
        let mut coach = KeywordCoach::seeded(1);
        assert_eq!(coach.reply("hello there"), DEFAULT_REPLY);
        assert_eq!(coach.reply(""), DEFAULT_REPLY);
    }

    #[test]
    fn test_replies_keep_original_wording() {
        assert!(DEFAULT_REPLY.starts_with("Great question! For more detailed guidance, feel free to ask about"));
        assert!(DEFAULT_REPLY.ends_with("I'm here to help! 💪"));
        assert!(RESPONSE_GROUPS[3].responses.contains(
            &"DOMS (soreness) is normal after new stimulus, but it's not required for progress. Soreness ≠ effective workout."
        ));
        assert!(RESPONSE_GROUPS[5].responses.contains(
            &"Maintain high protein during a cut to preserve muscle. Strength training is essential—don't just do cardio!"
        ));
        for group in RESPONSE_GROUPS {
            assert_eq!(group.responses.len(), 4);
        }
    }

    #[test]
    fn test_seeded_coach_is_reproducible() {
        let mut a = KeywordCoach::seeded(42);
        let mut b = KeywordCoach::seeded(42);
        for _ in 0..5 {
            assert_eq!(a.reply("tips for sleep"), b.reply("tips for sleep"));
        }
    }

    #[test]
    fn test_coach_as_trait_object() {
        struct Echo;
        impl Coach for Echo {
            fn reply(&mut self, message: &str) -> String {
                message.to_uppercase()
            }
        }

        let mut coaches: Vec<Box<dyn Coach>> =
            vec![Box::new(Echo), Box::new(KeywordCoach::seeded(3))];
        assert_eq!(coaches[0].reply("bulk"), "BULK");
        let reply = coaches[1].reply("bulk");
        assert_eq!(group_containing(&reply), Some(6));
    }
}
