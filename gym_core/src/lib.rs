#![forbid(unsafe_code)]

//! Core domain model and computation for GymBuddy.
//!
//! This crate provides:
//! - Domain types (body metrics, goals, activity levels, weekly splits)
//! - Metabolic calculator (BMR, TDEE, calorie target, protein, hydration)
//! - Weekly split generator and text export
//! - Workout builder and diet guides backed by static tables
//! - Coach chat capability (canned keyword replies)
//! - Saved plan persistence and configuration

pub mod types;
pub mod error;
pub mod units;
pub mod metabolic;
pub mod schedule;
pub mod workout;
pub mod diet;
pub mod coach;
pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use metabolic::{calculate, compute_bmr, compute_protein_range, compute_target, compute_tdee};
pub use schedule::{export_as_text, generate_split};
pub use workout::generate_workout;
pub use diet::guide_for;
pub use coach::{Coach, KeywordCoach};
pub use store::{SavedEntry, SavedPlan, SavedPlans};
