//! Combat formulas.
//!
//! Pure functions with no side effects and no logging; the engine decides
//! what to do with their results.
//!
//! - `calculate_damage`: attack + ability damage − defense, scaled by progression
//! - `calculate_heal`: ability heal scaled by progression
//! - `flee_chance`: speed-weighted escape probability

pub mod damage;
pub mod flee;

pub use damage::{calculate_damage, calculate_heal};
pub use flee::flee_chance;
