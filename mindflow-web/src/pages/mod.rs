pub mod habits;
pub mod home;
pub mod not_found;
pub mod skills;
pub mod stats;
pub mod store;

use crate::game::Difficulty;

/// Star rating shown next to a habit's difficulty.
#[must_use]
pub const fn difficulty_stars(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "⭐",
        Difficulty::Medium => "⭐⭐",
        Difficulty::Hard => "⭐⭐⭐",
    }
}
