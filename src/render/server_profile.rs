//! Provides the renderer for the per-game player profile files.

use super::GameVariant;
use crate::profile::{default_difficulty_name, Profile};
use std::fmt::Write;

/// Renders a profile into the player profile file format for a given game
/// variant.
///
/// The server reads its difficulty configuration from this file rather than
/// the main config. One file per variant is required; callers write all three
/// next to each other under the profile's `Users` directory.
pub fn render_server_profile(profile: &Profile, variant: GameVariant) -> String {
    let difficulty = &profile.difficulty;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "difficulty=\"{}\";",
        default_difficulty_name(difficulty.default_difficulty)
    );
    let _ = writeln!(out, "class DifficultyPresets");
    let _ = writeln!(out, "{{");
    let _ = writeln!(out, "\tclass CustomDifficulty");
    let _ = writeln!(out, "\t{{");

    let _ = writeln!(out, "\t\tclass Options");
    let _ = writeln!(out, "\t\t{{");
    for item in &difficulty.items {
        if item.arma3_only && variant != GameVariant::Arma3 {
            continue;
        }
        let _ = writeln!(out, "\t\t\t{}", item.render());
    }
    let _ = writeln!(out, "\t\t}};");

    let _ = writeln!(out, "\t\taiLevelPreset={};\n", difficulty.ai_level_preset);
    let _ = writeln!(out, "\t\tclass CustomAILevel");
    let _ = writeln!(out, "\t\t{{");
    let _ = writeln!(out, "\t\t\tskillAI={:.2};", difficulty.skill_ai);
    let _ = writeln!(out, "\t\t\tprecisionAI={:.2};", difficulty.precision_ai);
    let _ = writeln!(out, "\t\t}};");
    let _ = writeln!(out, "\t}};\n");
    out.push_str("};");

    out
}
