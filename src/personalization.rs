use crate::config::UserExperience;
use crate::consts::LIMITED_TIME_HOURS;
use crate::difficulty::{BuildDifficulty, DIFFICULTY_LEVELS};
use serde::Serialize;
use tracing::debug;

pub const FEATURE_CUSTOM_FIRMWARE: &str = "custom-firmware";
pub const FEATURE_CUSTOM_PCB: &str = "custom-pcb";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommended_level: u8,
    pub reasoning: Vec<String>,
    /// Catalog levels within one of the recommendation, itself included.
    pub alternatives: Vec<&'static BuildDifficulty>,
}

/// Rule-based level suggestion. Rules run in a fixed order and each one that
/// fires appends a line to `reasoning`; later rules may override earlier ones.
pub fn get_personalized_difficulty(
    experience: &UserExperience,
    desired_features: &[String],
) -> Recommendation {
    let mut level: u8 = 1;
    let mut reasoning = Vec::new();
    let wants = |feature: &str| desired_features.iter().any(|f| f == feature);

    match experience.builds_completed {
        0 => reasoning.push("Starting with beginner level for first build"),
        1..=2 => {
            level = (level + 1).min(2);
            reasoning.push("Previous build experience allows for easy level");
        }
        _ => {
            level = (level + 2).min(3);
            reasoning.push("Multiple builds completed - intermediate level suitable");
        }
    }

    if experience.soldering_experience && level < 3 {
        level = 3;
        reasoning.push("Soldering experience opens up intermediate builds");
    }

    if experience.time_available < LIMITED_TIME_HOURS {
        level = level.min(2);
        reasoning.push("Limited time suggests simpler build");
    }

    if wants(FEATURE_CUSTOM_FIRMWARE) {
        level = level.max(3);
        reasoning.push("Custom firmware requires intermediate skills");
    }

    if wants(FEATURE_CUSTOM_PCB) {
        level = level.max(4);
        reasoning.push("Custom PCB requires advanced skills");
    }

    let alternatives = DIFFICULTY_LEVELS
        .iter()
        .filter(|d| d.level.abs_diff(level) <= 1)
        .collect();

    debug!(
        builds = experience.builds_completed,
        tools = experience.tools_available.len(),
        level,
        "personalized difficulty"
    );

    Recommendation {
        recommended_level: level,
        reasoning: reasoning.into_iter().map(String::from).collect(),
        alternatives,
    }
}
