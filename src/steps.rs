//! Build plan generation: ordered steps, summary metrics and the combined guide.

use crate::config::Customizations;
use crate::configuration::{generate_id, KeyboardConfiguration};
use crate::difficulty::{assess_build_difficulty, common_mistakes, BuildDifficulty, CommonMistake};
use crate::geometry::KeyboardLayout;
use serde::Serialize;
use strum_macros::{Display, EnumString};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Minutes.
    pub estimated_time: u32,
    pub tools: Vec<String>,
    pub tips: Vec<String>,
    pub warnings: Vec<String>,
    pub order: u32,
}

struct StepTemplate {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    minutes: u32,
    tools: &'static [&'static str],
    tips: &'static [&'static str],
    warnings: &'static [&'static str],
    applies: fn(u8) -> bool,
}

impl StepTemplate {
    fn emit(&self, order: u32) -> BuildStep {
        BuildStep {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            images: Vec::new(),
            video_url: None,
            estimated_time: self.minutes,
            tools: owned(self.tools),
            tips: owned(self.tips),
            warnings: owned(self.warnings),
            order,
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn always(_: u8) -> bool {
    true
}

fn at_least_easy(level: u8) -> bool {
    level >= 2
}

fn at_least_intermediate(level: u8) -> bool {
    level >= 3
}

// Hot-swap only; soldered builds seat switches while soldering.
fn hot_swap(level: u8) -> bool {
    level == 1 || level == 2
}

// Emission order is table order.
const STEP_TEMPLATES: [StepTemplate; 8] = [
    StepTemplate {
        id: "planning",
        title: "Planning and Preparation",
        description: "Gather all components and tools, prepare workspace",
        minutes: 30,
        tools: &["Clean workspace", "Good lighting", "Anti-static mat"],
        tips: &[
            "Lay out all components to verify you have everything",
            "Read through entire guide before starting",
            "Have a backup plan for common issues",
        ],
        warnings: &[
            "Static electricity can damage PCBs",
            "Keep small parts organized to avoid losing them",
        ],
        applies: always,
    },
    StepTemplate {
        id: "stabilizers",
        title: "Stabilizer Preparation",
        description: "Tune and lube stabilizers for smooth operation",
        minutes: 45,
        tools: &["Screwdriver", "Lube brush", "Stabilizer lubricant"],
        tips: &[
            "Clip stabilizer feet for better sound",
            "Band-aid mod the PCB for reduced rattle",
            "Test stabilizers before final assembly",
        ],
        warnings: &[
            "Don't over-lube - it will make keys sluggish",
            "Ensure wires are properly seated",
        ],
        applies: at_least_easy,
    },
    StepTemplate {
        id: "soldering",
        title: "Switch Soldering",
        description: "Solder switches to PCB with clean, strong joints",
        minutes: 120,
        tools: &["Soldering iron", "Solder", "Flux", "Desoldering pump"],
        tips: &[
            "Heat both pad and pin simultaneously",
            "Use flux for cleaner joints",
            "Work in good ventilation",
        ],
        warnings: &[
            "Don't overheat - can damage PCB traces",
            "Check each joint before moving on",
            "Test PCB functionality before case assembly",
        ],
        applies: at_least_intermediate,
    },
    StepTemplate {
        id: "switches",
        title: "Switch Installation",
        description: "Install switches into hot-swap sockets",
        minutes: 30,
        tools: &["Switch puller (optional)"],
        tips: &[
            "Align switch pins carefully",
            "Press firmly but don't force",
            "Test each switch after installation",
        ],
        warnings: &[
            "Bent pins can damage hot-swap sockets",
            "Ensure switches are fully seated",
        ],
        applies: hot_swap,
    },
    StepTemplate {
        id: "case-assembly",
        title: "Case Assembly",
        description: "Install PCB and plate into case",
        minutes: 20,
        tools: &["Screwdriver"],
        tips: &[
            "Don't overtighten screws",
            "Check for proper alignment",
            "Add foam dampening if desired",
        ],
        warnings: &[
            "Stripped screws are difficult to remove",
            "Ensure no components are pinched",
        ],
        applies: always,
    },
    StepTemplate {
        id: "keycaps",
        title: "Keycap Installation",
        description: "Install keycaps according to layout",
        minutes: 15,
        tools: &["Keycap puller"],
        tips: &[
            "Start with larger keys (spacebar, shifts)",
            "Check keycap orientation",
            "Press down evenly",
        ],
        warnings: &[
            "Don't rock keycaps side to side",
            "Ensure proper seating on switch stems",
        ],
        applies: always,
    },
    StepTemplate {
        id: "firmware",
        title: "Firmware Installation",
        description: "Flash custom firmware and test all keys",
        minutes: 30,
        tools: &["Computer", "USB cable", "QMK Toolbox"],
        tips: &[
            "Backup original firmware first",
            "Test all keys and layers",
            "Configure macros and special functions",
        ],
        warnings: &[
            "Wrong firmware can brick the PCB",
            "Always verify before flashing",
        ],
        applies: at_least_intermediate,
    },
    StepTemplate {
        id: "testing",
        title: "Final Testing and Tuning",
        description: "Comprehensive testing and fine-tuning",
        minutes: 30,
        tools: &["Key tester software"],
        tips: &[
            "Test every key and combination",
            "Check RGB lighting if applicable",
            "Fine-tune any remaining issues",
        ],
        warnings: &[
            "Document any issues for future reference",
            "Keep spare components for repairs",
        ],
        applies: always,
    },
];

/// Emits the build steps for `difficulty`, numbered from 1 without gaps.
///
/// Only the difficulty level decides which steps appear. The configuration
/// and customizations are accepted so callers can pass the full build
/// context; they do not change the output.
pub fn generate_build_steps(
    difficulty: &BuildDifficulty,
    configuration: &KeyboardConfiguration,
    customizations: &Customizations,
) -> Vec<BuildStep> {
    let mut order = 0;
    let steps: Vec<BuildStep> = STEP_TEMPLATES
        .iter()
        .filter(|t| (t.applies)(difficulty.level))
        .map(|t| {
            order += 1;
            t.emit(order)
        })
        .collect();

    debug!(
        configuration = %configuration.id,
        level = difficulty.level,
        custom_pcb = customizations.custom_pcb,
        steps = steps.len(),
        "generated build steps"
    );

    steps
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn for_level(level: u8) -> Self {
        match level {
            0..=2 => RiskLevel::Low,
            3 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetrics {
    /// Minutes.
    pub total_time: u32,
    /// USD.
    pub tool_cost: u32,
    pub skills_needed: Vec<String>,
    pub risk_level: RiskLevel,
}

pub fn calculate_build_metrics(difficulty: &BuildDifficulty, steps: &[BuildStep]) -> BuildMetrics {
    BuildMetrics {
        total_time: steps.iter().map(|s| s.estimated_time).sum(),
        tool_cost: difficulty
            .tools_needed
            .iter()
            .map(|t| t.estimated_cost.unwrap_or(0))
            .sum(),
        skills_needed: difficulty
            .skills_required
            .iter()
            .map(|s| s.name.to_string())
            .collect(),
        risk_level: RiskLevel::for_level(difficulty.level),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildGuide {
    pub id: String,
    pub steps: Vec<BuildStep>,
    /// Minutes.
    pub total_time: u32,
    pub difficulty: &'static BuildDifficulty,
    pub tips: Vec<String>,
    pub common_mistakes: &'static [CommonMistake],
}

pub fn create_build_guide(
    configuration: &KeyboardConfiguration,
    layout: &KeyboardLayout,
    customizations: &Customizations,
) -> BuildGuide {
    let difficulty = assess_build_difficulty(configuration, layout, customizations);
    let steps = generate_build_steps(difficulty, configuration, customizations);
    let total_time = steps.iter().map(|s| s.estimated_time).sum();

    BuildGuide {
        id: generate_id(),
        steps,
        total_time,
        difficulty,
        tips: difficulty.requirements.iter().map(|r| r.to_string()).collect(),
        common_mistakes: common_mistakes(difficulty.level),
    }
}
