use crate::config::Customizations;
use crate::configuration::KeyboardConfiguration;
use crate::consts::{
    FULL_SIZE_KEY_THRESHOLD, LAYER_COMPLEXITY_THRESHOLD, MACRO_COUNT_THRESHOLD,
    MAX_DIFFICULTY_LEVEL, MIN_DIFFICULTY_LEVEL,
};
use crate::geometry::{KeyboardCategory, KeyboardLayout};
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Minor,
    Moderate,
    Major,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
    /// USD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<u32>,
    pub alternatives: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDifficulty {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    /// Hours.
    pub estimated_time: u32,
    pub tools_needed: &'static [Tool],
    pub skills_required: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonMistake {
    pub title: &'static str,
    pub description: &'static str,
    pub prevention: &'static str,
    pub fix: &'static str,
    pub severity: Severity,
}

const fn tool(
    name: &'static str,
    required: bool,
    description: &'static str,
    estimated_cost: u32,
) -> Tool {
    Tool {
        name,
        required,
        description,
        estimated_cost: Some(estimated_cost),
        alternatives: &[],
    }
}

const fn skill(name: &'static str, level: SkillLevel, description: &'static str) -> Skill {
    Skill {
        name,
        level,
        description,
    }
}

pub static DIFFICULTY_LEVELS: [BuildDifficulty; 5] = [
    BuildDifficulty {
        level: 1,
        name: "Beginner",
        description: "Perfect first build - hot-swap PCB, no soldering required",
        requirements: &[
            "Hot-swap PCB",
            "Pre-built case and plate",
            "Switches and keycaps only",
        ],
        estimated_time: 2,
        tools_needed: &[
            tool("Keycap puller", true, "For installing keycaps safely", 5),
            tool("Switch puller", false, "Helpful for switch removal", 8),
        ],
        skills_required: &[skill(
            "Basic assembly",
            SkillLevel::Basic,
            "Ability to follow instructions and handle small parts",
        )],
    },
    BuildDifficulty {
        level: 2,
        name: "Easy",
        description: "Simple modifications - stabilizer tuning, basic lubing",
        requirements: &[
            "Hot-swap or mill-max PCB",
            "Stabilizer modification",
            "Switch lubing (optional)",
        ],
        estimated_time: 4,
        tools_needed: &[
            tool("Screwdriver set", true, "For case and stabilizer screws", 15),
            tool("Lube brush", false, "For applying switch lubricant", 3),
            tool("Switch lubricant", false, "Krytox 205g0 or similar", 12),
        ],
        skills_required: &[
            skill(
                "Fine motor skills",
                SkillLevel::Basic,
                "Precision work with small components",
            ),
            skill(
                "Following tutorials",
                SkillLevel::Basic,
                "Ability to follow video guides",
            ),
        ],
    },
    BuildDifficulty {
        level: 3,
        name: "Intermediate",
        description: "Through-hole soldering, custom firmware, case modifications",
        requirements: &[
            "Through-hole soldering",
            "Custom firmware flashing",
            "Case foam/dampening",
        ],
        estimated_time: 8,
        tools_needed: &[
            tool("Soldering iron", true, "60W temperature controlled iron", 40),
            tool("Solder", true, "60/40 rosin core solder", 8),
            tool("Flux", true, "For clean solder joints", 10),
            tool("Desoldering pump", false, "For fixing mistakes", 15),
        ],
        skills_required: &[
            skill(
                "Basic soldering",
                SkillLevel::Intermediate,
                "Clean through-hole solder joints",
            ),
            skill(
                "Firmware basics",
                SkillLevel::Basic,
                "Using QMK Toolbox or VIA",
            ),
        ],
    },
    BuildDifficulty {
        level: 4,
        name: "Advanced",
        description: "SMD soldering, PCB modifications, custom layouts",
        requirements: &[
            "SMD component soldering",
            "PCB trace modifications",
            "Custom layout design",
        ],
        estimated_time: 15,
        tools_needed: &[
            tool(
                "SMD soldering station",
                true,
                "Temperature controlled with fine tip",
                80,
            ),
            tool("Microscope/magnifier", true, "For SMD component work", 50),
            tool("Hot air station", false, "For component removal", 60),
            tool("Multimeter", true, "For continuity testing", 25),
        ],
        skills_required: &[
            skill(
                "SMD soldering",
                SkillLevel::Advanced,
                "Precise work with tiny components",
            ),
            skill(
                "PCB design",
                SkillLevel::Intermediate,
                "Understanding of PCB layout",
            ),
            skill(
                "Firmware development",
                SkillLevel::Intermediate,
                "Custom QMK configuration",
            ),
        ],
    },
    BuildDifficulty {
        level: 5,
        name: "Expert",
        description: "PCB design, case manufacturing, full custom builds",
        requirements: &[
            "PCB design and manufacturing",
            "Case design and machining",
            "Custom firmware development",
        ],
        estimated_time: 40,
        tools_needed: &[
            // KiCad is free.
            tool("PCB design software", true, "KiCad, Altium, or Eagle", 0),
            // Monthly subscription.
            tool("CAD software", true, "Fusion 360, SolidWorks, etc.", 60),
            tool("3D printer", false, "For prototyping cases", 300),
            // Per hour.
            tool("CNC machine access", false, "For metal case manufacturing", 100),
        ],
        skills_required: &[
            skill(
                "PCB design",
                SkillLevel::Advanced,
                "Full schematic and layout design",
            ),
            skill("CAD modeling", SkillLevel::Advanced, "3D case and plate design"),
            skill(
                "Manufacturing",
                SkillLevel::Intermediate,
                "Understanding of production processes",
            ),
        ],
    },
];

const fn mistake(
    title: &'static str,
    description: &'static str,
    prevention: &'static str,
    fix: &'static str,
    severity: Severity,
) -> CommonMistake {
    CommonMistake {
        title,
        description,
        prevention,
        fix,
        severity,
    }
}

/// Reference data per level (index 0 is level 1). Not used by the assessor.
pub static COMMON_MISTAKES: [&[CommonMistake]; 5] = [
    &[
        mistake(
            "Forcing switches into hot-swap sockets",
            "Applying too much force when inserting switches",
            "Align switch pins carefully before pressing down gently",
            "Remove switch and check for bent pins, straighten if needed",
            Severity::Moderate,
        ),
        mistake(
            "Installing keycaps backwards",
            "Keycaps have a slight angle and can be installed incorrectly",
            "Check keycap profile - taller side goes toward you",
            "Remove and reinstall with correct orientation",
            Severity::Minor,
        ),
    ],
    &[
        mistake(
            "Over-lubing switches",
            "Using too much lubricant makes switches sluggish",
            "Use thin, even coats - less is more",
            "Disassemble switch and clean excess lube with alcohol",
            Severity::Moderate,
        ),
        mistake(
            "Stabilizer rattle",
            "Stabilizers making noise due to poor tuning",
            "Properly lube wire ends and housing contact points",
            "Disassemble, clean, and re-lube stabilizers",
            Severity::Moderate,
        ),
    ],
    &[
        mistake(
            "Cold solder joints",
            "Solder joints that look dull and may fail",
            "Heat pad and pin simultaneously, use proper temperature",
            "Reheat joint until solder flows smoothly",
            Severity::Major,
        ),
        mistake(
            "Bridged solder joints",
            "Solder connecting adjacent pins",
            "Use appropriate amount of solder and flux",
            "Use desoldering braid to remove excess solder",
            Severity::Major,
        ),
    ],
    &[
        mistake(
            "Lifted PCB pads",
            "PCB traces damaged during desoldering",
            "Use proper desoldering technique and temperature",
            "Jumper wire repair or PCB replacement",
            Severity::Major,
        ),
        mistake(
            "SMD component tombstoning",
            "Component standing up on one end during reflow",
            "Even solder paste application and controlled heating",
            "Reheat and reposition component",
            Severity::Moderate,
        ),
    ],
    &[
        mistake(
            "PCB design rule violations",
            "Traces too close, vias too small, etc.",
            "Run design rule check before manufacturing",
            "Redesign PCB sections that violate rules",
            Severity::Major,
        ),
        mistake(
            "Case interference",
            "Components hitting case walls or screws",
            "Careful 3D modeling and clearance checking",
            "Modify case design or component placement",
            Severity::Major,
        ),
    ],
];

/// Catalog entry for `level`, if it is within 1..=5.
pub fn difficulty_level(level: u8) -> Option<&'static BuildDifficulty> {
    DIFFICULTY_LEVELS.iter().find(|d| d.level == level)
}

pub fn common_mistakes(level: u8) -> &'static [CommonMistake] {
    match level {
        MIN_DIFFICULTY_LEVEL..=MAX_DIFFICULTY_LEVEL => COMMON_MISTAKES[(level - 1) as usize],
        _ => &[],
    }
}

/// Additive score starting at 1. See [`assess_build_difficulty`].
pub fn difficulty_score(
    configuration: &KeyboardConfiguration,
    layout: &KeyboardLayout,
    customizations: &Customizations,
) -> u32 {
    let mut score = 1;

    if customizations.soldering_required {
        score += 2;
    }
    if customizations.custom_firmware {
        score += 1;
    }
    if customizations.case_modifications {
        score += 1;
    }
    if customizations.custom_pcb {
        score += 3;
    }
    if customizations.custom_plate {
        score += 1;
    }

    if layout.keys.len() > FULL_SIZE_KEY_THRESHOLD {
        score += 1;
    }
    if layout.category == KeyboardCategory::Custom {
        score += 2;
    }

    if configuration.layers.len() > LAYER_COMPLEXITY_THRESHOLD {
        score += 1;
    }
    if configuration.macro_count() > MACRO_COUNT_THRESHOLD {
        score += 1;
    }

    score
}

pub fn assess_build_difficulty(
    configuration: &KeyboardConfiguration,
    layout: &KeyboardLayout,
    customizations: &Customizations,
) -> &'static BuildDifficulty {
    let score = difficulty_score(configuration, layout, customizations);
    let level = score.clamp(MIN_DIFFICULTY_LEVEL as u32, MAX_DIFFICULTY_LEVEL as u32) as u8;

    debug!(
        configuration = %configuration.id,
        layout = %layout.id,
        score,
        level,
        "assessed build difficulty"
    );

    difficulty_level(level).unwrap_or_else(|| {
        warn!(level, "no catalog entry for level, falling back to beginner");
        &DIFFICULTY_LEVELS[0]
    })
}
