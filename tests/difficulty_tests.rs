mod common;

use common::{configuration_with, macro_key, row_layout};
use keycraft::config::Customizations;
use keycraft::configuration::{add_layer, create_empty_configuration};
use keycraft::difficulty::{
    assess_build_difficulty, common_mistakes, difficulty_level, difficulty_score, Severity,
    SkillLevel, DIFFICULTY_LEVELS,
};
use keycraft::geometry::KeyboardCategory;
use keycraft::layouts::{create_60_percent_layout, create_full_size_layout};
use rstest::rstest;

#[test]
fn test_sixty_percent_scenario() {
    let layout = create_60_percent_layout();
    assert_eq!(layout.key_count(), 61);
    let cfg = create_empty_configuration(&layout.id, None);

    let plain = Customizations::default();
    let d = assess_build_difficulty(&cfg, &layout, &plain);
    assert_eq!(difficulty_score(&cfg, &layout, &plain), 1);
    assert_eq!((d.level, d.name), (1, "Beginner"));

    let soldered = Customizations {
        soldering_required: true,
        ..Default::default()
    };
    let d = assess_build_difficulty(&cfg, &layout, &soldered);
    assert_eq!(difficulty_score(&cfg, &layout, &soldered), 3);
    assert_eq!((d.level, d.name), (3, "Intermediate"));
}

#[rstest]
#[case(Customizations { custom_firmware: true, ..Default::default() }, 2)]
#[case(Customizations { case_modifications: true, ..Default::default() }, 2)]
#[case(Customizations { custom_plate: true, ..Default::default() }, 2)]
#[case(Customizations { custom_pcb: true, ..Default::default() }, 4)]
#[case(Customizations { soldering_required: true, custom_firmware: true, ..Default::default() }, 4)]
fn test_customization_weights(#[case] customizations: Customizations, #[case] score: u32) {
    let layout = create_60_percent_layout();
    let cfg = create_empty_configuration(&layout.id, None);
    assert_eq!(difficulty_score(&cfg, &layout, &customizations), score);
}

#[test]
fn test_score_clamps_at_expert() {
    let layout = create_60_percent_layout();
    let cfg = create_empty_configuration(&layout.id, None);
    let everything = Customizations {
        custom_pcb: true,
        soldering_required: true,
        custom_firmware: true,
        case_modifications: true,
        custom_plate: true,
    };
    assert_eq!(difficulty_score(&cfg, &layout, &everything), 9);
    assert_eq!(assess_build_difficulty(&cfg, &layout, &everything).level, 5);
}

#[test]
fn test_layout_factors() {
    let cfg = create_empty_configuration("x", None);
    let none = Customizations::default();

    // Exactly 104 keys is not above the threshold.
    let full = create_full_size_layout();
    assert_eq!(difficulty_score(&cfg, &full, &none), 1);

    let big = row_layout(105, KeyboardCategory::Full);
    assert_eq!(difficulty_score(&cfg, &big, &none), 2);

    let custom = row_layout(10, KeyboardCategory::Custom);
    assert_eq!(difficulty_score(&cfg, &custom, &none), 3);
}

#[test]
fn test_configuration_factors() {
    let layout = create_60_percent_layout();
    let none = Customizations::default();

    let mut cfg = create_empty_configuration(&layout.id, None);
    for name in ["A", "B"] {
        cfg = add_layer(&cfg, name);
    }
    assert_eq!(difficulty_score(&cfg, &layout, &none), 1, "three layers");
    cfg = add_layer(&cfg, "C");
    assert_eq!(difficulty_score(&cfg, &layout, &none), 2, "four layers");

    let ten: Vec<_> = (0..10).map(|i| macro_key(&format!("k{}", i), "m")).collect();
    let cfg = configuration_with(ten);
    assert_eq!(difficulty_score(&cfg, &layout, &none), 1, "ten macros");

    let eleven: Vec<_> = (0..11).map(|i| macro_key(&format!("k{}", i), "m")).collect();
    let cfg = configuration_with(eleven);
    assert_eq!(difficulty_score(&cfg, &layout, &none), 2, "eleven macros");
}

#[test]
fn test_catalog_levels() {
    let levels: Vec<u8> = DIFFICULTY_LEVELS.iter().map(|d| d.level).collect();
    assert_eq!(levels, vec![1, 2, 3, 4, 5]);

    let names: Vec<&str> = DIFFICULTY_LEVELS.iter().map(|d| d.name).collect();
    assert_eq!(
        names,
        vec!["Beginner", "Easy", "Intermediate", "Advanced", "Expert"]
    );

    let hours: Vec<u32> = DIFFICULTY_LEVELS.iter().map(|d| d.estimated_time).collect();
    assert_eq!(hours, vec![2, 4, 8, 15, 40]);

    assert!(difficulty_level(0).is_none());
    assert!(difficulty_level(6).is_none());
    assert_eq!(difficulty_level(3).map(|d| d.name), Some("Intermediate"));
}

#[test]
fn test_catalog_tools_and_skills() {
    let beginner = &DIFFICULTY_LEVELS[0];
    assert_eq!(beginner.tools_needed[0].name, "Keycap puller");
    assert!(beginner.tools_needed[0].required);
    assert_eq!(beginner.tools_needed[0].estimated_cost, Some(5));
    assert_eq!(beginner.skills_required[0].level, SkillLevel::Basic);

    let expert = &DIFFICULTY_LEVELS[4];
    assert_eq!(expert.tools_needed.len(), 4);
    assert_eq!(expert.skills_required[1].name, "CAD modeling");
    assert_eq!(expert.skills_required[1].level, SkillLevel::Advanced);
}

#[rstest]
#[case(1, "Forcing switches into hot-swap sockets", Severity::Moderate)]
#[case(2, "Over-lubing switches", Severity::Moderate)]
#[case(3, "Cold solder joints", Severity::Major)]
#[case(4, "Lifted PCB pads", Severity::Major)]
#[case(5, "PCB design rule violations", Severity::Major)]
fn test_common_mistakes(#[case] level: u8, #[case] first: &str, #[case] severity: Severity) {
    let mistakes = common_mistakes(level);
    assert_eq!(mistakes.len(), 2);
    assert_eq!(mistakes[0].title, first);
    assert_eq!(mistakes[0].severity, severity);
}

#[test]
fn test_common_mistakes_out_of_range() {
    assert!(common_mistakes(0).is_empty());
    assert!(common_mistakes(6).is_empty());
}

#[test]
fn test_difficulty_json_shape() {
    let value = serde_json::to_value(DIFFICULTY_LEVELS[2]).unwrap();
    assert_eq!(value["level"], 3);
    assert_eq!(value["estimatedTime"], 8);
    assert_eq!(value["toolsNeeded"][0]["estimatedCost"], 40);
    assert_eq!(value["skillsRequired"][0]["level"], "intermediate");
}
