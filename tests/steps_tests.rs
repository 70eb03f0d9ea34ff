use keycraft::config::Customizations;
use keycraft::configuration::create_empty_configuration;
use keycraft::difficulty::{difficulty_level, DIFFICULTY_LEVELS};
use keycraft::layouts::create_60_percent_layout;
use keycraft::steps::{
    calculate_build_metrics, create_build_guide, generate_build_steps, RiskLevel,
};
use rstest::rstest;

fn step_ids(level: u8) -> Vec<String> {
    let difficulty = difficulty_level(level).expect("catalog level");
    let cfg = create_empty_configuration("60-percent-standard", None);
    generate_build_steps(difficulty, &cfg, &Customizations::default())
        .into_iter()
        .map(|s| s.id)
        .collect()
}

#[rstest]
#[case(1, &["planning", "switches", "case-assembly", "keycaps", "testing"])]
#[case(2, &["planning", "stabilizers", "switches", "case-assembly", "keycaps", "testing"])]
#[case(3, &["planning", "stabilizers", "soldering", "case-assembly", "keycaps", "firmware", "testing"])]
#[case(4, &["planning", "stabilizers", "soldering", "case-assembly", "keycaps", "firmware", "testing"])]
#[case(5, &["planning", "stabilizers", "soldering", "case-assembly", "keycaps", "firmware", "testing"])]
fn test_steps_per_level(#[case] level: u8, #[case] expected: &[&str]) {
    assert_eq!(step_ids(level), expected);
}

#[test]
fn test_order_is_gapless_for_every_level() {
    let cfg = create_empty_configuration("x", None);
    for difficulty in DIFFICULTY_LEVELS.iter() {
        let steps = generate_build_steps(difficulty, &cfg, &Customizations::default());
        let orders: Vec<u32> = steps.iter().map(|s| s.order).collect();
        let expected: Vec<u32> = (1..=steps.len() as u32).collect();
        assert_eq!(orders, expected, "level {}", difficulty.level);
    }
}

#[test]
fn test_customizations_do_not_change_steps() {
    let difficulty = difficulty_level(2).unwrap();
    let cfg = create_empty_configuration("x", None);
    let everything = Customizations {
        custom_pcb: true,
        soldering_required: true,
        custom_firmware: true,
        case_modifications: true,
        custom_plate: true,
    };
    assert_eq!(
        generate_build_steps(difficulty, &cfg, &Customizations::default()),
        generate_build_steps(difficulty, &cfg, &everything)
    );
}

#[test]
fn test_step_content() {
    let difficulty = difficulty_level(3).unwrap();
    let cfg = create_empty_configuration("x", None);
    let steps = generate_build_steps(difficulty, &cfg, &Customizations::default());

    let soldering = steps.iter().find(|s| s.id == "soldering").unwrap();
    assert_eq!(soldering.title, "Switch Soldering");
    assert_eq!(soldering.estimated_time, 120);
    assert_eq!(
        soldering.tools,
        vec!["Soldering iron", "Solder", "Flux", "Desoldering pump"]
    );
    assert_eq!(soldering.warnings.len(), 3);
    assert!(soldering.images.is_empty());
    assert!(soldering.video_url.is_none());
}

#[rstest]
#[case(1, 125, 13, RiskLevel::Low)]
#[case(2, 170, 30, RiskLevel::Low)]
#[case(3, 290, 73, RiskLevel::Medium)]
#[case(4, 290, 215, RiskLevel::High)]
#[case(5, 290, 460, RiskLevel::High)]
fn test_metrics(
    #[case] level: u8,
    #[case] minutes: u32,
    #[case] cost: u32,
    #[case] risk: RiskLevel,
) {
    let difficulty = difficulty_level(level).unwrap();
    let cfg = create_empty_configuration("x", None);
    let steps = generate_build_steps(difficulty, &cfg, &Customizations::default());
    let metrics = calculate_build_metrics(difficulty, &steps);

    assert_eq!(metrics.total_time, minutes);
    assert_eq!(metrics.tool_cost, cost);
    assert_eq!(metrics.risk_level, risk);
    assert_eq!(metrics.skills_needed.len(), difficulty.skills_required.len());
}

#[test]
fn test_build_guide() {
    let layout = create_60_percent_layout();
    let cfg = create_empty_configuration(&layout.id, None);
    let guide = create_build_guide(
        &cfg,
        &layout,
        &Customizations {
            soldering_required: true,
            ..Default::default()
        },
    );

    assert_eq!(guide.difficulty.level, 3);
    assert_eq!(guide.steps.len(), 7);
    assert_eq!(guide.total_time, 290);
    assert_eq!(guide.tips, guide.difficulty.requirements);
    assert_eq!(guide.common_mistakes[0].title, "Cold solder joints");

    let value = serde_json::to_value(&guide).unwrap();
    assert_eq!(value["totalTime"], 290);
    assert_eq!(value["steps"][0]["estimatedTime"], 30);
    assert_eq!(value["commonMistakes"][1]["severity"], "major");
}
