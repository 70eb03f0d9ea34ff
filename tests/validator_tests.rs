mod common;

use common::{configuration_with, key, layout_with, macro_key, row_layout, KeyBuilder};
use keycraft::configuration::{
    add_layer, create_empty_configuration, update_key_mapping, KeyAction, KeyMapping,
};
use keycraft::consts::DEFAULT_LAYER_ID;
use keycraft::geometry::KeyboardCategory;
use keycraft::keycodes::{is_valid_key_code, standard_registry, KeycodeGroup};
use keycraft::validator::{validate_configuration, ValidationErrorKind, ValidationWarningKind};
use rstest::rstest;

#[test]
fn test_missing_key_and_no_unused_warning() {
    let layout = layout_with(
        vec![KeyBuilder::new("k1").build()],
        KeyboardCategory::Custom,
    );
    let cfg = configuration_with(vec![key("k1", "KeyA"), key("k2", "KeyB")]);

    let result = validate_configuration(&cfg, &layout);

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationErrorKind::MissingKey);
    assert_eq!(result.errors[0].key_id.as_deref(), Some("k2"));
    assert_eq!(result.errors[0].layer_id.as_deref(), Some(DEFAULT_LAYER_ID));
    assert_eq!(
        result.warnings_of(ValidationWarningKind::UnusedKey).count(),
        0
    );
}

#[test]
fn test_unused_keys_warn_only() {
    let layout = row_layout(3, KeyboardCategory::Custom);
    let cfg = configuration_with(vec![key("k0", "KeyA")]);

    let result = validate_configuration(&cfg, &layout);

    assert!(result.is_valid);
    let unused: Vec<_> = result
        .warnings_of(ValidationWarningKind::UnusedKey)
        .map(|w| w.key_id.clone().unwrap())
        .collect();
    assert_eq!(unused, vec!["k1", "k2"]);
    assert_eq!(
        result.warnings[0].message,
        "Key K1 is not mapped in any layer"
    );
}

#[test]
fn test_key_mapped_in_any_layer_counts_as_used() {
    let layout = row_layout(2, KeyboardCategory::Custom);
    let cfg = add_layer(&configuration_with(vec![key("k0", "KeyA")]), "Fn");
    let fn_id = cfg.layers[1].id.clone();
    let cfg = update_key_mapping(&cfg, &fn_id, key("k1", "F1")).unwrap();

    let result = validate_configuration(&cfg, &layout);
    assert!(result.is_valid);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_invalid_keycode() {
    let layout = row_layout(1, KeyboardCategory::Custom);
    let cfg = configuration_with(vec![key("k0", "keya")]);

    let result = validate_configuration(&cfg, &layout);
    assert!(!result.is_valid);
    let err = result
        .errors_of(ValidationErrorKind::InvalidKeycode)
        .next()
        .expect("invalid keycode error");
    assert_eq!(err.message, "Invalid key code: keya");
}

#[test]
fn test_non_key_actions_skip_keycode_check() {
    let layout = row_layout(2, KeyboardCategory::Custom);
    let cfg = configuration_with(vec![
        KeyMapping::new("k0", KeyAction::function("bootloader")),
        macro_key("k1", "not a keycode"),
    ]);
    assert!(validate_configuration(&cfg, &layout).is_valid);
}

#[rstest]
#[case(50, false)]
#[case(51, true)]
fn test_complex_macro_threshold(#[case] len: usize, #[case] warns: bool) {
    let layout = row_layout(1, KeyboardCategory::Custom);
    let cfg = configuration_with(vec![macro_key("k0", &"x".repeat(len))]);

    let result = validate_configuration(&cfg, &layout);
    assert!(result.is_valid, "warnings never invalidate");
    assert_eq!(
        result
            .warnings_of(ValidationWarningKind::ComplexMacro)
            .count(),
        usize::from(warns)
    );
}

#[test]
fn test_complex_macro_counts_utf16_units() {
    let layout = row_layout(1, KeyboardCategory::Custom);
    // 26 emoji are 26 chars but 52 UTF-16 units.
    let cfg = configuration_with(vec![macro_key("k0", &"\u{1F600}".repeat(26))]);

    let result = validate_configuration(&cfg, &layout);
    assert_eq!(
        result
            .warnings_of(ValidationWarningKind::ComplexMacro)
            .count(),
        1
    );
}

#[test]
fn test_duplicate_mapping_in_hand_edited_config() {
    let layout = row_layout(1, KeyboardCategory::Custom);
    let mut cfg = configuration_with(vec![key("k0", "KeyA")]);
    cfg.layers[0].key_mappings.push(key("k0", "KeyB"));

    let result = validate_configuration(&cfg, &layout);
    assert!(!result.is_valid);
    assert_eq!(
        result
            .errors_of(ValidationErrorKind::DuplicateMapping)
            .count(),
        1
    );
}

#[test]
fn test_layer_structure_errors() {
    let layout = row_layout(1, KeyboardCategory::Custom);

    let mut no_default = configuration_with(vec![key("k0", "KeyA")]);
    no_default.layers[0].is_default = false;
    let result = validate_configuration(&no_default, &layout);
    assert_eq!(result.errors_of(ValidationErrorKind::InvalidLayer).count(), 1);

    let mut shared_id = add_layer(&configuration_with(vec![key("k0", "KeyA")]), "Fn");
    shared_id.layers[1].id = DEFAULT_LAYER_ID.to_string();
    let result = validate_configuration(&shared_id, &layout);
    assert!(!result.is_valid);
    assert_eq!(result.errors_of(ValidationErrorKind::InvalidLayer).count(), 1);
}

#[rstest]
#[case("Fn", false)]
#[case("1", false)]
#[case("Nope", true)]
fn test_layer_action_targets(#[case] target: &str, #[case] conflict: bool) {
    let layout = row_layout(1, KeyboardCategory::Custom);
    let cfg = add_layer(&create_layer_config(target), "Fn");

    let result = validate_configuration(&cfg, &layout);
    assert!(result.is_valid);
    assert_eq!(
        result
            .warnings_of(ValidationWarningKind::LayerConflict)
            .count(),
        usize::from(conflict)
    );
}

#[test]
fn test_engine_accepts_layer_action_to_absent_layer() {
    let layout = row_layout(1, KeyboardCategory::Custom);
    let cfg = create_empty_configuration("custom", None);
    let cfg = update_key_mapping(
        &cfg,
        DEFAULT_LAYER_ID,
        KeyMapping::new("k0", KeyAction::layer("9")),
    )
    .unwrap();

    let result = validate_configuration(&cfg, &layout);
    assert!(result.is_valid);
    assert_eq!(
        result
            .warnings_of(ValidationWarningKind::LayerConflict)
            .count(),
        1
    );
}

fn create_layer_config(target: &str) -> keycraft::configuration::KeyboardConfiguration {
    configuration_with(vec![KeyMapping::new("k0", KeyAction::layer(target))])
}

#[test]
fn test_findings_serialize_with_type_tags() {
    let layout = row_layout(1, KeyboardCategory::Custom);
    let cfg = configuration_with(vec![key("zz", "KeyA")]);
    let value = serde_json::to_value(validate_configuration(&cfg, &layout)).unwrap();

    assert_eq!(value["isValid"], false);
    assert_eq!(value["errors"][0]["type"], "missing_key");
    assert_eq!(value["errors"][0]["keyId"], "zz");
    assert_eq!(value["warnings"][0]["type"], "unused_key");
}

#[rstest]
#[case("KeyA", true)]
#[case("KeyZ", true)]
#[case("Digit0", true)]
#[case("F12", true)]
#[case("ArrowLeft", true)]
#[case("PageDown", true)]
#[case("F13", false)]
#[case("F0", false)]
#[case("Key1", false)]
#[case("Escape", false)]
#[case("", false)]
fn test_keycode_grammar(#[case] code: &str, #[case] valid: bool) {
    assert_eq!(is_valid_key_code(code), valid);
}

#[test]
fn test_registry_contents() {
    let registry = standard_registry();
    assert_eq!(registry.len(), 26 + 10 + 12 + 21);
    assert_eq!(registry.group_of("KeyQ"), Some(KeycodeGroup::Letter));
    assert_eq!(registry.group_of("Digit5"), Some(KeycodeGroup::Digit));
    assert_eq!(registry.group_of("F7"), Some(KeycodeGroup::Function));
    assert_eq!(registry.group_of("Tab"), Some(KeycodeGroup::Named));
    assert!(registry.codes().all(|c| registry.is_valid(c)));
}
