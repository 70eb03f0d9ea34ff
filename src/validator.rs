use crate::configuration::{ActionType, KeyboardConfiguration, Layer};
use crate::consts::MACRO_COMPLEXITY_LIMIT;
use crate::geometry::KeyboardLayout;
use crate::keycodes::is_valid_key_code;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    MissingKey,
    InvalidKeycode,
    DuplicateMapping,
    InvalidLayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationWarningKind {
    UnusedKey,
    ComplexMacro,
    LayerConflict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ValidationErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    #[serde(rename = "type")]
    pub kind: ValidationWarningKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn errors_of(&self, kind: ValidationErrorKind) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    pub fn warnings_of(
        &self,
        kind: ValidationWarningKind,
    ) -> impl Iterator<Item = &ValidationWarning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }
}

#[derive(Default)]
struct Findings {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl Findings {
    fn error(
        &mut self,
        kind: ValidationErrorKind,
        message: String,
        key_id: Option<&str>,
        layer_id: Option<&str>,
    ) {
        self.errors.push(ValidationError {
            kind,
            message,
            key_id: key_id.map(str::to_string),
            layer_id: layer_id.map(str::to_string),
        });
    }

    fn warning(
        &mut self,
        kind: ValidationWarningKind,
        message: String,
        key_id: Option<&str>,
        layer_id: Option<&str>,
    ) {
        self.warnings.push(ValidationWarning {
            kind,
            message,
            key_id: key_id.map(str::to_string),
            layer_id: layer_id.map(str::to_string),
        });
    }
}

/// Cross-checks a configuration against the layout it is bound to.
/// Warnings never affect `is_valid`.
pub fn validate_configuration(
    configuration: &KeyboardConfiguration,
    layout: &KeyboardLayout,
) -> ValidationResult {
    let mut findings = Findings::default();

    check_layer_structure(configuration, &mut findings);

    let layout_key_ids = layout.key_ids();
    for layer in &configuration.layers {
        check_layer_mappings(layer, configuration, &layout_key_ids, &mut findings);
    }

    let mapped: HashSet<&str> = configuration
        .layers
        .iter()
        .flat_map(|l| &l.key_mappings)
        .map(|m| m.key_id.as_str())
        .collect();

    for key in &layout.keys {
        if !mapped.contains(key.id.as_str()) {
            findings.warning(
                ValidationWarningKind::UnusedKey,
                format!("Key {} is not mapped in any layer", key.default_label),
                Some(&key.id),
                None,
            );
        }
    }

    debug!(
        configuration = %configuration.id,
        layout = %layout.id,
        errors = findings.errors.len(),
        warnings = findings.warnings.len(),
        "validated configuration"
    );

    ValidationResult {
        is_valid: findings.errors.is_empty(),
        errors: findings.errors,
        warnings: findings.warnings,
    }
}

fn check_layer_structure(configuration: &KeyboardConfiguration, findings: &mut Findings) {
    let defaults = configuration.layers.iter().filter(|l| l.is_default).count();
    if defaults != 1 {
        findings.error(
            ValidationErrorKind::InvalidLayer,
            format!("Expected exactly one default layer, found {}", defaults),
            None,
            None,
        );
    }

    let mut seen = HashSet::new();
    for layer in &configuration.layers {
        if !seen.insert(layer.id.as_str()) {
            findings.error(
                ValidationErrorKind::InvalidLayer,
                format!("Layer id {} is used more than once", layer.id),
                None,
                Some(&layer.id),
            );
        }
    }
}

fn check_layer_mappings(
    layer: &Layer,
    configuration: &KeyboardConfiguration,
    layout_key_ids: &HashSet<&str>,
    findings: &mut Findings,
) {
    let mut seen = HashSet::new();
    let layer_id = Some(layer.id.as_str());

    for mapping in &layer.key_mappings {
        let key_id = Some(mapping.key_id.as_str());

        if !seen.insert(mapping.key_id.as_str()) {
            findings.error(
                ValidationErrorKind::DuplicateMapping,
                format!(
                    "Key {} is mapped more than once in layer {}",
                    mapping.key_id, layer.name
                ),
                key_id,
                layer_id,
            );
        }

        if !layout_key_ids.contains(mapping.key_id.as_str()) {
            findings.error(
                ValidationErrorKind::MissingKey,
                format!("Key {} does not exist in layout", mapping.key_id),
                key_id,
                layer_id,
            );
        }

        let value = &mapping.action.value;
        match mapping.action.action_type {
            ActionType::Key if !is_valid_key_code(value) => findings.error(
                ValidationErrorKind::InvalidKeycode,
                format!("Invalid key code: {}", value),
                key_id,
                layer_id,
            ),
            // Length in UTF-16 code units.
            ActionType::Macro if value.encode_utf16().count() > MACRO_COMPLEXITY_LIMIT => findings
                .warning(
                    ValidationWarningKind::ComplexMacro,
                    "Macro is very long and may cause performance issues".to_string(),
                    key_id,
                    layer_id,
                ),
            ActionType::Layer if !references_layer(configuration, value) => findings.warning(
                ValidationWarningKind::LayerConflict,
                format!("Layer action targets unknown layer {}", value),
                key_id,
                layer_id,
            ),
            _ => {}
        }
    }
}

/// A layer action may name its target by id, by name, or by `order`.
fn references_layer(configuration: &KeyboardConfiguration, target: &str) -> bool {
    let target = target.trim();
    let order: Option<usize> = target.parse().ok();
    configuration
        .layers
        .iter()
        .any(|l| l.id == target || l.name == target || Some(l.order) == order)
}
