use crate::consts::{
    CONFIGURATION_VERSION, DEFAULT_CONFIGURATION_NAME, DEFAULT_LAYER_ID, DEFAULT_LAYER_NAME,
};
use crate::error::{KcResult, KeycraftError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionType {
    Key,
    Macro,
    Layer,
    Function,
}

/// What a key does. `value` is interpreted according to `action_type`:
/// a key code, a macro sequence, a layer reference, or a function name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl KeyAction {
    pub fn new(action_type: ActionType, value: impl Into<String>) -> Self {
        Self {
            action_type,
            value: value.into(),
            description: None,
        }
    }

    pub fn key(code: impl Into<String>) -> Self {
        Self::new(ActionType::Key, code)
    }

    pub fn macro_seq(sequence: impl Into<String>) -> Self {
        Self::new(ActionType::Macro, sequence)
    }

    pub fn layer(layer: impl Into<String>) -> Self {
        Self::new(ActionType::Layer, layer)
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self::new(ActionType::Function, name)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ModifierType {
    Ctrl,
    Alt,
    Shift,
    Cmd,
    Fn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyModifier {
    #[serde(rename = "type")]
    pub modifier_type: ModifierType,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMapping {
    pub key_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,
    pub action: KeyAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<KeyModifier>>,
}

impl KeyMapping {
    pub fn new(key_id: impl Into<String>, action: KeyAction) -> Self {
        Self {
            key_id: key_id.into(),
            custom_label: None,
            action,
            modifiers: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.custom_label = Some(label.into());
        self
    }

    pub fn with_modifier(mut self, modifier_type: ModifierType, required: bool) -> Self {
        self.modifiers
            .get_or_insert_with(Vec::new)
            .push(KeyModifier {
                modifier_type,
                required,
            });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub key_mappings: Vec<KeyMapping>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub order: usize,
}

impl Layer {
    pub fn mapping(&self, key_id: &str) -> Option<&KeyMapping> {
        self.key_mappings.iter().find(|m| m.key_id == key_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardConfiguration {
    pub id: String,
    pub name: String,
    pub layout_id: String,
    /// Legacy flat mapping list, superseded by `layers`.
    #[serde(default)]
    pub key_mappings: Vec<KeyMapping>,
    pub layers: Vec<Layer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: String,
}

impl KeyboardConfiguration {
    pub fn default_layer(&self) -> Option<&Layer> {
        self.layers.iter().find(|l| l.is_default)
    }

    pub fn layer(&self, layer_id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == layer_id)
    }

    /// Macro-type mappings summed over every layer.
    pub fn macro_count(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|l| &l.key_mappings)
            .filter(|m| m.action.action_type == ActionType::Macro)
            .count()
    }

    fn require_layer(&self, layer_id: &str) -> KcResult<usize> {
        self.layers
            .iter()
            .position(|l| l.id == layer_id)
            .ok_or_else(|| KeycraftError::LayerNotFound(layer_id.to_string()))
    }

    fn touched(mut self) -> Self {
        self.updated_at = Utc::now();
        self
    }
}

/// `<unix-millis>-<9 base36 chars>`.
pub fn generate_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let suffix: String = (0..9)
        .map(|_| ALPHABET[fastrand::usize(..ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}

pub fn create_empty_configuration(layout_id: &str, name: Option<&str>) -> KeyboardConfiguration {
    let now = Utc::now();
    let configuration = KeyboardConfiguration {
        id: generate_id(),
        name: name.unwrap_or(DEFAULT_CONFIGURATION_NAME).to_string(),
        layout_id: layout_id.to_string(),
        key_mappings: Vec::new(),
        layers: vec![Layer {
            id: DEFAULT_LAYER_ID.to_string(),
            name: DEFAULT_LAYER_NAME.to_string(),
            key_mappings: Vec::new(),
            is_default: true,
            order: 0,
        }],
        created_at: now,
        updated_at: now,
        version: CONFIGURATION_VERSION.to_string(),
    };
    debug!(id = %configuration.id, layout_id, "created configuration");
    configuration
}

/// Appends a non-default layer. Names need not be unique.
pub fn add_layer(configuration: &KeyboardConfiguration, name: &str) -> KeyboardConfiguration {
    let mut next = configuration.clone();
    let layer = Layer {
        id: generate_id(),
        name: name.to_string(),
        key_mappings: Vec::new(),
        is_default: false,
        order: configuration.layers.len(),
    };
    debug!(configuration = %configuration.id, layer = %layer.id, name, "adding layer");
    next.layers.push(layer);
    next.touched()
}

/// Drops a non-default layer. An unknown `layer_id` is `Err(LayerNotFound)`,
/// not a no-op.
pub fn remove_layer(
    configuration: &KeyboardConfiguration,
    layer_id: &str,
) -> KcResult<KeyboardConfiguration> {
    let idx = configuration.require_layer(layer_id)?;
    if configuration.layers[idx].is_default {
        return Err(KeycraftError::InvalidOperation(
            "Cannot remove the default layer".to_string(),
        ));
    }

    let mut next = configuration.clone();
    next.layers.remove(idx);
    debug!(configuration = %configuration.id, layer_id, "removed layer");
    Ok(next.touched())
}

/// Upserts `mapping` into the layer, keyed by `key_id` (last write wins).
pub fn update_key_mapping(
    configuration: &KeyboardConfiguration,
    layer_id: &str,
    mapping: KeyMapping,
) -> KcResult<KeyboardConfiguration> {
    let idx = configuration.require_layer(layer_id)?;
    let mut next = configuration.clone();
    let mappings = &mut next.layers[idx].key_mappings;

    match mappings.iter_mut().find(|m| m.key_id == mapping.key_id) {
        Some(existing) => *existing = mapping,
        None => mappings.push(mapping),
    }

    debug!(configuration = %configuration.id, layer_id, "updated key mapping");
    Ok(next.touched())
}

/// Removing a mapping that is not present is not an error.
pub fn remove_key_mapping(
    configuration: &KeyboardConfiguration,
    layer_id: &str,
    key_id: &str,
) -> KcResult<KeyboardConfiguration> {
    let idx = configuration.require_layer(layer_id)?;
    let mut next = configuration.clone();
    next.layers[idx].key_mappings.retain(|m| m.key_id != key_id);

    debug!(configuration = %configuration.id, layer_id, key_id, "removed key mapping");
    Ok(next.touched())
}

pub fn get_key_mapping<'a>(
    configuration: &'a KeyboardConfiguration,
    layer_id: &str,
    key_id: &str,
) -> Option<&'a KeyMapping> {
    configuration.layer(layer_id)?.mapping(key_id)
}

/// Deep copy with a new id, fresh layer ids and fresh timestamps.
pub fn clone_configuration(
    configuration: &KeyboardConfiguration,
    new_name: Option<&str>,
) -> KeyboardConfiguration {
    let now = Utc::now();
    let name = match new_name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => format!("{} (Copy)", configuration.name),
    };

    KeyboardConfiguration {
        id: generate_id(),
        name,
        layout_id: configuration.layout_id.clone(),
        key_mappings: configuration.key_mappings.clone(),
        layers: configuration
            .layers
            .iter()
            .map(|l| Layer {
                id: generate_id(),
                ..l.clone()
            })
            .collect(),
        created_at: now,
        updated_at: now,
        version: configuration.version.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    Json,
    Qmk,
    Csv,
}

impl ExportFormat {
    /// Like `FromStr`, but reports failures as [`KeycraftError::UnsupportedFormat`].
    pub fn parse(s: &str) -> KcResult<Self> {
        s.parse()
            .map_err(|_| KeycraftError::UnsupportedFormat(s.to_string()))
    }
}

pub fn export_configuration(
    configuration: &KeyboardConfiguration,
    format: ExportFormat,
) -> KcResult<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(configuration)?),
        ExportFormat::Qmk => export_qmk(configuration),
        ExportFormat::Csv => export_csv(configuration),
    }
}

/// `keyId: actionValue` per default-layer mapping, under a header comment.
fn export_qmk(configuration: &KeyboardConfiguration) -> KcResult<String> {
    let layer = configuration
        .default_layer()
        .ok_or_else(|| KeycraftError::InvalidOperation("No default layer found".to_string()))?;

    let keymap: Vec<String> = layer
        .key_mappings
        .iter()
        .map(|m| format!("{}: {}", m.key_id, m.action.value))
        .collect();

    let mut out = format!("// Generated keymap for {}", configuration.name);
    out.push('\n');
    out.push_str(&keymap.join("\n"));
    Ok(out)
}

fn export_csv(configuration: &KeyboardConfiguration) -> KcResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "layer_id",
        "layer_name",
        "key_id",
        "action_type",
        "value",
        "custom_label",
    ])?;

    for layer in &configuration.layers {
        for m in &layer.key_mappings {
            let action_type = m.action.action_type.to_string();
            wtr.write_record([
                layer.id.as_str(),
                layer.name.as_str(),
                m.key_id.as_str(),
                action_type.as_str(),
                m.action.value.as_str(),
                m.custom_label.as_deref().unwrap_or(""),
            ])?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| KeycraftError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| KeycraftError::Config(e.to_string()))
}

/// Inverse of the JSON export.
pub fn import_configuration(json: &str) -> KcResult<KeyboardConfiguration> {
    Ok(serde_json::from_str(json)?)
}
