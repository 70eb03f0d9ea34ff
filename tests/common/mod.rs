#![allow(dead_code)]

use keycraft::configuration::{
    create_empty_configuration, update_key_mapping, KeyAction, KeyMapping, KeyboardConfiguration,
};
use keycraft::consts::DEFAULT_LAYER_ID;
use keycraft::geometry::{
    Dimensions, KeyDefinition, KeySize, KeyboardCategory, KeyboardLayout, Position,
};

/// Builder for KeyDefinition to clean up tests
pub struct KeyBuilder {
    key: KeyDefinition,
}

impl KeyBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            key: KeyDefinition {
                id: id.to_string(),
                position: Position::default(),
                size: KeySize::default(),
                default_label: id.to_uppercase(),
                key_code: "KeyA".to_string(),
                row: 0,
                column: 0,
                keycap_size: None,
                keycap_variant: None,
                recommended_profile: None,
            },
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.key.position = Position { x, y };
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.key.size = KeySize::new(width, height);
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.key.default_label = label.to_string();
        self
    }

    pub fn grid(mut self, row: u32, column: u32) -> Self {
        self.key.row = row;
        self.key.column = column;
        self
    }

    pub fn build(self) -> KeyDefinition {
        self.key
    }
}

/// Layout with the given keys; dimensions are left at zero.
pub fn layout_with(keys: Vec<KeyDefinition>, category: KeyboardCategory) -> KeyboardLayout {
    KeyboardLayout {
        id: "test-layout".to_string(),
        name: "Test Layout".to_string(),
        description: String::new(),
        keys,
        dimensions: Dimensions::default(),
        category,
    }
}

/// `count` 1u keys laid out on a single row, ids `k0`, `k1`, ...
pub fn row_layout(count: usize, category: KeyboardCategory) -> KeyboardLayout {
    let keys = (0..count)
        .map(|i| {
            KeyBuilder::new(&format!("k{}", i))
                .at(i as f64, 0.0)
                .grid(0, i as u32)
                .build()
        })
        .collect();
    layout_with(keys, category)
}

/// Empty configuration with `mappings` applied to the default layer.
pub fn configuration_with(mappings: Vec<KeyMapping>) -> KeyboardConfiguration {
    let mut cfg = create_empty_configuration("test-layout", Some("Test"));
    for m in mappings {
        cfg = update_key_mapping(&cfg, DEFAULT_LAYER_ID, m).expect("default layer exists");
    }
    cfg
}

pub fn key(key_id: &str, code: &str) -> KeyMapping {
    KeyMapping::new(key_id, KeyAction::key(code))
}

pub fn macro_key(key_id: &str, sequence: &str) -> KeyMapping {
    KeyMapping::new(key_id, KeyAction::macro_seq(sequence))
}
