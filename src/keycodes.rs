use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Named (non-generated) codes accepted for `key` actions.
const NAMED_CODES: [&str; 21] = [
    "ArrowUp",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "Enter",
    "Space",
    "Tab",
    "ShiftLeft",
    "ShiftRight",
    "ControlLeft",
    "ControlRight",
    "AltLeft",
    "AltRight",
    "MetaLeft",
    "MetaRight",
    "Backspace",
    "Delete",
    "Home",
    "End",
    "PageUp",
    "PageDown",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeycodeGroup {
    Letter,
    Digit,
    Function,
    Named,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeycodeDefinition {
    pub code: String,
    pub group: KeycodeGroup,
}

/// The closed set of codes a `key` action may carry.
#[derive(Debug, Clone, Default)]
pub struct KeycodeRegistry {
    definitions: Vec<KeycodeDefinition>,
    lookup: HashSet<String>,
}

impl KeycodeRegistry {
    /// Letters `KeyA`..`KeyZ`, digits `Digit0`..`Digit9`, `F1`..`F12`, and the named keys.
    pub fn standard() -> Self {
        let mut reg = Self::default();

        for c in b'A'..=b'Z' {
            reg.insert(format!("Key{}", c as char), KeycodeGroup::Letter);
        }
        for d in 0..=9 {
            reg.insert(format!("Digit{}", d), KeycodeGroup::Digit);
        }
        for n in 1..=12 {
            reg.insert(format!("F{}", n), KeycodeGroup::Function);
        }
        for name in NAMED_CODES {
            reg.insert(name.to_string(), KeycodeGroup::Named);
        }

        reg
    }

    fn insert(&mut self, code: String, group: KeycodeGroup) {
        if self.lookup.insert(code.clone()) {
            self.definitions.push(KeycodeDefinition { code, group });
        }
    }

    /// Exact, case-sensitive membership.
    pub fn is_valid(&self, code: &str) -> bool {
        self.lookup.contains(code)
    }

    pub fn definitions(&self) -> &[KeycodeDefinition] {
        &self.definitions
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.code.as_str())
    }

    pub fn group_of(&self, code: &str) -> Option<KeycodeGroup> {
        self.definitions
            .iter()
            .find(|d| d.code == code)
            .map(|d| d.group)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Shared instance of [`KeycodeRegistry::standard`].
pub fn standard_registry() -> &'static KeycodeRegistry {
    static REGISTRY: OnceLock<KeycodeRegistry> = OnceLock::new();
    REGISTRY.get_or_init(KeycodeRegistry::standard)
}

pub fn is_valid_key_code(code: &str) -> bool {
    standard_registry().is_valid(code)
}
