use crate::error::KcResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// Grid coordinates in key units (1.0 = one standard key pitch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeySize {
    pub width: f64,
    pub height: f64,
}

impl KeySize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for KeySize {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Form factor of a layout. Tags match the literal category names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[strum(ascii_case_insensitive)]
pub enum KeyboardCategory {
    #[serde(rename = "60%")]
    #[strum(to_string = "60%", serialize = "60")]
    Sixty,
    #[serde(rename = "65%")]
    #[strum(to_string = "65%", serialize = "65")]
    SixtyFive,
    #[serde(rename = "75%")]
    #[strum(to_string = "75%", serialize = "75")]
    SeventyFive,
    #[serde(rename = "TKL")]
    #[strum(to_string = "TKL", serialize = "tenkeyless")]
    Tkl,
    #[serde(rename = "Full")]
    #[strum(to_string = "Full", serialize = "100", serialize = "100%")]
    Full,
    #[serde(rename = "Custom")]
    #[strum(to_string = "Custom")]
    Custom,
}

/// One physical key slot in a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDefinition {
    pub id: String,
    pub position: Position,
    #[serde(default)]
    pub size: KeySize,
    pub default_label: String,
    pub key_code: String,
    pub row: u32,
    pub column: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keycap_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keycap_variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_profile: Option<Vec<String>>,
}

impl KeyDefinition {
    #[inline]
    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }

    /// Axis-aligned bounding-box test. Touching edges do not overlap.
    pub fn overlaps(&self, other: &KeyDefinition) -> bool {
        !(self.right() <= other.position.x
            || other.right() <= self.position.x
            || self.bottom() <= other.position.y
            || other.bottom() <= self.position.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardLayout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub keys: Vec<KeyDefinition>,
    pub dimensions: Dimensions,
    pub category: KeyboardCategory,
}

impl KeyboardLayout {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KcResult<Self> {
        let content = fs::read_to_string(path)?;
        let layout = serde_json::from_str(&content)?;
        Ok(layout)
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn key_ids(&self) -> HashSet<&str> {
        self.keys.iter().map(|k| k.id.as_str()).collect()
    }

    /// Highest row index in use, or `None` for an empty layout.
    pub fn max_row(&self) -> Option<u32> {
        self.keys.iter().map(|k| k.row).max()
    }
}

pub fn get_key_by_id<'a>(layout: &'a KeyboardLayout, key_id: &str) -> Option<&'a KeyDefinition> {
    layout.keys.iter().find(|k| k.id == key_id)
}

pub fn get_keys_by_row(layout: &KeyboardLayout, row: u32) -> Vec<&KeyDefinition> {
    layout.keys.iter().filter(|k| k.row == row).collect()
}

/// Bounds re-derived from the keys themselves, independent of `layout.dimensions`.
pub fn get_layout_dimensions(layout: &KeyboardLayout) -> Dimensions {
    layout
        .keys
        .iter()
        .fold(Dimensions::default(), |acc, k| Dimensions {
            width: acc.width.max(k.right()),
            height: acc.height.max(k.bottom()),
        })
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutIssue {
    DuplicateId(String),
    Overlap { first: String, second: String },
}

impl fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate key id '{}'", id),
            Self::Overlap { first, second } => {
                write!(f, "keys '{}' and '{}' overlap", first, second)
            }
        }
    }
}

/// Every duplicate id and every overlapping pair. O(n^2) over the keys.
pub fn find_layout_issues(layout: &KeyboardLayout) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    for key in &layout.keys {
        if !seen.insert(key.id.as_str()) {
            issues.push(LayoutIssue::DuplicateId(key.id.clone()));
        }
    }

    for (i, a) in layout.keys.iter().enumerate() {
        for b in &layout.keys[i + 1..] {
            if a.overlaps(b) {
                issues.push(LayoutIssue::Overlap {
                    first: a.id.clone(),
                    second: b.id.clone(),
                });
            }
        }
    }

    issues
}

pub fn validate_layout(layout: &KeyboardLayout) -> bool {
    find_layout_issues(layout).is_empty()
}
