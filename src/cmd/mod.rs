pub mod assess;
pub mod export;
pub mod layouts;
pub mod new;
pub mod recommend;
pub mod validate;

use keycraft::configuration::{import_configuration, KeyboardConfiguration};
use keycraft::error::{KcResult, KeycraftError};
use keycraft::geometry::{KeyboardCategory, KeyboardLayout};
use keycraft::layouts::{create_layout, find_builtin_layout};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Accepts a form factor (`60`, `tkl`, ...), a built-in layout id, or a path
/// to a layout JSON file, in that order.
pub fn resolve_layout(spec: &str) -> KcResult<KeyboardLayout> {
    if let Some(layout) = spec
        .parse::<KeyboardCategory>()
        .ok()
        .and_then(create_layout)
    {
        debug!(spec, layout = %layout.id, "resolved layout by category");
        return Ok(layout);
    }

    if let Some(layout) = find_builtin_layout(spec) {
        return Ok(layout);
    }

    let path = Path::new(spec);
    if path.is_file() {
        return KeyboardLayout::load_from_file(path);
    }

    Err(KeycraftError::NotFound(format!(
        "layout '{}' is neither a category, a built-in id, nor a file",
        spec
    )))
}

pub fn load_configuration<P: AsRef<Path>>(path: P) -> KcResult<KeyboardConfiguration> {
    let content = fs::read_to_string(path)?;
    import_configuration(&content)
}
