use crate::consts::STANDARD_PROFILES;
use crate::geometry::{
    get_layout_dimensions, KeyDefinition, KeySize, KeyboardCategory, KeyboardLayout, Position,
};
use strum::IntoEnumIterator;

/// Named key widths (in units) shared by every generator.
pub struct KeySizes;

impl KeySizes {
    pub const STANDARD: KeySize = KeySize::new(1.0, 1.0);
    pub const WIDE: KeySize = KeySize::new(1.25, 1.0);
    pub const TAB: KeySize = KeySize::new(1.5, 1.0);
    pub const CAPS: KeySize = KeySize::new(1.75, 1.0);
    pub const SHIFT: KeySize = KeySize::new(2.25, 1.0);
    pub const SPACE: KeySize = KeySize::new(6.25, 1.0);
    pub const ENTER: KeySize = KeySize::new(2.25, 1.0);
    pub const BACKSPACE: KeySize = KeySize::new(2.0, 1.0);
}

/// Lookup table form of [`KeySizes`], keyed by name.
pub const KEY_SIZES: [(&str, KeySize); 8] = [
    ("standard", KeySizes::STANDARD),
    ("wide", KeySizes::WIDE),
    ("tab", KeySizes::TAB),
    ("caps", KeySizes::CAPS),
    ("shift", KeySizes::SHIFT),
    ("space", KeySizes::SPACE),
    ("enter", KeySizes::ENTER),
    ("backspace", KeySizes::BACKSPACE),
];

pub fn key_size(name: &str) -> Option<KeySize> {
    KEY_SIZES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, size)| *size)
}

/// One slot in a row description.
#[derive(Debug, Clone, Copy)]
struct Slot {
    label: &'static str,
    code: &'static str,
    size: KeySize,
    /// Horizontal gap inserted before this key.
    gap: f64,
}

const fn k(label: &'static str, code: &'static str) -> Slot {
    Slot {
        label,
        code,
        size: KeySizes::STANDARD,
        gap: 0.0,
    }
}

const fn sized(label: &'static str, code: &'static str, size: KeySize) -> Slot {
    Slot {
        label,
        code,
        size,
        gap: 0.0,
    }
}

impl Slot {
    fn after(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }
}

/// Places keys row by row, accumulating x from the widths of preceding keys.
struct LayoutBuilder {
    keys: Vec<KeyDefinition>,
}

impl LayoutBuilder {
    fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Columns continue from any keys already placed in `row`.
    fn row(&mut self, row: u32, start_x: f64, slots: &[Slot]) -> &mut Self {
        let first_col = self.keys.iter().filter(|k| k.row == row).count();
        let mut x = start_x;
        for (i, slot) in slots.iter().enumerate() {
            x += slot.gap;
            self.push(row, (first_col + i) as u32, x, slot);
            x += slot.size.width;
        }
        self
    }

    fn push(&mut self, row: u32, column: u32, x: f64, slot: &Slot) {
        let id = format!("key-{}", self.keys.len());
        self.keys.push(KeyDefinition {
            id,
            position: Position { x, y: row as f64 },
            size: slot.size,
            default_label: slot.label.to_string(),
            key_code: slot.code.to_string(),
            row,
            column,
            keycap_size: Some(format!("{}u", slot.size.width)),
            keycap_variant: (slot.size.height > 1.0).then(|| "vertical".to_string()),
            recommended_profile: Some(STANDARD_PROFILES.iter().map(|p| p.to_string()).collect()),
        });
    }

    fn finish(
        self,
        id: &str,
        name: &str,
        description: &str,
        category: KeyboardCategory,
    ) -> KeyboardLayout {
        let mut layout = KeyboardLayout {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            keys: self.keys,
            dimensions: Default::default(),
            category,
        };
        layout.dimensions = get_layout_dimensions(&layout);
        layout
    }
}

// --- Shared row fragments (ANSI) ---

const NUMBER_ROW: [Slot; 13] = [
    k("`", "Backquote"),
    k("1", "Digit1"),
    k("2", "Digit2"),
    k("3", "Digit3"),
    k("4", "Digit4"),
    k("5", "Digit5"),
    k("6", "Digit6"),
    k("7", "Digit7"),
    k("8", "Digit8"),
    k("9", "Digit9"),
    k("0", "Digit0"),
    k("-", "Minus"),
    k("=", "Equal"),
];

const TOP_ALPHA: [Slot; 12] = [
    k("Q", "KeyQ"),
    k("W", "KeyW"),
    k("E", "KeyE"),
    k("R", "KeyR"),
    k("T", "KeyT"),
    k("Y", "KeyY"),
    k("U", "KeyU"),
    k("I", "KeyI"),
    k("O", "KeyO"),
    k("P", "KeyP"),
    k("[", "BracketLeft"),
    k("]", "BracketRight"),
];

const HOME_ALPHA: [Slot; 11] = [
    k("A", "KeyA"),
    k("S", "KeyS"),
    k("D", "KeyD"),
    k("F", "KeyF"),
    k("G", "KeyG"),
    k("H", "KeyH"),
    k("J", "KeyJ"),
    k("K", "KeyK"),
    k("L", "KeyL"),
    k(";", "Semicolon"),
    k("'", "Quote"),
];

const BOTTOM_ALPHA: [Slot; 10] = [
    k("Z", "KeyZ"),
    k("X", "KeyX"),
    k("C", "KeyC"),
    k("V", "KeyV"),
    k("B", "KeyB"),
    k("N", "KeyN"),
    k("M", "KeyM"),
    k(",", "Comma"),
    k(".", "Period"),
    k("/", "Slash"),
];

const F_KEYS: [Slot; 12] = [
    k("F1", "F1"),
    k("F2", "F2"),
    k("F3", "F3"),
    k("F4", "F4"),
    k("F5", "F5"),
    k("F6", "F6"),
    k("F7", "F7"),
    k("F8", "F8"),
    k("F9", "F9"),
    k("F10", "F10"),
    k("F11", "F11"),
    k("F12", "F12"),
];

fn row_of(parts: &[&[Slot]]) -> Vec<Slot> {
    parts.iter().flat_map(|p| p.iter().copied()).collect()
}

/// Standard 60%: 61 keys, 15 x 5 units.
pub fn create_60_percent_layout() -> KeyboardLayout {
    let mut b = LayoutBuilder::new();

    b.row(
        0,
        0.0,
        &row_of(&[
            &NUMBER_ROW,
            &[sized("Backspace", "Backspace", KeySizes::BACKSPACE)],
        ]),
    );
    b.row(
        1,
        0.0,
        &row_of(&[
            &[sized("Tab", "Tab", KeySizes::TAB)],
            &TOP_ALPHA,
            &[sized("\\", "Backslash", KeySizes::TAB)],
        ]),
    );
    b.row(
        2,
        0.0,
        &row_of(&[
            &[sized("Caps", "CapsLock", KeySizes::CAPS)],
            &HOME_ALPHA,
            &[sized("Enter", "Enter", KeySizes::ENTER)],
        ]),
    );
    b.row(
        3,
        0.0,
        &row_of(&[
            &[sized("Shift", "ShiftLeft", KeySizes::SHIFT)],
            &BOTTOM_ALPHA,
            &[sized("Shift", "ShiftRight", KeySize::new(2.75, 1.0))],
        ]),
    );
    b.row(
        4,
        0.0,
        &[
            sized("Ctrl", "ControlLeft", KeySizes::WIDE),
            sized("Alt", "AltLeft", KeySizes::WIDE),
            sized("Cmd", "MetaLeft", KeySizes::WIDE),
            sized("Space", "Space", KeySizes::SPACE),
            sized("Cmd", "MetaRight", KeySizes::WIDE),
            sized("Alt", "AltRight", KeySizes::WIDE),
            sized("Fn", "Fn", KeySizes::WIDE),
            sized("Ctrl", "ControlRight", KeySizes::WIDE),
        ],
    );

    b.finish(
        "60-percent-standard",
        "60% Standard",
        "Standard 60% keyboard layout without function keys or arrow keys",
        KeyboardCategory::Sixty,
    )
}

/// 65%: the 60% block plus an arrow cluster and a navigation column, 68 keys.
pub fn create_65_percent_layout() -> KeyboardLayout {
    let mut b = LayoutBuilder::new();
    build_compact_block(&mut b, 0);

    b.finish(
        "65-percent-standard",
        "65% Standard",
        "Compact 65% layout with arrow keys and a navigation column",
        KeyboardCategory::SixtyFive,
    )
}

/// 75%: a function row on top of the 65% block, 84 keys.
pub fn create_75_percent_layout() -> KeyboardLayout {
    let mut b = LayoutBuilder::new();

    b.row(
        0,
        0.0,
        &row_of(&[
            &[k("Esc", "Escape")],
            &F_KEYS,
            &[
                k("PrtSc", "PrintScreen"),
                k("Ins", "Insert"),
                k("Del", "Delete"),
            ],
        ]),
    );
    build_compact_block(&mut b, 1);

    b.finish(
        "75-percent-standard",
        "75% Standard",
        "Exploded 75% layout with a function row, arrows and navigation column",
        KeyboardCategory::SeventyFive,
    )
}

/// Shared 65%-style block (five rows, 16 units wide) starting at `first_row`.
fn build_compact_block(b: &mut LayoutBuilder, first_row: u32) {
    b.row(
        first_row,
        0.0,
        &row_of(&[
            &NUMBER_ROW,
            &[
                sized("Backspace", "Backspace", KeySizes::BACKSPACE),
                k("Home", "Home"),
            ],
        ]),
    );
    b.row(
        first_row + 1,
        0.0,
        &row_of(&[
            &[sized("Tab", "Tab", KeySizes::TAB)],
            &TOP_ALPHA,
            &[
                sized("\\", "Backslash", KeySizes::TAB),
                k("PgUp", "PageUp"),
            ],
        ]),
    );
    b.row(
        first_row + 2,
        0.0,
        &row_of(&[
            &[sized("Caps", "CapsLock", KeySizes::CAPS)],
            &HOME_ALPHA,
            &[
                sized("Enter", "Enter", KeySizes::ENTER),
                k("PgDn", "PageDown"),
            ],
        ]),
    );
    b.row(
        first_row + 3,
        0.0,
        &row_of(&[
            &[sized("Shift", "ShiftLeft", KeySizes::SHIFT)],
            &BOTTOM_ALPHA,
            &[
                sized("Shift", "ShiftRight", KeySizes::CAPS),
                k("↑", "ArrowUp"),
                k("End", "End"),
            ],
        ]),
    );
    b.row(
        first_row + 4,
        0.0,
        &[
            sized("Ctrl", "ControlLeft", KeySizes::WIDE),
            sized("Cmd", "MetaLeft", KeySizes::WIDE),
            sized("Alt", "AltLeft", KeySizes::WIDE),
            sized("Space", "Space", KeySizes::SPACE),
            k("Alt", "AltRight"),
            k("Fn", "Fn"),
            k("Ctrl", "ControlRight"),
            k("←", "ArrowLeft"),
            k("↓", "ArrowDown"),
            k("→", "ArrowRight"),
        ],
    );
}

/// Tenkeyless block shared by TKL and full size: 87 keys, 18.25 x 6 units.
fn build_tkl_block(b: &mut LayoutBuilder) {
    b.row(
        0,
        0.0,
        &[
            k("Esc", "Escape"),
            F_KEYS[0].after(1.0),
            F_KEYS[1],
            F_KEYS[2],
            F_KEYS[3],
            F_KEYS[4].after(0.5),
            F_KEYS[5],
            F_KEYS[6],
            F_KEYS[7],
            F_KEYS[8].after(0.5),
            F_KEYS[9],
            F_KEYS[10],
            F_KEYS[11],
            k("PrtSc", "PrintScreen").after(0.25),
            k("ScrLk", "ScrollLock"),
            k("Pause", "Pause"),
        ],
    );
    b.row(
        1,
        0.0,
        &row_of(&[
            &NUMBER_ROW,
            &[
                sized("Backspace", "Backspace", KeySizes::BACKSPACE),
                k("Ins", "Insert").after(0.25),
                k("Home", "Home"),
                k("PgUp", "PageUp"),
            ],
        ]),
    );
    b.row(
        2,
        0.0,
        &row_of(&[
            &[sized("Tab", "Tab", KeySizes::TAB)],
            &TOP_ALPHA,
            &[
                sized("\\", "Backslash", KeySizes::TAB),
                k("Del", "Delete").after(0.25),
                k("End", "End"),
                k("PgDn", "PageDown"),
            ],
        ]),
    );
    b.row(
        3,
        0.0,
        &row_of(&[
            &[sized("Caps", "CapsLock", KeySizes::CAPS)],
            &HOME_ALPHA,
            &[sized("Enter", "Enter", KeySizes::ENTER)],
        ]),
    );
    b.row(
        4,
        0.0,
        &row_of(&[
            &[sized("Shift", "ShiftLeft", KeySizes::SHIFT)],
            &BOTTOM_ALPHA,
            &[
                sized("Shift", "ShiftRight", KeySize::new(2.75, 1.0)),
                k("↑", "ArrowUp").after(1.25),
            ],
        ]),
    );
    b.row(
        5,
        0.0,
        &[
            sized("Ctrl", "ControlLeft", KeySizes::WIDE),
            sized("Cmd", "MetaLeft", KeySizes::WIDE),
            sized("Alt", "AltLeft", KeySizes::WIDE),
            sized("Space", "Space", KeySizes::SPACE),
            sized("Alt", "AltRight", KeySizes::WIDE),
            sized("Cmd", "MetaRight", KeySizes::WIDE),
            sized("Menu", "ContextMenu", KeySizes::WIDE),
            sized("Ctrl", "ControlRight", KeySizes::WIDE),
            k("←", "ArrowLeft").after(0.25),
            k("↓", "ArrowDown"),
            k("→", "ArrowRight"),
        ],
    );
}

pub fn create_tkl_layout() -> KeyboardLayout {
    let mut b = LayoutBuilder::new();
    build_tkl_block(&mut b);

    b.finish(
        "tkl-standard",
        "TKL Standard",
        "Tenkeyless layout: full alphanumeric block, function row and navigation cluster",
        KeyboardCategory::Tkl,
    )
}

/// Full size: TKL plus a 17-key numpad, 104 keys.
pub fn create_full_size_layout() -> KeyboardLayout {
    const NUMPAD_X: f64 = 18.5;
    const TALL: KeySize = KeySize::new(1.0, 2.0);

    let mut b = LayoutBuilder::new();
    build_tkl_block(&mut b);

    b.row(
        1,
        NUMPAD_X,
        &[
            k("Num", "NumLock"),
            k("/", "NumpadDivide"),
            k("*", "NumpadMultiply"),
            k("-", "NumpadSubtract"),
        ],
    );
    b.row(
        2,
        NUMPAD_X,
        &[
            k("7", "Numpad7"),
            k("8", "Numpad8"),
            k("9", "Numpad9"),
            sized("+", "NumpadAdd", TALL),
        ],
    );
    b.row(
        3,
        NUMPAD_X,
        &[k("4", "Numpad4"), k("5", "Numpad5"), k("6", "Numpad6")],
    );
    b.row(
        4,
        NUMPAD_X,
        &[
            k("1", "Numpad1"),
            k("2", "Numpad2"),
            k("3", "Numpad3"),
            sized("Enter", "NumpadEnter", TALL),
        ],
    );
    b.row(
        5,
        NUMPAD_X,
        &[
            sized("0", "Numpad0", KeySizes::BACKSPACE),
            k(".", "NumpadDecimal"),
        ],
    );

    b.finish(
        "full-size-standard",
        "Full Size Standard",
        "Full-size 104-key ANSI layout with numpad",
        KeyboardCategory::Full,
    )
}

/// Generator for a form factor. `Custom` layouts have no template.
pub fn create_layout(category: KeyboardCategory) -> Option<KeyboardLayout> {
    match category {
        KeyboardCategory::Sixty => Some(create_60_percent_layout()),
        KeyboardCategory::SixtyFive => Some(create_65_percent_layout()),
        KeyboardCategory::SeventyFive => Some(create_75_percent_layout()),
        KeyboardCategory::Tkl => Some(create_tkl_layout()),
        KeyboardCategory::Full => Some(create_full_size_layout()),
        KeyboardCategory::Custom => None,
    }
}

pub fn builtin_layouts() -> Vec<KeyboardLayout> {
    KeyboardCategory::iter().filter_map(create_layout).collect()
}

pub fn find_builtin_layout(id: &str) -> Option<KeyboardLayout> {
    builtin_layouts().into_iter().find(|l| l.id == id)
}
