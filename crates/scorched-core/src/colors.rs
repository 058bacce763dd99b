//! Named colours for player assignment.

use serde::{Deserialize, Serialize};

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("brown", Rgb::new(165, 42, 42)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("gold", Rgb::new(255, 215, 0)),
    ("gray", Rgb::new(190, 190, 190)),
    ("green", Rgb::new(0, 255, 0)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("maroon", Rgb::new(176, 48, 96)),
    ("navy", Rgb::new(0, 0, 128)),
    ("olive", Rgb::new(128, 128, 0)),
    ("orange", Rgb::new(255, 165, 0)),
    ("pink", Rgb::new(255, 192, 203)),
    ("purple", Rgb::new(160, 32, 240)),
    ("red", Rgb::new(255, 0, 0)),
    ("teal", Rgb::new(0, 128, 128)),
    ("violet", Rgb::new(238, 130, 238)),
    ("white", Rgb::new(255, 255, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
];

/// Look up a colour by name (case-insensitive, surrounding whitespace ignored).
pub fn lookup(name: &str) -> Option<Rgb> {
    let key = name.trim().to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, rgb)| *rgb)
}

/// Canonical form of a colour name, or `None` if it is not a known colour.
pub fn canonical_name(name: &str) -> Option<&'static str> {
    let key = name.trim().to_ascii_lowercase();
    NAMED_COLORS.iter().find(|(n, _)| *n == key).map(|(n, _)| *n)
}
