//! Board presets: the starting tiers and the colors handed to new tiers.

/// Label given to tiers created from the toolbar
pub const NEW_TIER_LABEL: &str = "New Tier";

/// Content given to text items created from the pool
pub const NEW_TEXT_ITEM: &str = "New Item";

/// A preset tier: (id, label, color)
pub type TierPreset = (&'static str, &'static str, &'static str);

/// Tiers a fresh board starts with, best first
pub const DEFAULT_TIERS: &[TierPreset] = &[
    ("s", "S", "#FF7F7F"),
    ("aplus", "A+", "#FFBF7F"),
    ("a", "A", "#FFDF7F"),
    ("aminus", "A-", "#FFFF7F"),
    ("bplus", "B+", "#BFFF7F"),
    ("b", "B", "#7FFF7F"),
    ("bminus", "B-", "#7FFFFF"),
    ("c", "C", "#7FBFFF"),
];

/// Pastel tier color for a hue in degrees (wrapped into `[0, 360)`)
pub fn tier_color_for_hue(hue: f64) -> String {
    let hue = hue.rem_euclid(360.0);
    format!("hsl({:.0}, 70%, 60%)", hue.floor())
}
