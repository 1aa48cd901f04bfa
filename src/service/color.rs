//! Club color normalization.

/// Color names matched against club colors and their display hex values.
///
/// Matching walks this table in order, so an earlier entry wins over a more specific
/// later one: `"Sky Blue / White"` matches `blue` before `sky blue`.
pub const COLOR_TABLE: [(&str, &str); 9] = [
    ("red", "#DC2626"),
    ("blue", "#2563EB"),
    ("claret", "#7C2D12"),
    ("navy", "#1E293B"),
    ("sky blue", "#0EA5E9"),
    ("royal blue", "#1D4ED8"),
    ("white", "#FFFFFF"),
    ("black", "#000000"),
    ("gold", "#F59E0B"),
];

/// Derives a primary hex color from free text club colors such as `"Red / White"`.
///
/// Returns the hex value of the first [`COLOR_TABLE`] entry contained in the text,
/// compared case-insensitively. Missing, empty or unrecognized text gives `None`.
pub fn normalize_color(club_colors: Option<&str>) -> Option<&'static str> {
    let colors = club_colors?.to_lowercase();

    if colors.trim().is_empty() {
        return None;
    }

    COLOR_TABLE
        .iter()
        .find(|(name, _)| colors.contains(name))
        .map(|(_, hex)| *hex)
}
