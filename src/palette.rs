//! Fixed named-color palette and nearest-match classification
//!
//! The palette is a build-time table of human-readable color names with
//! reference RGB values. Classification is a linear scan for the smallest
//! Euclidean distance in RGB space; the table is small and fixed, so nothing
//! fancier is needed.

use std::fmt;

use crate::error::DetectError;

/// RGB color sample, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance to another color.
    ///
    /// The square root is omitted: exact integer math, and the nearest
    /// entry is the same either way.
    #[inline]
    pub fn distance_squared(&self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// A palette entry: a display name with its reference color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub rgb: Rgb,
}

impl NamedColor {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            rgb: Rgb::new(r, g, b),
        }
    }
}

/// Label reported when no palette entry can match (empty palette)
pub const COLOR_NOT_FOUND: &str = "Color not found";

/// Built-in named-color table.
///
/// Entry order matters: ties between equidistant entries resolve to the
/// earlier one, so the common names sit before their close variants.
pub const NAMED_COLORS: &[NamedColor] = &[
    // Grays
    NamedColor::new("Black", 0, 0, 0),
    NamedColor::new("White", 255, 255, 255),
    NamedColor::new("Gray", 128, 128, 128),
    NamedColor::new("Silver", 192, 192, 192),
    NamedColor::new("Light Gray", 211, 211, 211),
    NamedColor::new("Dark Gray", 169, 169, 169),
    NamedColor::new("Dim Gray", 105, 105, 105),
    // Reds
    NamedColor::new("Red", 255, 0, 0),
    NamedColor::new("Dark Red", 139, 0, 0),
    NamedColor::new("Crimson", 220, 20, 60),
    NamedColor::new("Firebrick", 178, 34, 34),
    NamedColor::new("Indian Red", 205, 92, 92),
    NamedColor::new("Salmon", 250, 128, 114),
    NamedColor::new("Tomato", 255, 99, 71),
    NamedColor::new("Coral", 255, 127, 80),
    // Oranges and yellows
    NamedColor::new("Orange Red", 255, 69, 0),
    NamedColor::new("Orange", 255, 165, 0),
    NamedColor::new("Dark Orange", 255, 140, 0),
    NamedColor::new("Gold", 255, 215, 0),
    NamedColor::new("Yellow", 255, 255, 0),
    NamedColor::new("Khaki", 240, 230, 140),
    NamedColor::new("Beige", 245, 245, 220),
    // Greens
    NamedColor::new("Green", 0, 255, 0),
    NamedColor::new("Dark Green", 0, 100, 0),
    NamedColor::new("Forest Green", 34, 139, 34),
    NamedColor::new("Sea Green", 46, 139, 87),
    NamedColor::new("Light Green", 144, 238, 144),
    NamedColor::new("Spring Green", 0, 255, 127),
    NamedColor::new("Olive", 128, 128, 0),
    NamedColor::new("Teal", 0, 128, 128),
    // Cyans and blues
    NamedColor::new("Cyan", 0, 255, 255),
    NamedColor::new("Turquoise", 64, 224, 208),
    NamedColor::new("Sky Blue", 135, 206, 235),
    NamedColor::new("Light Blue", 173, 216, 230),
    NamedColor::new("Steel Blue", 70, 130, 180),
    NamedColor::new("Royal Blue", 65, 105, 225),
    NamedColor::new("Blue", 0, 0, 255),
    NamedColor::new("Navy", 0, 0, 128),
    NamedColor::new("Midnight Blue", 25, 25, 112),
    // Purples and pinks
    NamedColor::new("Indigo", 75, 0, 130),
    NamedColor::new("Purple", 128, 0, 128),
    NamedColor::new("Dark Violet", 148, 0, 211),
    NamedColor::new("Magenta", 255, 0, 255),
    NamedColor::new("Orchid", 218, 112, 214),
    NamedColor::new("Plum", 221, 160, 221),
    NamedColor::new("Violet", 238, 130, 238),
    NamedColor::new("Lavender", 230, 230, 250),
    NamedColor::new("Hot Pink", 255, 105, 180),
    NamedColor::new("Deep Pink", 255, 20, 147),
    NamedColor::new("Pink", 255, 192, 203),
    // Browns
    NamedColor::new("Maroon", 128, 0, 0),
    NamedColor::new("Brown", 165, 42, 42),
    NamedColor::new("Saddle Brown", 139, 69, 19),
    NamedColor::new("Sienna", 160, 82, 45),
    NamedColor::new("Chocolate", 210, 105, 30),
    NamedColor::new("Peru", 205, 133, 63),
    NamedColor::new("Tan", 210, 180, 140),
];

/// Find the name of the palette entry nearest to `sample`.
///
/// Linear scan keeping the first entry with the smallest distance, so ties
/// and duplicate entries resolve to the earliest occurrence. The starting
/// best is [`COLOR_NOT_FOUND`] at `u32::MAX`, which any real entry beats;
/// an empty palette therefore yields the sentinel.
pub fn classify(sample: Rgb, palette: &[NamedColor]) -> &'static str {
    let mut best_name = COLOR_NOT_FOUND;
    let mut best_dist = u32::MAX;

    for entry in palette {
        let dist = sample.distance_squared(entry.rgb);
        if dist < best_dist {
            best_dist = dist;
            best_name = entry.name;
        }
    }

    best_name
}

/// A validated, non-empty palette.
///
/// [`classify`] keeps the sentinel fallback of the raw scan; `Palette` moves
/// the empty-table case to construction time, so a misconfigured system
/// fails at startup instead of answering "Color not found" forever.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    entries: &'static [NamedColor],
}

impl Palette {
    /// Wrap a custom table.
    ///
    /// Fails with [`DetectError::EmptyPalette`] when the table has no
    /// entries.
    pub fn new(entries: &'static [NamedColor]) -> Result<Self, DetectError> {
        if entries.is_empty() {
            return Err(DetectError::EmptyPalette);
        }
        Ok(Self { entries })
    }

    /// Name of the nearest entry; never the sentinel, since the table is
    /// non-empty.
    pub fn classify(&self, sample: Rgb) -> &'static str {
        classify(sample, self.entries)
    }

    pub fn entries(&self) -> &'static [NamedColor] {
        self.entries
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: NAMED_COLORS,
        }
    }
}

/// A completed classification: the matched name plus the sample it was
/// matched for.
///
/// The `Display` form is the history line, e.g. `Red (RGB: 255, 0, 0)`.
/// `name` alone is what gets handed to the speech collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    pub name: &'static str,
    pub sample: Rgb,
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (RGB: {}, {}, {})",
            self.name, self.sample.r, self.sample.g, self.sample.b
        )
    }
}
