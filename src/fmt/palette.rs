//! Severity -> (label color, message color) table used by the console formatter.

use super::Color;
use std::collections::HashMap;

/// Label color paints the timestamp-adjacent tag; message color paints the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub label: Color,
    pub message: Color,
}

impl ColorPair {
    /// `label` paints the timestamp and tag, `message` the message text.
    #[must_use]
    pub const fn new(label: Color, message: Color) -> Self {
        Self { label, message }
    }

    /// Both halves accept palette names or hex; `None` if either is unrecognized.
    #[must_use]
    pub fn parse(label: &str, message: &str) -> Option<Self> {
        Some(Self::new(Color::parse(label)?, Color::parse(message)?))
    }
}

/// Keyed by uppercase level name. Levels without an entry render uncolored.
#[derive(Debug, Clone)]
pub struct Palette {
    pairs: HashMap<String, ColorPair>,
}

impl Default for Palette {
    fn default() -> Self {
        let table = [
            ("DEBUG", "yellow", "#fff9ae"),
            ("INFO", "green", "#d3ffb3"),
            ("WARNING", "orange", "#ffc100"),
            ("TIMER", "blue", "#71c7ec"),
            ("ERROR", "red", "#ba262b"),
            ("CRITICAL", "#8d0101", "#d5212e"),
            ("APP_INFO", "#5fd700", "#5fffaf"),
        ];

        let pairs = table
            .into_iter()
            .filter_map(|(level, label, message)| {
                ColorPair::parse(label, message).map(|pair| (level.to_string(), pair))
            })
            .collect();

        Self { pairs }
    }
}

impl Palette {
    /// No level colors; only the default-mode timestamp accent remains.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            pairs: HashMap::new(),
        }
    }

    /// Adds or replaces the pair for `level` (case-insensitive).
    pub fn set(&mut self, level: &str, pair: ColorPair) {
        self.pairs.insert(level.to_uppercase(), pair);
    }

    /// `None` for levels without colors, which then render uncolored.
    #[must_use]
    pub fn get(&self, level: &str) -> Option<ColorPair> {
        self.pairs.get(&level.to_uppercase()).copied()
    }
}
