//! Single-line human-readable rendering:
//! `[ <timestamp> <logger> | <function> | LN<line> | <LEVEL> ] <message>`.

use super::{Color, ColorPair, Formatter, Palette, colorize, timestamp};
use crate::record::LogRecord;

/// Fixed tag replacing the logger/function/line/level block.
#[derive(Debug, Clone)]
struct CustomTag {
    tag: String,
    colors: Option<ColorPair>,
}

#[derive(Debug, Clone)]
pub struct ConsoleFormatter {
    /// Piped output and CI logs can't render ANSI escapes.
    colors_enabled: bool,
    palette: Palette,
    custom: Option<CustomTag>,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleFormatter {
    /// Accent color of the timestamp in default mode.
    pub const TIMESTAMP_COLOR: Color = Color::purple();

    /// Default mode with the built-in palette and colors on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors_enabled: true,
            palette: Palette::default(),
            custom: None,
        }
    }

    /// Turns ANSI escapes off for pipes and files that can't render them.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Overrides the per-level colors of default mode.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Switches to custom-format mode: `tag` (uppercased) replaces the default
    /// block and `colors` replaces the palette. Without colors the line is plain.
    /// The timestamp is kept in this mode and takes the label color when one is given.
    #[must_use]
    pub fn custom_tag(mut self, tag: &str, colors: Option<ColorPair>) -> Self {
        self.custom = Some(CustomTag {
            tag: tag.to_uppercase(),
            colors,
        });
        self
    }

    fn level_tag(&self, record: &LogRecord) -> String {
        match &self.custom {
            Some(custom) => custom.tag.clone(),
            None => format!(
                "{} | {} | LN{} | {}",
                record.logger, record.function, record.line, record.level
            ),
        }
    }

    fn colors_for(&self, record: &LogRecord) -> Option<ColorPair> {
        if !self.colors_enabled {
            return None;
        }
        match &self.custom {
            Some(custom) => custom.colors,
            None => self.palette.get(record.level.name()),
        }
    }
}

impl Formatter for ConsoleFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let ts = timestamp::iso8601(&record.timestamp);
        let tag = self.level_tag(record);
        let msg = record.rendered_message();

        let Some(pair) = self.colors_for(record) else {
            // Default mode keeps the timestamp accent even for unknown levels.
            let ts = if self.colors_enabled && self.custom.is_none() {
                colorize(&ts, Self::TIMESTAMP_COLOR)
            } else {
                ts
            };
            return format!("[ {ts} {tag} ] {msg}");
        };

        let ts = match &self.custom {
            Some(_) => colorize(&ts, pair.label),
            None => colorize(&ts, Self::TIMESTAMP_COLOR),
        };
        let tag = colorize(&tag, pair.label);
        let msg = colorize(&msg, pair.message);
        format!("[ {ts} {tag} ] {msg}")
    }
}
