//! Console rendering for local output.
//!
//! Every accepted record becomes exactly one line on the console writer
//! (stderr unless a facade was built with another writer):
//!
//! ```text
//! [HH:MM:SS.UUUUUU] <colour><bold>[LEVEL]<reset> [node] message
//! ```
//!
//! The time is local wall-clock time of the record's seconds, the
//! microseconds are zero-padded to six digits, and the level name is
//! left-justified in five columns. Downstream tooling parses this layout, so
//! changes here are format changes.
//!
//! # Palettes
//!
//! A [`Palette`] maps each level to an ANSI colour escape. The default matches
//! the historical colours (cyan, green, yellow, red, magenta). Palettes can
//! also be built from colour names in the `[console.colors]` config section.

use crate::config::ColorsConfig;
use crate::level::level_name;
use crate::{LogLevel, LogRecord};
use chrono::{Local, TimeZone};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";
const BLACK: &str = "\x1b[30m";

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// ANSI escapes used when rendering the level tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    levels: [&'static str; 5],
    bold: &'static str,
    reset: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            levels: [CYAN, GREEN, YELLOW, RED, MAGENTA],
            bold: BOLD,
            reset: RESET,
        }
    }
}

impl Palette {
    /// No escapes at all, for writers that are not terminals.
    pub fn plain() -> Self {
        Self {
            levels: [""; 5],
            bold: "",
            reset: "",
        }
    }

    /// Build a palette from colour names. Names that are not recognised fall
    /// back to white rather than failing, so a typo in a config file never
    /// stops logging.
    pub fn from_colors(colors: &ColorsConfig) -> Self {
        let pick = |name: &str| parse_color(name).unwrap_or(WHITE);
        Self {
            levels: [
                pick(&colors.debug),
                pick(&colors.info),
                pick(&colors.warn),
                pick(&colors.error),
                pick(&colors.fatal),
            ],
            bold: BOLD,
            reset: RESET,
        }
    }

    pub fn level_color(&self, level: LogLevel) -> &'static str {
        self.levels[level.ordinal() as usize]
    }
}

/// Map a colour name to its ANSI foreground escape.
fn parse_color(s: &str) -> Option<&'static str> {
    match s.trim().to_ascii_lowercase().as_str() {
        "black" => Some(BLACK),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "yellow" => Some(YELLOW),
        "blue" => Some(BLUE),
        "magenta" | "purple" => Some(MAGENTA),
        "cyan" => Some(CYAN),
        "white" => Some(WHITE),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Line formatting
// ---------------------------------------------------------------------------

/// Render `record` as a single console line, without the trailing newline.
///
/// The level tag is rendered from the record's wire ordinal.
pub fn format_line(record: &LogRecord, palette: &Palette) -> String {
    let stamp = record.stamp();
    format!(
        "[{}.{:06}] {}{}[{:<5}]{} [{}] {}",
        local_hms(stamp.sec),
        stamp.usec,
        palette.level_color(record.level),
        palette.bold,
        level_name(record.level.ordinal()),
        palette.reset,
        record.node_name,
        record.message,
    )
}

fn local_hms(sec: i64) -> String {
    match Local.timestamp_opt(sec, 0).earliest() {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => "??:??:??".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
