// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the stepmap CLI.
//!
//! Boxed sections for boundary tables, run listings and lookup rows. Colors
//! follow OneDark on dark terminals and One Light on light ones. Each distinct
//! value gets a stable color so runs are easy to follow across steps. Respects
//! `NO_COLOR` and non-TTY output.
//!
//! # Theme detection order
//!
//! 1. `STEPMAP_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::fmt::Display;
use std::sync::OnceLock;

use stepmap::IntervalMap;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("STEPMAP_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

type Rgb = (u8, u8, u8);

/// OneDark: gray, cyan, then the value rotation
const ONEDARK: [Rgb; 8] = [
    (92, 99, 112),   // #5c6370 gray
    (86, 182, 194),  // #56b6c2 cyan
    (97, 175, 239),  // #61afef blue
    (152, 195, 121), // #98c379 green
    (229, 192, 123), // #e5c07b yellow
    (198, 120, 221), // #c678dd magenta
    (224, 108, 117), // #e06c75 red
    (209, 154, 102), // #d19a66 orange
];

/// One Light, same slots
const ONELIGHT: [Rgb; 8] = [
    (160, 161, 167), // #a0a1a7
    (1, 132, 188),   // #0184bc
    (64, 120, 242),  // #4078f2
    (80, 161, 79),   // #50a14f
    (193, 132, 1),   // #c18401
    (166, 38, 164),  // #a626a4
    (228, 86, 73),   // #e45649
    (152, 104, 1),   // #986801
];

const GRAY_SLOT: usize = 0;
const CYAN_SLOT: usize = 1;
const VALUE_SLOTS: std::ops::Range<usize> = 2..8;

fn slot(index: usize) -> String {
    let (r, g, b) = match theme() {
        Theme::Dark => ONEDARK[index],
        Theme::Light => ONELIGHT[index],
    };
    rgb(r, g, b)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a palette slot with optional modifiers
fn themed(index: usize, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), slot(index), text, RESET)
    } else {
        text.to_string()
    }
}

fn border() -> String {
    if use_colors() {
        slot(GRAY_SLOT)
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border(),
        reset(),
        content,
        " ".repeat(pad),
        border(),
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN_SLOT, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN_SLOT, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color a value by its text so equal values always share a color
pub fn value_colored(text: &str) -> String {
    let hash = text
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    let index = VALUE_SLOTS.start + hash % VALUE_SLOTS.len();
    themed(index, &[BOLD], text)
}

pub fn dim(text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", DIM, text, RESET)
    } else {
        text.to_string()
    }
}

/// Plain `(k,v)` lines for every boundary, in key order
pub fn boundary_lines<K: Display, V: Display>(map: &IntervalMap<K, V>) -> Vec<String> {
    map.iter()
        .map(|(key, value)| format!("({},{})", key, value))
        .collect()
}

/// Print the boundary table and run listing of `map` as one boxed section.
pub fn print_map<K: Ord + Display, V: Display>(label: &str, map: &IntervalMap<K, V>) {
    section_top(label);
    row(&format!(
        " default {}   boundaries {}",
        value_colored(&map.default_value().to_string()),
        map.len()
    ));

    section_mid("boundaries");
    if map.is_empty() {
        row(&format!(" {}", dim("(none)")));
    }
    for (key, value) in map.iter() {
        row(&format!(
            " {} {}",
            pad_right(&key.to_string(), 12),
            value_colored(&value.to_string())
        ));
    }

    section_mid("runs");
    for run in map.runs() {
        let start = run.start.map_or_else(|| "-inf".to_string(), |k| k.to_string());
        let end = run.end.map_or_else(|| "+inf".to_string(), |k| k.to_string());
        row(&format!(
            " {} {}",
            pad_right(&dim(&format!("[{}, {})", start, end)), 24),
            value_colored(&run.value.to_string())
        ));
    }
    section_bot();
}

/// Render `key->value` lookups for every key in `from..=to`
pub fn lookup_lines<V: Display>(map: &IntervalMap<i64, V>, from: i64, to: i64) -> Vec<String> {
    (from..=to)
        .map(|key| format!("{}->{}", key, map.at(&key)))
        .collect()
}

/// The full `--plain` report: lookups, an `all entries:` header, then the
/// boundaries.
pub fn plain_report<V: Display>(map: &IntervalMap<i64, V>, from: i64, to: i64) -> Vec<String> {
    let mut lines = lookup_lines(map, from, to);
    lines.push("all entries:".to_string());
    lines.extend(boundary_lines(map));
    lines
}

/// Print the lookups over `from..=to` as a boxed section.
pub fn print_lookups<V: Display>(map: &IntervalMap<i64, V>, from: i64, to: i64) {
    section_top(&format!("lookups {}..={}", from, to));
    for key in from..=to {
        row(&format!(
            " {} {}",
            pad_right(&key.to_string(), 12),
            value_colored(&map.at(&key).to_string())
        ));
    }
    section_bot();
}
