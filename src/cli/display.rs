// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the docsift CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `DOCSIFT_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals),
//! then macOS system appearance, then defaults to dark.
//!
//! Matched spans are drawn bold in the highlight color, relevance tiers get
//! their own badge colors, and every result sits in a box row. Respects
//! `NO_COLOR` and falls back to plain text when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `DOCSIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use docsift::{HighlightedText, RelevanceTier};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; background 7 and up (except 8) is a light terminal.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        None
    }
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("DOCSIFT_THEME")
        .ok()
        .and_then(|value| parse_theme(&value))
    {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| theme_from_colorfgbg(&value))
    {
        return theme;
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence or error means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const WHITE: (u8, u8, u8) = (171, 178, 191);   // #abb2bf
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const WHITE: (u8, u8, u8) = (56, 58, 66);      // #383a42 (foreground)
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(WHITE);
theme_color!(GRAY);
theme_color!(BRIGHT_YELLOW);

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

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
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

/// Border color and reset, or nothing when colors are off
fn border_style() -> (String, &'static str) {
    if use_colors() {
        (GRAY(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (border, reset) = border_style();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset,
        content,
        " ".repeat(pad),
        border,
        reset
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (border, reset) = border_style();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let (border, reset) = border_style();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (border, reset) = border_style();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded relevance tier badge
pub fn tier_label(tier: RelevanceTier) -> String {
    let label = tier_text(tier);
    if !use_colors() {
        return format!("[{}]", label);
    }
    let color = match tier {
        RelevanceTier::High => GREEN(),
        RelevanceTier::Medium => BLUE(),
        RelevanceTier::Low => GRAY(),
    };
    format!("{}[{}]{}", color, label, RESET)
}

fn tier_text(tier: RelevanceTier) -> &'static str {
    match tier {
        RelevanceTier::High => "HIGH",
        RelevanceTier::Medium => "MED ",
        RelevanceTier::Low => "LOW ",
    }
}

/// Color-coded score value
pub fn score_value(score: u32) -> String {
    if !use_colors() {
        return format!("{:>2}", score);
    }
    let color = match score {
        5.. => GREEN(),
        3..=4 => YELLOW(),
        _ => GRAY(),
    };
    format!("{}{:>2}{}", color, score, RESET)
}

/// Render highlighted spans, cut to at most `max_chars` visible characters.
///
/// Matched spans are bold in the highlight color. Without colors they are
/// wrapped in `[` `]` so matches stay visible in plain output.
pub fn highlighted(text: &HighlightedText, max_chars: usize) -> String {
    render_highlighted(text, max_chars, use_colors())
}

fn render_highlighted(text: &HighlightedText, max_chars: usize, colors: bool) -> String {
    let mut out = String::new();
    let mut budget = max_chars;

    for span in &text.spans {
        if budget == 0 {
            break;
        }
        let count = span.text.chars().count();
        let (piece, cut) = if count > budget {
            let keep = budget.saturating_sub(1);
            (span.text.chars().take(keep).collect::<String>(), true)
        } else {
            (span.text.clone(), false)
        };
        budget = budget.saturating_sub(piece.chars().count());

        if span.is_match {
            if colors {
                out.push_str(&format!("{}{}{}{}", BOLD, BRIGHT_YELLOW(), piece, RESET));
            } else {
                out.push_str(&format!("[{}]", piece));
            }
        } else {
            out.push_str(&piece);
        }

        if cut {
            out.push('…');
            break;
        }
    }
    out
}

/// The result count line: "2 results found", "1 result found", "No results".
pub fn result_count(shown: usize, total: usize) -> String {
    let text = result_count_text(shown, total);
    if total == 0 {
        themed(YELLOW, &[BOLD], &text)
    } else {
        themed(GREEN, &[BOLD], &text)
    }
}

fn result_count_text(shown: usize, total: usize) -> String {
    match total {
        0 => "No results found".to_string(),
        1 => "1 result found".to_string(),
        n if shown < n => format!("{} results found (showing {})", n, shown),
        n => format!("{} results found", n),
    }
}

/// Color-coded timing value in ms
pub fn timing_ms(value: f64) -> String {
    if !use_colors() {
        return format!("{:>8.3}", value);
    }
    let color = if value < 5.0 {
        GREEN()
    } else if value < 20.0 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{:>8.3}{}", color, value, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
