// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the spicerack CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `SPICERACK_THEME` when set, then the `COLORFGBG` hint some terminals
//! export, and defaults to dark. Colors are dropped entirely when `NO_COLOR`
//! is set or stdout is not a TTY, so piped output stays clean.

use spicerack::scoring::SignalHit;
use spicerack::{CatalogSearcher, ItemKind, SearchResult};
use std::sync::OnceLock;

/// Inner width of every report box, borders excluded.
pub const BOX_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    let forced = std::env::var("SPICERACK_THEME")
        .ok()
        .and_then(|value| match value.to_lowercase().as_str() {
            "light" | "l" => Some(Theme::Light),
            "dark" | "d" => Some(Theme::Dark),
            _ => None,
        });
    forced
        .or_else(|| std::env::var("COLORFGBG").ok().and_then(|v| theme_from_colorfgbg(&v)))
        .unwrap_or(Theme::Dark)
}

/// `COLORFGBG` is "fg;bg"; background 7 and up, except 8, is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.parse().ok()?;
    Some(if bg >= 7 && bg != 8 { Theme::Light } else { Theme::Dark })
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// What a piece of report text is, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Product,
    Service,
    Name,
    Heading,
    Key,
    Muted,
    ScoreExact,
    ScoreStrong,
    ScoreWeak,
}

impl Tint {
    /// OneDark on dark terminals, One Light on light ones.
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Tint::Product | Tint::ScoreStrong) => (152, 195, 121),
            (Theme::Dark, Tint::Service) => (198, 120, 221),
            (Theme::Dark, Tint::Name) => (97, 175, 239),
            (Theme::Dark, Tint::Heading | Tint::Key) => (86, 182, 194),
            (Theme::Dark, Tint::Muted) => (92, 99, 112),
            (Theme::Dark, Tint::ScoreExact) => (166, 226, 46),
            (Theme::Dark, Tint::ScoreWeak) => (229, 192, 123),
            (Theme::Light, Tint::Product | Tint::ScoreStrong) => (80, 161, 79),
            (Theme::Light, Tint::Service) => (166, 38, 164),
            (Theme::Light, Tint::Name) => (64, 120, 242),
            (Theme::Light, Tint::Heading | Tint::Key) => (1, 132, 188),
            (Theme::Light, Tint::Muted) => (160, 161, 167),
            (Theme::Light, Tint::ScoreExact) => (68, 140, 39),
            (Theme::Light, Tint::ScoreWeak) => (193, 132, 1),
        }
    }

    fn escape(self, theme: Theme) -> String {
        let (r, g, b) = self.rgb(theme);
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never under `NO_COLOR`.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

pub fn paint(tint: Tint, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", tint.escape(theme()), text, RESET)
    } else {
        text.to_string()
    }
}

pub fn paint_bold(tint: Tint, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", BOLD, tint.escape(theme()), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if !in_escape => len += 1,
            _ => {}
        }
    }
    len
}

/// Right-pad a painted string to `width` visible columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Cut plain text to `max` characters, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

/// A border string: muted when colored, bare otherwise.
fn frame(text: &str) -> String {
    paint(Tint::Muted, text)
}

/// │ content          │
pub fn row(content: &str) {
    let bar = frame("│");
    println!("{bar}{}{bar}", pad_right(content, BOX_WIDTH));
}

/// A horizontal rule with an optional heading: ┌─ LABEL ───┐, ├─ LABEL ───┤, └───┘.
fn rule(left: char, label: Option<&str>, right: char) {
    let heading = label
        .map(|l| format!("─ {} ", paint_bold(Tint::Heading, l)))
        .unwrap_or_default();
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&heading)));
    println!("{}{}{}", frame(&left.to_string()), heading, frame(&format!("{}{}", fill, right)));
}

pub fn section_top(label: &str) {
    rule('┌', Some(label), '┐');
}

pub fn section_mid(label: &str) {
    rule('├', Some(label), '┤');
}

pub fn section_bot() {
    rule('└', None, '┘');
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn kind_badge(kind: ItemKind) -> String {
    match kind {
        ItemKind::Product => paint(Tint::Product, "product"),
        ItemKind::Service => paint(Tint::Service, "service"),
    }
}

/// Color-coded relevance. Exact-name territory is bright, partial-only is gray.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>6.2}", score);
    let tint = if score >= 10.0 {
        Tint::ScoreExact
    } else if score >= 3.0 {
        Tint::ScoreStrong
    } else if score >= 1.0 {
        Tint::ScoreWeak
    } else {
        Tint::Muted
    };
    paint(tint, &text)
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_results(query: &str, results: &[SearchResult]) {
    section_top(&format!("SEARCH \"{}\"", truncate(query, 40)));
    if results.is_empty() {
        row(&paint(Tint::Muted, " no results"));
    }
    for (rank, result) in results.iter().enumerate() {
        let line = format!(
            " {:>2}. {} {} {}",
            rank + 1,
            score_value(result.relevance_score),
            pad_right(&kind_badge(result.kind), 8),
            paint_bold(Tint::Name, &truncate(&result.name, 46)),
        );
        row(&line);
        row(&format!(
            "           {}",
            paint(Tint::Muted, &truncate(&result.target, 58))
        ));
    }
    section_bot();
}

pub fn print_explain(result: &SearchResult, hits: &[SignalHit]) {
    section_mid(&format!("{} {}", result.kind, truncate(&result.id, 40)));
    for hit in hits {
        row(&format!(
            "   {:>6.3}  {} {}",
            hit.points,
            pad_right(&hit.signal.to_string(), 26),
            paint(Tint::Muted, &format!("← \"{}\"", truncate(&hit.term, 24)))
        ));
    }
}

pub fn print_suggestions(names: &[String]) {
    for name in names {
        println!("{}", name);
    }
}

pub fn print_catalog(language: &str, searcher: &CatalogSearcher, expansion: Option<(&str, &[String])>) {
    let config = spicerack::Searcher::config(searcher);

    section_top("CATALOG");
    row(&format!(" language         {}", paint_bold(Tint::Heading, language)));
    row(&format!(" products         {}", searcher.product_count()));
    row(&format!(" services         {}", searcher.service_count()));

    section_mid("CONFIG");
    row(&format!(" minQueryLength   {}", config.min_query_length));
    row(&format!(" maxResults       {}", config.max_results));
    row(&format!(" fuzzyThreshold   {}", config.fuzzy_threshold));

    section_mid(&format!("ALIASES ({})", searcher.aliases().len()));
    for entry in searcher.aliases().entries() {
        let binding = match &entry.binding {
            Some(spicerack::AliasBinding::Product(id)) => format!(" → product {}", id),
            Some(spicerack::AliasBinding::Service(id)) => format!(" → service {}", id),
            None => String::new(),
        };
        row(&format!(
            " {} {}{}",
            pad_right(&paint(Tint::Key, &truncate(&entry.key, 14)), 14),
            truncate(&entry.terms.join(", "), 34),
            paint(Tint::Muted, &binding)
        ));
    }

    section_mid(&format!("REDIRECTS ({})", searcher.redirects().len()));
    for (query, target) in searcher.redirects().sorted() {
        row(&format!(
            " {} {}",
            pad_right(&paint(Tint::Key, &truncate(query, 14)), 14),
            target
        ));
    }

    if let Some((query, terms)) = expansion {
        section_mid(&format!("EXPANSION \"{}\"", truncate(query, 30)));
        if terms.is_empty() {
            row(&paint(Tint::Muted, " (too short, or a quick redirect)"));
        }
        for term in terms {
            row(&format!(" {}", term));
        }
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
