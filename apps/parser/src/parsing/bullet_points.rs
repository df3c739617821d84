//! Bullet-Point Detector: finds where an entry's itemized descriptions begin
//! and turns the description lines into one string per bullet.

use crate::models::{Fragment, Line};

/// Glyphs résumé templates commonly use as bullets.
pub const BULLET_POINTS: &[&str] = &[
    "⋅", "∙", "🞄", "•", "⦁", "⚫︎", "●", "⬤", "⚬", "○",
];

const MIN_DESCRIPTION_WORDS: usize = 8;

/// Index of the first line that contains a bullet glyph.
pub fn get_first_bullet_point_line_idx(lines: &[Line]) -> Option<usize> {
    lines.iter().position(|line| {
        line.iter()
            .any(|item| BULLET_POINTS.iter().any(|bullet| item.text.contains(bullet)))
    })
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(|c| c.is_ascii_digit())
}

fn has_at_least_8_words(item: &Fragment) -> bool {
    item.text.split(char::is_whitespace).filter(|t| is_word(t)).count() >= MIN_DESCRIPTION_WORDS
}

/// Index of the first description line: the first bulleted line, or failing
/// that the first single-fragment line long enough to read as prose.
pub fn get_descriptions_line_idx(lines: &[Line]) -> Option<usize> {
    get_first_bullet_point_line_idx(lines).or_else(|| {
        lines.iter().position(|line| {
            line.len() == 1 && line.first().is_some_and(has_at_least_8_words)
        })
    })
}

/// Splits description lines into bullet strings. Empty bullets are dropped.
pub fn get_bullet_points_from_lines(lines: &[Line]) -> Vec<String> {
    if get_first_bullet_point_line_idx(lines).is_none() {
        return lines
            .iter()
            .map(|line| line.text().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();
    }

    // Bullets may wrap across lines, so join everything and split on the glyph.
    let mut joined = String::new();
    for item in lines.iter().flat_map(|line| line.iter()) {
        if !joined.ends_with(' ') && !item.text.starts_with(' ') {
            joined.push(' ');
        }
        joined.push_str(&item.text);
    }

    let bullet = get_most_common_bullet_point(&joined);
    let body = match joined.find(bullet) {
        Some(idx) => &joined[idx..],
        None => joined.as_str(),
    };

    body.split(bullet)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
        .collect()
}

/// Most frequent glyph in `text`; the earlier glyph in [`BULLET_POINTS`] wins ties.
fn get_most_common_bullet_point(text: &str) -> &'static str {
    let mut best = BULLET_POINTS[0];
    let mut best_count = 0;
    for &bullet in BULLET_POINTS {
        let count = text.matches(bullet).count();
        if count > best_count {
            best = bullet;
            best_count = count;
        }
    }
    best
}
