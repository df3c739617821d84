//! Subsection Divider: splits a section into one group of lines per entry
//! (one employer, one school).
//!
//! Boundary rule: a line whose first fragment is bold, and does not start
//! with a bullet glyph, opens a new entry when the line before it does not start
//! bold. A run of bold header lines therefore stays together, and sections
//! without any bold text stay in one piece.

use crate::models::Line;
use crate::parsing::bullet_points::BULLET_POINTS;
use crate::parsing::features::is_bold;

/// Divides `lines` into contiguous subsections that together cover every line once.
pub fn divide_section_into_subsections(lines: &[Line]) -> Vec<&[Line]> {
    create_subsections(lines, is_line_new_subsection_by_bold)
}

fn is_line_new_subsection_by_bold(line: &Line, prev_line: &Line) -> bool {
    let starts_bold = line.first().is_some_and(|item| {
        let text = item.text.trim_start();
        is_bold(item) && !BULLET_POINTS.iter().any(|bullet| text.starts_with(bullet))
    });
    let prev_starts_bold = prev_line.first().is_some_and(is_bold);
    starts_bold && !prev_starts_bold
}

fn create_subsections(
    lines: &[Line],
    is_line_new_subsection: impl Fn(&Line, &Line) -> bool,
) -> Vec<&[Line]> {
    let mut subsections = Vec::new();
    let mut start = 0;
    for i in 1..lines.len() {
        if is_line_new_subsection(&lines[i], &lines[i - 1]) {
            subsections.push(&lines[start..i]);
            start = i;
        }
    }
    if start < lines.len() {
        subsections.push(&lines[start..]);
    }
    subsections
}
