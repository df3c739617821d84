//! Fragment and line model: the positioned text produced by upstream layout extraction.
//!
//! # Ordering contract
//! A [`Line`] holds its fragments in reading order (left to right) and a slice of
//! lines is in reading order (top to bottom). Nothing in this crate resorts them:
//! section grouping, subsection division and the scoring tie-break all rely on
//! iterating in exactly the order the caller supplied.

use serde::{Deserialize, Serialize};

/// One contiguous run of text as positioned on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub text: String,
    #[serde(default)]
    pub font_name: String,
}

impl Fragment {
    pub fn new(text: impl Into<String>, font_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_name: font_name.into(),
        }
    }

    /// Fragment set in a regular (non-bold) font.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, "Helvetica")
    }

    /// Fragment set in a bold font.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, "Helvetica-Bold")
    }

    /// Boldness is derived from the font name, e.g. `Arial-BoldMT`.
    pub fn is_bold(&self) -> bool {
        self.font_name.to_lowercase().contains("bold")
    }
}

/// Fragments judged to lie on the same visual row, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line(Vec<Fragment>);

impl Line {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self(fragments)
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.0
    }

    pub fn first(&self) -> Option<&Fragment> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.0.iter()
    }

    /// Fragment texts joined with a single space.
    pub fn text(&self) -> String {
        self.0
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Vec<Fragment>> for Line {
    fn from(fragments: Vec<Fragment>) -> Self {
        Self(fragments)
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Flattens lines into their fragments, preserving reading order.
pub fn flatten(lines: &[Line]) -> Vec<&Fragment> {
    lines.iter().flat_map(|line| line.iter()).collect()
}
