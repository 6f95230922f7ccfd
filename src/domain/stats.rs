//! Character, line and word counters shown next to the editor.

use serde::{Deserialize, Serialize};

/// Counters derived from the raw document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Unicode scalar values in the document.
    pub chars: usize,
    /// `\n`-separated segments; an empty document still has one line.
    pub lines: usize,
    /// Whitespace-separated tokens.
    pub words: usize,
    pub last_line_chars: usize,
}

impl DocumentStats {
    pub fn from_text(text: &str) -> Self {
        let segments = text.split('\n');
        let (lines, last_line_chars) = segments.fold((0, 0), |(count, _), line| {
            (count + 1, line.chars().count())
        });

        Self {
            chars: text.chars().count(),
            lines,
            words: text.split_whitespace().count(),
            last_line_chars,
        }
    }

    /// Documents above the threshold get a warning highlight on the character counter.
    pub fn is_large(&self, threshold: usize) -> bool {
        self.chars > threshold
    }
}
