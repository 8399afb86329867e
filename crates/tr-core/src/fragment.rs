//! Positioned text runs emitted by the document decoder.

use serde::{Deserialize, Serialize};

/// One run of text tagged with the horizontal position of its baseline start.
///
/// Positions are in PDF points, the same unit as [`ColumnLayout`](crate::ColumnLayout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub x: f32,
    pub text: String,
}

impl TextFragment {
    pub fn new(x: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            text: text.into(),
        }
    }
}
