//! Row reassembly from positioned text fragments.
//!
//! The decoder emits each table row left to right, so a fragment whose x is
//! smaller than the previous one means the text wrapped back to the first
//! column and a new row started. Header boilerplate between the
//! `Detailed Report` title and the `TIME` column heading is skipped, as is the
//! page footer.
//!
//! State lives in a [`Cursor`] that is threaded through [`advance`]; a
//! [`PageReassembler`] owns one cursor and one [`RowBuffer`] for a single page
//! and is dropped afterwards, so nothing leaks between pages.

use serde::{Deserialize, Serialize};

use crate::accumulator::RowBuffer;
use crate::column::ColumnLayout;
use crate::entry::TimeEntry;
use crate::error::ExtractError;
use crate::fragment::TextFragment;

/// Literal texts that drive the skip region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sentinels {
    /// Starts skipping (the report title).
    pub skip_start: String,
    /// Ends skipping (the last column heading); discarded itself.
    pub skip_end: String,
    /// Footer line, discarded wherever it appears.
    pub footer: String,
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            skip_start: "Detailed Report".to_string(),
            skip_end: "TIME".to_string(),
            footer: "Created with toggl.com".to_string(),
        }
    }
}

/// Settings for turning fragments into entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub columns: ColumnLayout,
    pub sentinels: Sentinels,
    /// Fail instead of leaving times unset when the time range has no single `-`.
    pub strict_time_column: bool,
}

/// Whether fragments are currently part of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    Skipping,
}

/// Reassembly state carried from one fragment to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cursor {
    pub state: ScanState,
    /// x of the last fragment that was not discarded; 0 at page start.
    pub last_x: f32,
}

/// What to do with a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Sentinel or skipped text.
    Discard,
    /// Table text. When `boundary` is set, the current row must be flushed
    /// before this fragment is buffered.
    Buffer { boundary: bool },
}

/// Computes the next cursor and the action for `fragment`.
///
/// Fragments with a non-finite x are discarded and leave the cursor as is.
pub fn advance(cursor: Cursor, fragment: &TextFragment, sentinels: &Sentinels) -> (Cursor, Step) {
    let text = fragment.text.as_str();
    match cursor.state {
        ScanState::Skipping => {
            if text == sentinels.skip_end {
                tracing::trace!("leaving header block");
                let cursor = Cursor {
                    state: ScanState::Normal,
                    ..cursor
                };
                (cursor, Step::Discard)
            } else {
                (cursor, Step::Discard)
            }
        }
        ScanState::Normal if text == sentinels.skip_start => {
            tracing::trace!("entering header block");
            let cursor = Cursor {
                state: ScanState::Skipping,
                ..cursor
            };
            (cursor, Step::Discard)
        }
        ScanState::Normal if text == sentinels.footer => (cursor, Step::Discard),
        // A NaN x would disable wrap detection for the rest of the page
        ScanState::Normal if !fragment.x.is_finite() => {
            tracing::trace!(x = fragment.x, text = %fragment.text, "dropping fragment without a position");
            (cursor, Step::Discard)
        }
        ScanState::Normal => {
            let boundary = fragment.x < cursor.last_x;
            let cursor = Cursor {
                state: ScanState::Normal,
                last_x: fragment.x,
            };
            (cursor, Step::Buffer { boundary })
        }
    }
}

/// Reassembles the rows of one page.
#[derive(Debug)]
pub struct PageReassembler<'a> {
    config: &'a ExtractConfig,
    page: usize,
    cursor: Cursor,
    row: RowBuffer,
    rows_emitted: usize,
}

impl<'a> PageReassembler<'a> {
    /// Starts a page. `page` is 1-based and only used for error context.
    pub fn new(config: &'a ExtractConfig, page: usize) -> Self {
        Self {
            config,
            page,
            cursor: Cursor::default(),
            row: RowBuffer::default(),
            rows_emitted: 0,
        }
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Buffered text of the row in progress.
    pub const fn pending(&self) -> &RowBuffer {
        &self.row
    }

    /// Feeds one fragment, returning the previous row if this fragment
    /// started a new one.
    pub fn feed(&mut self, fragment: &TextFragment) -> Result<Option<TimeEntry>, ExtractError> {
        let (cursor, step) = advance(self.cursor, fragment, &self.config.sentinels);
        self.cursor = cursor;

        let Step::Buffer { boundary } = step else {
            return Ok(None);
        };

        let finished = if boundary {
            Some(self.flush("wrap")?)
        } else {
            None
        };

        match self.config.columns.classify(fragment.x) {
            Some(kind) => self.row.push(kind, fragment.text.as_str()),
            None => tracing::trace!(x = fragment.x, text = %fragment.text, "dropping unassigned fragment"),
        }

        Ok(finished)
    }

    /// Flushes the page's last row, which never sees a wrap.
    pub fn finish(mut self) -> Result<TimeEntry, ExtractError> {
        self.flush("end of page")
    }

    fn flush(&mut self, trigger: &'static str) -> Result<TimeEntry, ExtractError> {
        let row = self.rows_emitted;
        let entry = self
            .row
            .finalize(self.page, row, self.config.strict_time_column);
        self.row.reset();
        self.rows_emitted += 1;
        tracing::debug!(page = self.page, row, trigger, "row boundary");
        entry
    }
}

/// Reassembles one page, appending its rows to `entries`.
pub fn extract_page(
    config: &ExtractConfig,
    page: usize,
    fragments: &[TextFragment],
    entries: &mut Vec<TimeEntry>,
) -> Result<(), ExtractError> {
    let mut reassembler = PageReassembler::new(config, page);
    for fragment in fragments {
        if let Some(entry) = reassembler.feed(fragment)? {
            entries.push(entry);
        }
    }
    entries.push(reassembler.finish()?);
    Ok(())
}

/// Reassembles every page in order. Pages are numbered from 1.
pub fn extract_pages<I, P>(config: &ExtractConfig, pages: I) -> Result<Vec<TimeEntry>, ExtractError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<[TextFragment]>,
{
    let mut entries = Vec::new();
    for (index, page) in pages.into_iter().enumerate() {
        let before = entries.len();
        extract_page(config, index + 1, page.as_ref(), &mut entries)?;
        tracing::debug!(page = index + 1, rows = entries.len() - before, "page extracted");
    }
    Ok(entries)
}
