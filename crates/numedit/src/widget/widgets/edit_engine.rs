//! Single-line text buffer with a caret and a selection.
//!
//! [`EditEngine`] owns the text shown in a numeric field while it is being
//! edited. Offsets are character offsets, not byte offsets. The selection is
//! stored as an anchor plus a cursor position so a drag can move either side
//! of the anchor; queries always see it normalised as a [`Selection`].
//!
//! Every mutation re-measures the full text, the text before the selection
//! and the selected text through the attached [`TextMeasure`], so layout
//! queries never need a measurer of their own.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use numedit::widget::EditEngine;
//! use numedit::render::MonospaceMetrics;
//!
//! let mut engine = EditEngine::new(Arc::new(MonospaceMetrics::new(8.0)));
//! engine.set_text("50");
//! engine.select_all();
//! engine.insert("7");
//! assert_eq!(engine.text(), "7");
//! assert_eq!(engine.cursor_position(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use numedit_render::TextMeasure;

/// A normalised selection, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Selection {
    /// First selected character offset.
    pub start: usize,
    /// One past the last selected character offset.
    pub end: usize,
}

impl Selection {
    /// Create a selection from two offsets in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A caret at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Check if this is a bare caret.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Cached pixel widths of the current text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Width of the whole text.
    pub text_width: f32,
    /// Width of the text before the selection.
    pub pre_selection_width: f32,
    /// Width of the selected text. Zero for a bare caret.
    pub selection_width: f32,
}

/// Text buffer, caret, selection and measured widths of an edited field.
pub struct EditEngine {
    text: String,
    /// Cursor position (character offset). The moving end of the selection.
    cursor_pos: usize,
    /// Fixed end of the selection. Equal to `cursor_pos` for a bare caret.
    selection_anchor: usize,
    metrics: TextMetrics,
    measure: Arc<dyn TextMeasure>,
}

impl EditEngine {
    /// Create an empty engine measuring with `measure`.
    pub fn new(measure: Arc<dyn TextMeasure>) -> Self {
        Self {
            text: String::new(),
            cursor_pos: 0,
            selection_anchor: 0,
            metrics: TextMetrics::default(),
            measure,
        }
    }

    /// Replace the text measurer and re-measure.
    pub fn set_measure(&mut self, measure: Arc<dyn TextMeasure>) {
        self.measure = measure;
        self.refresh_metrics();
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole text. The caret and anchor are kept, clamped to the
    /// new length.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let len = self.len();
        self.cursor_pos = self.cursor_pos.min(len);
        self.selection_anchor = self.selection_anchor.min(len);
        self.refresh_metrics();
    }

    // =========================================================================
    // Cursor and Selection
    // =========================================================================

    /// Get the cursor position.
    pub fn cursor_position(&self) -> usize {
        self.cursor_pos
    }

    /// Get the normalised selection.
    pub fn selection(&self) -> Selection {
        Selection::new(self.selection_anchor, self.cursor_pos)
    }

    /// Check if any characters are selected.
    pub fn has_selection(&self) -> bool {
        self.selection_anchor != self.cursor_pos
    }

    /// Get the selected text.
    pub fn selected_text(&self) -> &str {
        let selection = self.selection();
        let start = self.byte_offset(selection.start);
        let end = self.byte_offset(selection.end);
        &self.text[start..end]
    }

    /// Map a pixel position to a character offset.
    ///
    /// `pixel_x` is measured from the left edge of the text. The position is
    /// mapped linearly from `[0, text_width]` onto `[0, len]`, truncated and
    /// clamped. Empty text always maps to offset 0.
    pub fn hit_test(&self, pixel_x: f32) -> usize {
        let width = self.metrics.text_width;
        if width <= 0.0 || !pixel_x.is_finite() {
            return 0;
        }
        let len = self.len();
        let mapped = (pixel_x / width * len as f32).clamp(0.0, len as f32);
        (mapped as usize).min(len)
    }

    /// Start a selection at `offset`: anchor and caret both move there.
    pub fn begin_selection(&mut self, offset: usize) {
        let offset = offset.min(self.len());
        self.selection_anchor = offset;
        self.cursor_pos = offset;
        self.refresh_metrics();
    }

    /// Move the caret to `offset`, keeping the anchor.
    pub fn extend_selection(&mut self, offset: usize) {
        self.cursor_pos = offset.min(self.len());
        self.refresh_metrics();
    }

    /// Select the whole text.
    pub fn select_all(&mut self) {
        self.selection_anchor = 0;
        self.cursor_pos = self.len();
        self.refresh_metrics();
    }

    /// Collapse the selection to a caret at `offset`.
    pub fn collapse_caret(&mut self, offset: usize) {
        self.begin_selection(offset);
    }

    /// Collapse the selection to a caret at the end of the text.
    pub fn collapse_to_end(&mut self) {
        let len = self.len();
        self.collapse_caret(len);
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Replace the selection (if any) with `text` and put the caret after it.
    pub fn insert(&mut self, text: &str) {
        let selection = self.selection();
        let start = self.byte_offset(selection.start);
        let end = self.byte_offset(selection.end);
        self.text.replace_range(start..end, text);
        let caret = selection.start + text.chars().count();
        self.selection_anchor = caret;
        self.cursor_pos = caret;
        self.refresh_metrics();
    }

    /// Delete the selection, or the character before the caret.
    ///
    /// Returns `true` if the text changed.
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            self.delete_selection();
            return true;
        }
        if self.cursor_pos == 0 {
            return false;
        }
        let start = self.byte_offset(self.cursor_pos - 1);
        let end = self.byte_offset(self.cursor_pos);
        self.text.replace_range(start..end, "");
        self.cursor_pos -= 1;
        self.selection_anchor = self.cursor_pos;
        self.refresh_metrics();
        true
    }

    /// Delete the selection, or the character after the caret.
    ///
    /// Returns `true` if the text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            self.delete_selection();
            return true;
        }
        if self.cursor_pos >= self.len() {
            return false;
        }
        let start = self.byte_offset(self.cursor_pos);
        let end = self.byte_offset(self.cursor_pos + 1);
        self.text.replace_range(start..end, "");
        self.refresh_metrics();
        true
    }

    fn delete_selection(&mut self) {
        let selection = self.selection();
        let start = self.byte_offset(selection.start);
        let end = self.byte_offset(selection.end);
        self.text.replace_range(start..end, "");
        self.selection_anchor = selection.start;
        self.cursor_pos = selection.start;
        self.refresh_metrics();
    }

    /// Collapse a selection to its start, or move the caret one left.
    pub fn move_caret_left(&mut self) {
        let target = if self.has_selection() {
            self.selection().start
        } else {
            self.cursor_pos.saturating_sub(1)
        };
        self.collapse_caret(target);
    }

    /// Collapse a selection to its end, or move the caret one right.
    pub fn move_caret_right(&mut self) {
        let target = if self.has_selection() {
            self.selection().end
        } else {
            self.cursor_pos + 1
        };
        self.collapse_caret(target);
    }

    /// Move the caret to the start of the text.
    pub fn move_caret_home(&mut self) {
        self.collapse_caret(0);
    }

    /// Move the caret to the end of the text.
    pub fn move_caret_end(&mut self) {
        self.collapse_to_end();
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Get the cached widths.
    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    /// Width of the whole text.
    pub fn text_width(&self) -> f32 {
        self.metrics.text_width
    }

    /// Horizontal placement of the selection inside a field.
    ///
    /// The text is right-aligned with `padding` pixels to spare. Returns the
    /// selection's x offset from the field's left edge and its width.
    pub fn selection_geometry(&self, field_width: f32, padding: f32) -> (f32, f32) {
        let x = field_width - padding - self.metrics.text_width + self.metrics.pre_selection_width;
        (x, self.metrics.selection_width)
    }

    /// Re-measure the text and the selection.
    pub fn refresh_metrics(&mut self) {
        let selection = self.selection();
        let start = self.byte_offset(selection.start);
        let end = self.byte_offset(selection.end);

        self.metrics = TextMetrics {
            text_width: self.measure.measure_width(&self.text),
            pre_selection_width: if start > 0 {
                self.measure.measure_width(&self.text[..start])
            } else {
                0.0
            },
            selection_width: if end > start {
                self.measure.measure_width(&self.text[start..end])
            } else {
                0.0
            },
        };
    }

    /// Byte index of a character offset, clamped to the end of the text.
    fn byte_offset(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(index, _)| index)
    }
}

impl fmt::Debug for EditEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditEngine")
            .field("text", &self.text)
            .field("selection", &self.selection())
            .field("cursor_pos", &self.cursor_pos)
            .field("metrics", &self.metrics)
            .finish()
    }
}

static_assertions::assert_impl_all!(EditEngine: Send, Sync);
