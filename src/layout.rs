//! Vertical placement of the text block.

use serde::Serialize;

/// Vertical metrics for a block of wrapped lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Distance between consecutive baselines.
    pub line_height: i64,
    /// `line_height * line_count`.
    pub content_height: i64,
    /// Baseline of the first line.
    pub start_y: i64,
}

impl Layout {
    /// Center `line_count` lines of `font_size` text on a `canvas_size` canvas.
    ///
    /// The first baseline sits one line height below the top of the block,
    /// which is itself centered on the canvas midpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use aspira::Layout;
    ///
    /// let layout = Layout::compute(1, 42, 1080, 1.4);
    /// assert_eq!(layout.line_height, 58);
    /// assert_eq!(layout.content_height, 58);
    /// assert_eq!(layout.start_y, 540 - 29 + 58);
    /// ```
    pub fn compute(
        line_count: usize,
        font_size: u32,
        canvas_size: u32,
        line_height_factor: f64,
    ) -> Self {
        let line_height = (f64::from(font_size) * line_height_factor).floor() as i64;
        let content_height = line_height * line_count as i64;
        let start_y = i64::from(canvas_size) / 2 - content_height.div_euclid(2) + line_height;

        Self {
            line_height,
            content_height,
            start_y,
        }
    }

    /// Baseline of line `index` (zero-based).
    pub fn baseline(&self, index: usize) -> i64 {
        self.start_y + self.line_height * index as i64
    }
}
