//! Workbook Styles
//!
//! The shared format palette (Calibri faces, dark-blue headers, thin
//! borders, priority and status fills) and a column-width tracker that
//! mirrors the content-based auto-width of the original template.

use crate::types::Priority;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Worksheet, XlsxError};
use unicode_width::UnicodeWidthStr;

pub(crate) const DARK_BLUE: Color = Color::RGB(0x1F3864);

const FILL_HIGH: Color = Color::RGB(0xF4CCCC);
const FILL_MEDIUM: Color = Color::RGB(0xFFF2CC);
const FILL_LOW: Color = Color::RGB(0xD9EAD3);

/// Status fills indexed by status position (Pending, Received, Reviewed,
/// Missing). Positions line up across languages, so the palette is
/// language-independent.
const STATUS_FILLS: [Color; 4] = [
    Color::RGB(0xFCE4D6),
    Color::RGB(0xDDEBF7),
    Color::RGB(0xE2EFDA),
    Color::RGB(0xF4CCCC),
];

const MIN_COLUMN_WIDTH: f64 = 12.0;
const MAX_COLUMN_WIDTH: f64 = 55.0;

/// Reusable cell formats for the three sheets.
pub(crate) struct SheetStyles {
    /// Dark-blue table header: white bold, bordered, centered.
    pub header: Format,
    /// Sheet title, bold 14pt.
    pub title: Format,
    /// Section subtitle, bold 12pt.
    pub subtitle: Format,
    /// Plain body text, no border.
    pub body: Format,
    /// Bold body text, no border.
    pub bold: Format,
    /// Bordered table cell.
    pub cell: Format,
    /// Bordered table cell with text wrapping (document-name column).
    pub cell_wrapped: Format,
    /// Bordered bold table cell.
    pub cell_bold: Format,
}

impl Default for SheetStyles {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetStyles {
    pub fn new() -> Self {
        let body = Format::new().set_font_name("Calibri").set_font_size(11);
        let bold = body.clone().set_bold();
        let cell = body
            .clone()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::VerticalCenter);

        Self {
            header: bold
                .clone()
                .set_font_color(Color::White)
                .set_background_color(DARK_BLUE)
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            title: Format::new().set_font_name("Calibri").set_font_size(14).set_bold(),
            subtitle: Format::new().set_font_name("Calibri").set_font_size(12).set_bold(),
            cell_wrapped: cell.clone().set_text_wrap(),
            cell_bold: bold.clone().set_border(FormatBorder::Thin),
            cell,
            body,
            bold,
        }
    }

    /// Fill color for a priority value.
    pub fn priority_fill(priority: Priority) -> Color {
        match priority {
            Priority::High => FILL_HIGH,
            Priority::Medium => FILL_MEDIUM,
            Priority::Low => FILL_LOW,
        }
    }

    /// Fill color for the status at `index` in the language's status list.
    pub fn status_fill(index: usize) -> Color {
        STATUS_FILLS[index]
    }

    /// A copy of `base` with a background fill.
    pub fn filled(base: &Format, color: Color) -> Format {
        base.clone().set_background_color(color)
    }
}

/// Tracks the widest content seen per column and applies
/// `content width + 3` clamped to `[12, 55]`, like the original
/// template's auto-width pass. Widths are measured in display columns
/// with `unicode-width` so accented text sizes correctly.
pub(crate) struct ColumnWidths {
    widths: Vec<f64>,
    forced: Vec<Option<f64>>,
}

impl ColumnWidths {
    pub fn new(columns: usize) -> Self {
        Self {
            widths: vec![MIN_COLUMN_WIDTH; columns],
            forced: vec![None; columns],
        }
    }

    /// Records the content of one cell in `col`.
    pub fn note(&mut self, col: u16, text: &str) {
        let width = (text.width() + 3) as f64;
        let clamped = width.min(MAX_COLUMN_WIDTH);
        let slot = &mut self.widths[col as usize];
        if clamped > *slot {
            *slot = clamped;
        }
    }

    /// Forces `col` to a fixed width, overriding the tracked content.
    pub fn force(&mut self, col: u16, width: f64) {
        self.forced[col as usize] = Some(width);
    }

    /// Applies the computed widths to `worksheet`.
    pub fn apply(&self, worksheet: &mut Worksheet) -> Result<(), XlsxError> {
        for (col, width) in self.widths.iter().enumerate() {
            let width = self.forced[col].unwrap_or(*width);
            worksheet.set_column_width(col as u16, width)?;
        }
        Ok(())
    }
}
