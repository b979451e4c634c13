//! Workbook Rendering
//!
//! Builds the three-sheet workbook (Checklist, Summary, Instructions)
//! from an assembled document list and a label bundle. Sheet order is
//! fixed; all strings come from the [`Labels`] bundle.

mod checklist;
mod instructions;
mod summary;

use crate::error::ChecklistError;
use crate::labels::Labels;
use crate::style::SheetStyles;
use crate::types::{DealType, DocumentEntry, Jurisdiction, Language, Sector};
use chrono::{DateTime, Local};
use rust_xlsxwriter::Workbook;

/// Everything the sheet renderers need for one generation run.
pub(crate) struct RenderContext<'a> {
    pub target: &'a str,
    pub deal_type: DealType,
    pub sector: Sector,
    pub jurisdiction: Jurisdiction,
    pub language: Language,
    pub documents: &'a [DocumentEntry],
    pub generated_at: DateTime<Local>,
}

/// Renders the full workbook. Nothing is written to disk here; the
/// caller decides between a buffer and a file.
pub(crate) fn build_workbook(ctx: &RenderContext<'_>) -> Result<Workbook, ChecklistError> {
    let labels = Labels::for_language(ctx.language);
    let styles = SheetStyles::new();

    let mut workbook = Workbook::new();
    checklist::render(workbook.add_worksheet(), ctx, labels, &styles)?;
    summary::render(workbook.add_worksheet(), ctx, labels, &styles)?;
    instructions::render(workbook.add_worksheet(), labels, &styles)?;
    Ok(workbook)
}
