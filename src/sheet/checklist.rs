//! Checklist Sheet
//!
//! One row per document entry plus the styled header row, with list
//! data-validation on the Priority and Status columns, conditional
//! status coloring, an autofilter over the whole table and a frozen
//! header row.

use super::RenderContext;
use crate::labels::Labels;
use crate::style::{ColumnWidths, SheetStyles};
use crate::types::Priority;
use rust_xlsxwriter::{
    ConditionalFormatCell, ConditionalFormatCellRule, DataValidation, Worksheet, XlsxError,
};

const PRIORITY_COL: u16 = 3;
const STATUS_COL: u16 = 5;
const LAST_COL: u16 = 7;

pub(super) fn render(
    worksheet: &mut Worksheet,
    ctx: &RenderContext<'_>,
    labels: &Labels,
    styles: &SheetStyles,
) -> Result<(), XlsxError> {
    worksheet.set_name(labels.checklist_tab)?;

    let mut widths = ColumnWidths::new(LAST_COL as usize + 1);
    for (col, header) in labels.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &styles.header)?;
        widths.note(col as u16, header);
    }

    let default_status = labels.default_status();
    let status_format = SheetStyles::filled(&styles.cell, SheetStyles::status_fill(0));

    for (i, doc) in ctx.documents.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string_with_format(row, 0, doc.category.as_str(), &styles.cell)?;
        worksheet.write_string_with_format(row, 1, &doc.name, &styles.cell_wrapped)?;
        worksheet.write_string_with_format(row, 2, doc.required_label(), &styles.cell)?;

        let priority_format =
            SheetStyles::filled(&styles.cell, SheetStyles::priority_fill(doc.priority));
        worksheet.write_string_with_format(
            row,
            PRIORITY_COL,
            doc.priority.as_str(),
            &priority_format,
        )?;

        worksheet.write_blank(row, 4, &styles.cell)?;
        worksheet.write_string_with_format(row, STATUS_COL, default_status, &status_format)?;
        worksheet.write_blank(row, 6, &styles.cell)?;
        worksheet.write_blank(row, LAST_COL, &styles.cell)?;

        widths.note(0, doc.category.as_str());
        widths.note(1, &doc.name);
        widths.note(PRIORITY_COL, doc.priority.as_str());
        widths.note(STATUS_COL, default_status);
    }

    let last_row = ctx.documents.len() as u32;

    // Recolor the status column as the user edits it.
    for (i, status) in labels.statuses.iter().enumerate() {
        let fill = SheetStyles::filled(&styles.body, SheetStyles::status_fill(i));
        let rule = ConditionalFormatCell::new()
            .set_rule(ConditionalFormatCellRule::EqualTo((*status).to_string()))
            .set_format(fill);
        worksheet.add_conditional_format(1, STATUS_COL, last_row, STATUS_COL, &rule)?;
    }

    let status_validation = DataValidation::new()
        .allow_list_strings(&labels.statuses)?
        .set_error_title("Invalid Status")?
        .set_error_message("Please select a valid status.")?;
    worksheet.add_data_validation(1, STATUS_COL, last_row, STATUS_COL, &status_validation)?;

    let priorities: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
    let priority_validation = DataValidation::new().allow_list_strings(&priorities)?;
    worksheet.add_data_validation(1, PRIORITY_COL, last_row, PRIORITY_COL, &priority_validation)?;

    worksheet.autofilter(0, 0, last_row, LAST_COL)?;
    worksheet.set_freeze_panes(1, 0)?;

    // The document-name column always gets the full wrap width.
    widths.force(1, 55.0);
    widths.apply(worksheet)?;
    Ok(())
}
