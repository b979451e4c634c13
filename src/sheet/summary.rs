//! Summary Sheet
//!
//! Metadata block for the run (target, deal type, sector, jurisdiction,
//! generation timestamp, total count) followed by the two aggregate
//! tables. Zero-count rows are omitted from both tables.

use super::RenderContext;
use crate::assembler::{count_by_category, count_by_priority};
use crate::labels::Labels;
use crate::style::{ColumnWidths, SheetStyles};
use rust_xlsxwriter::{Worksheet, XlsxError};

pub(super) fn render(
    worksheet: &mut Worksheet,
    ctx: &RenderContext<'_>,
    labels: &Labels,
    styles: &SheetStyles,
) -> Result<(), XlsxError> {
    worksheet.set_name(labels.summary_tab)?;

    worksheet.merge_range(0, 0, 0, 3, labels.summary_title, &styles.title)?;

    let metadata = [
        (labels.target, ctx.target.to_string()),
        (labels.transaction, ctx.deal_type.to_string()),
        (labels.sector, ctx.sector.to_string()),
        (labels.jurisdiction, ctx.jurisdiction.to_string()),
        (
            labels.date_generated,
            ctx.generated_at.format("%Y-%m-%d %H:%M").to_string(),
        ),
    ];
    for (i, (label, value)) in metadata.iter().enumerate() {
        let row = (i + 2) as u32;
        worksheet.write_string_with_format(row, 0, *label, &styles.bold)?;
        worksheet.write_string_with_format(row, 1, value, &styles.body)?;
    }
    worksheet.write_string_with_format(7, 0, labels.total_docs, &styles.bold)?;
    worksheet.write_number_with_format(7, 1, ctx.documents.len() as f64, &styles.body)?;

    let mut row: u32 = 10;
    worksheet.write_string_with_format(row, 0, labels.by_category, &styles.subtitle)?;
    row += 1;
    worksheet.write_string_with_format(row, 0, labels.category, &styles.header)?;
    worksheet.write_string_with_format(row, 1, labels.count, &styles.header)?;
    for (category, count) in count_by_category(ctx.documents) {
        row += 1;
        worksheet.write_string_with_format(row, 0, category.as_str(), &styles.cell)?;
        worksheet.write_number_with_format(row, 1, count as f64, &styles.cell)?;
    }

    row += 2;
    worksheet.write_string_with_format(row, 0, labels.by_priority, &styles.subtitle)?;
    row += 1;
    worksheet.write_string_with_format(row, 0, labels.priority, &styles.header)?;
    worksheet.write_string_with_format(row, 1, labels.count, &styles.header)?;
    for (priority, count) in count_by_priority(ctx.documents) {
        row += 1;
        let fill = SheetStyles::filled(&styles.cell, SheetStyles::priority_fill(priority));
        worksheet.write_string_with_format(row, 0, priority.as_str(), &fill)?;
        worksheet.write_number_with_format(row, 1, count as f64, &styles.cell)?;
    }

    let mut widths = ColumnWidths::new(4);
    widths.force(0, 30.0);
    widths.force(1, 18.0);
    widths.apply(worksheet)?;
    Ok(())
}
