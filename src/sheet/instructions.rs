//! Instructions Sheet
//!
//! Static usage guide: how-to-use steps, the status-value glossary, the
//! indicative six-phase timeline and a blank advisor-contact template.
//! Everything here is label data; the sheet is identical for every run
//! in a given language.

use crate::labels::Labels;
use crate::style::{ColumnWidths, SheetStyles};
use rust_xlsxwriter::{Worksheet, XlsxError};

pub(super) fn render(
    worksheet: &mut Worksheet,
    labels: &Labels,
    styles: &SheetStyles,
) -> Result<(), XlsxError> {
    worksheet.set_name(labels.instructions_tab)?;

    let mut widths = ColumnWidths::new(labels.contacts_headers.len());
    let mut row: u32 = 0;
    worksheet.merge_range(0, 0, 0, 4, labels.instructions_title, &styles.title)?;

    row += 2;
    worksheet.write_string_with_format(row, 0, labels.how_to_use, &styles.subtitle)?;
    for item in labels.how_to_use_items {
        row += 1;
        worksheet.write_string_with_format(row, 0, item, &styles.body)?;
    }

    row += 2;
    worksheet.write_string_with_format(row, 0, labels.status_definitions, &styles.subtitle)?;
    row += 1;
    for (col, header) in labels.status_def_headers.iter().enumerate() {
        worksheet.write_string_with_format(row, col as u16, *header, &styles.header)?;
    }
    for (i, (status, definition)) in labels.status_defs.iter().enumerate() {
        row += 1;
        let status_format =
            SheetStyles::filled(&styles.cell_bold, SheetStyles::status_fill(i));
        worksheet.write_string_with_format(row, 0, *status, &status_format)?;
        worksheet.write_string_with_format(row, 1, *definition, &styles.cell)?;
    }

    row += 2;
    worksheet.write_string_with_format(row, 0, labels.timeline_title, &styles.subtitle)?;
    row += 1;
    for (col, header) in labels.timeline_headers.iter().enumerate() {
        worksheet.write_string_with_format(row, col as u16, *header, &styles.header)?;
    }
    for (phase, activities) in labels.timeline_items {
        row += 1;
        worksheet.write_string_with_format(row, 0, phase, &styles.cell_bold)?;
        worksheet.write_string_with_format(row, 1, activities, &styles.cell)?;
    }

    row += 2;
    worksheet.write_string_with_format(row, 0, labels.contacts_title, &styles.subtitle)?;
    row += 1;
    for (col, header) in labels.contacts_headers.iter().enumerate() {
        worksheet.write_string_with_format(row, col as u16, *header, &styles.header)?;
        widths.note(col as u16, header);
    }
    for role in labels.contacts_roles {
        row += 1;
        worksheet.write_string_with_format(row, 0, role, &styles.cell)?;
        for col in 1..labels.contacts_headers.len() as u16 {
            worksheet.write_blank(row, col, &styles.cell)?;
        }
    }

    widths.force(0, 28.0);
    widths.force(1, 60.0);
    widths.apply(worksheet)?;
    Ok(())
}
