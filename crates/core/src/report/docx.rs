//! OOXML serialization of the report table

use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, Shading, Table, TableCell, TableRow, VAlignType,
    VMergeType, WidthType,
};

use crate::error::{Error, Result};
use crate::report::table::{MergeDirective, ReportTable, COLUMN_HEADERS};

// Column widths in twips, roughly 10/15/15/15/30/15 percent of an A4 page.
const COLUMN_WIDTHS: [usize; 6] = [960, 1440, 1440, 1440, 2880, 1440];
const HEADER_FILL: &str = "E0E0E0";
const TITLE_HALF_POINTS: usize = 32;

fn centered(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .align(AlignmentType::Center)
}

fn centered_bold(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text).bold())
        .align(AlignmentType::Center)
}

fn header_cell(text: &str, width: usize) -> TableCell {
    TableCell::new()
        .add_paragraph(centered_bold(text))
        .width(width, WidthType::Dxa)
        .shading(Shading::new().fill(HEADER_FILL))
        .vertical_align(VAlignType::Center)
}

fn body_cell(paragraph: Paragraph, width: usize) -> TableCell {
    TableCell::new()
        .add_paragraph(paragraph)
        .width(width, WidthType::Dxa)
        .vertical_align(VAlignType::Center)
}

/// Pack the title and table into `.docx` bytes. Any packing failure surfaces
/// as a generation error; no partial document is returned.
pub(super) fn serialize(title: &str, table: &ReportTable) -> Result<Vec<u8>> {
    let mut rows = Vec::with_capacity(table.rows.len() + 1);

    rows.push(TableRow::new(
        COLUMN_HEADERS
            .iter()
            .zip(COLUMN_WIDTHS)
            .map(|(label, width)| header_cell(label, width))
            .collect(),
    ));

    for row in &table.rows {
        let merge = match row.month.merge {
            MergeDirective::Start => VMergeType::Restart,
            MergeDirective::Continue => VMergeType::Continue,
        };
        rows.push(TableRow::new(vec![
            body_cell(centered_bold(&row.month.label), COLUMN_WIDTHS[0]).vertical_merge(merge),
            body_cell(centered(&row.date), COLUMN_WIDTHS[1]),
            body_cell(centered(&row.time), COLUMN_WIDTHS[2]),
            body_cell(centered(&row.location), COLUMN_WIDTHS[3]),
            body_cell(
                Paragraph::new().add_run(Run::new().add_text(row.attendees.as_str())),
                COLUMN_WIDTHS[4],
            ),
            body_cell(centered(&row.category), COLUMN_WIDTHS[5]),
        ]));
    }

    let doc = Docx::new()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(title).bold().size(TITLE_HALF_POINTS))
                .align(AlignmentType::Center),
        )
        .add_table(Table::new(rows).set_grid(COLUMN_WIDTHS.to_vec()));

    let mut buffer = Cursor::new(Vec::new());
    doc.build()
        .pack(&mut buffer)
        .map_err(|e| Error::Report(e.to_string()))?;
    Ok(buffer.into_inner())
}
