//! Excel export of calculation reports

use haulcalc_types::{Error, Report, ReportTable, ReportValue, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

const SUMMARY_FIRST_ROW: u32 = 4;
const TABLE_FIRST_ROW: u32 = 3;

/// Worksheet row of the `index`-th item written from `first_row` down
fn sheet_row(first_row: u32, index: usize) -> Result<u32> {
    u32::try_from(index)
        .ok()
        .and_then(|index| index.checked_add(first_row))
        .ok_or_else(|| Error::Excel(format!("row {} out of range", index)))
}

fn sheet_col(index: usize) -> Result<u16> {
    u16::try_from(index).map_err(|e| Error::Excel(e.to_string()))
}

/// Export a report to an Excel file
///
/// Scalars land on the "Summary" sheet; every table gets a sheet of its own.
pub fn export_to_excel(report: &Report, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    for (index, (label, table)) in report.tables().enumerate() {
        let sheet = workbook.add_worksheet();
        write_table_sheet(sheet, index + 1, label, table)?;
    }

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    tracing::debug!(
        method = %report.method,
        path = %output_path.display(),
        "report exported"
    );
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &Report) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, &report.method, &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Дата расчёта:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, chrono::Utc::now().to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    for (index, entry) in report.entries.iter().enumerate() {
        let row = sheet_row(SUMMARY_FIRST_ROW, index)?;
        // tables are only referenced here, their rows go to separate sheets
        let value = match &entry.value {
            ReportValue::Scalar { value } => value.as_str(),
            ReportValue::Table(_) => "(см. отдельный лист)",
        };
        sheet
            .write_string(row, 0, &entry.label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, value)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 60)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 20)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_table_sheet(
    sheet: &mut Worksheet,
    number: usize,
    label: &str,
    table: &ReportTable,
) -> Result<()> {
    sheet
        .set_name(format!("Table {}", number))
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, label, &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    for (col, header) in table.headers.iter().enumerate() {
        sheet
            .write_string_with_format(2, sheet_col(col)?, header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for row_idx in 0..table.rows.len() {
        let row = sheet_row(TABLE_FIRST_ROW, row_idx)?;
        for (col, cell) in table.row_cells(row_idx).into_iter().enumerate() {
            sheet
                .write_string(row, sheet_col(col)?, cell)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    Ok(())
}
