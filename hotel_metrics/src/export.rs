//! CSV export of the ordered metrics sequence.
//!
//! Column names match the `diario` table so the file can be re-imported or
//! opened in a spreadsheet as-is. The header is always written, even for an
//! empty store.

use std::io::Write;

use csv::WriterBuilder;

use crate::models::DailyMetric;

/// Header row, in table order.
pub const CSV_HEADER: [&str; 8] = [
    "id",
    "data",
    "quartos_totais",
    "ocupacao_pct",
    "adr",
    "concorrente_adr",
    "revpar",
    "receita",
];

/// Write `rows` as comma-separated UTF-8 to `out`.
pub fn write_csv<W: Write>(rows: &[DailyMetric], out: W) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render `rows` into an in-memory CSV string.
pub fn to_csv_string(rows: &[DailyMetric]) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    String::from_utf8(buf).map_err(|e| csv::Error::from(std::io::Error::other(e)))
}
