use csv::{ReaderBuilder, StringRecord, Trim};

use crate::core::conversions::{date_str, decimal_str, integer_str};
use crate::core::{HistoricalDataPoint, HistoricalSeries, InvalidValueError, RowWarning, YfError};

/// Header row of the v7 download CSV, in column order.
const HISTORY_CSV_HEADER: [&str; 7] = ["Date", "Open", "High", "Low", "Close", "Adj Close", "Volume"];

/// Decode the CSV body of the history download endpoint.
///
/// Cells holding the missing-data marker decode to `None` for that cell only. Rows that
/// cannot be decoded (wrong column count, malformed date or number) and rows repeating an
/// earlier date are skipped and reported in [`HistoricalSeries::warnings`]. Points come back
/// sorted by ascending date.
///
/// # Errors
///
/// `YfError::MissingData` if the header row is absent or differs from the expected columns.
pub fn transform_historical_data_result(body: &str) -> Result<HistoricalSeries, YfError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.trim().as_bytes());

    let headers = rdr.headers()?.clone();
    if !headers.iter().eq(HISTORY_CSV_HEADER) {
        return Err(YfError::MissingData(format!(
            "CSV header is invalid: expected `{}`, got `{}`",
            HISTORY_CSV_HEADER.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut rows: Vec<(u64, HistoricalDataPoint)> = Vec::new();
    let mut warnings = Vec::new();
    for rec in rdr.records() {
        let (line, outcome) = match rec {
            Ok(rec) => (line_of(&rec), point_from(&rec)),
            Err(e) => (
                e.position().map_or(0, csv::Position::line),
                Err(e.to_string()),
            ),
        };
        match outcome {
            Ok(point) => rows.push((line, point)),
            Err(reason) => warnings.push(RowWarning { line, reason }),
        }
    }

    // Stable sort keeps the first occurrence of a date ahead of its duplicates.
    rows.sort_by_key(|(_, p)| p.date);
    let mut points: Vec<HistoricalDataPoint> = Vec::with_capacity(rows.len());
    for (line, point) in rows {
        if points.last().is_some_and(|prev| prev.date == point.date) {
            warnings.push(RowWarning {
                line,
                reason: format!("duplicate date {}", point.date),
            });
        } else {
            points.push(point);
        }
    }
    warnings.sort_by_key(|w| w.line);
    let series = HistoricalSeries { points, warnings };

    #[cfg(feature = "tracing")]
    if !series.warnings.is_empty() {
        tracing::warn!(
            skipped = series.warnings.len(),
            kept = series.points.len(),
            "skipped rows while decoding history CSV"
        );
    }

    Ok(series)
}

fn line_of(rec: &StringRecord) -> u64 {
    rec.position().map_or(0, csv::Position::line)
}

fn point_from(rec: &StringRecord) -> Result<HistoricalDataPoint, String> {
    if rec.len() != HISTORY_CSV_HEADER.len() {
        return Err(format!(
            "expected {} columns, found {}",
            HISTORY_CSV_HEADER.len(),
            rec.len()
        ));
    }
    let cell = |i: usize| rec.get(i).unwrap_or_default();
    let price = |i: usize| {
        decimal_str(cell(i)).map_err(|e| column_error(HISTORY_CSV_HEADER[i], &e))
    };

    Ok(HistoricalDataPoint {
        date: date_str(cell(0)).map_err(|e| column_error(HISTORY_CSV_HEADER[0], &e))?,
        open: price(1)?,
        high: price(2)?,
        low: price(3)?,
        close: price(4)?,
        adj_close: price(5)?,
        volume: integer_str(cell(6)).map_err(|e| column_error(HISTORY_CSV_HEADER[6], &e))?,
    })
}

fn column_error(column: &str, e: &InvalidValueError) -> String {
    format!("column `{column}`: {e}")
}
