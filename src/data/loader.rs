use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord, Trim};

use super::model::{Dataset, ID_COLUMN, MetricsTable, TARGET_COLUMN};
use crate::metrics::MetricsSummary;

// ---------------------------------------------------------------------------
// Dataset loader
// ---------------------------------------------------------------------------

/// Load the admission dataset CSV.
///
/// Header names are whitespace-trimmed (the public dataset ships with
/// `"Chance of Admit "`), the `Serial No.` column is dropped, and
/// `Chance of Admit` becomes the target. Every other column must be numeric.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    parse_dataset(&text).with_context(|| format!("parsing dataset {}", path.display()))
}

pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let headers = header_names(&mut reader)?;

    let target_idx = headers
        .iter()
        .position(|h| h == TARGET_COLUMN)
        .with_context(|| format!("missing '{TARGET_COLUMN}' column"))?;
    let id_idx = headers.iter().position(|h| h == ID_COLUMN);

    let feature_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != target_idx && Some(*i) != id_idx)
        .map(|(i, h)| (i, h.clone()))
        .collect();

    let mut rows = Vec::new();
    let mut target = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let row = feature_cols
            .iter()
            .map(|(idx, name)| parse_cell(&record, *idx, row_no, name))
            .collect::<Result<Vec<f64>>>()?;

        target.push(parse_cell(&record, target_idx, row_no, TARGET_COLUMN)?);
        rows.push(row);
    }

    if rows.is_empty() {
        bail!("dataset has no rows");
    }

    Ok(Dataset {
        feature_names: feature_cols.into_iter().map(|(_, name)| name).collect(),
        rows,
        target,
    })
}

fn parse_cell(record: &StringRecord, idx: usize, row: usize, col: &str) -> Result<f64> {
    let raw = record.get(idx).unwrap_or("");
    let value = raw
        .parse::<f64>()
        .with_context(|| format!("row {row}, '{col}': '{raw}' is not a number"))?;
    if !value.is_finite() {
        bail!("row {row}, '{col}': '{raw}' is not a finite number");
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Metrics loader
// ---------------------------------------------------------------------------

/// Load the precomputed metrics CSV (`MAE,MSE,RMSE,R2`, one data row).
///
/// Additional columns are kept for display and otherwise ignored.
pub fn load_metrics(path: &Path) -> Result<MetricsTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading metrics {}", path.display()))?;
    parse_metrics(&text).with_context(|| format!("parsing metrics {}", path.display()))
}

pub fn parse_metrics(text: &str) -> Result<MetricsTable> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let headers = header_names(&mut reader)?;
    let header_record = StringRecord::from(headers.clone());

    let records = reader
        .records()
        .collect::<Result<Vec<StringRecord>, _>>()
        .context("reading metrics rows")?;

    let first = records.first().context("metrics file has no data row")?;
    let summary: MetricsSummary = first
        .deserialize(Some(&header_record))
        .context("row 0 must carry numeric MAE, MSE, RMSE and R2")?;

    Ok(MetricsTable {
        headers,
        rows: records
            .iter()
            .map(|r| r.iter().map(str::to_string).collect())
            .collect(),
        summary,
    })
}

/// Header names; the reader is built with `Trim::All`, so they arrive trimmed.
fn header_names<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Result<Vec<String>> {
    Ok(reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(str::to_string)
        .collect())
}
