use std::io::{BufRead as _, BufReader, BufWriter, Write as _};
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{InklingError, InklingResult};
use crate::stroke::model::{Painting, StrokeArrays};

/// One labelled drawing: `{"word":"axe","drawing":[[[x...],[y...]],...]}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DrawingRecord {
    /// Class label the player was asked to draw.
    pub word: String,
    /// Strokes as `[xs, ys]` integer arrays of kept points, in capture order.
    pub drawing: Vec<StrokeArrays>,
}

impl DrawingRecord {
    /// Snapshot the kept points of `painting`. Simplify the painting first.
    pub fn new(word: impl Into<String>, painting: &Painting) -> Self {
        Self {
            word: word.into(),
            drawing: painting.to_arrays(),
        }
    }

    /// Checks every stroke has equal-length coordinate arrays.
    pub fn validate(&self) -> InklingResult<()> {
        for (i, [xs, ys]) in self.drawing.iter().enumerate() {
            if xs.len() != ys.len() {
                return Err(InklingError::validation(format!(
                    "record '{}': stroke {i} has {} x coordinates but {} y coordinates",
                    self.word,
                    xs.len(),
                    ys.len()
                )));
            }
        }
        Ok(())
    }

    pub fn to_painting(&self) -> InklingResult<Painting> {
        Painting::from_arrays(&self.drawing)
    }

    /// Compact single-line JSON, no trailing newline.
    pub fn to_line(&self) -> InklingResult<String> {
        serde_json::to_string(self).map_err(|e| InklingError::serde(e.to_string()))
    }

    pub fn from_line(line: &str) -> InklingResult<Self> {
        let record: Self =
            serde_json::from_str(line).map_err(|e| InklingError::serde(e.to_string()))?;
        record.validate()?;
        Ok(record)
    }
}

pub fn ensure_parent_dir(path: &Path) -> InklingResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `records` to `path`, one per line, replacing any existing file.
#[tracing::instrument(skip(records), fields(records = records.len()))]
pub fn write_ndjson(path: &Path, records: &[DrawingRecord]) -> InklingResult<()> {
    ensure_parent_dir(path)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;
    let mut out = BufWriter::new(file);
    for record in records {
        let line = record.to_line()?;
        writeln!(out, "{line}").with_context(|| format!("failed to write '{}'", path.display()))?;
    }
    out.flush()
        .with_context(|| format!("failed to flush '{}'", path.display()))?;
    Ok(())
}

/// Export `painting` labelled `word` as the only record in `path`.
///
/// An empty painting is not serialized: the file is still (re)written, but with no records.
/// Returns whether a record was written.
pub fn export_painting(path: &Path, word: &str, painting: &Painting) -> InklingResult<bool> {
    if painting.is_empty() {
        tracing::info!(path = %path.display(), "empty painting, writing no record");
        write_ndjson(path, &[])?;
        return Ok(false);
    }
    let record = DrawingRecord::new(word, painting);
    tracing::debug!(word, strokes = record.drawing.len(), "exporting painting");
    write_ndjson(path, std::slice::from_ref(&record))?;
    Ok(true)
}

/// Parse every non-blank line of `path` as a [`DrawingRecord`].
pub fn read_ndjson(path: &Path) -> InklingResult<Vec<DrawingRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open '{}'", path.display()))?;
    let mut records = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("failed to read '{}'", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let record = DrawingRecord::from_line(&line).map_err(|e| match e {
            InklingError::Serde(msg) => InklingError::serde(format!(
                "{}:{}: {msg}",
                path.display(),
                i + 1
            )),
            other => other,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/unit/export/ndjson.rs"]
mod tests;
