use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use super::model::{Cohort, CohortDataset, Record, RosterError};

/// Fields per roster line.
const FIELD_COUNT: usize = 5;

/// Load a roster file into a [`CohortDataset`].
///
/// Format: UTF-8 text, one record per line, five `|`-separated fields:
/// `first_name|last_name|house|head_of_house|cohort`. `house` may be empty;
/// `cohort` is a semester label or the `G`/`I` sentinel. Blank lines are
/// skipped. A line with any other field count fails with the offending line
/// number.
pub fn load_file(path: &Path) -> Result<CohortDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening roster file {}", path.display()))?;

    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("reading roster record {idx}"))?;
        if row.len() != FIELD_COUNT {
            let line = row.position().map_or(idx as u64 + 1, |p| p.line());
            return Err(RosterError::FieldCount {
                line,
                found: row.len(),
            }
            .into());
        }

        records.push(Record {
            first_name: row[0].to_string(),
            last_name: row[1].to_string(),
            house: row[2].to_string(),
            head_of_house: row[3].to_string(),
            cohort: Cohort::parse(&row[4]),
        });
    }

    let dataset = CohortDataset::from_records(records);
    info!("loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}
