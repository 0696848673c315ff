use std::io::Write;

use super::OverlapResult;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write overlap csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush overlap csv: {0}")]
    Io(#[from] std::io::Error),
}

const HEADER: [&str; 7] = [
    "subject_id",
    "subject_name",
    "case_name",
    "case_type",
    "match_type",
    "label",
    "detail",
];

/// Flatten overlap results to one CSV row per match, preserving ranking order.
pub fn write_overlaps_csv<W: Write>(results: &[OverlapResult], writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;

    for result in results {
        for entry in &result.matches {
            csv.write_record([
                result.subject.id.as_str(),
                result.subject.name.as_str(),
                result.case_name.as_deref().unwrap_or(""),
                result.case_type.as_deref().unwrap_or(""),
                entry.kind.label(),
                entry.label.as_str(),
                entry.detail.as_str(),
            ])?;
        }
    }

    csv.flush()?;
    Ok(())
}
