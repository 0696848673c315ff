//! CrossWire: shared-entity detection between one subject and the rest of the caseload.

mod export;
mod normalizer;
mod rules;

pub use export::{write_overlaps_csv, ExportError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::ProfileData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Phone,
    Email,
    Organization,
    Breach,
    DataBroker,
    Associate,
    DirectLink,
    Location,
    Platform,
}

impl MatchType {
    pub const fn label(self) -> &'static str {
        match self {
            MatchType::Phone => "phone",
            MatchType::Email => "email",
            MatchType::Organization => "organization",
            MatchType::Breach => "breach",
            MatchType::DataBroker => "data_broker",
            MatchType::Associate => "associate",
            MatchType::DirectLink => "direct_link",
            MatchType::Location => "location",
            MatchType::Platform => "platform",
        }
    }
}

/// Case a subject is filed under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub case_type: Option<String>,
}

/// A subject as supplied by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_data: Option<ProfileData>,
    #[serde(default)]
    pub cases: Option<CaseRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapMatch {
    #[serde(rename = "type")]
    pub kind: MatchType,
    pub label: String,
    pub detail: String,
}

/// Everything the current subject shares with one other subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapResult {
    pub subject: SubjectRef,
    pub case_name: Option<String>,
    pub case_type: Option<String>,
    pub match_count: usize,
    pub matches: Vec<OverlapMatch>,
}

fn compare(current: &ProfileData, other: &SubjectRecord) -> Vec<OverlapMatch> {
    let empty = ProfileData::default();
    let theirs = other.profile_data.as_ref().unwrap_or(&empty);

    let mut matches = Vec::new();
    for rule in rules::SHARED_FACT_RULES {
        matches.extend(rule(current, theirs));
    }
    matches.extend(rules::direct_link(current, &other.name));
    rules::dedupe(matches)
}

/// Compare `current` against every other subject, skipping itself by id. Subjects with no
/// shared facts are omitted; the rest are ordered by match count, highest first, with ties
/// kept in input order.
pub fn detect_overlaps(current: &SubjectRecord, subjects: &[SubjectRecord]) -> Vec<OverlapResult> {
    let empty = ProfileData::default();
    let ours = current.profile_data.as_ref().unwrap_or(&empty);

    let mut results: Vec<OverlapResult> = subjects
        .iter()
        .filter(|other| other.id != current.id)
        .filter_map(|other| {
            let matches = compare(ours, other);
            if matches.is_empty() {
                return None;
            }
            let case = other.cases.clone().unwrap_or_default();
            Some(OverlapResult {
                subject: SubjectRef {
                    id: other.id.clone(),
                    name: other.name.clone(),
                },
                case_name: case.name,
                case_type: case.case_type,
                match_count: matches.len(),
                matches,
            })
        })
        .collect();

    results.sort_by(|a, b| b.match_count.cmp(&a.match_count));

    debug!(
        subject = %current.id,
        candidates = subjects.len(),
        overlaps = results.len(),
        "crosswire scan complete"
    );
    results
}
