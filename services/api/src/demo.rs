use crate::infra::{parse_timestamp, read_json_file};
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use exposure::config::CrossWireConfig;
use exposure::engine::{
    build_remediation_options, calculate_aegis_score, calculate_case_priority, detect_overlaps,
    simulate_remediation, write_overlaps_csv, AegisScore, CaseData, CasePriority, CaseSubject,
    OverlapResult, RemediationOption, SubjectRecord,
};
use exposure::error::AppError;
use exposure::profile::{calculate_completeness, CompletenessReport, ProfileData};
use serde_json::json;
use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreReportArgs {
    /// JSON file holding a single profile_data document
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Print the raw JSON payloads instead of the summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct OverlapReportArgs {
    /// JSON file holding an array of subjects with their profile_data and case
    #[arg(long)]
    pub(crate) subjects: PathBuf,
    /// Id of the subject to compare against the rest of the caseload
    #[arg(long)]
    pub(crate) current: String,
    /// Write one CSV row per shared fact to this path
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Compare against at most this many subjects
    #[arg(long)]
    pub(crate) max_subjects: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct PriorityReportArgs {
    /// JSON file holding an array of case subjects (id, profile_data, updated_at)
    #[arg(long)]
    pub(crate) subjects: PathBuf,
    /// Case type code: EP, CT or CI
    #[arg(long, default_value = "EP")]
    pub(crate) case_type: String,
    /// Case name shown in the report
    #[arg(long)]
    pub(crate) case_name: Option<String>,
    /// Evaluation time (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) now: Option<DateTime<Utc>>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation time for the case triage step (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Skip the CrossWire and case triage portion of the demo.
    #[arg(long)]
    pub(crate) skip_caseload: bool,
}

pub(crate) fn run_score_report(args: ScoreReportArgs) -> Result<(), AppError> {
    let profile: ProfileData = read_json_file(&args.profile)?;

    let completeness = calculate_completeness(Some(&profile));
    let score = calculate_aegis_score(Some(&profile));
    let options = build_remediation_options(Some(&profile));

    if args.json {
        let payload = json!({
            "completeness": completeness,
            "score": score,
            "options": options,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    render_completeness(&completeness);
    render_score(&score);
    render_options(&options);
    Ok(())
}

pub(crate) fn run_overlap_report(args: OverlapReportArgs) -> Result<(), AppError> {
    let OverlapReportArgs {
        subjects,
        current,
        csv,
        max_subjects,
    } = args;

    let mut caseload: Vec<SubjectRecord> = read_json_file(&subjects)?;
    let target = caseload
        .iter()
        .find(|subject| subject.id == current)
        .cloned()
        .ok_or_else(|| AppError::InvalidInput(format!("subject '{current}' not in caseload")))?;
    caseload.retain(|subject| subject.id != target.id);

    let cap = max_subjects.unwrap_or(CrossWireConfig::default().max_subjects);
    if caseload.len() > cap {
        println!(
            "Caseload holds {} other subjects; comparing against the first {cap}",
            caseload.len()
        );
        caseload.truncate(cap);
    }

    let results = detect_overlaps(&target, &caseload);
    render_overlaps(&target, &results);

    if let Some(path) = csv {
        let file = File::create(&path)?;
        write_overlaps_csv(&results, file)?;
        println!("Overlap rows written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_priority_report(args: PriorityReportArgs) -> Result<(), AppError> {
    let PriorityReportArgs {
        subjects,
        case_type,
        case_name,
        now,
    } = args;

    let subjects: Vec<CaseSubject> = read_json_file(&subjects)?;
    let case = CaseData {
        id: None,
        name: case_name,
        case_type: Some(case_type),
    };

    let scores = score_subjects(&subjects);
    let priority =
        calculate_case_priority(&case, &subjects, &scores, now.unwrap_or_else(Utc::now));
    render_priority(&case, &priority);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { now, skip_caseload } = args;
    let now = now.unwrap_or_else(Utc::now);

    println!("Exposure analysis demo");
    let profile = demo_profile()?;

    let completeness = calculate_completeness(Some(&profile));
    render_completeness(&completeness);

    let score = calculate_aegis_score(Some(&profile));
    render_score(&score);

    let mut options = build_remediation_options(Some(&profile));
    render_options(&options);

    for option in options.iter_mut().take(3) {
        option.enabled = true;
    }
    let simulated = simulate_remediation(&score, &options);
    println!(
        "\nWhat-if: applying the first {} options -> {} ({}) | {} points removed",
        options.iter().filter(|option| option.enabled).count(),
        simulated.composite,
        simulated.risk_level.label(),
        simulated.reduction
    );

    if skip_caseload {
        return Ok(());
    }

    let caseload = demo_caseload(profile.clone())?;
    let current = &caseload[0];
    let results = detect_overlaps(current, &caseload);
    render_overlaps(current, &results);

    let subjects: Vec<CaseSubject> = caseload
        .iter()
        .enumerate()
        .map(|(index, subject)| CaseSubject {
            id: subject.id.clone(),
            profile_data: subject.profile_data.clone(),
            updated_at: Some(now - Duration::days(20 + 40 * index as i64)),
        })
        .collect();
    let case = CaseData {
        id: Some("case-harbor".to_string()),
        name: Some("Harbor".to_string()),
        case_type: Some("EP".to_string()),
    };
    let priority = calculate_case_priority(&case, &subjects, &score_subjects(&subjects), now);
    render_priority(&case, &priority);

    Ok(())
}

fn score_subjects(subjects: &[CaseSubject]) -> HashMap<String, AegisScore> {
    subjects
        .iter()
        .map(|subject| {
            (
                subject.id.clone(),
                calculate_aegis_score(subject.profile_data.as_ref()),
            )
        })
        .collect()
}

fn demo_profile() -> Result<ProfileData, AppError> {
    let profile = serde_json::from_value(json!({
        "identity": { "full_name": "Dana Reyes", "aliases": ["D. Reyes"] },
        "professional": { "organization": "Halcyon Labs", "title": "Chief Executive Officer" },
        "locations": {
            "addresses": [
                { "label": "Residence", "city": "Austin", "state": "TX", "confidence": "confirmed" },
                { "label": "Ranch", "city": "Marfa", "state": "TX", "confidence": "probable" }
            ]
        },
        "contact": {
            "phone_numbers": [{ "number": "(512) 555-0101", "type": "mobile" }],
            "email_addresses": [{ "address": "dana@halcyon.io", "type": "work" }]
        },
        "digital": {
            "social_accounts": [
                { "platform": "Instagram", "username": "danareyes", "visibility": "public" },
                { "platform": "Strava", "username": "dana_runs_atx", "visibility": "public" },
                { "platform": "Venmo", "username": "dana-reyes", "visibility": "public" },
                { "platform": "LinkedIn", "username": "dreyes", "visibility": "private" }
            ],
            "data_broker_listings": [
                { "broker": "Spokeo", "status": "active" },
                { "broker": "Whitepages", "status": "active" },
                { "broker": "BeenVerified", "status": "removed" }
            ]
        },
        "breaches": {
            "records": [
                { "breach_name": "LinkedIn 2021", "severity": "high", "data_types": ["email", "password"] },
                { "breach_name": "Canva 2019", "severity": "medium", "data_types": ["email", "name"] }
            ]
        },
        "behavioral": {
            "routines": [
                { "name": "Morning run on Lady Bird Lake", "schedule": "06:00 weekdays", "consistency": 0.9 },
                { "name": "School pickup", "schedule": "15:15 weekdays", "consistency": 75 }
            ],
            "observations": [
                { "description": "Leaves garage door open during runs", "exploitability": "high" }
            ]
        },
        "network": {
            "family_members": [
                { "name": "Sam Reyes", "relationship": "brother", "social_visibility": "public" }
            ],
            "associates": [
                { "name": "Lee Park", "relationship": "co-founder", "organization": "Halcyon Labs" }
            ]
        },
        "public_records": {
            "properties": [{ "address": "12 Lakeview Dr", "city": "Austin", "state": "TX" }]
        },
        "notes": "Principal travels to Marfa most weekends."
    }))?;
    Ok(profile)
}

fn demo_caseload(principal: ProfileData) -> Result<Vec<SubjectRecord>, AppError> {
    let mut caseload: Vec<SubjectRecord> = serde_json::from_value(json!([
        {
            "id": "subj-lee",
            "name": "Lee Park",
            "profile_data": {
                "professional": { "organization": "Halcyon Labs" },
                "contact": { "email_addresses": [{ "address": "lee@halcyon.io" }] },
                "breaches": { "records": [{ "breach_name": "LinkedIn 2021", "severity": "high" }] }
            },
            "cases": { "name": "Harbor", "type": "EP" }
        },
        {
            "id": "subj-morgan",
            "name": "Morgan Vale",
            "profile_data": {
                "locations": { "addresses": [{ "city": "Austin", "state": "TX" }] },
                "digital": { "social_accounts": [{ "platform": "Strava", "visibility": "public" }] }
            },
            "cases": { "name": "Lantern", "type": "CT" }
        }
    ]))?;

    caseload.insert(
        0,
        SubjectRecord {
            id: "subj-dana".to_string(),
            name: "Dana Reyes".to_string(),
            profile_data: Some(principal),
            cases: None,
        },
    );
    Ok(caseload)
}

fn render_completeness(report: &CompletenessReport) {
    println!("\nProfile completeness: {}%", report.score);
    if !report.missing.is_empty() {
        println!("  Missing: {}", report.missing.join(", "));
    }
}

fn render_score(score: &AegisScore) {
    println!(
        "\nAegis score {} ({})",
        score.composite,
        score.risk_level.label()
    );
    for factor in score.factors.values() {
        println!(
            "  - {}: {} (weight {}%)",
            factor.label, factor.score, factor.weight
        );
    }

    if !score.drivers.is_empty() {
        println!("Top drivers:");
        for driver in &score.drivers {
            println!("  - [{}] {}", driver.impact, driver.text);
        }
    }
}

fn render_options(options: &[RemediationOption]) {
    if options.is_empty() {
        println!("\nRemediation: nothing to recommend");
        return;
    }

    println!("\nRemediation options:");
    let mut current_category = None;
    for option in options {
        if current_category != Some(option.category) {
            println!("  {}", option.category.label());
            current_category = Some(option.category);
        }
        println!(
            "    - {} (-{} pts): {}",
            option.label, option.score_reduction, option.description
        );
    }
}

fn render_overlaps(current: &SubjectRecord, results: &[OverlapResult]) {
    println!("\nCrossWire overlaps for {}", current.name);
    if results.is_empty() {
        println!("  No shared entities found");
        return;
    }

    for result in results {
        println!(
            "  - {} [{}] {} match(es)",
            result.subject.name,
            result.case_name.as_deref().unwrap_or("no case"),
            result.match_count
        );
        for entry in &result.matches {
            println!("      {}: {} ({})", entry.kind.label(), entry.label, entry.detail);
        }
    }
}

fn render_priority(case: &CaseData, priority: &CasePriority) {
    println!(
        "\nCase {} priority: {} (score {})",
        case.name.as_deref().unwrap_or("(unnamed)"),
        priority.priority.label(),
        priority.score
    );
    for reason in &priority.reasons {
        println!("  - {reason}");
    }
}
