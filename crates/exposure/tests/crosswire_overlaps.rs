use exposure::engine::{detect_overlaps, write_overlaps_csv, MatchType, SubjectRecord};
use serde_json::json;

fn caseload() -> Vec<SubjectRecord> {
    serde_json::from_value(json!([
        {
            "id": "subj-1",
            "name": "Dana Reyes",
            "profile_data": {
                "professional": { "organization": "Halcyon Labs" },
                "contact": {
                    "phone_numbers": [{ "number": "(512) 555-0101", "type": "mobile" }],
                    "email_addresses": [{ "address": "dana@halcyon.io" }]
                },
                "network": {
                    "associates": [{ "name": "Lee Park", "relationship": "co-founder" }]
                }
            },
            "cases": { "name": "Harbor", "type": "EP" }
        },
        {
            "id": "subj-2",
            "name": "Lee Park",
            "profile_data": {
                "professional": { "organization": "HALCYON LABS" },
                "contact": { "phone_numbers": [{ "number": "512.555.0101" }] }
            },
            "cases": { "name": "Harbor", "type": "EP" }
        },
        {
            "id": "subj-3",
            "name": "Ari Cole",
            "profile_data": {
                "contact": { "email_addresses": [{ "address": "Dana@Halcyon.io" }] }
            },
            "cases": null
        },
        {
            "id": "subj-4",
            "name": "Max Wu",
            "profile_data": null
        }
    ]))
    .expect("caseload deserializes")
}

#[test]
fn caseload_scan_ranks_overlaps_and_exports_them() {
    let subjects = caseload();
    let current = &subjects[0];

    let results = detect_overlaps(current, &subjects);

    let ids: Vec<&str> = results.iter().map(|result| result.subject.id.as_str()).collect();
    assert_eq!(ids, vec!["subj-2", "subj-3"]);

    let kinds: Vec<MatchType> = results[0].matches.iter().map(|entry| entry.kind).collect();
    assert_eq!(
        kinds,
        vec![MatchType::Phone, MatchType::Organization, MatchType::DirectLink]
    );
    assert_eq!(results[0].case_name.as_deref(), Some("Harbor"));
    assert_eq!(results[1].case_type, None);

    let mut buffer = Vec::new();
    write_overlaps_csv(&results, &mut buffer).expect("csv export");
    let csv = String::from_utf8(buffer).expect("utf8");
    assert_eq!(csv.lines().count(), 1 + 3 + 1);
    assert!(csv.contains("subj-3,Ari Cole,,,email,dana@halcyon.io"));
}

#[test]
fn overlap_results_serialize_with_wire_names() {
    let subjects = caseload();
    let results = detect_overlaps(&subjects[0], &subjects[1..2]);
    let value = serde_json::to_value(&results).expect("results serialize");

    assert_eq!(value[0]["matchCount"], 3);
    assert_eq!(value[0]["caseType"], "EP");
    assert_eq!(value[0]["matches"][0]["type"], "phone");
    assert_eq!(value[0]["subject"]["name"], "Lee Park");
}
