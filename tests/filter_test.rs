//! Filter engine tests — the AND-ed predicate clauses, the non-string "all"
//! sentinel, and the day-granularity date ranges.

mod common;

use chrono::Duration;

use common::*;
use staffdesk::models::filter::{
    DateRange, EntityKind, FilterQuery, FilterSpec, Selection, filter_records, filter_records_at,
};
use staffdesk::models::status::RegistrationStatus;

fn sample_candidates() -> Vec<staffdesk::models::candidate::Candidate> {
    vec![
        candidate("c1", "John Smith", "driver", "Pune", RegistrationStatus::Pending),
        candidate("c2", "Priya Patel", "cook", "Mumbai", RegistrationStatus::Approved),
        candidate("c3", "Arjun Mehta", "driver", "Nagpur", RegistrationStatus::Rejected),
    ]
}

#[test]
fn default_spec_returns_everything_in_order() {
    let records = sample_candidates();
    let spec = FilterSpec::default();

    let result = filter_records(&records, &spec);

    let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
}

#[test]
fn status_filter_is_sound_and_complete() {
    let records = sample_candidates();
    let spec = FilterSpec {
        status: Selection::Value("approved".to_string()),
        ..FilterSpec::default()
    };

    let result = filter_records(&records, &spec);

    assert_eq!(result.len(), 1);
    assert!(result
        .iter()
        .all(|c| c.registration_status == RegistrationStatus::Approved));
}

#[test]
fn search_with_no_match_yields_empty() {
    let records = sample_candidates();
    let spec = FilterSpec {
        search: "zzz-no-match".to_string(),
        ..FilterSpec::default()
    };

    assert!(filter_records(&records, &spec).is_empty());
}

#[test]
fn search_is_case_insensitive() {
    let records = sample_candidates();
    let spec = FilterSpec {
        search: "JOHN".to_string(),
        ..FilterSpec::default()
    };

    let result = filter_records(&records, &spec);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].full_name, "John Smith");
}

#[test]
fn search_matches_mobile_substring() {
    let records = sample_candidates();
    let spec = FilterSpec {
        search: "987654".to_string(),
        ..FilterSpec::default()
    };

    assert_eq!(filter_records(&records, &spec).len(), 3);
}

#[test]
fn search_skips_absent_email() {
    let mut records = sample_candidates();
    records[0].email = None;
    let spec = FilterSpec {
        search: "c1@example.com".to_string(),
        ..FilterSpec::default()
    };

    assert!(filter_records(&records, &spec).is_empty());
}

#[test]
fn company_category_filter_matches_on_membership() {
    let records = vec![
        company("k1", "Crestline Services", &["driver", "cook"], "Pune", RegistrationStatus::Pending),
        company("k2", "Harbor Staffing", &["electrician"], "Mumbai", RegistrationStatus::Pending),
    ];
    let spec = FilterSpec {
        category: Selection::Value("cook".to_string()),
        ..FilterSpec::default()
    };

    let result = filter_records(&records, &spec);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "k1");
}

#[test]
fn company_location_filter_uses_job_location_city() {
    let records = vec![
        company("k1", "Crestline Services", &["driver"], "Pune", RegistrationStatus::Pending),
        company("k2", "Harbor Staffing", &["driver"], "Mumbai", RegistrationStatus::Pending),
    ];
    let spec = FilterSpec {
        location: Selection::Value("Mumbai".to_string()),
        ..FilterSpec::default()
    };

    let result = filter_records(&records, &spec);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "k2");
}

#[test]
fn clauses_are_anded() {
    let records = sample_candidates();
    let spec = FilterSpec {
        category: Selection::Value("driver".to_string()),
        status: Selection::Value("pending".to_string()),
        ..FilterSpec::default()
    };

    let result = filter_records(&records, &spec);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "c1");
}

// A real category value equal to the literal string "all" is just a value;
// only Selection::All means "no constraint".
#[test]
fn literal_all_category_value_does_not_collide_with_sentinel() {
    let records = vec![
        candidate("c1", "John Smith", "all", "Pune", RegistrationStatus::Pending),
        candidate("c2", "Priya Patel", "cook", "Pune", RegistrationStatus::Pending),
    ];

    let constrained = FilterSpec {
        category: Selection::Value("all".to_string()),
        ..FilterSpec::default()
    };
    let result = filter_records(&records, &constrained);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "c1");

    let unconstrained = FilterSpec::default();
    assert_eq!(filter_records(&records, &unconstrained).len(), 2);
}

#[test]
fn today_range_respects_the_day_boundary() {
    let now = local_midday(reference_day());
    let mut one_hour_ago = candidate("c1", "John Smith", "driver", "Pune", RegistrationStatus::Pending);
    one_hour_ago.registration_date = now - Duration::hours(1);
    let mut yesterday = candidate("c2", "Priya Patel", "cook", "Pune", RegistrationStatus::Pending);
    yesterday.registration_date = now - Duration::hours(25);

    let records = vec![one_hour_ago, yesterday];
    let spec = FilterSpec {
        range: DateRange::Today,
        ..FilterSpec::default()
    };

    let result = filter_records_at(&records, &spec, now);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "c1");
}

#[test]
fn week_range_includes_the_seventh_day_back() {
    let today = reference_day();
    let now = local_midday(today);

    let mut on_boundary = candidate("c1", "John Smith", "driver", "Pune", RegistrationStatus::Pending);
    on_boundary.registration_date = local_midday(today - Duration::days(7));
    let mut too_old = candidate("c2", "Priya Patel", "cook", "Pune", RegistrationStatus::Pending);
    too_old.registration_date = local_midday(today - Duration::days(8));

    let records = vec![on_boundary, too_old];
    let spec = FilterSpec {
        range: DateRange::Week,
        ..FilterSpec::default()
    };

    let result = filter_records_at(&records, &spec, now);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "c1");
}

// One calendar month back from Jul 31 clamps to Jun 30.
#[test]
fn month_range_clamps_to_end_of_shorter_month() {
    let today = chrono::NaiveDate::from_ymd_opt(2025, 7, 31).expect("valid date");
    let now = local_midday(today);

    let mut on_boundary = candidate("c1", "John Smith", "driver", "Pune", RegistrationStatus::Pending);
    on_boundary.registration_date =
        local_midday(chrono::NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date"));
    let mut too_old = candidate("c2", "Priya Patel", "cook", "Pune", RegistrationStatus::Pending);
    too_old.registration_date =
        local_midday(chrono::NaiveDate::from_ymd_opt(2025, 6, 29).expect("valid date"));

    let records = vec![on_boundary, too_old];
    let spec = FilterSpec {
        range: DateRange::Month,
        ..FilterSpec::default()
    };

    let result = filter_records_at(&records, &spec, now);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "c1");
}

#[test]
fn filter_then_reset_round_trip() {
    let records = sample_candidates();

    let spec = FilterSpec {
        status: Selection::Value("approved".to_string()),
        ..FilterSpec::default()
    };
    let filtered = filter_records(&records, &spec);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].registration_status, RegistrationStatus::Approved);

    let reset = FilterSpec::default();
    let ids: Vec<&str> = filter_records(&records, &reset)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
}

// ---------- Query-string decoding ----------

#[test]
fn query_decoding_maps_empty_params_to_no_constraint() {
    let query: FilterQuery =
        serde_urlencoded::from_str("kind=companies&search=dri&category=&status=approved")
            .expect("query should decode");

    let spec = FilterSpec::from_query(&query);

    assert_eq!(EntityKind::from_param(query.kind.as_deref()), EntityKind::Companies);
    assert_eq!(spec.search, "dri");
    assert!(spec.category.is_all());
    assert!(spec.location.is_all());
    assert_eq!(spec.status, Selection::Value("approved".to_string()));
    assert_eq!(spec.range, DateRange::All);
}

#[test]
fn query_decoding_defaults_to_candidates_and_all() {
    let query: FilterQuery = serde_urlencoded::from_str("").expect("query should decode");

    let spec = FilterSpec::from_query(&query);

    assert_eq!(EntityKind::from_param(query.kind.as_deref()), EntityKind::Candidates);
    assert!(spec.is_default());
}

#[test]
fn unknown_range_param_falls_back_to_all_time() {
    assert_eq!(DateRange::from_param(Some("fortnight")), DateRange::All);
    assert_eq!(DateRange::from_param(Some("month")), DateRange::Month);
}
