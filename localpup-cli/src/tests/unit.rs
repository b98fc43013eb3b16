//! Focused unit tests covering score CLI configuration and report assembly.

use super::helpers::{HotelFiles, LayerOverrides, merge_layers, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use localpup_core::{Platform, PlatformRating, ScoringProfile};
use localpup_scorer::CompositeScorer;
use rstest::rstest;

fn args_for(files: &HotelFiles) -> ScoreArgs {
    ScoreArgs {
        items: Some(files.hotels().to_path_buf()),
        ..ScoreArgs::default()
    }
}

fn scored_hotels(files: &HotelFiles) -> Vec<HotelRecord> {
    load_hotels(files.hotels()).expect("hotels should parse")
}

#[rstest]
fn converting_without_items_errors() {
    let err = ScoreConfig::try_from(ScoreArgs::default()).expect_err("missing items should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SCORE_ITEMS);
            assert_eq!(env, ENV_SCORE_ITEMS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::zero(0)]
#[case::above_hundred(101)]
#[case::max(u8::MAX)]
fn converting_rejects_out_of_range_top_percent(#[case] value: u8) {
    let args = ScoreArgs {
        items: Some(Utf8PathBuf::from("hotels.json")),
        top_percent: Some(value),
        ..ScoreArgs::default()
    };
    let err = ScoreConfig::try_from(args).expect_err("top percent should be rejected");
    match err {
        CliError::InvalidTopPercent { value: rejected } => assert_eq!(rejected, value),
        other => panic!("expected InvalidTopPercent, found {other:?}"),
    }
}

#[rstest]
#[case::lowest(1)]
#[case::highest(100)]
fn converting_accepts_top_percent_bounds(#[case] value: u8) {
    let args = ScoreArgs {
        items: Some(Utf8PathBuf::from("hotels.json")),
        top_percent: Some(value),
        ..ScoreArgs::default()
    };
    let config = ScoreConfig::try_from(args).expect("bounds are valid");
    assert_eq!(config.top_percent, Some(value));
}

#[rstest]
fn cli_values_override_env_and_file_layers() {
    let files = HotelFiles::new();
    let file_layer = LayerOverrides {
        items: Some(Utf8PathBuf::from("file.json")),
        top_percent: Some(10),
    };
    let env_layer = LayerOverrides {
        items: Some(Utf8PathBuf::from("env.json")),
        top_percent: None,
    };
    let config = merge_layers(args_for(&files), Some(file_layer), Some(env_layer))
        .expect("layers should merge");
    assert_eq!(config.items, files.hotels());
    assert_eq!(config.top_percent, Some(10));
}

#[rstest]
fn env_layer_takes_precedence_over_file_layer() {
    let file_layer = LayerOverrides {
        items: Some(Utf8PathBuf::from("file.json")),
        top_percent: Some(10),
    };
    let env_layer = LayerOverrides {
        items: Some(Utf8PathBuf::from("env.json")),
        top_percent: Some(50),
    };
    let config = merge_layers(ScoreArgs::default(), Some(file_layer), Some(env_layer))
        .expect("layers should merge");
    assert_eq!(config.items, Utf8PathBuf::from("env.json"));
    assert_eq!(config.top_percent, Some(50));
}

#[rstest]
fn validate_sources_reports_missing_items() {
    let files = HotelFiles::new();
    let config = ScoreConfig {
        items: files.root().join("missing.json"),
        profile: None,
        top_percent: None,
        output: None,
    };
    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_SCORE_ITEMS),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_profile() {
    let files = HotelFiles::new();
    let config = ScoreConfig {
        items: files.hotels().to_path_buf(),
        profile: Some(files.root().join("profile.json")),
        top_percent: None,
        output: None,
    };
    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_SCORE_PROFILE),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let files = HotelFiles::new();
    let config = ScoreConfig {
        items: files.root().to_path_buf(),
        profile: None,
        top_percent: None,
        output: None,
    };
    match config.validate_sources().expect_err("expected failure") {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_SCORE_ITEMS);
            assert_eq!(path, files.root());
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_hotels_accepts_sparse_records() {
    let files = HotelFiles::new();
    let path = files.root().join("sparse.json");
    write_utf8(
        &path,
        br#"[{ "id": "empty" }, { "id": "partial", "ratings": { "agoda": { "rating": 8.1 } } }]"#,
    );
    let hotels = load_hotels(&path).expect("sparse records should parse");
    assert_eq!(hotels.len(), 2);
    assert!(hotels[0].ratings.is_unrated());
    assert_eq!(
        hotels[1].ratings.get(Platform::Agoda),
        Some(&PlatformRating::rating_only(8.1))
    );
    assert_eq!(hotels[1].ratings.review_count(Platform::Agoda), None);
}

#[rstest]
fn load_hotels_reports_invalid_json() {
    let files = HotelFiles::new();
    let path = files.root().join("broken.json");
    write_utf8(&path, b"{ not valid json");
    match load_hotels(&path).expect_err("invalid JSON should error") {
        CliError::ParseInput { field, path: failed, .. } => {
            assert_eq!(field, ARG_SCORE_ITEMS);
            assert_eq!(failed, path);
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn load_profile_reads_platform_table() {
    let files = HotelFiles::new();
    let path = files.root().join("profile.json");
    write_utf8(
        &path,
        br#"{
            "booking": { "weight": 1.0, "scale": { "kind": "tenPoint" }, "group": "international" },
            "ctrip": {
                "weight": 2.0,
                "scale": { "kind": "fivePoint", "adjustment": 0.5 },
                "group": "domestic"
            }
        }"#,
    );
    let profile = load_profile(&path).expect("profile should parse");
    assert_eq!(profile.weight(Platform::Booking), Some(1.0));
    assert_eq!(profile.weight(Platform::Ctrip), Some(2.0));
    assert_eq!(profile.adjustment(Platform::Ctrip), 0.5);
    assert_eq!(profile.weight(Platform::Agoda), None);
}

#[rstest]
#[case::zero_weight(
    br#"{ "booking": { "weight": 0.0, "scale": { "kind": "tenPoint" }, "group": "international" } }"#
)]
#[case::empty_table(b"{}")]
#[case::unknown_platform(
    br#"{ "expedia": { "weight": 1.0, "scale": { "kind": "tenPoint" }, "group": "international" } }"#
)]
fn load_profile_rejects_invalid_tables(#[case] contents: &[u8]) {
    let files = HotelFiles::new();
    let path = files.root().join("profile.json");
    write_utf8(&path, contents);
    match load_profile(&path).expect_err("profile should be rejected") {
        CliError::ParseInput { field, .. } => assert_eq!(field, ARG_SCORE_PROFILE),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn report_ranks_hotels_best_first() {
    let files = HotelFiles::new();
    let hotels = scored_hotels(&files);
    let report = build_report(&CompositeScorer::default(), &hotels, None);

    let ids: Vec<&str> = report.hotels.iter().map(|hotel| hotel.id.as_str()).collect();
    assert_eq!(ids, ["charlie", "alpha", "bravo"]);
    let ranks: Vec<usize> = report.hotels.iter().map(|hotel| hotel.rank).collect();
    assert_eq!(ranks, [1, 2, 3]);
    assert_eq!(report.hotels[1].composite.score, 8.8);
    assert_eq!(report.algorithm_version, "2.2");
}

#[rstest]
#[case::one_third(34, 1)]
#[case::two_thirds(67, 2)]
#[case::everything(100, 3)]
#[case::floored_to_one(1, 1)]
fn report_keeps_top_percentage(#[case] percentage: u8, #[case] expected: usize) {
    let files = HotelFiles::new();
    let hotels = scored_hotels(&files);
    let report = build_report(&CompositeScorer::default(), &hotels, Some(percentage));
    assert_eq!(report.hotels.len(), expected);
    assert_eq!(report.hotels[0].id, "charlie");
}

#[rstest]
fn report_summary_covers_whole_population() {
    let files = HotelFiles::new();
    let hotels = scored_hotels(&files);
    let report = build_report(&CompositeScorer::default(), &hotels, Some(34));

    let overall = report.summary.overall.expect("population is not empty");
    assert_eq!(overall.count, 3);
    assert_eq!(overall.min, 7.9);
    assert_eq!(overall.max, 9.2);

    let booking = report.summary.platforms[&Platform::Booking];
    assert_eq!(booking.count, 3);
    let ctrip = report.summary.platforms[&Platform::Ctrip];
    assert_eq!(ctrip.count, 1);
    assert_eq!(ctrip.max, 9.4);
    assert!(!report.summary.platforms.contains_key(&Platform::Agoda));
}

#[rstest]
fn report_uses_injected_profile() {
    let files = HotelFiles::new();
    let hotels = scored_hotels(&files);
    let booking_only = ScoringProfile::default()
        .without(Platform::Ctrip)
        .expect("registry keeps other platforms");
    let report = build_report(&CompositeScorer::new(booking_only), &hotels, None);

    let alpha = report
        .hotels
        .iter()
        .find(|hotel| hotel.id == "alpha")
        .expect("alpha is reported");
    assert_eq!(alpha.composite.score, 9.0);
}

#[rstest]
fn report_serialises_camel_case_fields() {
    let files = HotelFiles::new();
    let hotels = scored_hotels(&files);
    let report = build_report(&CompositeScorer::default(), &hotels, None);
    let value = serde_json::to_value(&report).expect("report serialises");

    assert_eq!(value["algorithmVersion"], "2.2");
    let first = &value["hotels"][0];
    assert_eq!(first["rank"], 1);
    assert_eq!(first["id"], "charlie");
    assert_eq!(first["score"], 9.2);
    assert_eq!(first["availablePlatforms"], 1);
    assert_eq!(first["totalReviews"], 300);
    assert_eq!(value["summary"]["platforms"]["ctrip"]["count"], 1);
}
