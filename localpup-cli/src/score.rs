//! Score command implementation for the Localpup CLI.

use std::collections::BTreeMap;
use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use localpup_core::{ALGORITHM_VERSION, CompositeScore, Platform, Rated, RatedItem, ScoringProfile};
use localpup_scorer::{CompositeScorer, ScoreRange, rank, summarise, top_rated};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{create_utf8_file, file_is_file, open_utf8_file};
use crate::{
    ARG_SCORE_ITEMS, ARG_SCORE_OUTPUT, ARG_SCORE_PROFILE, ARG_SCORE_TOP_PERCENT, CliError,
    ENV_SCORE_ITEMS,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score hotels from a JSON array of {\"id\", \"ratings\"} records, \
                 where ratings are keyed by platform (booking, agoda, hotelscom, \
                 airbnb, ctrip, fliggy). Hotels are ranked best first and \
                 summarised per platform.",
    about = "Score and rank rated hotels"
)]
#[ortho_config(prefix = "LOCALPUP")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the hotels to score.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) items: Option<Utf8PathBuf>,
    /// Path to a JSON platform profile replacing the default weights.
    #[arg(long = ARG_SCORE_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Keep only the best N percent of hotels (at least one).
    #[arg(long = ARG_SCORE_TOP_PERCENT, value_name = "percent")]
    #[serde(default)]
    pub(crate) top_percent: Option<u8>,
    /// Write the report to a file instead of stdout.
    #[arg(long = ARG_SCORE_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Path to the hotels JSON file.
    pub(crate) items: Utf8PathBuf,
    /// Optional path to a profile JSON file.
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Optional top percentage filter.
    pub(crate) top_percent: Option<u8>,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.items, ARG_SCORE_ITEMS)?;
        if let Some(profile) = &self.profile {
            Self::require_existing(profile, ARG_SCORE_PROFILE)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let items = args.items.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_ITEMS,
            env: ENV_SCORE_ITEMS,
        })?;
        if let Some(value) = args.top_percent
            && !(1..=100).contains(&value)
        {
            return Err(CliError::InvalidTopPercent { value });
        }
        Ok(Self {
            items,
            profile: args.profile,
            top_percent: args.top_percent,
            output: args.output,
        })
    }
}

/// One hotel record read from the input file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HotelRecord {
    /// Caller-supplied identifier echoed in the report.
    pub(crate) id: String,
    /// Platform ratings keyed by platform identifier.
    #[serde(default)]
    pub(crate) ratings: RatedItem,
}

impl Rated for HotelRecord {
    fn ratings(&self) -> &RatedItem {
        &self.ratings
    }
}

/// A ranked hotel in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HotelReport {
    pub(crate) rank: usize,
    pub(crate) id: String,
    #[serde(flatten)]
    pub(crate) composite: CompositeScore,
}

/// Serialisable view of a [`ScoreRange`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct RangeReport {
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) mean: f64,
    pub(crate) count: usize,
}

impl From<ScoreRange> for RangeReport {
    fn from(range: ScoreRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
            mean: range.mean,
            count: range.count,
        }
    }
}

/// Population summary in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SummaryReport {
    pub(crate) overall: Option<RangeReport>,
    pub(crate) platforms: BTreeMap<Platform, RangeReport>,
}

/// Full output of the `score` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreReport {
    pub(crate) algorithm_version: &'static str,
    pub(crate) hotels: Vec<HotelReport>,
    pub(crate) summary: SummaryReport,
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let Some(path) = &config.output else {
        let mut stdout = std::io::stdout().lock();
        return execute_and_write(&config, &mut stdout);
    };
    let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.clone(),
        source,
    })?;
    execute_and_write(&config, &mut file)
}

pub(super) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    execute_and_write(&config, writer)
}

fn execute_and_write(config: &ScoreConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = execute_score(config)?;
    write_score_report(writer, &report)
}

pub(super) fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_score(config: &ScoreConfig) -> Result<ScoreReport, CliError> {
    let hotels = load_hotels(&config.items)?;
    let profile = match &config.profile {
        Some(path) => load_profile(path)?,
        None => ScoringProfile::default(),
    };
    let scorer = CompositeScorer::new(profile);
    let report = build_report(&scorer, &hotels, config.top_percent);
    log::info!(
        "scored {} hotels from {}; reporting {}",
        hotels.len(),
        config.items,
        report.hotels.len()
    );
    Ok(report)
}

pub(super) fn build_report(
    scorer: &CompositeScorer,
    hotels: &[HotelRecord],
    top_percent: Option<u8>,
) -> ScoreReport {
    let ranked = top_percent.map_or_else(
        || rank(scorer, hotels),
        |percentage| top_rated(scorer, hotels, percentage),
    );
    let summary = summarise(scorer, hotels);
    ScoreReport {
        algorithm_version: ALGORITHM_VERSION,
        hotels: ranked
            .into_iter()
            .enumerate()
            .map(|(index, entry)| HotelReport {
                rank: index.saturating_add(1),
                id: entry.item.id.clone(),
                composite: entry.composite,
            })
            .collect(),
        summary: SummaryReport {
            overall: summary.overall.map(RangeReport::from),
            platforms: summary
                .platforms
                .into_iter()
                .map(|(platform, range)| (platform, RangeReport::from(range)))
                .collect(),
        },
    }
}

/// Loads a JSON array of [`HotelRecord`]s from disk.
pub(super) fn load_hotels(path: &Utf8Path) -> Result<Vec<HotelRecord>, CliError> {
    load_json(path, ARG_SCORE_ITEMS)
}

/// Loads a JSON-encoded [`ScoringProfile`] from disk.
pub(super) fn load_profile(path: &Utf8Path) -> Result<ScoringProfile, CliError> {
    load_json(path, ARG_SCORE_PROFILE)
}

fn load_json<T>(path: &Utf8Path, field: &'static str) -> Result<T, CliError>
where
    T: for<'de> Deserialize<'de>,
{
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_score_report(writer: &mut dyn Write, report: &ScoreReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}
