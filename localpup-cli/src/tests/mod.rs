//! Shared test harness modules for the Localpup CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use super::score::{
    HotelRecord, ScoreConfig, build_report, load_hotels, load_profile, run_score,
    run_score_with,
};

mod helpers;
mod unit;
