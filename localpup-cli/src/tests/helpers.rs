//! Test helpers for writing hotel datasets and composing layered overrides.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) const HOTELS_JSON: &str = r#"[
  {
    "id": "alpha",
    "ratings": {
      "booking": { "rating": 9.0, "reviewCount": 500 },
      "ctrip": { "rating": 4.5, "reviewCount": 2000 }
    }
  },
  {
    "id": "bravo",
    "ratings": { "booking": { "rating": 7.9, "reviewCount": 300 } }
  },
  {
    "id": "charlie",
    "ratings": { "booking": { "rating": 9.2, "reviewCount": 300 } }
  }
]"#;

/// A temporary directory holding the three-hotel dataset.
pub(super) struct HotelFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
    hotels: Utf8PathBuf,
}

impl HotelFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let hotels = root.join("hotels.json");
        write_utf8(&hotels, HOTELS_JSON.as_bytes());
        Self {
            _dir: dir,
            root,
            hotels,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn hotels(&self) -> &Utf8Path {
        &self.hotels
    }
}

#[derive(Debug, Clone, Default)]
pub(super) struct LayerOverrides {
    pub(super) items: Option<Utf8PathBuf>,
    pub(super) top_percent: Option<u8>,
}

pub(super) fn merge_layers(
    mut cli_args: ScoreArgs,
    file_layer: Option<LayerOverrides>,
    env_layer: Option<LayerOverrides>,
) -> Result<ScoreConfig, CliError> {
    merge_field(
        &mut cli_args.items,
        extract_field(&env_layer, |layer| &layer.items),
        extract_field(&file_layer, |layer| &layer.items),
    );
    merge_field(
        &mut cli_args.top_percent,
        extract_field(&env_layer, |layer| &layer.top_percent),
        extract_field(&file_layer, |layer| &layer.top_percent),
    );
    ScoreConfig::try_from(cli_args)
}

fn merge_field<T: Clone>(target: &mut Option<T>, env_value: Option<T>, file_value: Option<T>) {
    if target.is_none()
        && let Some(value) = env_value.or(file_value)
    {
        *target = Some(value);
    }
}

fn extract_field<T: Clone>(
    layer: &Option<LayerOverrides>,
    accessor: fn(&LayerOverrides) -> &Option<T>,
) -> Option<T> {
    layer.as_ref().and_then(|entry| accessor(entry).clone())
}
