use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ConvertError, Dataset};
use crate::geometry;
use crate::record::NormalizedRecord;

/// Scale between the recording's metric frame and the highway background
/// image: 0.10106 m/px in the source video, image reduced 4x.
pub const METERS_PER_PIXEL: f64 = 0.10106 * 4.0;

const TRACKS_SUFFIX: &str = "_tracks.csv";
const META_SUFFIX: &str = "_tracksMeta.csv";

/// Per-frame vehicle state, one row per (frame, id).
///
/// Position is the top-left corner of the box in meters; `width` runs
/// along the direction of travel, `height` across it. Columns the
/// transform does not use are skipped on read.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackRow {
    pub frame: i64,
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "xVelocity")]
    pub x_velocity: f64,
    #[serde(rename = "yVelocity")]
    pub y_velocity: f64,
    #[serde(rename = "laneId")]
    pub lane_id: i64,
}

/// Static per-vehicle attributes from the companion tracksMeta file.
/// Direction group 1 is the upper lanes (driving toward -x), group 2 the
/// lower lanes (toward +x).
#[derive(Debug, Clone, Deserialize)]
pub struct MetaRow {
    pub id: i64,
    pub class: String,
    #[serde(rename = "drivingDirection")]
    pub driving_direction: i64,
}

/// Unified class code for a highD label. Total: anything outside the
/// table, including a missing metadata match, is -1.
fn object_class(label: Option<&str>) -> i64 {
    match label {
        Some("Car") => 0,
        Some("Truck") => 3,
        _ => -1,
    }
}

/// Turn track rows joined with per-vehicle metadata into unified
/// records. Pure: one output record per input row, in input order.
pub fn normalize(tracks: &[TrackRow], meta: &[MetaRow]) -> Vec<NormalizedRecord> {
    let by_id: HashMap<i64, &MetaRow> = meta.iter().map(|m| (m.id, m)).collect();

    tracks
        .iter()
        .map(|row| {
            let meta = by_id.get(&row.id).copied();

            let center = [row.x + row.width / 2.0, row.y + row.height / 2.0];
            let speed = geometry::speed(row.x_velocity, row.y_velocity);

            let mut heading = geometry::heading_deg(row.x_velocity, row.y_velocity);
            // The velocity heading is undefined at rest; fall back to the
            // lane group's direction. Only exactly-zero rows qualify:
            // slow-but-moving vehicles keep their atan2 heading.
            if row.x_velocity == 0.0 && row.y_velocity == 0.0 {
                match meta.map(|m| m.driving_direction) {
                    Some(1) => heading = 180.0,
                    Some(2) => heading = 0.0,
                    _ => {}
                }
            }

            let corners =
                geometry::obb_corners(center, row.width / 2.0, row.height / 2.0, heading);

            NormalizedRecord::from_metric(
                row.frame,
                row.id,
                center,
                corners,
                heading,
                speed,
                object_class(meta.map(|m| m.class.as_str())),
                Some(row.lane_id),
                Some(METERS_PER_PIXEL),
            )
        })
        .collect()
}

/// Overhead-camera highway recordings (highD layout).
pub struct HighD;

impl HighD {
    /// `XX_tracks.csv` -> `XX_tracksMeta.csv` next to it.
    fn meta_path(input: &Path) -> Option<PathBuf> {
        let name = input.file_name()?.to_str()?;
        let prefix = name.strip_suffix(TRACKS_SUFFIX)?;
        Some(input.with_file_name(format!("{prefix}{META_SUFFIX}")))
    }
}

impl Dataset for HighD {
    fn name(&self) -> &'static str {
        "highD"
    }

    /// Recording folders mix track files with metadata and background
    /// images; only the XX_tracks.csv files are conversion inputs.
    fn inputs(&self, data_folder: &Path) -> Result<Vec<PathBuf>, ConvertError> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(data_folder)? {
            let path = entry?.path();
            let is_tracks = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(TRACKS_SUFFIX));
            if path.is_file() && is_tracks {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn convert(&self, input: &Path) -> Result<Vec<NormalizedRecord>, ConvertError> {
        let meta_path = Self::meta_path(input)
            .ok_or_else(|| ConvertError::MissingMeta(input.to_path_buf()))?;
        if !meta_path.is_file() {
            return Err(ConvertError::MissingMeta(meta_path));
        }

        let tracks: Vec<TrackRow> = read_rows(input)?;
        let meta: Vec<MetaRow> = read_rows(&meta_path)?;
        log::debug!(
            "{}: {} track rows, {} vehicles",
            input.display(),
            tracks.len(),
            meta.len()
        );

        Ok(normalize(&tracks, &meta))
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ConvertError> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader.deserialize().collect::<Result<Vec<T>, _>>()?;
    Ok(rows)
}
