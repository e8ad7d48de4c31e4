//! Profile and daily activity loaders.
//!
//! These stand in for the remote fetch layer: each returns a snapshot
//! that is handed to the dashboard once loading completes.

use crate::{DailyActivity, ProfileMeasurement, ProfileSnapshot, Result};
use std::path::Path;

/// Load a height/weight profile from a JSON file
///
/// Returns `NotLoaded` if the file doesn't exist or can't be parsed.
/// A parsed profile with `null` fields is still `Loaded`.
pub fn load_profile(path: &Path) -> Result<ProfileSnapshot> {
    if !path.exists() {
        tracing::debug!("No profile file found at {:?}", path);
        return Ok(ProfileSnapshot::NotLoaded);
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(
                "Failed to read profile at {:?}: {}. Treating as not loaded.",
                path,
                e
            );
            return Ok(ProfileSnapshot::NotLoaded);
        }
    };

    match serde_json::from_str::<ProfileMeasurement>(&contents) {
        Ok(measurement) => {
            tracing::info!("Loaded profile from {:?}", path);
            Ok(ProfileSnapshot::Loaded(measurement))
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse profile at {:?}: {}. Treating as not loaded.",
                path,
                e
            );
            Ok(ProfileSnapshot::NotLoaded)
        }
    }
}

/// Load today's activity record from a JSON file
///
/// A missing file yields an empty day; a malformed one is an error.
pub fn load_activity(path: &Path) -> Result<DailyActivity> {
    if !path.exists() {
        tracing::debug!("No activity file found at {:?}, using empty day", path);
        return Ok(DailyActivity::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let activity: DailyActivity = serde_json::from_str(&contents)?;
    tracing::info!("Loaded activity from {:?}", path);
    Ok(activity)
}
