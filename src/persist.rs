use std::fs;
use std::path::Path;

use crate::error::PersistError;
use crate::rules::Rules;
use crate::snapshot::Snapshot;

/// Load a snapshot written by [`save_snapshot_json`] (or by hand).
pub fn load_snapshot_json<P: AsRef<Path>>(path: P) -> Result<Snapshot, PersistError> {
    let data = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&data)?)
}

/// Write a snapshot as pretty JSON. Record order is preserved.
pub fn save_snapshot_json<P: AsRef<Path>>(path: P, snap: &Snapshot) -> Result<(), PersistError> {
    let data = serde_json::to_string_pretty(snap)?;
    fs::write(path.as_ref(), data)?;
    Ok(())
}

/// Load a rules file. Missing fields take the reference defaults.
pub fn load_rules_json<P: AsRef<Path>>(path: P) -> Result<Rules, PersistError> {
    let data = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&data)?)
}

pub fn save_rules_json<P: AsRef<Path>>(path: P, rules: &Rules) -> Result<(), PersistError> {
    let data = serde_json::to_string_pretty(rules)?;
    fs::write(path.as_ref(), data)?;
    Ok(())
}
