//! Tier payload acquisition: live-store lookup with file fallback.
//!
//! For each tier descriptor the provider tries two sources, stopping at the
//! first that yields data: the configuration tree itself (the host may have
//! preloaded the tier), then the backing file beneath the config root. A
//! tier with no data in either place is skipped, never an error.
//!
//! The reserved `merge_config` control key is extracted here, at the data
//! boundary, so the appliers only ever see an explicit flag plus clean data.

use std::path::Path;

use toml::{Table, Value};
use tracing::{debug, warn};

use crate::error::TierconfError;
use crate::scenario::TierDescriptor;
use crate::store::ConfigStore;

/// Reserved key selecting merge mode for a tier. Never reaches the store.
pub const MERGE_CONTROL_KEY: &str = "merge_config";

/// One tier's data with its application mode decided.
#[derive(Debug, Clone, PartialEq)]
pub struct TierPayload {
    /// Apply via growth merge instead of overwrite.
    pub merge: bool,
    /// Tier data, stripped of the control key.
    pub data: Table,
}

impl TierPayload {
    /// Extract the control key from a raw tier mapping.
    ///
    /// Only boolean `true` selects merge mode; any other value (or absence)
    /// means overwrite. Non-boolean values are still stripped.
    pub fn from_raw(mut data: Table) -> Self {
        let merge = matches!(data.remove(MERGE_CONTROL_KEY), Some(Value::Boolean(true)));
        Self { merge, data }
    }
}

/// Fetch one tier's payload, or `None` if the tier has no data.
///
/// A non-mapping value at the tier's store path counts as the first success
/// of the fallback chain but fails the mapping precondition, so the tier is
/// skipped without consulting the file.
pub fn fetch_tier(
    store: &dyn ConfigStore,
    config_root: &Path,
    descriptor: &TierDescriptor,
) -> Option<TierPayload> {
    let dotted = descriptor.dotted();

    if let Some(value) = store.get(&dotted) {
        return match value {
            Value::Table(data) => Some(TierPayload::from_raw(data)),
            other => {
                debug!(
                    tier = %dotted,
                    kind = other.type_str(),
                    "tier value in store is not a mapping; skipping"
                );
                None
            }
        };
    }

    match load_tier_file(config_root, descriptor) {
        Ok(Some(data)) => Some(TierPayload::from_raw(data)),
        Ok(None) => {
            debug!(tier = %dotted, "no tier data in store or on disk");
            None
        }
        Err(err) => {
            warn!(tier = %dotted, %err, "failed to load tier file; skipping");
            None
        }
    }
}

fn load_tier_file(
    config_root: &Path,
    descriptor: &TierDescriptor,
) -> Result<Option<Table>, TierconfError> {
    let path = config_root.join(descriptor.relative_path());
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(TierconfError::Io { path, source: e }),
    };
    let data = toml::from_str(&content).map_err(|e| TierconfError::Parse { path, source: e })?;
    Ok(Some(data))
}
