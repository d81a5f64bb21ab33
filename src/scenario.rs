//! The fixed three-tier loading scenario.
//!
//! Scenario generation is a pure function of the subproject and environment
//! names. The tier order is significant and never varies:
//!
//! 1. `[base, "common"]` — global common
//! 2. `[base, subproject, "common"]` — subproject common
//! 3. `[base, subproject, environment]` — subproject + environment

use std::path::PathBuf;

/// Default namespace prefix for tier paths.
pub const BASE_KEY: &str = "env";

/// Segment naming the shared tier within each level.
pub const COMMON_SEGMENT: &str = "common";

/// File extension for on-disk tier files.
pub const TIER_FILE_EXTENSION: &str = "toml";

/// One tier's location, both in the configuration tree and on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierDescriptor {
    segments: Vec<String>,
}

impl TierDescriptor {
    fn new(segments: &[&str]) -> Self {
        Self {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Lookup key in the configuration tree, e.g. `"env.api.common"`.
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }

    /// Path of the backing file relative to the config root,
    /// e.g. `env/api/common.toml`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.segments.iter().collect();
        path.set_extension(TIER_FILE_EXTENSION);
        path
    }
}

/// The ordered three-tier loading scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    tiers: [TierDescriptor; 3],
}

impl Scenario {
    /// Generate the scenario for a subproject and environment. Pure; no I/O.
    pub fn generate(base_key: &str, subproject: &str, environment: &str) -> Self {
        Self {
            tiers: [
                TierDescriptor::new(&[base_key, COMMON_SEGMENT]),
                TierDescriptor::new(&[base_key, subproject, COMMON_SEGMENT]),
                TierDescriptor::new(&[base_key, subproject, environment]),
            ],
        }
    }

    pub fn tiers(&self) -> &[TierDescriptor] {
        &self.tiers
    }
}
