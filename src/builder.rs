//! Builder and orchestration: resolve → generate scenario → load-and-apply.

use std::path::PathBuf;

use tracing::debug;

use crate::context::ExecutionContext;
use crate::error::TierconfError;
use crate::merge::{apply_merge, apply_overwrite};
use crate::provider::fetch_tier;
use crate::resolver::{DEFAULT_SUBPROJECT, SubprojectResolver};
use crate::scenario::{BASE_KEY, Scenario};
use crate::store::ConfigStore;

/// Entry point for building a tierconf loader.
pub struct Tierconf;

impl Tierconf {
    pub fn builder() -> TierconfBuilder {
        TierconfBuilder::new()
    }
}

/// Builder for a [`TierLoader`].
///
/// The config root is either set explicitly or derived from the platform
/// config directory for [`app_name`](Self::app_name). Everything else has
/// fixed defaults matching the three-tier convention: base key `"env"`,
/// default subproject `"front"`.
pub struct TierconfBuilder {
    app_name: Option<String>,
    config_root: Option<PathBuf>,
    base_key: String,
    default_subproject: String,
}

impl TierconfBuilder {
    fn new() -> Self {
        Self {
            app_name: None,
            config_root: None,
            base_key: BASE_KEY.to_string(),
            default_subproject: DEFAULT_SUBPROJECT.to_string(),
        }
    }

    /// Set the application name, deriving the config root from the platform
    /// config directory (e.g. `~/.config/{app_name}/` on Linux).
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    /// Set the config root explicitly. Takes precedence over
    /// [`app_name`](Self::app_name).
    pub fn config_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config_root = Some(root.into());
        self
    }

    /// Override the tier namespace prefix (default: `"env"`).
    pub fn base_key(mut self, key: &str) -> Self {
        self.base_key = key.to_string();
        self
    }

    /// Override the fallback subproject identity (default: `"front"`).
    pub fn default_subproject(mut self, identity: &str) -> Self {
        self.default_subproject = identity.to_string();
        self
    }

    fn effective_config_root(&self) -> Result<PathBuf, TierconfError> {
        if let Some(root) = &self.config_root {
            return Ok(root.clone());
        }
        let Some(app) = &self.app_name else {
            return Err(TierconfError::ConfigRootRequired);
        };
        directories::ProjectDirs::from("", "", app)
            .map(|proj| proj.config_dir().to_path_buf())
            .ok_or(TierconfError::ConfigRootRequired)
    }

    /// Build the loader. Fails only on misconfiguration; no loading happens
    /// here.
    pub fn build(self) -> Result<TierLoader, TierconfError> {
        let config_root = self.effective_config_root()?;
        Ok(TierLoader {
            config_root,
            base_key: self.base_key,
            resolver: SubprojectResolver::with_default(&self.default_subproject),
        })
    }
}

/// How one tier was handled during a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierOutcome {
    Overwrote,
    Merged,
    Skipped,
}

/// Per-tier record of a completed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub subproject: String,
    pub environment: String,
    /// Dotted tier key and its outcome, in scenario order.
    pub tiers: Vec<(String, TierOutcome)>,
}

impl LoadSummary {
    /// Number of tiers that contributed data.
    pub fn applied(&self) -> usize {
        self.tiers
            .iter()
            .filter(|(_, outcome)| *outcome != TierOutcome::Skipped)
            .count()
    }
}

/// Executes the three-tier load against a configuration store.
///
/// The loop is strictly sequential: a tier's mutations are visible to the
/// next tier's store lookup. Nothing here errors; tiers without usable
/// data are skipped and recorded as such.
pub struct TierLoader {
    config_root: PathBuf,
    base_key: String,
    resolver: SubprojectResolver,
}

impl TierLoader {
    pub fn config_root(&self) -> &std::path::Path {
        &self.config_root
    }

    pub fn run(&self, ctx: &dyn ExecutionContext, store: &mut dyn ConfigStore) -> LoadSummary {
        let subproject = self.resolver.resolve(ctx).to_string();
        let environment = ctx.environment_name();
        let scenario = Scenario::generate(&self.base_key, &subproject, &environment);

        let mut tiers = Vec::with_capacity(scenario.tiers().len());
        for descriptor in scenario.tiers() {
            let dotted = descriptor.dotted();
            let outcome = match fetch_tier(&*store, &self.config_root, descriptor) {
                None => TierOutcome::Skipped,
                Some(payload) if payload.merge => {
                    apply_merge(store, &payload.data);
                    TierOutcome::Merged
                }
                Some(payload) => {
                    apply_overwrite(store, payload.data);
                    TierOutcome::Overwrote
                }
            };
            debug!(tier = %dotted, ?outcome, "tier processed");
            tiers.push((dotted, outcome));
        }

        LoadSummary {
            subproject,
            environment,
            tiers,
        }
    }
}
