//! Subdomain-aware tiered configuration overlays. Point a loader at your
//! config root, hand it the execution context and your config store, and go.
//!
//! Tierconf layers environment- and subproject-specific configuration on top
//! of an application's base configuration tree. Which overlays apply is
//! decided by a fixed three-tier scenario derived from the active
//! subproject (a subdomain label, or `"cli"` for command-line runs) and the
//! current environment name:
//!
//! ```text
//! env/common.toml                 global common
//!        ↑ then
//! env/{subproject}/common.toml    subproject common
//!        ↑ then
//! env/{subproject}/{environment}.toml
//! ```
//!
//! Tiers apply in that order, so on key collision a later tier wins. Each
//! tier is fetched from the live configuration tree first (the host may
//! have preloaded it) and from its backing file second; a tier with data in
//! neither place is skipped. Missing files, malformed host headers, and
//! unparsable tier data are never errors: the loader degrades to "no data"
//! and keeps going.
//!
//! ```ignore
//! let loader = Tierconf::builder().app_name("myapp").build()?;
//! let summary = loader.run(&ProcessContext::new(), &mut store);
//! ```
//!
//! # Overwrite vs. merge
//!
//! A tier applies in one of two modes, selected per tier by a reserved
//! `merge_config = true` key in its data (stripped before application, never
//! written to the store):
//!
//! - **Overwrite** (default): every top-level key of the tier's payload is
//!   written at the root of the configuration tree, structurally replacing
//!   whatever was there. Later tiers win.
//! - **Merge**: the payload is flattened to dotted keys (sequence indices
//!   collapse onto the containing key) and each entry *grows* the existing
//!   value: scalars are promoted to one-element sequences, incoming
//!   sequences concatenate element-wise. Merge mode never deletes or
//!   replaces pre-existing leaf data.
//!
//! # Injected collaborators
//!
//! The loader owns no ambient state. The two seams the host supplies:
//!
//! - [`ConfigStore`]: the shared configuration tree, addressed by dotted
//!   key paths. [`MemoryStore`] is the provided implementation; hosts with
//!   their own storage implement the trait.
//! - [`ExecutionContext`]: CLI detection, the request's host header, and
//!   the environment name. [`ProcessContext`] covers command-line
//!   processes; server hosts build a [`RequestContext`] per request.
//!
//! The subproject identity is resolved once per loader and cached: `"cli"`
//! in CLI contexts, otherwise the first label of the host header lowercased
//! (`ADMIN.example.com` → `admin`), falling back to `"front"`.
//!
//! # Errors
//!
//! Only builder misconfiguration surfaces as an error, before any loading
//! begins. The load loop itself always completes; per-tier problems are
//! reported through `tracing` and the returned [`LoadSummary`].

pub mod error;

mod builder;
mod context;
mod flatten;
mod merge;
mod provider;
mod resolver;
mod scenario;
mod store;

#[cfg(test)]
mod fixtures;

pub use builder::{LoadSummary, TierLoader, TierOutcome, Tierconf, TierconfBuilder};
pub use context::{ExecutionContext, ProcessContext, RequestContext};
pub use error::TierconfError;
pub use provider::{MERGE_CONTROL_KEY, TierPayload};
pub use resolver::{CLI_IDENTITY, DEFAULT_SUBPROJECT, SubprojectResolver};
pub use scenario::{BASE_KEY, Scenario, TierDescriptor};
pub use store::{ConfigStore, MemoryStore};
