//! Subproject identity resolution.
//!
//! The active subproject is a single lowercase token: the literal `"cli"`
//! for command-line invocations, the first label of the request's host
//! header for web invocations, or a configured default when neither yields
//! anything. Resolution never fails; missing or malformed input always
//! degrades to the default.

use std::cell::OnceCell;

use crate::context::ExecutionContext;

/// Identity reported for command-line executions.
pub const CLI_IDENTITY: &str = "cli";

/// Fallback identity when the host header yields no usable label.
pub const DEFAULT_SUBPROJECT: &str = "front";

/// Derives and caches the active subproject identity.
///
/// The first call to [`resolve`](Self::resolve) fixes the identity for the
/// resolver's lifetime; later calls return the cached value even if the
/// execution context has changed since.
#[derive(Debug)]
pub struct SubprojectResolver {
    default_identity: String,
    cached: OnceCell<String>,
}

impl SubprojectResolver {
    pub fn new() -> Self {
        Self::with_default(DEFAULT_SUBPROJECT)
    }

    pub fn with_default(default_identity: &str) -> Self {
        Self {
            default_identity: default_identity.to_string(),
            cached: OnceCell::new(),
        }
    }

    pub fn resolve(&self, ctx: &dyn ExecutionContext) -> &str {
        self.cached.get_or_init(|| self.identity_from(ctx))
    }

    fn identity_from(&self, ctx: &dyn ExecutionContext) -> String {
        if ctx.is_cli() {
            return CLI_IDENTITY.to_string();
        }
        let Some(host) = ctx.host_header() else {
            return self.default_identity.clone();
        };
        match host.split('.').next() {
            Some(label) if !label.trim().is_empty() => label.trim().to_lowercase(),
            _ => self.default_identity.clone(),
        }
    }
}

impl Default for SubprojectResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::StaticContext;

    #[test]
    fn cli_context_resolves_to_cli() {
        let resolver = SubprojectResolver::new();
        assert_eq!(resolver.resolve(&StaticContext::cli()), "cli");
    }

    #[test]
    fn cli_wins_regardless_of_host_header() {
        let ctx = StaticContext::cli();
        ctx.set_host(Some("admin.example.com"));
        let resolver = SubprojectResolver::new();
        assert_eq!(resolver.resolve(&ctx), "cli");
    }

    #[test]
    fn first_host_label_lowercased() {
        let resolver = SubprojectResolver::new();
        let ctx = StaticContext::web(Some("ADMIN.example.com"));
        assert_eq!(resolver.resolve(&ctx), "admin");
    }

    #[test]
    fn bare_host_used_whole() {
        let resolver = SubprojectResolver::new();
        let ctx = StaticContext::web(Some("localhost"));
        assert_eq!(resolver.resolve(&ctx), "localhost");
    }

    #[test]
    fn missing_host_falls_back_to_default() {
        let resolver = SubprojectResolver::new();
        assert_eq!(resolver.resolve(&StaticContext::web(None)), "front");
    }

    #[test]
    fn empty_first_label_falls_back_to_default() {
        let resolver = SubprojectResolver::new();
        let ctx = StaticContext::web(Some(".example.com"));
        assert_eq!(resolver.resolve(&ctx), "front");
    }

    #[test]
    fn empty_host_falls_back_to_default() {
        let resolver = SubprojectResolver::new();
        let ctx = StaticContext::web(Some(""));
        assert_eq!(resolver.resolve(&ctx), "front");
    }

    #[test]
    fn configured_default_used() {
        let resolver = SubprojectResolver::with_default("main");
        assert_eq!(resolver.resolve(&StaticContext::web(None)), "main");
    }

    #[test]
    fn resolution_is_cached() {
        let ctx = StaticContext::web(Some("api.example.com"));
        let resolver = SubprojectResolver::new();
        assert_eq!(resolver.resolve(&ctx), "api");

        // Mutating the context afterwards must not change the answer.
        ctx.set_host(Some("admin.example.com"));
        assert_eq!(resolver.resolve(&ctx), "api");
    }
}
