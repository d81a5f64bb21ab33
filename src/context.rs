//! Ambient execution state behind a capability interface.
//!
//! The resolver and loader never read process globals directly. Everything
//! they need from the outside world (CLI detection, the request's host
//! header, the environment name) comes through [`ExecutionContext`], so
//! tests can pass deterministic synthetic contexts instead of a real process
//! environment.

use std::env;

/// What the host runtime knows about the current execution.
pub trait ExecutionContext {
    /// Whether this is a non-interactive / command-line invocation.
    fn is_cli(&self) -> bool;

    /// The incoming request's host header, if any.
    fn host_header(&self) -> Option<String>;

    /// The active environment name (e.g. `"prod"`, `"staging"`).
    fn environment_name(&self) -> String;
}

/// Context for command-line processes.
///
/// Always reports a CLI execution with no host header. The environment name
/// is read from a process environment variable (default `APP_ENV`), falling
/// back to `"production"` when unset.
#[derive(Debug, Clone)]
pub struct ProcessContext {
    env_var: String,
}

impl ProcessContext {
    pub fn new() -> Self {
        Self {
            env_var: "APP_ENV".to_string(),
        }
    }

    /// Read the environment name from a different variable than `APP_ENV`.
    pub fn with_env_var(name: &str) -> Self {
        Self {
            env_var: name.to_string(),
        }
    }
}

impl Default for ProcessContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionContext for ProcessContext {
    fn is_cli(&self) -> bool {
        true
    }

    fn host_header(&self) -> Option<String> {
        None
    }

    fn environment_name(&self) -> String {
        env::var(&self.env_var).unwrap_or_else(|_| "production".to_string())
    }
}

/// Context for server hosts, constructed once per incoming request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    host: Option<String>,
    environment: String,
}

impl RequestContext {
    pub fn new(host: Option<&str>, environment: &str) -> Self {
        Self {
            host: host.map(str::to_string),
            environment: environment.to_string(),
        }
    }
}

impl ExecutionContext for RequestContext {
    fn is_cli(&self) -> bool {
        false
    }

    fn host_header(&self) -> Option<String> {
        self.host.clone()
    }

    fn environment_name(&self) -> String {
        self.environment.clone()
    }
}
