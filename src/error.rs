use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TierconfError {
    #[error("No config root available — call .config_root() or .app_name() on the builder")]
    ConfigRootRequired,

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Seed data did not serialize to a table")]
    SeedNotATable,

    #[error("Failed to serialize seed data: {0}")]
    Seed(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_includes_path() {
        let err = TierconfError::Io {
            path: "/etc/myapp/env/common.toml".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("common.toml"));
    }

    #[test]
    fn parse_error_includes_path() {
        let bad: Result<toml::Table, _> = "not = = toml".parse();
        let err = TierconfError::Parse {
            path: "/tmp/env/api/prod.toml".into(),
            source: bad.unwrap_err(),
        };
        assert!(err.to_string().contains("prod.toml"));
    }

    #[test]
    fn config_root_required_mentions_builder() {
        let err = TierconfError::ConfigRootRequired;
        assert!(err.to_string().contains("config_root"));
    }
}
