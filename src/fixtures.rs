#[cfg(test)]
pub mod test {
    use std::cell::RefCell;

    use toml::{Table, Value};

    use crate::context::ExecutionContext;

    /// Deterministic execution context for tests.
    ///
    /// The host header sits in a `RefCell` so resolver idempotency tests can
    /// mutate it between calls through a shared reference.
    pub struct StaticContext {
        cli: bool,
        host: RefCell<Option<String>>,
        environment: String,
    }

    impl StaticContext {
        pub fn cli() -> Self {
            Self {
                cli: true,
                host: RefCell::new(None),
                environment: "testing".to_string(),
            }
        }

        pub fn web(host: Option<&str>) -> Self {
            Self {
                cli: false,
                host: RefCell::new(host.map(str::to_string)),
                environment: "testing".to_string(),
            }
        }

        pub fn with_environment(mut self, environment: &str) -> Self {
            self.environment = environment.to_string();
            self
        }

        pub fn set_host(&self, host: Option<&str>) {
            *self.host.borrow_mut() = host.map(str::to_string);
        }
    }

    impl ExecutionContext for StaticContext {
        fn is_cli(&self) -> bool {
            self.cli
        }

        fn host_header(&self) -> Option<String> {
            self.host.borrow().clone()
        }

        fn environment_name(&self) -> String {
            self.environment.clone()
        }
    }

    /// Parse a TOML literal into a table.
    pub fn table(toml_str: &str) -> Table {
        toml_str.parse::<Table>().unwrap()
    }

    /// Whether `needle` appears as a key anywhere in the tree.
    pub fn contains_key_deep(table: &Table, needle: &str) -> bool {
        table.iter().any(|(key, value)| {
            key == needle
                || match value {
                    Value::Table(sub) => contains_key_deep(sub, needle),
                    Value::Array(items) => items
                        .iter()
                        .any(|v| v.as_table().is_some_and(|t| contains_key_deep(t, needle))),
                    _ => false,
                }
        })
    }

    #[test]
    fn contains_key_deep_finds_nested_keys() {
        let t = table("[a.b]\ntarget = 1");
        assert!(contains_key_deep(&t, "target"));
        assert!(!contains_key_deep(&t, "missing"));
    }

    #[test]
    fn contains_key_deep_looks_inside_arrays() {
        let t = table("items = [{target = 1}]");
        assert!(contains_key_deep(&t, "target"));
    }
}
