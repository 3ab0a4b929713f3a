/// Callback fixture loader
///
/// Fixtures live in `callbacks.json`: one object per payload with the charset
/// label (or `null` for verbatim parsing), the raw query and the expected views.
use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CallbackCase {
    pub name: String,
    #[serde(default)]
    pub charset: Option<String>,
    pub query: String,
    pub single: BTreeMap<String, String>,
    pub array: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct CallbackFailure {
    pub name: String,
    pub view: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct CallbackResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CallbackFailure>,
}

impl CallbackResult {
    pub fn print_failures(&self) {
        for failure in &self.failures {
            eprintln!(
                "[{}] {} view mismatch\n  expected: {}\n  actual:   {}",
                failure.name, failure.view, failure.expected, failure.actual
            );
        }
    }
}

pub fn load_callback_cases() -> Vec<CallbackCase> {
    serde_json::from_str(include_str!("callbacks.json")).expect("callbacks.json is valid")
}
