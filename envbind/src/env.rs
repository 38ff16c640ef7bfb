//! Sources of environment variable values

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// A read-only, string-keyed lookup the binder resolves variable names
/// against.
///
/// Returning `None` and returning `Some("")` mean the same thing to the
/// binder: the variable was not provided.
pub trait Environment {
    /// Look up a single variable.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        match env::var(key) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::warn!(name = key, "environment variable is not valid unicode, ignoring");
                None
            }
        }
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
