#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;

/// Trait for reading process environment variables, allowing for mocking in tests
pub trait Environment: Send + Sync {
    /// Get the value of a variable, or None if it is unset or not valid unicode
    fn var(&self, key: &str) -> Option<String>;

    /// Get the value of a variable, treating an empty value as unset
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// Real environment backed by `std::env`
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Mock environment for testing
#[cfg(test)]
pub struct MockEnvironment {
    vars: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_vars(vars: &[(&str, &str)]) -> Self {
        let env = Self::new();
        for (key, value) in vars {
            env.set(key, value);
        }
        env
    }

    pub fn set(&self, key: &str, value: &str) {
        self.vars
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Environment for MockEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.lock().unwrap().get(key).cloned()
    }
}
