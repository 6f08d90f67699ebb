//! Registry of view profiles by name

use std::collections::BTreeMap;

use super::builtin::builtin_profiles;
use super::errors::{ViewError, ViewResult};
use super::profile::ViewProfile;

/// View profiles keyed by name
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    profiles: BTreeMap<String, ViewProfile>,
}

impl ViewRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in dashboard profiles
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for profile in builtin_profiles() {
            registry.profiles.insert(profile.name.clone(), profile);
        }
        registry
    }

    /// Validates and adds a profile, replacing one of the same name
    pub fn register(&mut self, profile: ViewProfile) -> ViewResult<()> {
        profile.validate()?;
        self.profiles.insert(profile.name.clone(), profile);
        Ok(())
    }

    pub fn get(&self, name: &str) -> ViewResult<&ViewProfile> {
        self.profiles
            .get(name)
            .ok_or_else(|| ViewError::UnknownView(name.to_string()))
    }

    /// Profile names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &ViewProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
