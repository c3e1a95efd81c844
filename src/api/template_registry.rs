use indexmap::IndexMap;
use tracing::debug;

use crate::error::{StyleError, StyleResult};
use crate::style::{PM_GRAPH_PROFILE_NAME, StyleProfile, presets};

/// Named style profiles plus the active default.
///
/// The registry is an ordinary value owned by the caller and passed to
/// whatever builds figures; there is no process-wide table. `IndexMap` keeps
/// registration order stable for `names()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateRegistry {
    profiles: IndexMap<String, StyleProfile>,
    active: Option<String>,
}

impl TemplateRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in `PM_graph_1` profile as active default.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .profiles
            .insert(PM_GRAPH_PROFILE_NAME.to_owned(), presets::pm_graph());
        registry.active = Some(PM_GRAPH_PROFILE_NAME.to_owned());
        registry
    }

    /// Registers `profile` under `name`.
    ///
    /// An existing definition under the same name is replaced wholesale and
    /// returned; nothing of it is merged into the new one. The active pointer
    /// is left alone, so replacing the active profile activates the new
    /// definition.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        profile: StyleProfile,
    ) -> StyleResult<Option<StyleProfile>> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StyleError::InvalidData(
                "template name must not be empty".to_owned(),
            ));
        }
        profile.validate()?;

        let previous = self.profiles.insert(name.clone(), profile);
        if previous.is_some() {
            debug!(template = %name, "replaced registered template");
        } else {
            debug!(template = %name, count = self.profiles.len(), "registered template");
        }
        Ok(previous)
    }

    /// Marks an already registered profile as the active default.
    pub fn set_default(&mut self, name: &str) -> StyleResult<()> {
        if !self.profiles.contains_key(name) {
            return Err(StyleError::UnknownTemplate(name.to_owned()));
        }
        debug!(template = name, "set default template");
        self.active = Some(name.to_owned());
        Ok(())
    }

    /// Registers `profile` and makes it the active default.
    pub fn register_default(
        &mut self,
        name: impl Into<String>,
        profile: StyleProfile,
    ) -> StyleResult<Option<StyleProfile>> {
        let name = name.into();
        let previous = self.register(name.clone(), profile)?;
        self.set_default(&name)?;
        Ok(previous)
    }

    #[must_use]
    pub fn default_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn default_profile(&self) -> Option<&StyleProfile> {
        self.active
            .as_deref()
            .and_then(|name| self.profiles.get(name))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StyleProfile> {
        self.profiles.get(name)
    }

    /// Looks up `name`, failing with [`StyleError::UnknownTemplate`].
    pub fn require(&self, name: &str) -> StyleResult<&StyleProfile> {
        self.get(name)
            .ok_or_else(|| StyleError::UnknownTemplate(name.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Removes a profile; removing the active one clears the default.
    pub fn remove(&mut self, name: &str) -> Option<StyleProfile> {
        let removed = self.profiles.shift_remove(name)?;
        if self.active.as_deref() == Some(name) {
            debug!(template = name, "removed active template");
            self.active = None;
        }
        Some(removed)
    }
}
