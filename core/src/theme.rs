use std::collections::HashMap;
use std::fmt;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable string key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), String>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The persisted theme plus the store it came from.
pub struct ThemePreference<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn load(store: S) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and persists it. The in-memory value changes even when
    /// the write fails, so the page still reflects the click.
    pub fn toggle(&mut self) -> Result<Theme, String> {
        self.current = self.current.toggled();
        self.store.set(THEME_KEY, self.current.as_str())?;
        Ok(self.current)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_unknown_defaults_to_dark() {
        assert_eq!(ThemePreference::load(MemoryStore::new()).current(), Theme::Dark);
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemePreference::load(store).current(), Theme::Dark);
    }

    #[test]
    fn toggle_persists_new_value() {
        let mut pref = ThemePreference::load(MemoryStore::new());
        assert_eq!(pref.toggle(), Ok(Theme::Light));
        assert_eq!(pref.store().get(THEME_KEY).as_deref(), Some("light"));
    }
}
