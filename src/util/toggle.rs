//! Provides the `Toggle` struct.

use serde::{Deserialize, Serialize};

/// A setting value paired with an enabled flag.
///
/// Several server settings are only written to the config file when the user
/// has explicitly enabled them; the stored value is retained either way so
/// toggling a setting off and back on doesn't lose it.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
pub struct Toggle<T> {
    /// Whether the setting is in effect.
    pub enabled: bool,
    /// The setting's value, meaningful only when `enabled` is set.
    pub value: T,
}

impl<T> Toggle<T> {
    /// Returns a new disabled `Toggle` holding a given value.
    pub fn disabled(value: T) -> Self {
        Self { enabled: false, value }
    }

    /// Returns a new enabled `Toggle` holding a given value.
    pub fn enabled(value: T) -> Self {
        Self { enabled: true, value }
    }

    /// Returns `Some(&value)` if the toggle is enabled, otherwise `None`.
    pub fn get(&self) -> Option<&T> {
        if self.enabled {
            Some(&self.value)
        } else {
            None
        }
    }
}

impl<T> Default for Toggle<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::disabled(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_respects_enabled_flag() {
        assert_eq!(Toggle::disabled(100u32).get(), None);
        assert_eq!(Toggle::enabled(100u32).get(), Some(&100));
    }
}
