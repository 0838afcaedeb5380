//! Provides the [Mission](Mission) struct representing one entry in a
//! server's mission rotation.

use serde::{Deserialize, Serialize};

/// The archive extension stripped from mission names when rendering the
/// mission rotation.
pub const MISSION_ARCHIVE_EXTENSION: &str = ".pbo";

/// The difficulty names the server config format accepts, in code order.
const DIFFICULTY_NAMES: [&str; 4] = ["recruit", "regular", "veteran", "custom"];

/// One entry in a server's mission rotation.
///
/// The rotation is an ordered list; the position of a mission in it is the
/// position the server plays it in. Only checked missions are part of the
/// active rotation. Mission identity is its archive name.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Mission {
    /// The mission's on-disk archive name, e.g. `co30_something.altis.pbo`.
    pub name: String,
    /// Whether the mission is part of the active rotation.
    pub checked: bool,
    /// The mission's difficulty code (0 recruit, 1 regular, 2 veteran, 3 custom).
    pub difficulty: u8,
}

impl Mission {
    /// Returns a new checked `Mission` with regular difficulty.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checked: true,
            difficulty: 1,
        }
    }

    /// Returns the mission's name template for the server config: the archive
    /// name with its extension stripped and surrounding whitespace trimmed.
    pub fn template(&self) -> String {
        self.name.replace(MISSION_ARCHIVE_EXTENSION, "").trim().to_string()
    }
}

impl PartialEq for Mission {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Returns the difficulty name for a given code as used in the main config's
/// mission classes. Unrecognized codes map to an empty string.
///
/// This fallback deliberately differs from
/// [`default_difficulty_name`](default_difficulty_name): the two config
/// formats have always degraded differently and the server accepts both.
pub fn mission_difficulty_name(code: u8) -> &'static str {
    DIFFICULTY_NAMES.get(code as usize).copied().unwrap_or("")
}

/// Returns the difficulty name for a given code as used for the player
/// profile's default difficulty. Unrecognized codes map to `regular`.
pub fn default_difficulty_name(code: u8) -> &'static str {
    DIFFICULTY_NAMES.get(code as usize).copied().unwrap_or("regular")
}
