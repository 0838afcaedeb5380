//! Provides the [Motd](Motd) struct which contains a server's message of the
//! day.

use serde::{Deserialize, Serialize};

/// Contains a server's message of the day.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Motd {
    /// Corresponds to the `motd[]` setting. The lines are broadcast in order.
    pub lines: Vec<String>,
    /// Corresponds to the `motdInterval` setting, in seconds. Defaults to 5.
    pub interval: u32,
}

impl Default for Motd {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            interval: 5,
        }
    }
}
