//! Provides the [Voting](Voting) struct which contains a server's mission
//! voting settings.

use serde::{Deserialize, Serialize};

/// The threshold value written to the config when voting is disabled. A
/// threshold above 1.0 can never be reached, which is how the server's config
/// format expresses "voting off".
pub const DISABLED_VOTE_THRESHOLD: f64 = 1.5;

/// Contains a server's mission voting settings.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Voting {
    /// Whether mission voting is enabled.
    pub enabled: bool,
    /// Corresponds to the `voteMissionPlayers` setting. Defaults to 1.
    pub mission_players: u32,
    /// Corresponds to the `voteThreshold` setting. Defaults to 0.33. The
    /// stored value is retained while voting is disabled, but
    /// [`effective_threshold`](Voting::effective_threshold) substitutes the
    /// [disabled sentinel](DISABLED_VOTE_THRESHOLD) in its place.
    pub threshold: f64,
}

impl Default for Voting {
    fn default() -> Self {
        Self {
            enabled: false,
            mission_players: 1,
            threshold: 0.33,
        }
    }
}

impl Voting {
    /// Returns the vote threshold to write to the server config: the stored
    /// threshold when voting is enabled, the disabled sentinel otherwise.
    pub fn effective_threshold(&self) -> f64 {
        if self.enabled {
            self.threshold
        } else {
            DISABLED_VOTE_THRESHOLD
        }
    }
}
