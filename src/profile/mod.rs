//! Provides the [Profile](Profile) struct, the complete settings model for
//! one server instance.

mod difficulty;
mod events;
mod host;
mod missions;
mod mods;
mod motd;
mod network;
mod rules;
mod store;
mod voting;

use crate::error::ProfileError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use difficulty::{DifficultyItem, DifficultySetting, ItemValue, ITEM_CATALOG};
pub use events::EventScripts;
pub use host::Host;
pub use missions::{default_difficulty_name, mission_difficulty_name, Mission};
pub use mods::{Mod, ModSource};
pub use motd::Motd;
pub use network::{HeadlessClients, Network, TimestampFormat, Tuning};
pub use rules::{Rules, VerifySignatures};
pub use store::Store;
pub use voting::{Voting, DISABLED_VOTE_THRESHOLD};

/// The file name of the rendered main server config.
pub const CONFIG_FILE_NAME: &str = "TADST_config.cfg";
/// The file name of the rendered basic (network tuning) config.
pub const BASIC_CONFIG_FILE_NAME: &str = "TADST_basic.cfg";
/// The subdirectory of a profile's directory the player profiles live in.
pub const USERS_DIR_NAME: &str = "Users";

/// Characters a profile name may not contain; the name doubles as a
/// filesystem path segment.
const FORBIDDEN_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Contains a server's launch settings.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
pub struct Launch {
    /// Path to the server executable.
    pub server_exe: PathBuf,
    /// Free-text parameters appended verbatim to the startup parameters.
    pub extra_parameters: String,
    /// Whether to pass the `-enableHT` startup parameter.
    pub hyperthreading: bool,
    /// Whether to launch the beta executable branch with the `-beta` parameter.
    pub beta: bool,
    /// Whether the tool should exit once the server has been launched.
    pub auto_exit: bool,
    /// Whether to launch with the config files currently on disk instead of
    /// regenerating them first.
    pub launch_as_is: bool,
}

/// The complete settings model for one server instance.
///
/// A profile is a plain value: nothing here touches the screen or the disk
/// beyond [Store](Store), and the renderers in [render](crate::render) only
/// ever read it.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Profile {
    /// The profile's name; its storage key and directory name.
    name: String,
    /// The server's identity and capacity settings.
    pub host: Host,
    /// The server's message of the day.
    pub motd: Motd,
    /// The server's mission voting settings.
    pub voting: Voting,
    /// The server's client rule and kick settings.
    pub rules: Rules,
    /// The server's network, voice and bandwidth settings.
    pub network: Network,
    /// The server's event script hooks.
    pub events: EventScripts,
    /// The mission rotation, in play order.
    pub missions: Vec<Mission>,
    /// The mod list, in load order.
    pub mods: Vec<Mod>,
    /// The custom difficulty ruleset.
    pub difficulty: DifficultySetting,
    /// The server's launch settings.
    pub launch: Launch,
}

impl Profile {
    /// Returns a new `Profile` with default settings and a given name.
    /// Returns `ProfileError::InvalidName` if the name is empty or not safe
    /// to use as a path segment.
    pub fn new(name: &str) -> Result<Self, ProfileError> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            host: Host::default(),
            motd: Motd::default(),
            voting: Voting::default(),
            rules: Rules::default(),
            network: Network::default(),
            events: EventScripts::default(),
            missions: Vec::new(),
            mods: Vec::new(),
            difficulty: DifficultySetting::default(),
            launch: Launch::default(),
        })
    }

    /// Immutably borrows the profile's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the profile's directory under a given data directory.
    pub fn directory<P>(&self, data_dir: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        data_dir.as_ref().join(&self.name)
    }

    /// Returns the directory the player profile files are written to under a
    /// given data directory.
    pub fn users_directory<P>(&self, data_dir: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        self.directory(data_dir).join(USERS_DIR_NAME).join(&self.name)
    }

    /// Iterates over the checked missions in rotation order.
    pub fn checked_missions(&self) -> impl Iterator<Item = &Mission> {
        self.missions.iter().filter(|m| m.checked)
    }

    /// Iterates over the checked mods in load order.
    pub fn checked_mods(&self) -> impl Iterator<Item = &Mod> {
        self.mods.iter().filter(|m| m.checked)
    }

    /// Adds a mod to the list unless a structurally equal one is already in it.
    pub fn add_mod(&mut self, new_mod: Mod) -> bool {
        if self.mods.contains(&new_mod) {
            return false;
        }
        self.mods.push(new_mod);
        true
    }
}

/// Checks that a given profile name is non-empty and usable as a filesystem
/// path segment.
fn validate_name(name: &str) -> Result<(), ProfileError> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.chars().any(|c| FORBIDDEN_NAME_CHARS.contains(&c) || c.is_control());

    if invalid {
        Err(ProfileError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_path_separators() {
        assert!(Profile::new("server/one").is_err());
        assert!(Profile::new("server\\one").is_err());
        assert!(Profile::new("..").is_err());
        assert!(Profile::new("  ").is_err());
        assert!(Profile::new("Server One").is_ok());
    }

    #[test]
    fn checked_missions_preserve_order() {
        let mut profile = Profile::new("test").unwrap();
        profile.missions = vec![
            Mission::new("first.pbo"),
            Mission {
                checked: false,
                ..Mission::new("second.pbo")
            },
            Mission::new("third.pbo"),
        ];

        let checked: Vec<&str> = profile.checked_missions().map(|m| m.name.as_str()).collect();
        assert_eq!(checked, vec!["first.pbo", "third.pbo"]);
    }

    #[test]
    fn add_mod_deduplicates_structurally() {
        let mut profile = Profile::new("test").unwrap();
        let original = Mod {
            name: String::from("ACE"),
            path: String::from("mods/@ace"),
            checked: true,
            source: ModSource::Steam,
        };
        let renamed = Mod {
            name: String::from("Renamed"),
            ..original.clone()
        };

        assert!(profile.add_mod(original));
        assert!(!profile.add_mod(renamed));
        assert_eq!(profile.mods.len(), 1);
    }
}
