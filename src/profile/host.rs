//! Provides the [Host](Host) struct which contains a server's identity and
//! capacity settings.

use serde::{Deserialize, Serialize};

/// Contains a server's network identity, capacity and log file settings.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Host {
    /// Corresponds to the `hostName` setting. Defaults to `Armatorio server`.
    pub server_name: String,
    /// Corresponds to the `password` setting. Defaults to an empty string.
    pub password: String,
    /// Corresponds to the `passwordAdmin` setting. Defaults to an empty string.
    pub admin_password: String,
    /// Corresponds to the `serverCommandPassword` setting. Defaults to an empty string.
    pub command_password: String,
    /// The port the server listens on. Defaults to 2302.
    pub port: u16,
    /// Corresponds to the `maxPlayers` setting. Defaults to 40.
    pub max_players: u32,
    /// Corresponds to the `logFile` setting. Defaults to `server_console.log`.
    pub console_log_file: String,
    /// The file name passed with the `-ranking` startup parameter.
    pub ranking_file: String,
    /// The file name passed with the `-pid` startup parameter.
    pub pid_file: String,
    /// Whether to pass the `-netlog` startup parameter.
    pub net_log: bool,
}

impl Default for Host {
    fn default() -> Self {
        Self {
            server_name: String::from("Armatorio server"),
            password: String::new(),
            admin_password: String::new(),
            command_password: String::new(),
            port: 2302,
            max_players: 40,
            console_log_file: String::from("server_console.log"),
            ranking_file: String::from("ranking.log"),
            pid_file: String::from("pid.log"),
            net_log: false,
        }
    }
}
