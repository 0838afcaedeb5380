//! Provides the [Rules](Rules) struct which contains a server's client rule
//! and kick settings.

use crate::util::Toggle;
use serde::{Deserialize, Serialize};

/// Represents the `verifySignatures` setting.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum VerifySignatures {
    /// Signature verification disabled.
    None,
    /// Version 1 signature verification.
    V1,
    /// Version 2 signature verification.
    V2,
}

impl VerifySignatures {
    /// Returns the numeric value the server config format uses for this variant.
    pub fn as_int(self) -> u8 {
        match self {
            VerifySignatures::None => 0,
            VerifySignatures::V1 => 1,
            VerifySignatures::V2 => 2,
        }
    }
}

impl Default for VerifySignatures {
    fn default() -> Self {
        VerifySignatures::V2
    }
}

/// Contains a server's client rule and kick settings.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Rules {
    /// Corresponds to the `kickduplicate` setting. Defaults to `true`.
    pub kick_duplicates: bool,
    /// Corresponds to the `verifySignatures` setting.
    pub verify_signatures: VerifySignatures,
    /// Corresponds to the `allowedFilePatching` setting (0, 1 or 2). Defaults to 0.
    pub allowed_file_patching: u8,
    /// Corresponds to the `requiredSecureId` setting. Defaults to 2.
    pub required_secure_id: u8,
    /// Corresponds to the `BattlEye` setting. Defaults to `true`.
    pub battleye: bool,
    /// Corresponds to the `requiredBuild` setting. Only written when enabled
    /// and the build number is greater than zero.
    pub required_build: Toggle<u32>,
    /// Corresponds to the `maxPing` setting, in milliseconds.
    pub max_ping: Toggle<u32>,
    /// Corresponds to the `maxDesync` setting.
    pub max_desync: Toggle<u32>,
    /// Corresponds to the `maxPacketloss` setting.
    pub max_packet_loss: Toggle<u32>,
    /// Corresponds to the `disconnectTimeout` setting, in seconds.
    pub disconnect_timeout: Toggle<u32>,
    /// Corresponds to the `kickClientsOnSlowNetwork` setting (0 logs, 1 kicks).
    pub kick_clients_on_slow_network: Toggle<u8>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            kick_duplicates: true,
            verify_signatures: VerifySignatures::default(),
            allowed_file_patching: 0,
            required_secure_id: 2,
            battleye: true,
            required_build: Toggle::default(),
            max_ping: Toggle::disabled(200),
            max_desync: Toggle::disabled(150),
            max_packet_loss: Toggle::disabled(50),
            disconnect_timeout: Toggle::disabled(90),
            kick_clients_on_slow_network: Toggle::default(),
        }
    }
}
