//! Provides the [EventScripts](EventScripts) struct which contains a server's
//! script hook expressions.

use serde::{Deserialize, Serialize};

/// Contains the script expressions the server evaluates on its events. Every
/// hook is written to the config file, empty or not.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
pub struct EventScripts {
    /// Corresponds to the `doubleIdDetected` hook.
    pub double_id_detected: String,
    /// Corresponds to the `onUserConnected` hook.
    pub on_user_connected: String,
    /// Corresponds to the `onUserDisconnected` hook.
    pub on_user_disconnected: String,
    /// Corresponds to the `onHackedData` hook.
    pub on_hacked_data: String,
    /// Corresponds to the `onDifferentData` hook.
    pub on_different_data: String,
    /// Corresponds to the `onUnsignedData` hook.
    pub on_unsigned_data: String,
    /// Corresponds to the `regularCheck` hook.
    pub regular_check: String,
}
