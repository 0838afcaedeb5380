//! Provides the [Network](Network) struct which contains a server's network,
//! voice and bandwidth tuning settings.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Represents the `timeStampFormat` setting used for RPT log timestamps.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Copy, Clone, Display, EnumString)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// No timestamps.
    #[strum(serialize = "none")]
    None,
    /// Short timestamps (time only).
    #[strum(serialize = "short")]
    Short,
    /// Full timestamps (date and time).
    #[strum(serialize = "full")]
    Full,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        TimestampFormat::None
    }
}

/// Contains a server's headless client allow-listing.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
pub struct HeadlessClients {
    /// Whether headless clients are allowed to connect.
    pub enabled: bool,
    /// Corresponds to the `headlessClients[]` setting. IP addresses in list order.
    pub headless_ips: Vec<String>,
    /// Corresponds to the `localClient[]` setting. IP addresses in list order.
    pub local_ips: Vec<String>,
}

/// Contains the bandwidth tuning values written to the basic config file.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Tuning {
    /// Corresponds to the `MaxMsgSend` setting. Defaults to 128.
    pub max_msg_send: u32,
    /// Corresponds to the `MaxSizeGuaranteed` setting. Defaults to 512.
    pub max_size_guaranteed: u32,
    /// Corresponds to the `MaxSizeNonguaranteed` setting. Defaults to 256.
    pub max_size_nonguaranteed: u32,
    /// Corresponds to the `MinBandwidth` setting, in bits per second. Defaults to 131072.
    pub min_bandwidth: u64,
    /// Corresponds to the `MaxBandwidth` setting, in bits per second.
    pub max_bandwidth: u64,
    /// Corresponds to the `MinErrorToSend` setting. Defaults to 0.001.
    pub min_error_to_send: f64,
    /// Corresponds to the `MinErrorToSendNear` setting. Defaults to 0.01.
    pub min_error_to_send_near: f64,
    /// Corresponds to the `MaxCustomFileSize` setting, in bytes. Defaults to 1310720.
    pub max_custom_file_size: u64,
    /// Corresponds to the `maxPacketSize` setting inside `class sockets`. Defaults to 1400.
    pub max_packet_size: u32,
    /// Corresponds to the `terrainGrid` setting in the basic config. Defaults to 25.
    pub terrain_grid: f64,
    /// Corresponds to the `viewDistance` setting in the basic config. Defaults to 1600.
    pub view_distance: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_msg_send: 128,
            max_size_guaranteed: 512,
            max_size_nonguaranteed: 256,
            min_bandwidth: 131_072,
            max_bandwidth: 10_000_000_000,
            min_error_to_send: 0.001,
            min_error_to_send_near: 0.01,
            max_custom_file_size: 1_310_720,
            max_packet_size: 1400,
            terrain_grid: 25.0,
            view_distance: 1600,
        }
    }
}

/// Contains a server's network, voice and bandwidth tuning settings.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Network {
    /// Corresponds to the `upnp` setting. Only written when set.
    pub upnp: bool,
    /// Corresponds to the `loopback` setting. Only written when set.
    pub loopback: bool,
    /// Corresponds to the `persistent` setting. Defaults to `false`.
    pub persistent_battlefield: bool,
    /// Corresponds to the `disableVoN` setting. Defaults to `false`.
    pub disable_von: bool,
    /// Corresponds to the `vonCodecQuality` setting (1 to 30). Defaults to 10.
    pub von_quality: u8,
    /// Corresponds to the `timeStampFormat` setting.
    pub timestamp_format: TimestampFormat,
    /// Contains the headless client allow-listing.
    pub headless: HeadlessClients,
    /// Contains the bandwidth tuning values for the basic config file.
    pub tuning: Tuning,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            upnp: false,
            loopback: false,
            persistent_battlefield: false,
            disable_von: false,
            von_quality: 10,
            timestamp_format: TimestampFormat::default(),
            headless: HeadlessClients::default(),
            tuning: Tuning::default(),
        }
    }
}
