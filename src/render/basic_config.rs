//! Provides the renderer for the basic (network tuning) config file.

use crate::profile::Profile;
use chrono::Local;
use std::fmt::Write;

/// Renders a profile into the basic config file format.
///
/// Alongside the tuning values, the format structurally requires a block of
/// display constants even on a dedicated server. They aren't configurable
/// here; the server merely expects them to exist.
pub fn render_basic_config(profile: &Profile) -> String {
    let tuning = &profile.network.tuning;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "// Basic config file generated {} with Armatorio.\n",
        Local::now().format("%Y-%m-%d %H:%M")
    );

    let _ = writeln!(out, "MaxMsgSend = {};", tuning.max_msg_send);
    let _ = writeln!(out, "MaxSizeGuaranteed = {};", tuning.max_size_guaranteed);
    let _ = writeln!(out, "MaxSizeNonguaranteed = {};", tuning.max_size_nonguaranteed);
    let _ = writeln!(out, "MinBandwidth = {};", tuning.min_bandwidth);
    let _ = writeln!(out, "MaxBandwidth = {};", tuning.max_bandwidth);
    let _ = writeln!(out, "MinErrorToSend = {};", tuning.min_error_to_send);
    let _ = writeln!(out, "MinErrorToSendNear = {};", tuning.min_error_to_send_near);
    let _ = writeln!(out, "MaxCustomFileSize = {};", tuning.max_custom_file_size);
    let _ = writeln!(out, "class sockets{{maxPacketSize = {};}};", tuning.max_packet_size);
    let _ = writeln!(out, "adapter=-1;");
    let _ = writeln!(out, "3D_Performance=1;");
    let _ = writeln!(out, "Resolution_W=0;");
    let _ = writeln!(out, "Resolution_H=0;");
    let _ = writeln!(out, "Resolution_Bpp=32;");
    let _ = writeln!(out, "terrainGrid={};", tuning.terrain_grid);
    let _ = writeln!(out, "viewDistance={};", tuning.view_distance);
    out.push_str("Windowed=0;");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_values_render_in_order() {
        let mut profile = Profile::new("basic test").unwrap();
        profile.network.tuning.max_msg_send = 256;
        profile.network.tuning.min_bandwidth = 262_144;

        let config = render_basic_config(&profile);
        assert!(config.contains("MaxMsgSend = 256;"));
        assert!(config.contains("MinBandwidth = 262144;"));
        assert!(config.contains("class sockets{maxPacketSize = 1400;};"));

        let msg_send = config.find("MaxMsgSend").unwrap();
        let bandwidth = config.find("MinBandwidth").unwrap();
        assert!(msg_send < bandwidth);
    }

    #[test]
    fn decimal_fields_use_invariant_point() {
        let profile = Profile::new("basic test").unwrap();
        let config = render_basic_config(&profile);

        assert!(config.contains("MinErrorToSend = 0.001;"));
        assert!(config.contains("MinErrorToSendNear = 0.01;"));
        assert!(config.contains("terrainGrid=25;"));
    }

    #[test]
    fn fixed_display_constants_are_verbatim() {
        let config = render_basic_config(&Profile::new("basic test").unwrap());

        assert!(config.contains("adapter=-1;"));
        assert!(config.contains("3D_Performance=1;"));
        assert!(config.contains("Resolution_W=0;"));
        assert!(config.contains("Resolution_H=0;"));
        assert!(config.contains("Resolution_Bpp=32;"));
        assert!(config.ends_with("Windowed=0;"));
    }
}
