//! Provides the renderer for the main server config file.

use crate::profile::{mission_difficulty_name, Profile};
use chrono::Local;
use std::fmt::Write;

/// Renders a profile into the main server config file format.
///
/// The field order and the conditional lines follow the config format the
/// server executable parses; reordering them is safe for the server but
/// breaks diffing exported files against older exports, so the order is kept
/// fixed.
pub fn render_server_config(profile: &Profile) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "// Config file generated {} with Armatorio.\n",
        Local::now().format("%Y-%m-%d %H:%M")
    );

    let _ = writeln!(out, "hostName = \"{}\";", profile.host.server_name);
    let _ = writeln!(out, "password = \"{}\";", profile.host.password);
    let _ = writeln!(out, "passwordAdmin = \"{}\";", profile.host.admin_password);
    let _ = writeln!(out, "serverCommandPassword = \"{}\";", profile.host.command_password);
    let _ = writeln!(out, "logFile = \"{}\";\n", profile.host.console_log_file);

    let _ = writeln!(out, "motd[] = {{");
    out.push_str(&render_motd(profile));
    let _ = writeln!(out, "}};");
    let _ = writeln!(out, "motdInterval = {};\n", profile.motd.interval);

    let _ = writeln!(out, "maxPlayers = {};", profile.host.max_players);
    let _ = writeln!(out, "kickduplicate = {};", profile.rules.kick_duplicates as u8);
    let _ = writeln!(out, "verifySignatures = {};", profile.rules.verify_signatures.as_int());
    let _ = writeln!(out, "allowedFilePatching = {};", profile.rules.allowed_file_patching);
    let _ = writeln!(out, "requiredSecureId = {};", profile.rules.required_secure_id);

    if profile.network.upnp {
        let _ = writeln!(out, "upnp = 1;");
    }

    if profile.network.loopback {
        let _ = writeln!(out, "loopback = true;");
    }

    if let Some(build) = profile.rules.required_build.get() {
        if *build > 0 {
            let _ = writeln!(out, "requiredBuild = {};", build);
        }
    }

    if profile.network.headless.enabled {
        let _ = writeln!(out, "headlessClients[]={{{}}};", profile.network.headless.headless_ips.join(","));
        let _ = writeln!(out, "localClient[]={{{}}};\n", profile.network.headless.local_ips.join(","));
    }

    if !profile.voting.enabled {
        let _ = writeln!(out, "\nallowedVoteCmds[] = {{}};");
    } else {
        out.push('\n');
    }

    let _ = writeln!(out, "voteMissionPlayers = {};", profile.voting.mission_players);
    let _ = writeln!(out, "voteThreshold = {};\n", profile.voting.effective_threshold());

    let _ = writeln!(out, "disableVoN = {};", profile.network.disable_von as u8);
    let _ = writeln!(out, "vonCodecQuality = {};", profile.network.von_quality);
    let _ = writeln!(out, "persistent = {};", profile.network.persistent_battlefield as u8);
    let _ = writeln!(out, "timeStampFormat = \"{}\";", profile.network.timestamp_format);
    let _ = writeln!(out, "BattlEye = {};", profile.rules.battleye as u8);

    if profile.network.headless.enabled {
        let _ = writeln!(out, "battleyeLicense = 1;");
    }

    if let Some(max_ping) = profile.rules.max_ping.get() {
        let _ = writeln!(out, "maxPing = {};", max_ping);
    }

    if let Some(max_desync) = profile.rules.max_desync.get() {
        let _ = writeln!(out, "maxDesync = {};", max_desync);
    }

    if let Some(max_packet_loss) = profile.rules.max_packet_loss.get() {
        let _ = writeln!(out, "maxPacketloss = {};", max_packet_loss);
    }

    if let Some(timeout) = profile.rules.disconnect_timeout.get() {
        let _ = writeln!(out, "disconnectTimeout = {};", timeout);
    }

    if let Some(kick) = profile.rules.kick_clients_on_slow_network.get() {
        let _ = writeln!(out, "kickClientsOnSlowNetwork = {};", kick);
    }

    let _ = writeln!(out, "\ndoubleIdDetected = \"{}\";", profile.events.double_id_detected);
    let _ = writeln!(out, "onUserConnected = \"{}\";", profile.events.on_user_connected);
    let _ = writeln!(out, "onUserDisconnected = \"{}\";", profile.events.on_user_disconnected);
    let _ = writeln!(out, "onHackedData = \"{}\";", profile.events.on_hacked_data);
    let _ = writeln!(out, "onDifferentData = \"{}\";", profile.events.on_different_data);
    let _ = writeln!(out, "onUnsignedData = \"{}\";", profile.events.on_unsigned_data);
    let _ = writeln!(out, "regularCheck = \"{}\";\n", profile.events.regular_check);

    let _ = writeln!(out, "class Missions");
    let _ = writeln!(out, "{{");
    out.push_str(&render_missions(profile));
    out.push_str("};");

    out
}

/// Renders the message of the day lines: quoted, indented, comma-separated
/// except after the last.
fn render_motd(profile: &Profile) -> String {
    let mut motd = String::new();
    let count = profile.motd.lines.len();

    for (i, line) in profile.motd.lines.iter().enumerate() {
        let separator = if i < count - 1 { "," } else { "" };
        let _ = writeln!(motd, "\t\"{}\"{}", line, separator);
    }

    motd
}

/// Renders the mission rotation as numbered `Mission_<n>` classes. The
/// numbering counts checked missions only, so an unchecked mission in the
/// middle of the list doesn't leave a gap.
fn render_missions(profile: &Profile) -> String {
    let mut missions = String::new();

    for (index, mission) in profile.checked_missions().enumerate() {
        let _ = writeln!(missions, "\tclass Mission_{}", index + 1);
        let _ = writeln!(missions, "\t{{");
        let _ = writeln!(missions, "\t\ttemplate = \"{}\";", mission.template());
        let _ = writeln!(
            missions,
            "\t\tdifficulty = \"{}\";",
            mission_difficulty_name(mission.difficulty)
        );
        let _ = writeln!(missions, "\t}};\n");
    }

    missions
}
