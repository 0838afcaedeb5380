//! Provides the builder for the server's startup parameters.

use crate::profile::{Profile, BASIC_CONFIG_FILE_NAME, CONFIG_FILE_NAME};
use std::{collections::HashSet, path::Path};

/// The separator between mod paths inside the `-mod` parameter.
const MOD_SEPARATOR: &str = ";";

/// The parameter selecting the beta executable branch, as documented for the
/// Operation Arrowhead beta patches.
const BETA_PARAMETER: &str = "-beta=Expansion\\beta;Expansion\\beta\\Expansion";

/// The parameters whose values are paths and get quoted in the copy/paste
/// string.
const QUOTED_PARAMETERS: [&str; 6] = ["-config=", "-cfg=", "-profiles=", "-pid=", "-ranking=", "-mod="];

/// Builds the parameters the server executable is launched with, one argument
/// per element, unquoted. The flag vocabulary belongs to the server
/// executable and is fixed.
///
/// Checked mods are passed in list order inside a single `-mod` parameter; a
/// mod that appears twice with the same source and path is passed once.
pub fn startup_parameter_list<P>(profile: &Profile, data_dir: P) -> Vec<String>
where
    P: AsRef<Path>,
{
    let profile_dir = profile.directory(&data_dir);
    let mut parameters = Vec::new();

    if profile.launch.beta {
        parameters.push(String::from(BETA_PARAMETER));
    }

    if profile.launch.hyperthreading {
        parameters.push(String::from("-enableHT"));
    }

    if profile.host.net_log {
        parameters.push(String::from("-netlog"));
    }

    parameters.push(format!("-port={}", profile.host.port));
    parameters.push(format!("-config={}", profile_dir.join(CONFIG_FILE_NAME).display()));
    parameters.push(format!("-cfg={}", profile_dir.join(BASIC_CONFIG_FILE_NAME).display()));
    parameters.push(format!("-profiles={}", profile_dir.display()));
    parameters.push(format!("-name={}", profile.name()));
    parameters.push(format!("-pid={}", profile_dir.join(&profile.host.pid_file).display()));
    parameters.push(format!(
        "-ranking={}",
        profile_dir.join(&profile.host.ranking_file).display()
    ));

    if let Some(mods) = build_mod_parameter(profile) {
        parameters.push(mods);
    }

    for extra in profile.launch.extra_parameters.split_whitespace() {
        parameters.push(extra.to_string());
    }

    parameters
}

/// Builds the single copy/paste parameter string, with the path-valued
/// parameters quoted the way the server's documentation shows them.
pub fn build_startup_parameters<P>(profile: &Profile, data_dir: P) -> String
where
    P: AsRef<Path>,
{
    startup_parameter_list(profile, data_dir)
        .into_iter()
        .map(|parameter| {
            if QUOTED_PARAMETERS.iter().any(|prefix| parameter.starts_with(prefix)) {
                format!("\"{}\"", parameter)
            } else {
                parameter
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Builds the `-mod` parameter from the checked mods, or `None` when no mods
/// are checked.
fn build_mod_parameter(profile: &Profile) -> Option<String> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for checked_mod in profile.checked_mods() {
        if seen.insert((checked_mod.source, checked_mod.path.as_str())) {
            paths.push(checked_mod.path.as_str());
        }
    }

    if paths.is_empty() {
        None
    } else {
        Some(format!("-mod={}", paths.join(MOD_SEPARATOR)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Mod, ModSource};

    fn test_mod(name: &str, path: &str, source: ModSource, checked: bool) -> Mod {
        Mod {
            name: name.to_string(),
            path: path.to_string(),
            checked,
            source,
        }
    }

    fn test_profile() -> Profile {
        Profile::new("params").unwrap()
    }

    #[test]
    fn standard_parameters_in_order() {
        let params = build_startup_parameters(&test_profile(), "/data");

        assert!(params.starts_with("-port=2302"));
        assert!(params.contains("\"-config=/data/params/TADST_config.cfg\""));
        assert!(params.contains("\"-cfg=/data/params/TADST_basic.cfg\""));
        assert!(params.contains("\"-profiles=/data/params\""));
        assert!(params.contains("-name=params"));

        let config = params.find("-config").unwrap();
        let cfg = params.find("-cfg=").unwrap();
        let profiles = params.find("-profiles").unwrap();
        assert!(config < cfg && cfg < profiles);
    }

    #[test]
    fn toggle_flags_precede_port() {
        let mut profile = test_profile();
        profile.launch.hyperthreading = true;
        profile.host.net_log = true;

        let params = startup_parameter_list(&profile, "/data");
        let ht = params.iter().position(|p| p == "-enableHT").unwrap();
        let netlog = params.iter().position(|p| p == "-netlog").unwrap();
        let port = params.iter().position(|p| p == "-port=2302").unwrap();
        assert!(ht < port && netlog < port);
    }

    #[test]
    fn beta_branch_parameter() {
        let mut profile = test_profile();
        profile.launch.beta = true;

        let params = build_startup_parameters(&profile, "/data");
        assert!(params.starts_with(BETA_PARAMETER));
    }

    #[test]
    fn duplicate_mods_are_passed_once() {
        let mut profile = test_profile();
        profile.mods = vec![
            test_mod("ACE", "mods/@ace", ModSource::Steam, true),
            test_mod("CBA", "mods/@cba", ModSource::Steam, true),
            test_mod("ACE again", "mods/@ace", ModSource::Steam, true),
        ];

        let params = build_startup_parameters(&profile, "/data");
        assert!(params.contains("\"-mod=mods/@ace;mods/@cba\""));
        assert_eq!(params.matches("mods/@ace").count(), 1);
    }

    #[test]
    fn unchecked_mods_are_excluded() {
        let mut profile = test_profile();
        profile.mods = vec![
            test_mod("ACE", "mods/@ace", ModSource::Steam, true),
            test_mod("CBA", "mods/@cba", ModSource::Steam, false),
        ];

        let params = build_startup_parameters(&profile, "/data");
        assert!(params.contains("\"-mod=mods/@ace\""));
        assert!(!params.contains("@cba"));
    }

    #[test]
    fn no_checked_mods_no_mod_parameter() {
        let mut profile = test_profile();
        profile.mods = vec![test_mod("ACE", "mods/@ace", ModSource::Steam, false)];

        let params = build_startup_parameters(&profile, "/data");
        assert!(!params.contains("-mod="));
    }

    #[test]
    fn same_path_different_source_is_kept() {
        let mut profile = test_profile();
        profile.mods = vec![
            test_mod("ACE", "mods/@ace", ModSource::Steam, true),
            test_mod("ACE", "mods/@ace", ModSource::Custom, true),
        ];

        let params = build_startup_parameters(&profile, "/data");
        assert!(params.contains("\"-mod=mods/@ace;mods/@ace\""));
    }

    #[test]
    fn extra_parameters_come_last() {
        let mut profile = test_profile();
        profile.launch.extra_parameters = String::from("-world=empty -noPause");
        profile.mods = vec![test_mod("ACE", "mods/@ace", ModSource::Steam, true)];

        let params = build_startup_parameters(&profile, "/data");
        assert!(params.ends_with("-world=empty -noPause"));
    }
}
