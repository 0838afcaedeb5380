//! Provides the [ServerFiles](ServerFiles) orchestrator that writes a
//! profile's rendered config files to disk, exports them and launches the
//! server executable.

use crate::{
    error::LaunchError,
    profile::{Profile, BASIC_CONFIG_FILE_NAME, CONFIG_FILE_NAME},
    render::{
        build_startup_parameters, render_basic_config, render_server_config,
        render_server_profile, startup_parameter_list, GameVariant,
    },
};
use glob::glob;
use log::*;
use std::{
    fs,
    path::{Path, PathBuf},
    process::{Child, Command},
};
use strum::IntoEnumIterator;

/// The file name of the exported startup parameter text file.
const PARAMETERS_FILE_NAME: &str = "Startup Parameters.txt";
/// The server's network log file name, written next to the executable.
const NET_LOG_FILE_NAME: &str = "net.log";

/// Writes a profile's rendered files into its directory under a data
/// directory, and launches the server from there.
#[derive(Debug)]
pub struct ServerFiles<'a> {
    /// The profile being rendered.
    profile: &'a Profile,
    /// The data directory the profile's directory lives under.
    data_dir: PathBuf,
}

impl<'a> ServerFiles<'a> {
    /// Returns a new `ServerFiles` for a given profile and data directory.
    pub fn new<P>(profile: &'a Profile, data_dir: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            profile,
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Renders and writes the main config, the basic config and the three
    /// player profile files into the profile's directory, creating the
    /// directories as needed. Fails on the first directory or file that can't
    /// be written; a partial write is no worse than a missing one since the
    /// server only reads these on launch.
    pub fn write_config_files(&self) -> anyhow::Result<()> {
        let profile_dir = self.profile.directory(&self.data_dir);
        fs::create_dir_all(&profile_dir)?;

        let config_file = profile_dir.join(CONFIG_FILE_NAME);
        debug!("Writing {}", config_file.display());
        fs::write(&config_file, render_server_config(self.profile))?;

        let basic_file = profile_dir.join(BASIC_CONFIG_FILE_NAME);
        debug!("Writing {}", basic_file.display());
        fs::write(&basic_file, render_basic_config(self.profile))?;

        let users_dir = self.profile.users_directory(&self.data_dir);
        fs::create_dir_all(&users_dir)?;

        for variant in GameVariant::iter() {
            let profile_file = users_dir.join(variant.profile_file_name(self.profile.name()));
            debug!("Writing {}", profile_file.display());
            fs::write(&profile_file, render_server_profile(self.profile, variant))?;
        }

        Ok(())
    }

    /// Regenerates the config files and copies them into a given target
    /// directory together with a text file holding the startup parameter
    /// string. The export is best-effort: a rendered file that's gone missing
    /// is skipped, not an error.
    pub fn export<P>(&self, target_dir: P) -> anyhow::Result<()>
    where
        P: AsRef<Path>,
    {
        self.write_config_files()?;
        fs::create_dir_all(&target_dir)?;

        for file in self.rendered_files() {
            if !file.is_file() {
                debug!("Skipping missing export source {}", file.display());
                continue;
            }

            if let Some(file_name) = file.file_name() {
                let target = target_dir.as_ref().join(file_name);
                if let Err(e) = fs::copy(&file, &target) {
                    warn!("Failed to copy {} to export directory: {}", file.display(), e);
                }
            }
        }

        let parameters = format!(
            "Startup parameters for copy/paste:\n\n{}",
            build_startup_parameters(self.profile, &self.data_dir)
        );
        fs::write(target_dir.as_ref().join(PARAMETERS_FILE_NAME), parameters)?;

        info!(
            "Profile {} exported to {}",
            self.profile.name(),
            target_dir.as_ref().display()
        );
        Ok(())
    }

    /// Launches the server executable with the profile's startup parameters,
    /// regenerating the config files first unless `as_is` is set. Fails with
    /// `LaunchError::MissingExecutable` before anything else happens if the
    /// configured executable doesn't exist.
    pub fn launch(&self, as_is: bool) -> anyhow::Result<Child> {
        let exe = &self.profile.launch.server_exe;
        if exe.as_os_str().is_empty() {
            return Err(LaunchError::NoExecutable.into());
        }
        if !exe.is_file() {
            return Err(LaunchError::MissingExecutable(exe.clone()).into());
        }

        if !as_is {
            self.write_config_files()?;
        }

        let working_dir = exe.parent().unwrap_or_else(|| Path::new("."));
        info!("Launching {} from {}", exe.display(), working_dir.display());

        let child = Command::new(exe)
            .current_dir(working_dir)
            .args(startup_parameter_list(self.profile, &self.data_dir))
            .spawn()?;
        Ok(child)
    }

    /// Returns the paths of all files a render produces, whether or not they
    /// currently exist.
    fn rendered_files(&self) -> Vec<PathBuf> {
        let profile_dir = self.profile.directory(&self.data_dir);
        let users_dir = self.profile.users_directory(&self.data_dir);

        let mut files = vec![
            profile_dir.join(CONFIG_FILE_NAME),
            profile_dir.join(BASIC_CONFIG_FILE_NAME),
        ];
        for variant in GameVariant::iter() {
            files.push(users_dir.join(variant.profile_file_name(self.profile.name())));
        }
        files
    }

    /// Returns the name of the server's RPT report file for the configured
    /// executable, or `None` when the executable family isn't recognized or
    /// no report exists yet. Arma 3 writes timestamped reports; the newest
    /// one is returned.
    pub fn rpt_file_name(&self) -> Option<String> {
        let exe = self.profile.launch.server_exe.to_string_lossy().to_lowercase();
        let exe = exe.trim().trim_end_matches(".exe");

        if exe.ends_with("arma2oaserver") {
            Some(String::from("arma2oaserver.RPT"))
        } else if exe.ends_with("arma2server") {
            Some(String::from("arma2server.RPT"))
        } else if exe.ends_with("arma3server") || exe.ends_with("arma3server_x64") {
            self.newest_arma3_rpt()
        } else {
            None
        }
    }

    /// Deletes the server's current RPT report file if there is one.
    pub fn delete_rpt(&self) -> anyhow::Result<()> {
        if let Some(file_name) = self.rpt_file_name() {
            let file = self.profile.directory(&self.data_dir).join(file_name);
            if file.is_file() {
                info!("Deleting report file {}", file.display());
                fs::remove_file(&file)?;
            }
        }
        Ok(())
    }

    /// Deletes the server's network log file next to the executable if there
    /// is one.
    pub fn delete_net_log(&self) -> anyhow::Result<()> {
        if let Some(file) = self.net_log_path() {
            if file.is_file() {
                info!("Deleting network log {}", file.display());
                fs::remove_file(&file)?;
            }
        }
        Ok(())
    }

    /// Renames the server's network log file next to the executable, keeping
    /// it in the same directory.
    pub fn rotate_net_log(&self, new_name: &str) -> anyhow::Result<()> {
        if let Some(file) = self.net_log_path() {
            if file.is_file() {
                let target = file.with_file_name(new_name);
                info!("Rotating network log to {}", target.display());
                fs::rename(&file, &target)?;
            }
        }
        Ok(())
    }

    /// Returns the path of the server's network log file, next to the
    /// configured executable.
    fn net_log_path(&self) -> Option<PathBuf> {
        self.profile
            .launch
            .server_exe
            .parent()
            .map(|dir| dir.join(NET_LOG_FILE_NAME))
    }

    /// Returns the lexicographically newest `*.rpt` file name in the
    /// profile's directory, which for Arma 3's timestamped names is the most
    /// recent one.
    fn newest_arma3_rpt(&self) -> Option<String> {
        let pattern = self.profile.directory(&self.data_dir).join("*.rpt");
        let mut names: Vec<String> = glob(&pattern.to_string_lossy())
            .ok()?
            .filter_map(Result::ok)
            .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().to_string()))
            .collect();

        names.sort();
        names.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn test_profile(name: &str) -> Profile {
        Profile::new(name).unwrap()
    }

    #[test]
    fn write_config_files_creates_all_five() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let profile = test_profile("written");
        ServerFiles::new(&profile, dir.path()).write_config_files()?;

        let profile_dir = dir.path().join("written");
        assert!(profile_dir.join(CONFIG_FILE_NAME).is_file());
        assert!(profile_dir.join(BASIC_CONFIG_FILE_NAME).is_file());

        let users_dir = profile_dir.join("Users").join("written");
        assert!(users_dir.join("written.ArmA2Profile").is_file());
        assert!(users_dir.join("written.ArmA2OAProfile").is_file());
        assert!(users_dir.join("written.Arma3Profile").is_file());
        Ok(())
    }

    #[test]
    fn export_copies_files_and_writes_parameters() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let target = tempfile::tempdir()?;
        let profile = test_profile("exported");

        ServerFiles::new(&profile, dir.path()).export(target.path())?;

        assert!(target.path().join(CONFIG_FILE_NAME).is_file());
        assert!(target.path().join(BASIC_CONFIG_FILE_NAME).is_file());
        assert!(target.path().join("exported.Arma3Profile").is_file());

        let parameters = fs::read_to_string(target.path().join(PARAMETERS_FILE_NAME))?;
        assert!(parameters.contains("-port=2302"));
        assert!(parameters.contains("-name=exported"));
        Ok(())
    }

    #[test]
    fn launch_fails_on_missing_executable() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut profile = test_profile("nolaunch");
        profile.launch.server_exe = dir.path().join("arma3server_x64.exe");

        let result = ServerFiles::new(&profile, dir.path()).launch(false);
        assert!(result.is_err());
        // regeneration must not have happened either
        assert!(!dir.path().join("nolaunch").join(CONFIG_FILE_NAME).exists());
        Ok(())
    }

    #[test]
    fn launch_fails_on_unconfigured_executable() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let profile = test_profile("noexe");

        assert!(ServerFiles::new(&profile, dir.path()).launch(true).is_err());
        Ok(())
    }

    #[test]
    fn rpt_name_per_executable_family() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut profile = test_profile("rpt");

        profile.launch.server_exe = PathBuf::from("C:\\server\\arma2server.exe");
        let files = ServerFiles::new(&profile, dir.path());
        assert_eq!(files.rpt_file_name(), Some(String::from("arma2server.RPT")));

        profile.launch.server_exe = PathBuf::from("C:\\server\\ArmA2OAServer.EXE");
        let files = ServerFiles::new(&profile, dir.path());
        assert_eq!(files.rpt_file_name(), Some(String::from("arma2oaserver.RPT")));

        profile.launch.server_exe = PathBuf::from("something_else.exe");
        let files = ServerFiles::new(&profile, dir.path());
        assert_eq!(files.rpt_file_name(), None);
        Ok(())
    }

    #[test]
    fn newest_arma3_rpt_wins() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut profile = test_profile("a3rpt");
        profile.launch.server_exe = PathBuf::from("arma3server_x64.exe");

        let profile_dir = dir.path().join("a3rpt");
        fs::create_dir_all(&profile_dir)?;
        File::create(profile_dir.join("arma3server_2026-08-01.rpt"))?;
        File::create(profile_dir.join("arma3server_2026-08-20.rpt"))?;

        let files = ServerFiles::new(&profile, dir.path());
        assert_eq!(
            files.rpt_file_name(),
            Some(String::from("arma3server_2026-08-20.rpt"))
        );
        Ok(())
    }

    #[test]
    fn rotate_net_log_renames_in_place() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let exe_dir = tempfile::tempdir()?;
        let mut profile = test_profile("netlog");
        profile.launch.server_exe = exe_dir.path().join("arma3server");
        File::create(exe_dir.path().join(NET_LOG_FILE_NAME))?;

        let files = ServerFiles::new(&profile, dir.path());
        files.rotate_net_log("net_old.log")?;

        assert!(!exe_dir.path().join(NET_LOG_FILE_NAME).exists());
        assert!(exe_dir.path().join("net_old.log").is_file());
        Ok(())
    }
}
