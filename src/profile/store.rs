//! Provides the [Store](Store), the keyed on-disk storage for profiles.

use super::Profile;
use crate::error::ProfileError;
use log::*;
use std::{
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};

/// The extension of a stored profile blob.
const PROFILE_FILE_EXTENSION: &str = "json";

/// Keyed load/save of profiles as JSON blobs in a data directory. Each
/// profile is stored as `<data dir>/<name>.json`; the same directory holds
/// each profile's rendered output directory.
#[derive(Debug)]
pub struct Store {
    /// The data directory profiles are stored in.
    data_dir: PathBuf,
}

impl Store {
    /// Returns a new `Store` over a given data directory, creating the
    /// directory if it doesn't exist.
    pub fn new<P>(data_dir: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let data_dir = data_dir.as_ref().to_path_buf();
        if !data_dir.is_dir() {
            fs::create_dir_all(&data_dir)?;
        }

        Ok(Self { data_dir })
    }

    /// Immutably borrows the store's data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Loads a profile by name. Returns `ProfileError::NoSuchProfile` if
    /// there's no stored blob for the name.
    pub fn load(&self, name: &str) -> anyhow::Result<Profile> {
        let path = self.blob_path(name);
        debug!("Loading profile {} from {}", name, path.display());

        if !path.is_file() {
            return Err(ProfileError::NoSuchProfile(name.to_string()).into());
        }

        let reader = BufReader::new(File::open(&path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Saves a profile under its name, overwriting any previous blob.
    pub fn save(&self, profile: &Profile) -> anyhow::Result<()> {
        let path = self.blob_path(profile.name());
        debug!("Saving profile {} to {}", profile.name(), path.display());

        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, profile)?;
        Ok(())
    }

    /// Returns the names of all stored profiles, sorted.
    pub fn list(&self) -> anyhow::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            let is_blob = path
                .extension()
                .map(|ext| ext == PROFILE_FILE_EXTENSION)
                .unwrap_or(false);
            if is_blob {
                if let Some(stem) = path.file_stem() {
                    names.push(stem.to_string_lossy().to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Deletes a profile's blob and its rendered output directory. Missing
    /// pieces are ignored.
    pub fn delete(&self, name: &str) -> anyhow::Result<()> {
        let dir = self.data_dir.join(name);
        if dir.is_dir() {
            info!("Deleting profile directory {}", dir.display());
            fs::remove_dir_all(&dir)?;
        }

        let blob = self.blob_path(name);
        if blob.is_file() {
            fs::remove_file(&blob)?;
        }

        Ok(())
    }

    /// Returns the path of a profile's stored blob.
    fn blob_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", name, PROFILE_FILE_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_roundtrip() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = Store::new(dir.path())?;

        let mut profile = Profile::new("roundtrip")?;
        profile.host.port = 2402;
        profile.motd.lines.push(String::from("Welcome"));
        store.save(&profile)?;

        let loaded = store.load("roundtrip")?;
        assert_eq!(loaded, profile);
        Ok(())
    }

    #[test]
    fn list_returns_sorted_names() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = Store::new(dir.path())?;

        store.save(&Profile::new("bravo")?)?;
        store.save(&Profile::new("alpha")?)?;

        assert_eq!(store.list()?, vec!["alpha", "bravo"]);
        Ok(())
    }

    #[test]
    fn load_missing_profile_fails() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = Store::new(dir.path())?;

        assert!(store.load("ghost").is_err());
        Ok(())
    }

    #[test]
    fn delete_removes_blob_and_directory() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = Store::new(dir.path())?;

        let profile = Profile::new("doomed")?;
        store.save(&profile)?;
        fs::create_dir(dir.path().join("doomed"))?;

        store.delete("doomed")?;
        assert!(store.list()?.is_empty());
        assert!(!dir.path().join("doomed").exists());
        Ok(())
    }
}
