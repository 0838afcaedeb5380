//! Provides the [Mod](Mod) struct representing one mod in a server's mod
//! list.

use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    hash::{Hash, Hasher},
    io::{BufRead, BufReader},
    path::Path,
};

/// The metadata file inside a mod directory carrying its display name.
const MOD_META_FILE: &str = "meta.cpp";

/// Where a mod was discovered from.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Hash, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum ModSource {
    /// The server's own installation directory.
    GameDir,
    /// The Steam workshop directory.
    Steam,
    /// A user-supplied directory.
    Custom,
}

/// One mod in a server's mod list.
///
/// Mod identity is structural over `(source, path)`: the same directory
/// discovered from the same place is the same mod no matter what display name
/// its metadata carries. The list itself stays ordered; deduplication only
/// matters when the startup parameters are built.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Mod {
    /// The mod's display name, from its metadata file or its directory name.
    pub name: String,
    /// The mod's directory path, as passed to the server's `-mod` parameter.
    pub path: String,
    /// Whether the mod is passed to the server on launch.
    pub checked: bool,
    /// Where the mod was discovered from.
    pub source: ModSource,
}

impl PartialEq for Mod {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.path == other.path
    }
}

impl Eq for Mod {}

impl Hash for Mod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.path.hash(state);
    }
}

impl Mod {
    /// Returns a new unchecked `Mod` for a given directory, resolving its
    /// display name from the directory's metadata.
    pub fn from_directory<P>(path: P, source: ModSource) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            name: Self::name_from_directory(&path),
            path: path.as_ref().to_string_lossy().to_string(),
            checked: false,
            source,
        }
    }

    /// Resolves a mod directory's display name: the `name` entry of its
    /// `meta.cpp` if there is one, the directory name otherwise.
    pub fn name_from_directory<P>(path: P) -> String
    where
        P: AsRef<Path>,
    {
        let fallback = || {
            path.as_ref()
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default()
        };

        let meta = path.as_ref().join(MOD_META_FILE);
        let file = match File::open(&meta) {
            Ok(file) => file,
            Err(_) => return fallback(),
        };

        for line in BufReader::new(file).lines().filter_map(Result::ok) {
            let parts: Vec<&str> = line.split(|c| c == '=' || c == ';').collect();
            if parts.len() >= 2 && parts[0].trim() == "name" {
                return parts[1].trim().trim_matches('"').to_string();
            }
        }

        fallback()
    }

    /// Returns whether a given directory looks like a mod directory: it has
    /// an `addons` subdirectory containing at least one archive.
    pub fn is_mod_directory<P>(path: P) -> bool
    where
        P: AsRef<Path>,
    {
        let addons = path.as_ref().join("addons");
        match std::fs::read_dir(addons) {
            Ok(mut entries) => entries.any(|e| {
                e.map(|e| {
                    e.path()
                        .extension()
                        .map(|ext| ext.to_string_lossy().ends_with("bo"))
                        .unwrap_or(false)
                })
                .unwrap_or(false)
            }),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_mod(name: &str, path: &str, source: ModSource) -> Mod {
        Mod {
            name: name.to_string(),
            path: path.to_string(),
            checked: true,
            source,
        }
    }

    #[test]
    fn identity_ignores_display_name() {
        let a = test_mod("ACE", "mods/@ace", ModSource::Steam);
        let b = test_mod("Advanced Combat Environment", "mods/@ace", ModSource::Steam);
        assert_eq!(a, b);
    }

    #[test]
    fn identity_includes_source() {
        let a = test_mod("ACE", "mods/@ace", ModSource::Steam);
        let b = test_mod("ACE", "mods/@ace", ModSource::Custom);
        assert_ne!(a, b);
    }

    #[test]
    fn name_from_meta_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut meta = File::create(dir.path().join(MOD_META_FILE))?;
        writeln!(meta, "protocol = 1;")?;
        writeln!(meta, "name = \"Cool Mod\";")?;

        assert_eq!(Mod::name_from_directory(dir.path()), "Cool Mod");
        Ok(())
    }

    #[test]
    fn name_falls_back_to_directory() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mod_dir = dir.path().join("@some_mod");
        std::fs::create_dir(&mod_dir)?;

        assert_eq!(Mod::name_from_directory(&mod_dir), "@some_mod");
        Ok(())
    }
}
