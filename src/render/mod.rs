//! Provides the pure renderers that turn a [Profile](crate::profile::Profile)
//! into the server's native config file formats.
//!
//! Every renderer is a total function over the profile: malformed values
//! degrade to documented fallback strings, never to errors, and nothing here
//! performs I/O. Writing the rendered text to disk is the
//! [files](crate::files) module's job.

mod basic_config;
mod server_config;
mod server_profile;
mod startup;

use strum_macros::{Display, EnumIter, EnumString};

pub use basic_config::render_basic_config;
pub use server_config::render_server_config;
pub use server_profile::render_server_profile;
pub use startup::{build_startup_parameters, startup_parameter_list};

/// The server executable families the tool targets. Each needs its own
/// player profile file with a variant-specific extension.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Display, EnumString, EnumIter)]
pub enum GameVariant {
    /// Arma 2.
    Arma2,
    /// Arma 2: Operation Arrowhead.
    OperationArrowhead,
    /// Arma 3.
    Arma3,
}

impl GameVariant {
    /// Returns the file extension of this variant's player profile file,
    /// including the leading dot.
    pub fn profile_extension(self) -> &'static str {
        match self {
            GameVariant::Arma2 => ".ArmA2Profile",
            GameVariant::OperationArrowhead => ".ArmA2OAProfile",
            GameVariant::Arma3 => ".Arma3Profile",
        }
    }

    /// Returns the player profile file name for a given profile name.
    pub fn profile_file_name(self, profile_name: &str) -> String {
        format!("{}{}", profile_name, self.profile_extension())
    }
}
