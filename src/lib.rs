//! A configuration and launch tool for Arma dedicated servers.
//!
//! Profiles bundle every setting a server instance needs. A profile renders
//! into the server's native config file formats and a startup parameter
//! string; the tool writes those files, exports them and launches the server
//! executable.

#![warn(clippy::if_not_else)]
#![warn(clippy::needless_pass_by_value)]

pub mod config;
pub mod error;
pub mod files;
pub mod log;
pub mod opts;
pub mod profile;
pub mod render;
pub mod util;
