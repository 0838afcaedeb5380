//! Provides the [`Opts`](Opts) struct, used to read and access the program's
//! command line arguments.

use crate::util::LogLevel;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::path::PathBuf;
use strum::VariantNames;

/// Stores command line parameters.
#[derive(Debug)]
pub struct Opts {
    /// The data directory profiles are stored in, overriding the default.
    pub data_dir: Option<PathBuf>,
    /// The log level to use, overriding the environment configuration.
    pub log_level: Option<LogLevel>,
    /// The subcommand to run.
    pub command: OptsCommand,
}

/// The program's subcommands.
#[derive(Debug)]
pub enum OptsCommand {
    /// Create a new profile with default settings.
    New {
        /// The new profile's name.
        name: String,
    },
    /// List all stored profiles.
    List,
    /// Render a profile's config files into its directory.
    Render {
        /// The profile to render.
        name: String,
    },
    /// Print a profile's startup parameter string.
    Params {
        /// The profile to build the parameters for.
        name: String,
    },
    /// Render a profile and export its files to a directory.
    Export {
        /// The profile to export.
        name: String,
        /// The directory to export into.
        target: PathBuf,
    },
    /// Launch the server from a profile.
    Launch {
        /// The profile to launch.
        name: String,
        /// Launch with the config files currently on disk instead of
        /// regenerating them first.
        as_is: bool,
    },
    /// Delete a stored profile and its rendered files.
    Delete {
        /// The profile to delete.
        name: String,
    },
}

impl Opts {
    /// Builds a new `clap::App` used to parse a given set of command line parameters.
    fn build_app() -> App<'static, 'static> {
        let profile_arg = || {
            Arg::with_name("profile")
                .value_name("PROFILE")
                .help("The name of the profile")
                .required(true)
        };

        App::new(clap::crate_name!())
            .version(clap::crate_version!())
            .author(clap::crate_authors!())
            .about(clap::crate_description!())
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .arg(
                Arg::with_name("data-dir")
                    .long("data-dir")
                    .value_name("DIR")
                    .help("Sets a custom data directory to store profiles in")
                    .takes_value(true)
                    .global(true),
            )
            .arg(
                Arg::with_name("log-level")
                    .long("log-level")
                    .value_name("LOG LEVEL")
                    .possible_values(LogLevel::VARIANTS)
                    .case_insensitive(true)
                    .takes_value(true)
                    .global(true)
                    .help("Specify the log level to use."),
            )
            .subcommand(
                SubCommand::with_name("new")
                    .about("Creates a new profile with default settings")
                    .arg(profile_arg()),
            )
            .subcommand(SubCommand::with_name("list").about("Lists all stored profiles"))
            .subcommand(
                SubCommand::with_name("render")
                    .about("Renders a profile's config files into its directory")
                    .arg(profile_arg()),
            )
            .subcommand(
                SubCommand::with_name("params")
                    .about("Prints a profile's startup parameter string")
                    .arg(profile_arg()),
            )
            .subcommand(
                SubCommand::with_name("export")
                    .about("Renders a profile and exports its files to a directory")
                    .arg(profile_arg())
                    .arg(
                        Arg::with_name("target")
                            .value_name("DIR")
                            .help("The directory to export into")
                            .required(true),
                    ),
            )
            .subcommand(
                SubCommand::with_name("launch")
                    .about("Launches the server from a profile")
                    .arg(profile_arg())
                    .arg(
                        Arg::with_name("as-is")
                            .long("as-is")
                            .help("Launch with the config files currently on disk without regenerating them"),
                    ),
            )
            .subcommand(
                SubCommand::with_name("delete")
                    .about("Deletes a stored profile and its rendered files")
                    .arg(profile_arg()),
            )
    }

    /// Returns a new `Opts` object from a given set of matched command line parameters.
    fn from_matches(matches: &ArgMatches) -> Self {
        let profile_name = |matches: &ArgMatches| {
            matches
                .value_of("profile")
                .expect("profile argument has no value")
                .to_string()
        };

        // global args match on whichever side of the subcommand they're given
        let global_value = |key: &str| {
            matches.value_of(key).or_else(|| {
                matches
                    .subcommand()
                    .1
                    .and_then(|sub| sub.value_of(key))
            })
        };

        let command = match matches.subcommand() {
            ("new", Some(sub)) => OptsCommand::New {
                name: profile_name(sub),
            },
            ("list", _) => OptsCommand::List,
            ("render", Some(sub)) => OptsCommand::Render {
                name: profile_name(sub),
            },
            ("params", Some(sub)) => OptsCommand::Params {
                name: profile_name(sub),
            },
            ("export", Some(sub)) => OptsCommand::Export {
                name: profile_name(sub),
                target: sub
                    .value_of_os("target")
                    .expect("target argument has no value")
                    .into(),
            },
            ("launch", Some(sub)) => OptsCommand::Launch {
                name: profile_name(sub),
                as_is: sub.is_present("as-is"),
            },
            ("delete", Some(sub)) => OptsCommand::Delete {
                name: profile_name(sub),
            },
            _ => unreachable!("clap enforces a subcommand"),
        };

        Opts {
            data_dir: global_value("data-dir").map(PathBuf::from),
            log_level: global_value("log-level")
                .map(|s| s.parse().expect("failed to parse value as log level")),
            command,
        }
    }

    /// Returns a new `Opts` object built from the program's command line parameters.
    pub fn get() -> Opts {
        Opts::from_matches(&Opts::build_app().get_matches())
    }

    #[allow(dead_code)]
    /// Returns a new `Opts` object built from custom command line parameters.
    pub fn custom_args(args: &[&str]) -> Opts {
        let mut full_args = vec!["armatorio"];
        full_args.extend_from_slice(args);
        Opts::from_matches(&Opts::build_app().get_matches_from(&full_args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_subcommand_with_as_is() {
        let opts = Opts::custom_args(&["launch", "my server", "--as-is"]);
        match opts.command {
            OptsCommand::Launch { name, as_is } => {
                assert_eq!(name, "my server");
                assert!(as_is);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn export_subcommand_takes_target() {
        let opts = Opts::custom_args(&["export", "my server", "/tmp/out"]);
        match opts.command {
            OptsCommand::Export { name, target } => {
                assert_eq!(name, "my server");
                assert_eq!(target, PathBuf::from("/tmp/out"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_overrides_are_parsed() {
        let opts = Opts::custom_args(&["list", "--data-dir", "/tmp/data", "--log-level", "debug"]);
        assert_eq!(opts.data_dir, Some(PathBuf::from("/tmp/data")));
        assert_eq!(opts.log_level, Some(LogLevel::Debug));
    }
}
