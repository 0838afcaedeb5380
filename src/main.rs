//! The program's binary entry point.

use armatorio::{
    config::Config,
    files::ServerFiles,
    log::setup_logging,
    opts::{Opts, OptsCommand},
    profile::{Profile, Store},
    render::build_startup_parameters,
};
use log::*;
use std::path::PathBuf;

/// The directory name under the platform data directory profiles are stored in.
const DATA_DIR_NAME: &str = "armatorio";

fn main() -> anyhow::Result<()> {
    let opts = Opts::get();

    let mut config = Config::from_env()?;
    if let Some(level) = opts.log_level {
        config.log.level = level;
    }
    setup_logging(&config)?;
    config.debug_values();

    let data_dir = opts.data_dir.clone().unwrap_or_else(default_data_dir);
    let store = Store::new(&data_dir)?;
    debug!("Using data directory {}", store.data_dir().display());

    match opts.command {
        OptsCommand::New { name } => {
            let profile = Profile::new(&name)?;
            store.save(&profile)?;
            info!("Created profile {}", profile.name());
        }
        OptsCommand::List => {
            for name in store.list()? {
                println!("{}", name);
            }
        }
        OptsCommand::Render { name } => {
            let profile = store.load(&name)?;
            ServerFiles::new(&profile, store.data_dir()).write_config_files()?;
            info!("Rendered config files for {}", profile.name());
        }
        OptsCommand::Params { name } => {
            let profile = store.load(&name)?;
            println!("{}", build_startup_parameters(&profile, store.data_dir()));
        }
        OptsCommand::Export { name, target } => {
            let profile = store.load(&name)?;
            ServerFiles::new(&profile, store.data_dir()).export(&target)?;
        }
        OptsCommand::Launch { name, as_is } => {
            let profile = store.load(&name)?;
            let as_is = as_is || profile.launch.launch_as_is;
            let child = ServerFiles::new(&profile, store.data_dir()).launch(as_is)?;
            info!("Server launched with PID {}", child.id());
        }
        OptsCommand::Delete { name } => {
            store.delete(&name)?;
            info!("Deleted profile {}", name);
        }
    }

    Ok(())
}

/// Returns the default data directory: the platform data directory, falling
/// back to the working directory.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}
