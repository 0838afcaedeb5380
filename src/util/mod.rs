//! Provides smaller utilities and common types used all over the program.

mod log_level;
mod toggle;

pub use log_level::LogLevel;
pub use toggle::Toggle;

/// Returns all environment variables that begin with a given prefix, one per
/// line in the form `KEY=value`.
pub fn dump_env(prefix: &str) -> String {
    dump_env_lines(prefix).join("\n")
}

/// Returns all environment variables that begin with a given prefix as a
/// vector of strings in the form `KEY=value`.
pub fn dump_env_lines(prefix: &str) -> Vec<String> {
    std::env::vars()
        .filter_map(|(k, v)| {
            if k.starts_with(prefix) {
                Some(format!("{}={}", k, v))
            } else {
                None
            }
        })
        .collect::<Vec<String>>()
}
