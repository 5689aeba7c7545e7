//! Logging utilities
//!
//! birch logs through the `log` facade and never installs a logger on its own.
//! Applications without one can call [`init`].

pub use log::{debug, error, info, trace, warn};

/// Install an `env_logger` logger
///
/// `RUST_LOG` overrides the default `info` filter. Calling it more than once,
/// or after another logger was installed, is harmless.
pub fn init() {
    let installed = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
    if installed.is_err() {
        log::debug!("Logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        info!("logging initialized twice");
    }
}
