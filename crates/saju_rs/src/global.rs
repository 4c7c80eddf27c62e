//! Process-wide engine.
//!
//! `init` installs a configured engine once. Convenience calls made before
//! `init` install the default engine, after which `init` fails.

use std::sync::OnceLock;

use crate::engine::{EngineConfig, SajuEngine};
use crate::error::SajuError;

static ENGINE: OnceLock<SajuEngine> = OnceLock::new();

/// Install the global engine.
pub fn init(config: EngineConfig) -> Result<(), SajuError> {
    ENGINE
        .set(SajuEngine::new(config))
        .map_err(|_| SajuError::AlreadyInitialized)
}

/// Whether a global engine has been installed.
pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

/// The global engine, installing the default one if needed.
pub fn engine() -> &'static SajuEngine {
    ENGINE.get_or_init(SajuEngine::default)
}
