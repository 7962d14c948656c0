//! Ambient presentation context
//!
//! Holds the process-wide theme that figure builders capture when they are
//! built. Builders keep an `Arc` to the theme they saw, so a later
//! `set_theme` never changes an existing figure.

use std::sync::{Arc, RwLock};

use crate::plot::OptionMap;

static THEME: RwLock<Option<Arc<OptionMap>>> = RwLock::new(None);

/// Install `theme` as the ambient theme
pub fn set_theme(theme: OptionMap) {
    let mut slot = THEME.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    tracing::debug!(options = theme.len(), "Setting ambient theme");
    *slot = Some(Arc::new(theme));
}

pub fn clear_theme() {
    let mut slot = THEME.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = None;
}

/// The ambient theme, if one is installed
pub fn theme() -> Option<Arc<OptionMap>> {
    THEME
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Serializes tests that touch the ambient theme
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
