use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// On/off switch consulted by the rewriters at the time of each call.
pub trait Capability {
    fn is_enabled(&self) -> bool;
}

impl Capability for bool {
    fn is_enabled(&self) -> bool {
        *self
    }
}

impl Capability for AtomicBool {
    fn is_enabled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: Capability + ?Sized> Capability for &T {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

impl<T: Capability + ?Sized> Capability for Arc<T> {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Shared toggle: clones observe the same flag, so a settings surface can
/// flip it while exchanges are in flight.
#[derive(Debug, Clone)]
pub struct CapabilityToggle {
    enabled: Arc<AtomicBool>,
}

impl CapabilityToggle {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn enable(&self) {
        self.set(true);
    }

    pub fn disable(&self) {
        self.set(false);
    }

    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }
}

impl Default for CapabilityToggle {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Capability for CapabilityToggle {
    fn is_enabled(&self) -> bool {
        self.enabled.is_enabled()
    }
}

#[cfg(test)]
#[path = "capability_test.rs"]
mod capability_test;
