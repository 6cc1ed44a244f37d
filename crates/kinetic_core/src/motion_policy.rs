//! Reduced-motion policy
//!
//! Mirrors the OS-level "prefers reduced motion" accessibility setting.
//! The host queries its platform once at startup and installs the result
//! here; every interpolator consults the preference on every evaluation
//! and, when reduced, jumps straight to the target value.
//!
//! The preference is modeled as a capability trait rather than a bare
//! flag so tests and embedders can inject their own provider. The
//! process-wide slot exists because the setting genuinely is global
//! state; it lives for the process lifetime and has no teardown.
//!
//! # Initialization
//!
//! ```
//! use kinetic_core::motion_policy::{self, StaticPreference};
//!
//! // In host startup, after querying the platform:
//! motion_policy::init(StaticPreference::new(false));
//! assert!(!motion_policy::reduced_motion());
//! ```
//!
//! Triggers are unaffected by the policy: a modal still opens and
//! closes; only the visual interpolation collapses to its end state.

use std::sync::{Arc, OnceLock};

use tracing::debug;

/// Provider of the host's motion preference.
pub trait MotionPreference: Send + Sync {
    /// Whether visual interpolation should be skipped entirely.
    fn reduced(&self) -> bool;
}

/// A fixed preference value. The common host provider (query the
/// platform once, wrap the answer) and the test double.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticPreference {
    reduced: bool,
}

impl StaticPreference {
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }
}

impl MotionPreference for StaticPreference {
    fn reduced(&self) -> bool {
        self.reduced
    }
}

static PREFERENCE: OnceLock<Arc<dyn MotionPreference>> = OnceLock::new();

/// Install the process-wide preference. First call wins; later calls
/// are ignored.
pub fn init(preference: impl MotionPreference + 'static) {
    init_shared(Arc::new(preference));
}

/// Install an already-shared provider.
pub fn init_shared(preference: Arc<dyn MotionPreference>) {
    let reduced = preference.reduced();
    if PREFERENCE.set(preference).is_ok() {
        debug!(reduced, "motion preference installed");
    }
}

/// Read the process-wide preference. Defaults to full motion when the
/// host never installed a provider.
pub fn reduced_motion() -> bool {
    PREFERENCE.get().map(|p| p.reduced()).unwrap_or(false)
}

/// Snapshot of the installed provider, for schedulers that hold their
/// own handle. Falls back to a full-motion provider.
pub fn shared() -> Arc<dyn MotionPreference> {
    PREFERENCE
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(StaticPreference::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_preference_reports_value() {
        assert!(StaticPreference::new(true).reduced());
        assert!(!StaticPreference::new(false).reduced());
    }

    #[test]
    fn uninitialized_slot_defaults_to_full_motion() {
        // Tests in this binary never call init(), so the global slot is
        // empty here and the accessor must fall back to full motion.
        assert!(!reduced_motion());
        assert!(!shared().reduced());
    }
}
