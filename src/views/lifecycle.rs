//! Mount/teardown bookkeeping shared by all views.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Common view phases
///
/// ```text
/// Idle -> Loading -> Populated
///                 -> Failed
/// ```
///
/// Every trigger (mount, search, clear) re-enters `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Idle,
    Loading,
    Populated,
    Failed,
}

/// Handle used to tear a view down from outside the task driving it
///
/// Responses that settle after `unmount` are dropped instead of applied.
#[derive(Debug, Clone)]
pub struct Teardown {
    flag: Arc<AtomicBool>,
}

impl Teardown {
    pub fn unmount(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_unmounted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
pub(crate) struct Lifecycle {
    mounted: bool,
    torn_down: Arc<AtomicBool>,
}

impl Lifecycle {
    /// Returns true only on the first call for this view instance
    pub(crate) fn begin_mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        true
    }

    pub(crate) fn teardown(&self) -> Teardown {
        Teardown {
            flag: Arc::clone(&self.torn_down),
        }
    }

    pub(crate) fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }
}
