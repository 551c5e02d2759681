//! System clipboard access and the transient "copied" indicator.
//!
//! Copying goes through `arboard` (NSPasteboard on macOS, X11/Wayland on
//! Linux). The indicator state lives in [`CopyFeedback`]: each copy arms the
//! flag and bumps a generation counter, and only a reset carrying the current
//! generation clears it. The generation is the cancellation handle, so a
//! timer armed by an earlier copy expires into a no-op instead of clearing
//! the flag mid-window.

use thiserror::Error;

/// Errors that can occur when writing to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard access failed: {0}")]
    Access(String),
}

/// Write text to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::Access(e.to_string()))
}

/// Transient "copied" indicator with generation-tagged reset timers.
///
/// At most one reset is live at a time: arming invalidates every previously
/// scheduled reset by advancing the generation.
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark as copied and return the generation the caller should attach to
    /// the reset timer it schedules.
    pub fn arm(&mut self) -> u64 {
        self.copied = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Apply a reset timer expiry. Returns `true` if the flag was cleared;
    /// an expiry from a superseded timer is discarded.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.copied {
            self.copied = false;
            true
        } else {
            false
        }
    }

    /// Whether the "copied" indicator is currently showing.
    pub fn is_copied(&self) -> bool {
        self.copied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_cleared() {
        let feedback = CopyFeedback::new();
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_arm_then_expire() {
        let mut feedback = CopyFeedback::new();
        let generation = feedback.arm();
        assert!(feedback.is_copied());
        assert!(feedback.expire(generation));
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_rearm_discards_stale_timer() {
        // Two copies in quick succession: the first timer's expiry must not
        // clear the flag while the second window is still open.
        let mut feedback = CopyFeedback::new();
        let first = feedback.arm();
        let second = feedback.arm();
        assert!(feedback.is_copied());

        assert!(!feedback.expire(first));
        assert!(feedback.is_copied());

        assert!(feedback.expire(second));
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_expire_after_clear_is_noop() {
        let mut feedback = CopyFeedback::new();
        let generation = feedback.arm();
        assert!(feedback.expire(generation));
        assert!(!feedback.expire(generation));
        assert!(!feedback.is_copied());
    }
}
