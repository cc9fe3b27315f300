//! Transient toast notifications.
//!
//! The page animates a toast in after 100ms, keeps it for 3s, then fades it
//! out over 300ms and removes the element. [`ToastHost`] models that
//! timeline against an explicit `Instant` so tests never sleep. Multiple
//! toasts may stack.

use core::fmt;
use std::time::{Duration, Instant};

/// Delay before a pushed toast becomes visible (slide-in transition).
pub const SLIDE_IN: Duration = Duration::from_millis(100);

/// How long a toast stays visible once shown.
pub const VISIBLE_FOR: Duration = Duration::from_secs(3);

/// Fade-out duration before the toast is removed entirely.
pub const FADE_OUT: Duration = Duration::from_millis(300);

/// Toast severity, mapped to the `toast-*` CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        };
        write!(f, "{s}")
    }
}

/// A transient, non-modal notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    /// Create a toast.
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

struct Entry {
    toast: Toast,
    created: Instant,
}

/// Holds pending toasts and answers which are visible at a given instant.
#[derive(Default)]
pub struct ToastHost {
    entries: Vec<Entry>,
}

impl ToastHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast at `now`.
    pub fn push(&mut self, toast: Toast, now: Instant) {
        self.entries.push(Entry {
            toast,
            created: now,
        });
    }

    /// Toasts currently visible at `now` (past slide-in, not yet fading).
    #[must_use]
    pub fn visible(&self, now: Instant) -> Vec<&Toast> {
        self.entries
            .iter()
            .filter(|entry| {
                let shown = entry.created + SLIDE_IN;
                shown <= now && now < shown + VISIBLE_FOR
            })
            .map(|entry| &entry.toast)
            .collect()
    }

    /// Drop entries whose fade-out has completed by `now`.
    pub fn sweep(&mut self, now: Instant) {
        self.entries
            .retain(|entry| now < entry.created + SLIDE_IN + VISIBLE_FOR + FADE_OUT);
    }

    /// All queued toasts, oldest first, regardless of animation phase.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter().map(|entry| &entry.toast)
    }

    /// Number of queued toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no toasts are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_timeline() {
        let mut host = ToastHost::new();
        let start = Instant::now();
        host.push(Toast::new("Item added to cart", ToastKind::Success), start);

        // Not yet slid in
        assert!(host.visible(start).is_empty());

        // Visible during the display window
        assert_eq!(host.visible(start + SLIDE_IN).len(), 1);
        assert_eq!(
            host.visible(start + SLIDE_IN + VISIBLE_FOR - Duration::from_millis(1)).len(),
            1
        );

        // Hidden once the display window closes
        assert!(host.visible(start + SLIDE_IN + VISIBLE_FOR).is_empty());

        // Removed after the fade-out completes
        host.sweep(start + SLIDE_IN + VISIBLE_FOR + FADE_OUT);
        assert!(host.is_empty());
    }

    #[test]
    fn test_toasts_stack() {
        let mut host = ToastHost::new();
        let start = Instant::now();
        host.push(Toast::new("first", ToastKind::Info), start);
        host.push(Toast::new("second", ToastKind::Error), start + Duration::from_millis(50));

        assert_eq!(host.len(), 2);
        assert_eq!(host.visible(start + Duration::from_millis(200)).len(), 2);

        let kinds: Vec<ToastKind> = host.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Info, ToastKind::Error]);
    }

    #[test]
    fn test_sweep_keeps_active_toasts() {
        let mut host = ToastHost::new();
        let start = Instant::now();
        host.push(Toast::new("still here", ToastKind::Info), start);

        host.sweep(start + SLIDE_IN + VISIBLE_FOR);
        assert_eq!(host.len(), 1);
    }
}
