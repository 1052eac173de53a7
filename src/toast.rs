//! Toast Notifications
//!
//! Transient messages shown after a request completes.

/// Toast colour variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Bootstrap background class
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "text-bg-success",
            ToastKind::Error => "text-bg-danger",
            ToastKind::Info => "text-bg-primary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Info }
    }
}

/// The toast on screen and the sequence number it was shown under.
///
/// Every `show` bumps the number, so a countdown started for one toast
/// never hides a later one, even when the later one has the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    seq: u64,
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Sequence number of the visible toast
    pub fn visible_seq(&self) -> Option<u64> {
        self.current.as_ref().map(|_| self.seq)
    }

    pub fn show(&mut self, toast: Toast) -> u64 {
        self.seq += 1;
        self.current = Some(toast);
        self.seq
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Whether the toast shown under `seq` is still visible
    pub fn is_showing(&self, seq: u64) -> bool {
        self.visible_seq() == Some(seq)
    }
}
