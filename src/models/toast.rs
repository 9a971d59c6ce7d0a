use serde::{Deserialize, Serialize};

pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Success,
    Destructive,
}

/// Transient UI notification. `duration_ms == 0` disables auto-expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub duration_ms: u64,
}
