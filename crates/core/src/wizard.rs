//! Frame creation wizard: step resolution and the short-lived selector store.
//!
//! The wizard walks `SelectCanvas -> SelectPanel -> SelectFrameType ->
//! Create(kind)`. Any step can be entered directly; [`next_step`] decides
//! which step still needs input. Once the panel and kind are known the
//! selection is parked in a [`WizardStore`] under a fresh token and handed to
//! the kind's create endpoint, which takes it exactly once.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::frame_kind::FrameKind;
use crate::types::DbId;

/// Default lifetime of a parked selector.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The step a wizard request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectCanvas,
    SelectPanel { canvas_id: DbId },
    SelectFrameType { panel_id: DbId },
    Create { panel_id: DbId, kind: FrameKind },
}

impl WizardStep {
    /// URL of the endpoint that serves this step.
    pub fn path(self, token: Option<Uuid>) -> String {
        match self {
            Self::SelectCanvas => "/Frame/ForCanvas".to_string(),
            Self::SelectPanel { canvas_id } => format!("/Frame/ForPanel?canvasId={canvas_id}"),
            Self::SelectFrameType { panel_id } => {
                format!("/Frame/ForFrameType?panelId={panel_id}")
            }
            Self::Create { panel_id, kind } => kind.create_path(panel_id, token),
        }
    }
}

/// Resolve the step for the given selections. Ids of `0` or below mean "not
/// chosen"; a blank or unknown frame type counts as not chosen.
pub fn next_step(canvas_id: DbId, panel_id: DbId, frame_type: &str) -> WizardStep {
    if panel_id <= 0 {
        if canvas_id <= 0 {
            return WizardStep::SelectCanvas;
        }
        return WizardStep::SelectPanel { canvas_id };
    }

    match FrameKind::parse(frame_type.trim()) {
        Some(kind) => WizardStep::Create { panel_id, kind },
        None => WizardStep::SelectFrameType { panel_id },
    }
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// Wizard state carried between steps: the chosen panel (with its canvas for
/// display) and, once chosen, the frame kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSelector {
    pub canvas_id: DbId,
    pub canvas_name: String,
    pub panel_id: DbId,
    pub panel_name: String,
    pub frame_type: Option<FrameKind>,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

struct Entry {
    selector: FrameSelector,
    expires_at: Instant,
}

/// Token-keyed, read-once store for wizard selectors.
///
/// Entries expire after the configured TTL. Expired entries are never
/// returned and are dropped whenever a new entry is stored.
pub struct WizardStore {
    ttl: Duration,
    entries: Mutex<HashMap<Uuid, Entry>>,
}

impl WizardStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Park a selector and return the token that retrieves it.
    pub fn put(&self, selector: FrameSelector) -> Uuid {
        self.put_at(selector, Instant::now())
    }

    /// Remove and return the selector for `token`, if it is still live.
    pub fn take(&self, token: Uuid) -> Option<FrameSelector> {
        self.take_at(token, Instant::now())
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.lock().values().filter(|e| e.expires_at > now).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn put_at(&self, selector: FrameSelector, now: Instant) -> Uuid {
        let token = Uuid::new_v4();
        let mut entries = self.lock();
        entries.retain(|_, e| e.expires_at > now);
        entries.insert(
            token,
            Entry {
                selector,
                expires_at: now + self.ttl,
            },
        );
        token
    }

    fn take_at(&self, token: Uuid, now: Instant) -> Option<FrameSelector> {
        let entry = self.lock().remove(&token)?;
        (entry.expires_at > now).then_some(entry.selector)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for WizardStore {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
