//! The closed set of frame content types and the actions that dispatch on them.
//!
//! A frame's stored `frame_type` tag is parsed into [`FrameKind`] before any
//! routing decision is made, so an unknown tag can never be turned into a
//! redirect target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Frame kind
// ---------------------------------------------------------------------------

/// Content type of a frame. Each kind has its own detail table and its own
/// route base (`/News`, `/Clock`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    News,
    Clock,
    Weather,
    Memo,
    Report,
    Picture,
    Video,
}

impl FrameKind {
    /// Every kind, in the order shown in the frame-type dropdown.
    pub const ALL: [FrameKind; 7] = [
        Self::News,
        Self::Clock,
        Self::Weather,
        Self::Memo,
        Self::Report,
        Self::Picture,
        Self::Video,
    ];

    /// The tag stored in `frames.frame_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::News => "News",
            Self::Clock => "Clock",
            Self::Weather => "Weather",
            Self::Memo => "Memo",
            Self::Report => "Report",
            Self::Picture => "Picture",
            Self::Video => "Video",
        }
    }

    /// Exact, case-sensitive match against the known tags.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Route base of the controller that owns this kind.
    pub fn route_base(self) -> &'static str {
        match self {
            Self::News => "/News",
            Self::Clock => "/Clock",
            Self::Weather => "/Weather",
            Self::Memo => "/Memo",
            Self::Report => "/Report",
            Self::Picture => "/Picture",
            Self::Video => "/Video",
        }
    }

    /// Path of `action` on this kind's controller for frame `id`.
    pub fn action_path(self, action: FrameAction, id: DbId) -> String {
        format!("{}/{}/{id}", self.route_base(), action.as_str())
    }

    /// Path of this kind's create endpoint for the given panel and wizard token.
    pub fn create_path(self, panel_id: DbId, token: Option<uuid::Uuid>) -> String {
        match token {
            Some(token) => format!(
                "{}/Create?panelId={panel_id}&wizard={token}",
                self.route_base()
            ),
            None => format!("{}/Create?panelId={panel_id}", self.route_base()),
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "Unknown frame type '{s}'. Must be one of: {}",
                Self::ALL.map(FrameKind::as_str).join(", ")
            ))
        })
    }
}

impl TryFrom<String> for FrameKind {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Dispatched actions
// ---------------------------------------------------------------------------

/// Actions the frame controller forwards to a kind's own controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    Details,
    Edit,
    Delete,
}

impl FrameAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Details => "Details",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parse_accepts_every_known_tag() {
        for kind in FrameKind::ALL {
            assert_eq!(FrameKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn parse_is_exact_match() {
        assert_eq!(FrameKind::parse("news"), None);
        assert_eq!(FrameKind::parse(" News"), None);
        assert_eq!(FrameKind::parse(""), None);
    }

    #[test]
    fn from_str_reports_allowed_values() {
        let err = "Banner".parse::<FrameKind>().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("News, Clock, Weather"));
    }

    #[test]
    fn action_path_targets_kind_controller() {
        assert_eq!(
            FrameKind::Weather.action_path(FrameAction::Details, 12),
            "/Weather/Details/12"
        );
        assert_eq!(
            FrameKind::Video.action_path(FrameAction::Delete, 3),
            "/Video/Delete/3"
        );
    }

    #[test]
    fn create_path_carries_panel_and_token() {
        let token = uuid::Uuid::nil();
        assert_eq!(
            FrameKind::Memo.create_path(4, Some(token)),
            format!("/Memo/Create?panelId=4&wizard={token}")
        );
        assert_eq!(FrameKind::Clock.create_path(9, None), "/Clock/Create?panelId=9");
    }

    #[test]
    fn serde_uses_stored_tag() {
        let json = serde_json::to_string(&FrameKind::Picture).unwrap();
        assert_eq!(json, "\"Picture\"");
        let kind: FrameKind = serde_json::from_str("\"Report\"").unwrap();
        assert_eq!(kind, FrameKind::Report);
    }
}
