//! Return-to navigation.
//!
//! List views hand their own URL to follow-up actions as a `returnTo`
//! parameter; the action redirects back there when it finishes. Only local
//! paths are accepted so the parameter cannot be used as an open redirect.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Where actions land when no usable `returnTo` was supplied.
pub const DEFAULT_RETURN_TO: &str = "/Frame";

/// A validated local path to redirect to after an action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReturnTo(String);

impl ReturnTo {
    /// Validate a raw `returnTo` value.
    ///
    /// The value must be a rooted local path made of visible ASCII, must not
    /// be protocol-relative (`//host`), and must not contain backslashes or a
    /// scheme separator.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let invalid = |why: &str| CoreError::Validation(format!("returnTo {why}"));

        if !raw.starts_with('/') {
            return Err(invalid("must be a local path starting with '/'"));
        }
        if raw.starts_with("//") {
            return Err(invalid("must not be protocol-relative"));
        }
        if raw.contains('\\') || raw.contains("://") {
            return Err(invalid("must not contain a scheme or backslash"));
        }
        if !raw.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(invalid("must contain only visible ASCII characters"));
        }
        Ok(Self(raw.to_string()))
    }

    /// Use `raw` when it is a valid local path, otherwise the frame list.
    pub fn or_default(raw: Option<&str>) -> Self {
        raw.and_then(|r| Self::parse(r).ok())
            .unwrap_or_else(Self::default)
    }

    /// URL of the frame list with the given filter applied.
    ///
    /// Zero ids are left out. A non-empty frame type is kept as given, known
    /// or not, so returning shows the same (possibly empty) list.
    pub fn frame_list(canvas_id: DbId, panel_id: DbId, frame_type: &str) -> Self {
        let mut params = Vec::new();
        if canvas_id > 0 {
            params.push(format!("canvasId={canvas_id}"));
        }
        if panel_id > 0 {
            params.push(format!("panelId={panel_id}"));
        }
        if !frame_type.is_empty() {
            params.push(format!("frameType={}", urlencoding::encode(frame_type)));
        }

        if params.is_empty() {
            Self::default()
        } else {
            Self(format!("{DEFAULT_RETURN_TO}?{}", params.join("&")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ReturnTo {
    fn default() -> Self {
        Self(DEFAULT_RETURN_TO.to_string())
    }
}

impl fmt::Display for ReturnTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_local_paths() {
        let rt = ReturnTo::parse("/Frame?panelId=3").unwrap();
        assert_eq!(rt.as_str(), "/Frame?panelId=3");
    }

    #[test]
    fn rejects_external_targets() {
        for raw in [
            "https://evil.example",
            "//evil.example",
            "/\\evil.example",
            "Frame",
            "/redirect?to=http://x",
            "/Frame list",
            "",
        ] {
            assert!(ReturnTo::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn or_default_falls_back_to_frame_list() {
        assert_eq!(ReturnTo::or_default(None).as_str(), DEFAULT_RETURN_TO);
        assert_eq!(
            ReturnTo::or_default(Some("//evil.example")).as_str(),
            DEFAULT_RETURN_TO
        );
        assert_eq!(ReturnTo::or_default(Some("/Canvas")).as_str(), "/Canvas");
    }

    #[test]
    fn frame_list_keeps_only_active_filters() {
        assert_eq!(ReturnTo::frame_list(0, 0, "").as_str(), "/Frame");
        assert_eq!(
            ReturnTo::frame_list(2, 0, "Memo").as_str(),
            "/Frame?canvasId=2&frameType=Memo"
        );
        assert_eq!(ReturnTo::frame_list(0, 7, "").as_str(), "/Frame?panelId=7");
    }

    #[test]
    fn frame_list_keeps_unknown_frame_type_encoded() {
        assert_eq!(
            ReturnTo::frame_list(2, 5, "Unknown").as_str(),
            "/Frame?canvasId=2&panelId=5&frameType=Unknown"
        );
        let rt = ReturnTo::frame_list(0, 0, "Big News&more");
        assert_eq!(rt.as_str(), "/Frame?frameType=Big%20News%26more");
        assert!(ReturnTo::parse(rt.as_str()).is_ok());
    }
}
