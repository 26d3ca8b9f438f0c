//! Dropdown option lists for the frame views.
//!
//! Each list marks the entry matching the current selection so a client can
//! render a `<select>` that reflects the active filter or wizard state.

use serde::Serialize;
use signage_core::frame_kind::FrameKind;
use signage_core::types::DbId;
use signage_db::models::option::IdLabel;
use signage_db::repositories::{CanvasRepo, LocationRepo, PanelRepo};
use sqlx::PgPool;

/// One `<option>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectItem {
    pub value: String,
    pub text: String,
    pub selected: bool,
}

/// An ordered list of options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectList {
    pub items: Vec<SelectItem>,
}

impl SelectList {
    /// Build from `(id, label)` rows, marking `selected` if it is a real id.
    pub fn from_options(options: Vec<IdLabel>, selected: DbId) -> Self {
        let items = options
            .into_iter()
            .map(|o| SelectItem {
                value: o.id.to_string(),
                text: o.label,
                selected: selected > 0 && o.id == selected,
            })
            .collect();
        Self { items }
    }

    /// The frame kinds in declaration order.
    pub fn frame_types(selected: Option<FrameKind>) -> Self {
        let items = FrameKind::ALL
            .into_iter()
            .map(|kind| SelectItem {
                value: kind.as_str().to_string(),
                text: kind.as_str().to_string(),
                selected: selected == Some(kind),
            })
            .collect();
        Self { items }
    }

    pub fn selected(&self) -> Option<&SelectItem> {
        self.items.iter().find(|item| item.selected)
    }
}

/// All canvases, ordered by name.
pub async fn canvases(pool: &PgPool, selected: DbId) -> Result<SelectList, sqlx::Error> {
    let options = CanvasRepo::options(pool).await?;
    Ok(SelectList::from_options(options, selected))
}

/// Panels of `canvas_id` labelled by panel name, or every panel labelled
/// `"<canvas> : <panel>"` when no canvas is chosen.
pub async fn panels(pool: &PgPool, selected: DbId, canvas_id: DbId) -> Result<SelectList, sqlx::Error> {
    let options = if canvas_id > 0 {
        PanelRepo::options_for_canvas(pool, canvas_id).await?
    } else {
        PanelRepo::options_all(pool).await?
    };
    Ok(SelectList::from_options(options, selected))
}

/// Locations not yet attached to `frame_id`, labelled `"<level> : <location>"`.
pub async fn unattached_locations(pool: &PgPool, frame_id: DbId) -> Result<SelectList, sqlx::Error> {
    let options = LocationRepo::unattached_options(pool, frame_id).await?;
    Ok(SelectList::from_options(options, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: DbId, label: &str) -> IdLabel {
        IdLabel {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn marks_selected_option() {
        let list = SelectList::from_options(vec![option(1, "A"), option(2, "B")], 2);
        assert_eq!(list.selected().map(|i| i.value.as_str()), Some("2"));
        assert_eq!(list.items.iter().filter(|i| i.selected).count(), 1);
    }

    #[test]
    fn zero_selects_nothing() {
        let list = SelectList::from_options(vec![option(1, "A")], 0);
        assert!(list.selected().is_none());
    }

    #[test]
    fn frame_types_follow_kind_order() {
        let list = SelectList::frame_types(Some(FrameKind::Weather));
        let values: Vec<_> = list.items.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(
            values,
            ["News", "Clock", "Weather", "Memo", "Report", "Picture", "Video"]
        );
        assert_eq!(list.selected().map(|i| i.text.as_str()), Some("Weather"));
    }
}
