//! Frame entity model, per-kind detail rows, and DTOs.
//!
//! A frame row carries its kind in `frame_type`; the kind-specific settings
//! live in one detail table per kind. Reads join every detail table at once
//! and keep only the columns belonging to the frame's own kind.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use signage_core::frame_kind::FrameKind;
use signage_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationErrors};

// ---------------------------------------------------------------------------
// Frame row
// ---------------------------------------------------------------------------

/// A row from the `frames` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Frame {
    pub id: DbId,
    pub panel_id: DbId,
    #[sqlx(try_from = "String")]
    pub frame_type: FrameKind,
    pub duration_secs: i32,
    pub sort_order: i32,
    pub begins_on: Option<Timestamp>,
    pub ends_on: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Detail rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewsDetail {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub feed_url: String,
    #[validate(range(min = 1, max = 50, message = "must be between 1 and 50"))]
    pub item_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClockDetail {
    pub show_date: bool,
    pub show_seconds: bool,
    pub is_analog: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WeatherDetail {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,
    #[validate(custom(function = "validate_temperature_unit"))]
    pub temperature_unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MemoDetail {
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ReportDetail {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub server_url: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub report_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PictureDetail {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub image_url: String,
    #[validate(custom(function = "validate_scaling_mode"))]
    pub scaling_mode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct VideoDetail {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub video_url: String,
    pub play_muted: bool,
    pub auto_loop: bool,
}

fn validate_temperature_unit(unit: &str) -> Result<(), validator::ValidationError> {
    match unit {
        "c" | "f" => Ok(()),
        _ => Err(validator::ValidationError::new("temperature_unit")
            .with_message("must be 'c' or 'f'".into())),
    }
}

fn validate_scaling_mode(mode: &str) -> Result<(), validator::ValidationError> {
    match mode {
        "fit" | "fill" | "stretch" => Ok(()),
        _ => Err(validator::ValidationError::new("scaling_mode")
            .with_message("must be 'fit', 'fill' or 'stretch'".into())),
    }
}

/// The detail row of a frame, tagged with its kind.
///
/// Serialized as the detail's fields plus a `frame_type` tag, e.g.
/// `{"frame_type": "Clock", "show_date": true, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "frame_type")]
pub enum FrameDetail {
    News(NewsDetail),
    Clock(ClockDetail),
    Weather(WeatherDetail),
    Memo(MemoDetail),
    Report(ReportDetail),
    Picture(PictureDetail),
    Video(VideoDetail),
}

impl FrameDetail {
    pub fn kind(&self) -> FrameKind {
        match self {
            Self::News(_) => FrameKind::News,
            Self::Clock(_) => FrameKind::Clock,
            Self::Weather(_) => FrameKind::Weather,
            Self::Memo(_) => FrameKind::Memo,
            Self::Report(_) => FrameKind::Report,
            Self::Picture(_) => FrameKind::Picture,
            Self::Video(_) => FrameKind::Video,
        }
    }

    /// Starting values offered on a kind's create form. Matches the column
    /// defaults in the detail tables.
    pub fn default_for(kind: FrameKind) -> Self {
        match kind {
            FrameKind::News => Self::News(NewsDetail {
                feed_url: String::new(),
                item_count: 5,
            }),
            FrameKind::Clock => Self::Clock(ClockDetail {
                show_date: true,
                show_seconds: false,
                is_analog: false,
            }),
            FrameKind::Weather => Self::Weather(WeatherDetail {
                city: String::new(),
                temperature_unit: "c".to_string(),
            }),
            FrameKind::Memo => Self::Memo(MemoDetail {
                subject: None,
                body: String::new(),
            }),
            FrameKind::Report => Self::Report(ReportDetail {
                server_url: String::new(),
                report_path: String::new(),
            }),
            FrameKind::Picture => Self::Picture(PictureDetail {
                image_url: String::new(),
                scaling_mode: "fit".to_string(),
            }),
            FrameKind::Video => Self::Video(VideoDetail {
                video_url: String::new(),
                play_muted: true,
                auto_loop: true,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Self::News(d) => d.validate(),
            Self::Clock(d) => d.validate(),
            Self::Weather(d) => d.validate(),
            Self::Memo(d) => d.validate(),
            Self::Report(d) => d.validate(),
            Self::Picture(d) => d.validate(),
            Self::Video(d) => d.validate(),
        }
    }
}

// ---------------------------------------------------------------------------
// Joined read model
// ---------------------------------------------------------------------------

/// Flat row produced by the eager-loading frame query: the frame, its panel
/// and canvas names, and the columns of every detail table (all `NULL`
/// except those of the frame's own kind).
#[derive(Debug, Clone, FromRow)]
pub struct FrameRow {
    #[sqlx(flatten)]
    pub frame: Frame,
    pub panel_name: String,
    pub canvas_id: DbId,
    pub canvas_name: String,

    pub news_feed_url: Option<String>,
    pub news_item_count: Option<i32>,

    pub clock_show_date: Option<bool>,
    pub clock_show_seconds: Option<bool>,
    pub clock_is_analog: Option<bool>,

    pub weather_city: Option<String>,
    pub weather_temperature_unit: Option<String>,

    pub memo_subject: Option<String>,
    pub memo_body: Option<String>,

    pub report_server_url: Option<String>,
    pub report_report_path: Option<String>,

    pub picture_image_url: Option<String>,
    pub picture_scaling_mode: Option<String>,

    pub video_video_url: Option<String>,
    pub video_play_muted: Option<bool>,
    pub video_auto_loop: Option<bool>,
}

/// A frame with its parent names and its detail row, as shown in lists and
/// on the per-kind details page.
#[derive(Debug, Clone, Serialize)]
pub struct FrameListing {
    #[serde(flatten)]
    pub frame: Frame,
    pub panel_name: String,
    pub canvas_id: DbId,
    pub canvas_name: String,
    pub detail: Option<FrameDetail>,
}

impl From<FrameRow> for FrameListing {
    fn from(row: FrameRow) -> Self {
        let detail = match row.frame.frame_type {
            FrameKind::News => row
                .news_feed_url
                .zip(row.news_item_count)
                .map(|(feed_url, item_count)| {
                    FrameDetail::News(NewsDetail {
                        feed_url,
                        item_count,
                    })
                }),
            FrameKind::Clock => row
                .clock_show_date
                .zip(row.clock_show_seconds)
                .zip(row.clock_is_analog)
                .map(|((show_date, show_seconds), is_analog)| {
                    FrameDetail::Clock(ClockDetail {
                        show_date,
                        show_seconds,
                        is_analog,
                    })
                }),
            FrameKind::Weather => row
                .weather_city
                .zip(row.weather_temperature_unit)
                .map(|(city, temperature_unit)| {
                    FrameDetail::Weather(WeatherDetail {
                        city,
                        temperature_unit,
                    })
                }),
            FrameKind::Memo => row.memo_body.map(|body| {
                FrameDetail::Memo(MemoDetail {
                    subject: row.memo_subject,
                    body,
                })
            }),
            FrameKind::Report => row
                .report_server_url
                .zip(row.report_report_path)
                .map(|(server_url, report_path)| {
                    FrameDetail::Report(ReportDetail {
                        server_url,
                        report_path,
                    })
                }),
            FrameKind::Picture => row
                .picture_image_url
                .zip(row.picture_scaling_mode)
                .map(|(image_url, scaling_mode)| {
                    FrameDetail::Picture(PictureDetail {
                        image_url,
                        scaling_mode,
                    })
                }),
            FrameKind::Video => row
                .video_video_url
                .zip(row.video_play_muted)
                .zip(row.video_auto_loop)
                .map(|((video_url, play_muted), auto_loop)| {
                    FrameDetail::Video(VideoDetail {
                        video_url,
                        play_muted,
                        auto_loop,
                    })
                }),
        };

        Self {
            frame: row.frame,
            panel_name: row.panel_name,
            canvas_id: row.canvas_id,
            canvas_name: row.canvas_name,
            detail,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Filter for the frame list. `None` means "no filter" for each field.
#[derive(Debug, Clone, Default)]
pub struct FrameFilter {
    pub canvas_id: Option<DbId>,
    pub panel_id: Option<DbId>,
    /// Compared verbatim against `frames.frame_type`; an unknown tag matches
    /// nothing.
    pub frame_type: Option<String>,
}

/// DTO for creating a frame together with its detail row.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFrame {
    pub panel_id: DbId,
    /// Defaults to 60 if omitted.
    #[validate(range(min = 1, max = 86400, message = "must be between 1 and 86400"))]
    pub duration_secs: Option<i32>,
    pub sort_order: Option<i32>,
    pub begins_on: Option<Timestamp>,
    pub ends_on: Option<Timestamp>,
    pub detail: FrameDetail,
}

/// DTO for updating a frame. All fields are optional; `detail`, when given,
/// replaces the detail row.
///
/// The schedule bounds distinguish an absent field (keep) from an explicit
/// `null` (clear).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFrame {
    #[validate(range(min = 1, max = 86400, message = "must be between 1 and 86400"))]
    pub duration_secs: Option<i32>,
    pub sort_order: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub begins_on: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "nullable")]
    pub ends_on: Option<Option<Timestamp>>,
    pub detail: Option<FrameDetail>,
}

/// A present field, `null` included, becomes `Some`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
