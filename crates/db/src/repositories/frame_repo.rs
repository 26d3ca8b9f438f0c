//! Repository for the `frames` table, its per-kind detail tables, and the
//! `frame_locations` junction.

use sqlx::{PgConnection, PgPool};
use signage_core::frame_kind::FrameKind;
use signage_core::types::DbId;

use crate::models::frame::{
    CreateFrame, Frame, FrameDetail, FrameFilter, FrameListing, FrameRow, UpdateFrame,
};

/// Column list for the `frames` table.
const COLUMNS: &str = "id, panel_id, frame_type, duration_secs, sort_order, begins_on, ends_on, \
    created_at, updated_at";

/// Eager-loading select: frame, panel, canvas, and every detail table.
const LISTING_SELECT: &str = "SELECT \
        f.id, f.panel_id, f.frame_type, f.duration_secs, f.sort_order, f.begins_on, f.ends_on, \
        f.created_at, f.updated_at, \
        p.name AS panel_name, p.canvas_id, c.name AS canvas_name, \
        n.feed_url AS news_feed_url, n.item_count AS news_item_count, \
        ck.show_date AS clock_show_date, ck.show_seconds AS clock_show_seconds, \
        ck.is_analog AS clock_is_analog, \
        w.city AS weather_city, w.temperature_unit AS weather_temperature_unit, \
        m.subject AS memo_subject, m.body AS memo_body, \
        r.server_url AS report_server_url, r.report_path AS report_report_path, \
        pi.image_url AS picture_image_url, pi.scaling_mode AS picture_scaling_mode, \
        v.video_url AS video_video_url, v.play_muted AS video_play_muted, \
        v.auto_loop AS video_auto_loop \
    FROM frames f \
    JOIN panels p ON p.id = f.panel_id \
    JOIN canvases c ON c.id = p.canvas_id \
    LEFT JOIN news_frames n ON n.frame_id = f.id \
    LEFT JOIN clock_frames ck ON ck.frame_id = f.id \
    LEFT JOIN weather_frames w ON w.frame_id = f.id \
    LEFT JOIN memo_frames m ON m.frame_id = f.id \
    LEFT JOIN report_frames r ON r.frame_id = f.id \
    LEFT JOIN picture_frames pi ON pi.frame_id = f.id \
    LEFT JOIN video_frames v ON v.frame_id = f.id";

/// Detail table holding the settings of `kind`.
fn detail_table(kind: FrameKind) -> &'static str {
    match kind {
        FrameKind::News => "news_frames",
        FrameKind::Clock => "clock_frames",
        FrameKind::Weather => "weather_frames",
        FrameKind::Memo => "memo_frames",
        FrameKind::Report => "report_frames",
        FrameKind::Picture => "picture_frames",
        FrameKind::Video => "video_frames",
    }
}

/// Provides CRUD operations for frames and their location attachments.
pub struct FrameRepo;

impl FrameRepo {
    /// Insert a frame and its detail row in one transaction.
    ///
    /// The frame's kind is taken from `input.detail`. `duration_secs`
    /// defaults to 60 and `sort_order` to 0.
    pub async fn create(pool: &PgPool, input: &CreateFrame) -> Result<Frame, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO frames (panel_id, frame_type, duration_secs, sort_order, begins_on, ends_on)
             VALUES ($1, $2, COALESCE($3, 60), COALESCE($4, 0), $5, $6)
             RETURNING {COLUMNS}"
        );
        let frame = sqlx::query_as::<_, Frame>(&query)
            .bind(input.panel_id)
            .bind(input.detail.kind().as_str())
            .bind(input.duration_secs)
            .bind(input.sort_order)
            .bind(input.begins_on)
            .bind(input.ends_on)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_detail(&mut *tx, frame.id, &input.detail).await?;

        tx.commit().await?;
        Ok(frame)
    }

    /// Find a bare frame row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Frame>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM frames WHERE id = $1");
        sqlx::query_as::<_, Frame>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a frame by ID with its panel, canvas, and detail row loaded.
    pub async fn find_listing(pool: &PgPool, id: DbId) -> Result<Option<FrameListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} WHERE f.id = $1");
        let row = sqlx::query_as::<_, FrameRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(FrameListing::from))
    }

    /// List frames with eager-loaded relations, applying any filters set in
    /// `filter`.
    pub async fn list(pool: &PgPool, filter: &FrameFilter) -> Result<Vec<FrameListing>, sqlx::Error> {
        let query = format!(
            "{LISTING_SELECT}
             WHERE ($1::BIGINT IS NULL OR p.canvas_id = $1)
               AND ($2::BIGINT IS NULL OR f.panel_id = $2)
               AND ($3::TEXT IS NULL OR f.frame_type = $3)
             ORDER BY c.name, p.name, f.sort_order, f.id"
        );
        let rows = sqlx::query_as::<_, FrameRow>(&query)
            .bind(filter.canvas_id)
            .bind(filter.panel_id)
            .bind(filter.frame_type.as_deref())
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(FrameListing::from).collect())
    }

    /// Update a frame. Only non-`None` fields are applied; a `Some` detail
    /// replaces the detail row. The caller guarantees the detail kind matches
    /// the frame's kind.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFrame,
    ) -> Result<Option<Frame>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let begins_provided = input.begins_on.is_some();
        let begins_on = input.begins_on.flatten();
        let ends_provided = input.ends_on.is_some();
        let ends_on = input.ends_on.flatten();

        let query = format!(
            "UPDATE frames SET
                duration_secs = COALESCE($2, duration_secs),
                sort_order = COALESCE($3, sort_order),
                begins_on = CASE WHEN $4 THEN $5 ELSE begins_on END,
                ends_on = CASE WHEN $6 THEN $7 ELSE ends_on END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let frame = sqlx::query_as::<_, Frame>(&query)
            .bind(id)
            .bind(input.duration_secs)
            .bind(input.sort_order)
            .bind(begins_provided)
            .bind(begins_on)
            .bind(ends_provided)
            .bind(ends_on)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(frame) = frame else {
            return Ok(None);
        };

        if let Some(detail) = &input.detail {
            let delete = format!(
                "DELETE FROM {} WHERE frame_id = $1",
                detail_table(detail.kind())
            );
            sqlx::query(&delete).bind(id).execute(&mut *tx).await?;
            Self::insert_detail(&mut *tx, id, detail).await?;
        }

        tx.commit().await?;
        Ok(Some(frame))
    }

    /// Permanently delete a frame. Its detail row and location attachments
    /// cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM frames WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach a location to a frame. Attaching an already attached location
    /// is a no-op. Returns `true` if a new attachment was created.
    pub async fn attach_location(
        pool: &PgPool,
        frame_id: DbId,
        location_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO frame_locations (frame_id, location_id)
             VALUES ($1, $2)
             ON CONFLICT (frame_id, location_id) DO NOTHING",
        )
        .bind(frame_id)
        .bind(location_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Detach a location from a frame. Returns `true` if an attachment was
    /// removed.
    pub async fn detach_location(
        pool: &PgPool,
        frame_id: DbId,
        location_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM frame_locations WHERE frame_id = $1 AND location_id = $2")
                .bind(frame_id)
                .bind(location_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// IDs of the locations attached to a frame, ascending.
    pub async fn location_ids(pool: &PgPool, frame_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT location_id FROM frame_locations WHERE frame_id = $1 ORDER BY location_id",
        )
        .bind(frame_id)
        .fetch_all(pool)
        .await
    }

    async fn insert_detail(
        conn: &mut PgConnection,
        frame_id: DbId,
        detail: &FrameDetail,
    ) -> Result<(), sqlx::Error> {
        match detail {
            FrameDetail::News(d) => {
                sqlx::query(
                    "INSERT INTO news_frames (frame_id, feed_url, item_count) VALUES ($1, $2, $3)",
                )
                .bind(frame_id)
                .bind(&d.feed_url)
                .bind(d.item_count)
                .execute(conn)
                .await?;
            }
            FrameDetail::Clock(d) => {
                sqlx::query(
                    "INSERT INTO clock_frames (frame_id, show_date, show_seconds, is_analog)
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(frame_id)
                .bind(d.show_date)
                .bind(d.show_seconds)
                .bind(d.is_analog)
                .execute(conn)
                .await?;
            }
            FrameDetail::Weather(d) => {
                sqlx::query(
                    "INSERT INTO weather_frames (frame_id, city, temperature_unit)
                     VALUES ($1, $2, $3)",
                )
                .bind(frame_id)
                .bind(&d.city)
                .bind(&d.temperature_unit)
                .execute(conn)
                .await?;
            }
            FrameDetail::Memo(d) => {
                sqlx::query("INSERT INTO memo_frames (frame_id, subject, body) VALUES ($1, $2, $3)")
                    .bind(frame_id)
                    .bind(&d.subject)
                    .bind(&d.body)
                    .execute(conn)
                    .await?;
            }
            FrameDetail::Report(d) => {
                sqlx::query(
                    "INSERT INTO report_frames (frame_id, server_url, report_path)
                     VALUES ($1, $2, $3)",
                )
                .bind(frame_id)
                .bind(&d.server_url)
                .bind(&d.report_path)
                .execute(conn)
                .await?;
            }
            FrameDetail::Picture(d) => {
                sqlx::query(
                    "INSERT INTO picture_frames (frame_id, image_url, scaling_mode)
                     VALUES ($1, $2, $3)",
                )
                .bind(frame_id)
                .bind(&d.image_url)
                .bind(&d.scaling_mode)
                .execute(conn)
                .await?;
            }
            FrameDetail::Video(d) => {
                sqlx::query(
                    "INSERT INTO video_frames (frame_id, video_url, play_muted, auto_loop)
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(frame_id)
                .bind(&d.video_url)
                .bind(d.play_muted)
                .bind(d.auto_loop)
                .execute(conn)
                .await?;
            }
        }
        Ok(())
    }
}
