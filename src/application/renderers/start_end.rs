// Mean start/end time per weekday - timeline chart
use crate::application::json_fetcher::{FetchError, JsonFetcher};
use crate::application::renderers::{series_url, ChartRenderer};
use crate::domain::chart::{Cell, ChartKind, ChartView, DataTable};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::Arc;

pub struct StartEndRenderer {
    fetcher: Arc<dyn JsonFetcher>,
    base_api_url: String,
}

impl StartEndRenderer {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_api_url: &str) -> Self {
        Self {
            fetcher,
            base_api_url: base_api_url.to_string(),
        }
    }
}

/// Pin a `HH:MM:SS` string to the fixed anchor date so that only the
/// time-of-day component varies between rows and spans stay on one axis.
fn convert_time_to_date(time: &str) -> Option<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S").ok()?;
    Some(NaiveDate::from_ymd_opt(1899, 12, 31)?.and_time(time))
}

#[async_trait]
impl ChartRenderer for StartEndRenderer {
    async fn render(&self, user_id: &str) -> Result<ChartView, FetchError> {
        let url = series_url(&self.base_api_url, user_id);
        let body = self.fetcher.fetch_json(&url).await?;

        let mut table = DataTable::new(vec![
            "Weekday".to_string(),
            "Start".to_string(),
            "End".to_string(),
        ]);
        for row in body.as_array().into_iter().flatten() {
            let day = row.get(0).and_then(|v| v.as_str());
            let start = row.get(1).and_then(|v| v.as_str()).and_then(convert_time_to_date);
            let end = row.get(2).and_then(|v| v.as_str()).and_then(convert_time_to_date);
            if let (Some(day), Some(start), Some(end)) = (day, start, end) {
                table.add_row(vec![
                    Cell::Label(day.to_string()),
                    Cell::DateTime(start),
                    Cell::DateTime(end),
                ]);
            }
        }

        Ok(ChartView::new(ChartKind::Timeline, table).with_x_title("Weekday"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    struct FixedFetcher(serde_json::Value);

    #[async_trait]
    impl JsonFetcher for FixedFetcher {
        async fn fetch_json(&self, _url: &str) -> Result<serde_json::Value, FetchError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_times_share_the_anchor_date() {
        let start = convert_time_to_date("08:00:00").unwrap();
        let end = convert_time_to_date("16:30:00").unwrap();

        let anchor = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
        assert_eq!(start.date(), anchor);
        assert_eq!(end.date(), anchor);
        assert_eq!(end - start, Duration::minutes(8 * 60 + 30));
    }

    #[test]
    fn test_unparseable_time_is_rejected() {
        assert!(convert_time_to_date("not a time").is_none());
        assert!(convert_time_to_date("25:99:99").is_none());
    }

    #[tokio::test]
    async fn test_render_builds_timeline_view() {
        let fetcher = Arc::new(FixedFetcher(json!([
            ["Mon", "08:00:00", "16:30:00"],
            ["Tue", "09:15:00", "17:00:00"],
        ])));
        let renderer =
            StartEndRenderer::new(fetcher, "http://api/v1/presence_start_end_per_weekday/");

        let view = renderer.render("11").await.unwrap();

        assert_eq!(view.kind, ChartKind::Timeline);
        assert_eq!(view.table.columns, vec!["Weekday", "Start", "End"]);
        assert_eq!(view.table.rows.len(), 2);
        assert_eq!(view.table.rows[0][1].formatted(), "08:00:00");
        assert_eq!(view.table.rows[0][2].formatted(), "16:30:00");
    }
}
