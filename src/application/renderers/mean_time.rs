// Mean presence time per weekday - column chart
use crate::application::json_fetcher::{FetchError, JsonFetcher};
use crate::application::renderers::{series_url, ChartRenderer};
use crate::domain::chart::{Cell, ChartKind, ChartView, DataTable};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::sync::Arc;

pub struct MeanTimeRenderer {
    fetcher: Arc<dyn JsonFetcher>,
    base_api_url: String,
}

impl MeanTimeRenderer {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_api_url: &str) -> Self {
        Self {
            fetcher,
            base_api_url: base_api_url.to_string(),
        }
    }
}

/// Midnight on the fixed anchor date used to embed a duration as a
/// datetime, so a time-axis formatter can print it as HH:MM:SS.
fn anchor_midnight() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1901, 2, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("fixed anchor date is valid")
}

/// Embed a duration in seconds as a time-of-day on the anchor date. This is
/// a display-only construction, not a real timestamp. Durations of 24h or
/// more roll past the anchor date and the label shows the wrapped
/// time-of-day, matching the upstream formatter's behavior.
fn parse_interval(seconds: f64) -> NaiveDateTime {
    anchor_midnight() + Duration::milliseconds((seconds * 1000.0) as i64)
}

#[async_trait]
impl ChartRenderer for MeanTimeRenderer {
    async fn render(&self, user_id: &str) -> Result<ChartView, FetchError> {
        let url = series_url(&self.base_api_url, user_id);
        let body = self.fetcher.fetch_json(&url).await?;

        let mut table = DataTable::new(vec![
            "Weekday".to_string(),
            "Mean time (h:m:s)".to_string(),
        ]);
        for row in body.as_array().into_iter().flatten() {
            let day = row.get(0).and_then(|v| v.as_str());
            let seconds = row.get(1).and_then(|v| v.as_f64());
            if let (Some(day), Some(seconds)) = (day, seconds) {
                table.add_row(vec![
                    Cell::Label(day.to_string()),
                    Cell::DateTime(parse_interval(seconds)),
                ]);
            }
        }

        Ok(ChartView::new(ChartKind::Column, table).with_x_title("Weekday"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use serde_json::json;

    struct FixedFetcher(serde_json::Value);

    #[async_trait]
    impl JsonFetcher for FixedFetcher {
        async fn fetch_json(&self, _url: &str) -> Result<serde_json::Value, FetchError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_parse_interval() {
        let dt = parse_interval(3661.0);
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1901, 2, 1).unwrap());
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (1, 1, 1));
    }

    #[test]
    fn test_parse_interval_wraps_past_24h() {
        // 25h rolls to the next calendar day; only the time-of-day is shown.
        let dt = parse_interval(25.0 * 3600.0);
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1901, 2, 2).unwrap());
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (1, 0, 0));
    }

    #[tokio::test]
    async fn test_render_builds_column_view() {
        let fetcher = Arc::new(FixedFetcher(json!([
            ["Mon", 3661.0],
            ["Tue", 0],
        ])));
        let renderer = MeanTimeRenderer::new(fetcher, "http://api/v1/mean_time_weekday/");

        let view = renderer.render("11").await.unwrap();

        assert_eq!(view.kind, ChartKind::Column);
        assert_eq!(view.table.rows.len(), 2);
        assert_eq!(view.table.rows[0][0], Cell::Label("Mon".to_string()));
        assert_eq!(view.table.rows[0][1].formatted(), "01:01:01");
        assert_eq!(view.table.rows[1][1].formatted(), "00:00:00");
    }

    #[tokio::test]
    async fn test_render_empty_series_resolves() {
        let renderer = MeanTimeRenderer::new(
            Arc::new(FixedFetcher(json!([]))),
            "http://api/v1/mean_time_weekday/",
        );

        let view = renderer.render("11").await.unwrap();
        assert!(view.table.is_empty());
    }
}
