// Weekday attendance share - proportion chart, rows used as-is
use crate::application::json_fetcher::{FetchError, JsonFetcher};
use crate::application::renderers::{series_url, ChartRenderer};
use crate::domain::chart::{Cell, ChartKind, ChartView, DataTable};
use async_trait::async_trait;
use std::sync::Arc;

pub struct WeekdayRenderer {
    fetcher: Arc<dyn JsonFetcher>,
    base_api_url: String,
}

impl WeekdayRenderer {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_api_url: &str) -> Self {
        Self {
            fetcher,
            base_api_url: base_api_url.to_string(),
        }
    }
}

#[async_trait]
impl ChartRenderer for WeekdayRenderer {
    async fn render(&self, user_id: &str) -> Result<ChartView, FetchError> {
        let url = series_url(&self.base_api_url, user_id);
        let body = self.fetcher.fetch_json(&url).await?;

        // The endpoint already returns a header row followed by
        // label/value pairs; no transform beyond typing the cells.
        let mut rows = body.as_array().map(Vec::as_slice).unwrap_or(&[]).iter();

        let columns = rows
            .next()
            .and_then(|header| header.as_array())
            .map(|header| {
                header
                    .iter()
                    .map(|c| c.as_str().unwrap_or_default().to_string())
                    .collect()
            })
            .unwrap_or_default();

        let mut table = DataTable::new(columns);
        for row in rows {
            let label = row.get(0).and_then(|v| v.as_str());
            let value = row.get(1).and_then(|v| v.as_f64());
            if let (Some(label), Some(value)) = (label, value) {
                table.add_row(vec![Cell::Label(label.to_string()), Cell::Number(value)]);
            }
        }

        Ok(ChartView::new(ChartKind::Proportion, table))
    }
}
