// Chart renderers - one per chart flavor, selected once at assembly time
pub mod mean_time;
pub mod start_end;
pub mod weekday;

use crate::application::json_fetcher::{FetchError, JsonFetcher};
use crate::domain::chart::ChartView;
use crate::infrastructure::config::ChartFlavor;
use async_trait::async_trait;
use std::sync::Arc;

use mean_time::MeanTimeRenderer;
use start_end::StartEndRenderer;
use weekday::WeekdayRenderer;

/// A chart renderer fetches one user's series and prepares the view the
/// draw backend will paint. It resolves once the view is built and errors
/// only if the fetch failed; an empty result set is a successful, empty
/// view and the caller decides what to show for it.
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    async fn render(&self, user_id: &str) -> Result<ChartView, FetchError>;
}

/// Build the active renderer from configuration. This replaces the
/// original page's load-order trick of overwriting a shared callback slot
/// with whichever chart script happened to load.
pub fn from_config(
    flavor: ChartFlavor,
    fetcher: Arc<dyn JsonFetcher>,
    base_api_url: &str,
) -> Arc<dyn ChartRenderer> {
    match flavor {
        ChartFlavor::MeanTime => Arc::new(MeanTimeRenderer::new(fetcher, base_api_url)),
        ChartFlavor::StartEnd => Arc::new(StartEndRenderer::new(fetcher, base_api_url)),
        ChartFlavor::Weekday => Arc::new(WeekdayRenderer::new(fetcher, base_api_url)),
    }
}

/// `<base_api_url><user_id>`, with the id percent-encoded.
pub(crate) fn series_url(base_api_url: &str, user_id: &str) -> String {
    format!("{}{}", base_api_url, urlencoding::encode(user_id))
}
