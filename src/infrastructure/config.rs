use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub api: ApiSettings,
    pub chart: ChartSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// User list endpoint.
    pub users_url: String,
    /// Per-user series endpoint; the selected user id is appended.
    pub chart_api_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub kind: ChartFlavor,
}

/// Which of the three chart renderers this deployment shows. Picked here,
/// at assembly time, rather than by whichever chart script loads last.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartFlavor {
    MeanTime,
    StartEnd,
    Weekday,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiSettings {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_tick_ms() -> u64 {
    250
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
