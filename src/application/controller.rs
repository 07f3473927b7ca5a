// Dashboard controller - loading/empty choreography around the active renderer
use crate::application::json_fetcher::FetchError;
use crate::application::renderers::ChartRenderer;
use crate::domain::chart::ChartView;
use crate::domain::user::UserSummary;
use std::sync::Arc;
use tokio::sync::mpsc;

/// What the chart area should show right now.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// Nothing selected yet.
    Idle,
    /// A series fetch is in flight for the latest selection.
    Loading,
    /// The renderer finished and this view is on display.
    Rendered(ChartView),
    /// The fetch failed or came back with no rows.
    Empty,
}

/// Completion of one render, stamped with the epoch it was issued under.
#[derive(Debug)]
pub struct RenderOutcome {
    epoch: u64,
    result: Result<ChartView, FetchError>,
}

pub struct DashboardController {
    renderer: Arc<dyn ChartRenderer>,
    state: DashboardState,
    selected: Option<UserSummary>,
    epoch: u64,
    outcomes: mpsc::Sender<RenderOutcome>,
}

impl DashboardController {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> (Self, mpsc::Receiver<RenderOutcome>) {
        let (tx, rx) = mpsc::channel(8);
        let controller = Self {
            renderer,
            state: DashboardState::Idle,
            selected: None,
            epoch: 0,
            outcomes: tx,
        };
        (controller, rx)
    }

    /// A selection was committed: capture the user (and their avatar URL) as
    /// of right now, enter Loading, and kick off a render. Selecting the
    /// same user again re-issues the fetch; there is no memoization.
    pub fn select(&mut self, user: UserSummary) {
        self.epoch += 1;
        let epoch = self.epoch;
        self.state = DashboardState::Loading;
        self.selected = Some(user.clone());

        let renderer = Arc::clone(&self.renderer);
        let outcomes = self.outcomes.clone();
        tokio::spawn(async move {
            let result = renderer.render(&user.user_id).await;
            let _ = outcomes.send(RenderOutcome { epoch, result }).await;
        });
    }

    /// Apply a completed render. Completions from a superseded selection
    /// are discarded, so an in-flight fetch that settles late can never
    /// overwrite state belonging to a newer selection.
    pub fn apply(&mut self, outcome: RenderOutcome) {
        if outcome.epoch != self.epoch {
            tracing::debug!(
                "discarding stale render completion (epoch {} < {})",
                outcome.epoch,
                self.epoch
            );
            return;
        }

        self.state = match outcome.result {
            Ok(view) if view.table.is_empty() => DashboardState::Empty,
            Ok(view) => DashboardState::Rendered(view),
            Err(e) => {
                tracing::debug!("series fetch failed: {}", e);
                DashboardState::Empty
            }
        };
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// The user whose data is (or is about to be) on display.
    pub fn selected(&self) -> Option<&UserSummary> {
        self.selected.as_ref()
    }
}
