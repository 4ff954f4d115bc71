use std::sync::atomic::{AtomicU64, Ordering};

use eyre::WrapErr;
use rand::{SeedableRng, rngs::StdRng};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};
use warmer_walker_core::{
    geodesy,
    walk::{GameConfig, GoalTracker},
};

use crate::state::{
    SessionError,
    types::{ClueUpdate, GoalImageRequest, GoalInfo, PositionFix},
};

struct WalkState {
    tracker: Option<GoalTracker>,
    rng: StdRng,
}

/// One player's walk: owns the tracker and everything the screen reads.
///
/// Fixes are processed one at a time under the state lock. Goal image
/// bookkeeping only touches the generation counter, so slow image loads never
/// hold up position updates.
#[derive(uniffi::Object)]
pub struct WalkSession {
    config: GameConfig,
    state: Mutex<WalkState>,
    goal_generation: AtomicU64,
    fix_count: AtomicU64,
    last_error: RwLock<Option<String>>,
}

fn parse_config(config_json: Option<&str>) -> eyre::Result<GameConfig> {
    match config_json {
        Some(json) => GameConfig::from_json(json).wrap_err("loading walk config"),
        None => Ok(GameConfig::default()),
    }
}

#[uniffi::export]
impl WalkSession {
    /// `config_json` overrides [`GameConfig`] fields; `None` uses the defaults.
    #[uniffi::constructor]
    pub fn new(config_json: Option<String>) -> Result<Self, SessionError> {
        Self::build(config_json.as_deref(), StdRng::from_os_rng())
    }

    /// Like [`WalkSession::new`], but goals are drawn from a fixed seed.
    #[uniffi::constructor]
    pub fn with_seed(config_json: Option<String>, seed: u64) -> Result<Self, SessionError> {
        Self::build(config_json.as_deref(), StdRng::seed_from_u64(seed))
    }

    /// Starts a walk from `fix` with a freshly chosen goal.
    pub async fn start(&self, fix: PositionFix) -> Result<GoalInfo, SessionError> {
        let mut state = self.state.lock().await;
        state.tracker = Some(self.config.new_tracker(fix.into())?);

        info!(
            latitude = fix.latitude,
            longitude = fix.longitude,
            "walk started"
        );
        self.choose_goal(&mut state)
    }

    /// Replaces the goal. The new one is still placed around the walk's start.
    pub async fn new_goal(&self) -> Result<GoalInfo, SessionError> {
        let mut state = self.state.lock().await;
        self.choose_goal(&mut state)
    }

    pub async fn update_position(&self, fix: PositionFix) -> Result<ClueUpdate, SessionError> {
        let mut state = self.state.lock().await;
        let tracker = state.tracker.as_mut().ok_or(SessionError::NotStarted)?;
        let clue = tracker.update_position(fix.into());

        self.fix_count.fetch_add(1, Ordering::Relaxed);
        *self.last_error.write().await = None;

        if let Some(clue) = clue {
            debug!(%clue, "clue for fix");
        }
        Ok(ClueUpdate::new(clue, tracker))
    }

    /// Records a failure from the platform's location service. The walk carries on.
    pub async fn report_location_error(&self, message: String) {
        warn!(%message, "location update failed");
        self.fix_count.fetch_add(1, Ordering::Relaxed);
        *self.last_error.write().await = Some(format!("Failed to update: {message}"));
    }

    /// The last location error, cleared by the next successful fix
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    /// Number of location updates received, failed ones included
    pub fn fix_count(&self) -> u64 {
        self.fix_count.load(Ordering::Relaxed)
    }

    pub async fn goal_image_request(&self) -> Option<GoalImageRequest> {
        let state = self.state.lock().await;
        let tracker = state.tracker.as_ref()?;

        Some(GoalImageRequest {
            generation: self.goal_generation.load(Ordering::Acquire),
            location: tracker.goal().into(),
            heading: geodesy::bearing(tracker.previous_position(), tracker.goal()),
        })
    }

    /// Whether an image fetched for `generation` still shows the current goal
    pub fn accept_goal_image(&self, generation: u64) -> bool {
        let current = self.goal_generation.load(Ordering::Acquire);
        if generation != current {
            debug!(generation, current, "dropping stale goal image");
        }
        generation == current
    }
}

impl WalkSession {
    fn build(config_json: Option<&str>, rng: StdRng) -> Result<Self, SessionError> {
        let config =
            parse_config(config_json).map_err(|e| SessionError::Config(format!("{e:#}")))?;

        Ok(Self {
            config,
            state: Mutex::new(WalkState { tracker: None, rng }),
            goal_generation: AtomicU64::new(0),
            fix_count: AtomicU64::new(0),
            last_error: RwLock::new(None),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn choose_goal(&self, state: &mut WalkState) -> Result<GoalInfo, SessionError> {
        let WalkState { tracker, rng } = state;
        let tracker = tracker.as_mut().ok_or(SessionError::NotStarted)?;

        let goal = tracker.choose_goal(self.config.max_goal_distance, rng)?;
        let generation = self.goal_generation.fetch_add(1, Ordering::AcqRel) + 1;

        Ok(GoalInfo {
            goal: goal.into(),
            distance: tracker.previous_distance(),
            generation,
        })
    }
}
