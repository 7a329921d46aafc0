use crate::games::SessionRng;
use super::game::SnakeGame;
use super::geometry::Rect;
use super::scene::{EntityId, EntityKind, RetainedScene, Scene, SceneError};
use super::settings::SnakeSettings;
use super::ticker::Ticker;
use super::types::GameMode;

pub(crate) const TEST_SEED: u64 = 42;

/// Retained scene whose spawns start failing once a budget runs out.
#[derive(Default)]
pub(crate) struct FlakyScene {
    inner: RetainedScene,
    spawn_budget: Option<usize>,
}

impl FlakyScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows `spawns` more successful spawns, then fails every following one.
    pub fn fail_after(&mut self, spawns: usize) {
        self.spawn_budget = Some(spawns);
    }

    pub fn inner(&self) -> &RetainedScene {
        &self.inner
    }
}

impl Scene for FlakyScene {
    fn spawn(&mut self, kind: EntityKind, rect: Rect, visible: bool) -> Result<EntityId, SceneError> {
        if let Some(budget) = &mut self.spawn_budget {
            if *budget == 0 {
                return Err(SceneError::SpawnFailed {
                    kind,
                    reason: "spawn budget exhausted".to_string(),
                });
            }
            *budget -= 1;
        }
        self.inner.spawn(kind, rect, visible)
    }

    fn place(&mut self, id: EntityId, rect: Rect) {
        self.inner.place(id, rect);
    }

    fn set_visible(&mut self, id: EntityId, visible: bool) {
        self.inner.set_visible(id, visible);
    }

    fn despawn(&mut self, id: EntityId) {
        self.inner.despawn(id);
    }
}

fn settings(mode: GameMode) -> SnakeSettings {
    SnakeSettings {
        mode,
        ..SnakeSettings::default()
    }
}

pub(crate) fn game(mode: GameMode) -> SnakeGame<RetainedScene, Ticker> {
    let settings = settings(mode);
    let ticker = Ticker::new(settings.min_fps, settings.max_fps);
    SnakeGame::new(settings, RetainedScene::new(), ticker, SessionRng::new(TEST_SEED)).unwrap()
}

pub(crate) fn flaky_game(mode: GameMode) -> SnakeGame<FlakyScene, Ticker> {
    let settings = settings(mode);
    let ticker = Ticker::new(settings.min_fps, settings.max_fps);
    SnakeGame::new(settings, FlakyScene::new(), ticker, SessionRng::new(TEST_SEED)).unwrap()
}
