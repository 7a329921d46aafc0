use crate::games::SessionRng;
use crate::{log, log_verbose};
use super::field::{Field, Walls, WrapOffsets};
use super::food::{Food, FoodVariant};
use super::game_state::{GameState, ScoreBoard};
use super::runner::TickPolicy;
use super::scene::{EntityId, EntityKind, Scene, SceneError};
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::ticker::{TickSource, TickerId};
use super::types::{Direction, GameKey, GameMode, Point, RoundEndReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Scene(SceneError),
    RoundInProgress,
    UnknownMode(usize),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Scene(e) => write!(f, "Scene error: {}", e),
            GameError::RoundInProgress => write!(f, "Mode can't be changed while a round is running"),
            GameError::UnknownMode(index) => write!(f, "Unknown game mode index {}", index),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Scene(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SceneError> for GameError {
    fn from(e: SceneError) -> Self {
        GameError::Scene(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct ActiveRunner {
    pub id: TickerId,
    pub policy: TickPolicy,
}

/// Play/pause state machine. Owns the round state and both collaborators;
/// the tick passes live in `runner.rs`.
pub struct SnakeGame<S: Scene, T: TickSource> {
    pub(super) settings: SnakeSettings,
    pub(super) field: Field,
    pub(super) state: GameState,
    pub(super) snake: Snake,
    pub(super) snake_entities: Vec<EntityId>,
    pub(super) food: Food,
    pub(super) walls: Walls,
    pub(super) wrap_offsets: WrapOffsets,
    pub(super) runner: Option<ActiveRunner>,
    pub(super) rng: SessionRng,
    pub(super) scene: S,
    pub(super) ticker: T,
}

impl<S: Scene, T: TickSource> SnakeGame<S, T> {
    /// Builds the idle game: boundary walls and the configured mode's food, hidden.
    pub fn new(settings: SnakeSettings, mut scene: S, ticker: T, mut rng: SessionRng) -> Result<Self, GameError> {
        let settings = settings.sanitized();
        let field = settings.field();
        let walls = Walls::create(&field, &mut scene)?;
        let food = Food::new(FoodVariant::from(settings.mode), &field, &mut rng, &mut scene)?;

        log!(
            "Game ready: {}x{} cells of {} px, mode {}, seed {}",
            field.width,
            field.height,
            field.cell_size,
            settings.mode,
            rng.seed()
        );

        Ok(Self {
            state: GameState::new(settings.mode),
            settings,
            field,
            snake: Snake::new(),
            snake_entities: Vec::new(),
            food,
            walls,
            wrap_offsets: WrapOffsets::new(),
            runner: None,
            rng,
            scene,
            ticker,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score_board(&self) -> ScoreBoard {
        self.state.score_board()
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn runner_id(&self) -> Option<TickerId> {
        self.runner.map(|runner| runner.id)
    }

    pub fn toggle_play(&mut self) -> Result<(), GameError> {
        if self.state.playing {
            self.stop_round(RoundEndReason::Stopped);
            Ok(())
        } else {
            self.start_round()
        }
    }

    /// Idle -> Running. The snake's entities are created before anything
    /// else changes, so a failing scene leaves the game idle and untouched.
    fn start_round(&mut self) -> Result<(), GameError> {
        let mut snake = Snake::new();
        snake.spawn(self.field.snake_start(), Direction::default());
        let entities = spawn_segments(&mut self.scene, &self.field, snake.segments())?;

        self.state.reset_round();
        self.walls.clear_extra(&mut self.scene);
        self.ticker.set_max_fps(self.settings.max_fps);
        self.ticker.set_min_fps(self.settings.min_fps);
        self.snake = snake;
        self.snake_entities = entities;
        self.food.show_all(&self.field, &mut self.rng, &mut self.scene);

        let policy = TickPolicy::for_mode(self.state.mode);
        let id = self.ticker.add();
        self.runner = Some(ActiveRunner { id, policy });
        self.state.playing = true;

        log!("Round started in {} mode ({:?} policy, runner {})", self.state.mode, policy, id.value());
        Ok(())
    }

    /// Running -> Idle. Also the landing point of fatal collisions.
    pub(super) fn stop_round(&mut self, reason: RoundEndReason) {
        if let Some(runner) = self.runner.take() {
            self.ticker.remove(runner.id);
        }
        self.state.playing = false;

        for entity in self.snake_entities.drain(..) {
            self.scene.despawn(entity);
        }
        self.snake.destroy();
        self.food.hide_all(&mut self.scene);

        log!(
            "Round ended ({:?}): score {}, best {}",
            reason,
            self.state.score(),
            self.state.best()
        );
    }

    /// Only while idle. The new variant's food is built first; if that fails
    /// the previous mode and food stay active.
    pub fn set_mode(&mut self, mode: GameMode) -> Result<(), GameError> {
        if self.state.playing {
            return Err(GameError::RoundInProgress);
        }

        let food = Food::new(FoodVariant::from(mode), &self.field, &mut self.rng, &mut self.scene)?;
        let previous = std::mem::replace(&mut self.food, food);
        previous.discard(&mut self.scene);
        self.state.mode = mode;

        log!("Mode set to {}", mode);
        Ok(())
    }

    pub fn set_mode_index(&mut self, index: usize) -> Result<(), GameError> {
        let mode = GameMode::from_index(index).ok_or(GameError::UnknownMode(index))?;
        self.set_mode(mode)
    }

    /// Returns whether the key changed the direction. Ignored while idle.
    pub fn handle_key(&mut self, key: GameKey) -> bool {
        if !self.state.playing {
            return false;
        }

        match key.direction() {
            Some(direction) => self.state.turn(direction),
            None => {
                log_verbose!("{:?} key is reserved", key);
                false
            }
        }
    }

    /// Mirrors the snake body into the scene, creating entities for grown segments.
    pub(super) fn sync_snake(&mut self) -> Result<(), SceneError> {
        if self.snake_entities.len() < self.snake.len() {
            let start = self.snake_entities.len();
            let grown = &self.snake.segments()[start..];
            let mut entities = spawn_segments_from(&mut self.scene, &self.field, grown, start)?;
            self.snake_entities.append(&mut entities);
        }

        for (segment, entity) in self.snake.segments().iter().zip(&self.snake_entities) {
            self.scene.place(*entity, self.field.cell_rect(*segment));
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    #[cfg(test)]
    pub(crate) fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    #[cfg(test)]
    pub(crate) fn put_food(&mut self, index: usize, position: Point) {
        self.food.put_item(index, position, &self.field, &mut self.scene);
    }

    #[cfg(test)]
    pub(crate) fn replace_snake(&mut self, segments: Vec<Point>) {
        self.snake = Snake::from_segments(segments);
    }
}

fn segment_kind(index: usize) -> EntityKind {
    if index == 0 {
        EntityKind::SnakeHead
    } else {
        EntityKind::SnakeBody
    }
}

fn spawn_segments(scene: &mut dyn Scene, field: &Field, segments: &[Point]) -> Result<Vec<EntityId>, SceneError> {
    spawn_segments_from(scene, field, segments, 0)
}

/// `first_index` is the body index of `segments[0]`. Rolls back on failure.
fn spawn_segments_from(
    scene: &mut dyn Scene,
    field: &Field,
    segments: &[Point],
    first_index: usize,
) -> Result<Vec<EntityId>, SceneError> {
    let mut entities = Vec::with_capacity(segments.len());
    for (offset, segment) in segments.iter().enumerate() {
        match scene.spawn(segment_kind(first_index + offset), field.cell_rect(*segment), true) {
            Ok(entity) => entities.push(entity),
            Err(e) => {
                for entity in entities {
                    scene.despawn(entity);
                }
                return Err(e);
            }
        }
    }
    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::scene::RetainedScene;
    use crate::games::snake::test_support::{flaky_game, game};
    use crate::games::snake::ticker::Ticker;

    #[test]
    fn test_new_game_is_idle_with_walls_and_hidden_food() {
        let game = game(GameMode::Classic);
        assert!(!game.is_playing());
        assert_eq!(game.walls().count(), 4);
        assert_eq!(game.scene().count_of(EntityKind::Wall), 4);
        assert_eq!(game.food().items().len(), 1);
        assert!(game.food().items().iter().all(|item| !item.visible));
        assert!(!game.snake().exists());
        assert!(game.ticker().handlers().is_empty());
    }

    #[test]
    fn test_start_round_sets_up_snake_food_and_runner() {
        let mut game = game(GameMode::Classic);
        game.toggle_play().unwrap();

        assert!(game.is_playing());
        assert_eq!(game.state().direction, Direction::Up);
        assert_eq!(
            game.snake().segments(),
            &[Point::new(5, 10), Point::new(5, 11), Point::new(5, 12)]
        );
        assert_eq!(game.scene().count_of(EntityKind::SnakeHead), 1);
        assert_eq!(game.scene().count_of(EntityKind::SnakeBody), 2);
        assert!(game.food().items().iter().all(|item| item.visible));

        let runner = game.runner_id().unwrap();
        assert_eq!(game.ticker().handlers(), vec![runner]);
    }

    #[test]
    fn test_stop_round_unregisters_runner_by_identity() {
        let mut game = game(GameMode::Classic);
        game.toggle_play().unwrap();
        let first = game.runner_id().unwrap();

        game.toggle_play().unwrap();
        assert!(!game.is_playing());
        assert!(game.runner_id().is_none());
        assert!(game.ticker().handlers().is_empty());
        assert!(!game.snake().exists());
        assert_eq!(game.scene().count_of(EntityKind::SnakeHead), 0);
        assert_eq!(game.scene().count_of(EntityKind::SnakeBody), 0);
        assert!(game.food().items().iter().all(|item| !item.visible));

        game.toggle_play().unwrap();
        let second = game.runner_id().unwrap();
        assert_ne!(first, second);
        assert_eq!(game.ticker().handlers(), vec![second]);
    }

    #[test]
    fn test_start_round_resets_score_direction_and_rates() {
        let mut game = game(GameMode::Speed);
        game.toggle_play().unwrap();
        game.state.add_points(40);
        game.handle_key(GameKey::Left);
        game.ticker_mut().set_max_fps(3.0);
        game.ticker_mut().set_min_fps(30.0);
        game.toggle_play().unwrap();
        assert_eq!(game.score_board(), ScoreBoard { score: 40, best: 40 });

        game.toggle_play().unwrap();
        assert_eq!(game.score_board(), ScoreBoard { score: 0, best: 40 });
        assert_eq!(game.state().direction, Direction::Up);
        assert_eq!(game.ticker().max_fps(), game.settings().max_fps);
        assert_eq!(game.ticker().min_fps(), game.settings().min_fps);
    }

    #[test]
    fn test_keys_ignored_while_idle() {
        let mut game = game(GameMode::Classic);
        assert!(!game.handle_key(GameKey::Left));
        assert_eq!(game.state().direction, Direction::Up);
    }

    #[test]
    fn test_keys_apply_reversal_guard_while_running() {
        let mut game = game(GameMode::Classic);
        game.toggle_play().unwrap();

        assert!(!game.handle_key(GameKey::Down));
        assert_eq!(game.state().direction, Direction::Up);
        assert!(game.handle_key(GameKey::Left));
        assert!(!game.handle_key(GameKey::Right));
        assert_eq!(game.state().direction, Direction::Left);

        assert!(!game.handle_key(GameKey::Restart));
        assert!(!game.handle_key(GameKey::Pause));
        assert!(!game.handle_key(GameKey::Stop));
        assert!(game.is_playing());
    }

    #[test]
    fn test_mode_switch_while_idle_replaces_food() {
        let mut game = game(GameMode::Classic);
        let old_entity = game.food().items()[0].entity;

        game.set_mode(GameMode::Portal).unwrap();

        assert_eq!(game.mode(), GameMode::Portal);
        assert_eq!(game.food().variant(), FoodVariant::Teleport);
        assert_eq!(game.food().items().len(), 2);
        assert_eq!(game.scene().count_of(EntityKind::Food), 2);
        assert!(game.scene().get(old_entity).is_none());
        assert_eq!(game.state().modes(), [false, false, false, true, false]);
    }

    #[test]
    fn test_mode_switch_while_running_is_rejected() {
        let mut game = game(GameMode::Classic);
        game.toggle_play().unwrap();
        let items_before = game.food().items().to_vec();

        let result = game.set_mode(GameMode::Walls);

        assert_eq!(result, Err(GameError::RoundInProgress));
        assert_eq!(game.mode(), GameMode::Classic);
        assert_eq!(game.food().variant(), FoodVariant::Classic);
        assert_eq!(game.food().items(), items_before.as_slice());
        assert!(game.is_playing());
    }

    #[test]
    fn test_mode_index_out_of_range() {
        let mut game = game(GameMode::Classic);
        assert_eq!(game.set_mode_index(9), Err(GameError::UnknownMode(9)));
        game.set_mode_index(1).unwrap();
        assert_eq!(game.mode(), GameMode::NoDie);
    }

    #[test]
    fn test_failed_start_leaves_game_idle() {
        let mut game = flaky_game(GameMode::Classic);
        game.toggle_play().unwrap();
        game.state.add_points(20);
        game.toggle_play().unwrap();

        // one segment entity succeeds, the second fails
        game.scene_mut().fail_after(1);
        let result = game.toggle_play();

        assert!(matches!(result, Err(GameError::Scene(_))));
        assert!(!game.is_playing());
        assert!(game.runner_id().is_none());
        assert!(game.ticker().handlers().is_empty());
        assert_eq!(game.scene().inner().count_of(EntityKind::SnakeHead), 0);
        assert_eq!(game.scene().inner().count_of(EntityKind::SnakeBody), 0);
        assert_eq!(game.score_board().score, 20);
    }

    #[test]
    fn test_failed_mode_switch_keeps_previous_mode() {
        let mut game = flaky_game(GameMode::Classic);
        game.scene_mut().fail_after(1);

        let result = game.set_mode(GameMode::Portal);

        assert!(matches!(result, Err(GameError::Scene(_))));
        assert_eq!(game.mode(), GameMode::Classic);
        assert_eq!(game.food().variant(), FoodVariant::Classic);
        assert_eq!(game.scene().inner().count_of(EntityKind::Food), 1);
    }

    #[test]
    fn test_failed_construction_reports_scene_error() {
        let mut scene = crate::games::snake::test_support::FlakyScene::new();
        scene.fail_after(2);
        let result = SnakeGame::new(
            SnakeSettings::default(),
            scene,
            Ticker::new(10.0, 1.0),
            SessionRng::new(1),
        );
        assert!(matches!(result, Err(GameError::Scene(SceneError::SpawnFailed { kind: EntityKind::Wall, .. }))));
    }

    #[test]
    fn test_sync_snake_spawns_grown_segments() {
        let mut game = game(GameMode::Classic);
        game.toggle_play().unwrap();
        game.snake.grow_up();
        game.sync_snake().unwrap();

        assert_eq!(game.snake_entities.len(), 4);
        assert_eq!(game.scene().count_of(EntityKind::SnakeBody), 3);
        let tail_entity = *game.snake_entities.last().unwrap();
        assert_eq!(
            game.scene().get(tail_entity).unwrap().rect,
            game.field().cell_rect(game.snake().tail())
        );
    }

    #[test]
    fn test_retained_scene_game_type() {
        let game: SnakeGame<RetainedScene, Ticker> = game(GameMode::Walls);
        assert_eq!(game.food().variant(), FoodVariant::Wall);
    }
}
