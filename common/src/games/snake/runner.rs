use std::time::Duration;

use crate::{log, log_verbose};
use super::food::EatContext;
use super::game::{ActiveRunner, GameError, SnakeGame};
use super::scene::Scene;
use super::ticker::TickSource;
use super::types::{GameMode, RoundEndReason, TickOutcome};

/// Collision passes a round runs each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickPolicy {
    /// Food, walls, own body. Hitting a wall or the body ends the round.
    Standard,
    /// Food, then leaving the field wraps to the opposite side. Never ends the round.
    NoDie,
}

impl TickPolicy {
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::NoDie => TickPolicy::NoDie,
            _ => TickPolicy::Standard,
        }
    }
}

impl<S: Scene, T: TickSource> SnakeGame<S, T> {
    /// Feeds wall-clock time to the ticker and runs every frame it emits.
    pub fn update(&mut self, elapsed: Duration) -> Result<TickOutcome, GameError> {
        let frames = self.ticker.poll(elapsed);
        for _ in 0..frames {
            if let TickOutcome::RoundEnded(reason) = self.run_frame()? {
                return Ok(TickOutcome::RoundEnded(reason));
            }
        }
        Ok(TickOutcome::Continued)
    }

    /// One ticker frame: runs the handler of the active round. Registrations
    /// left over from earlier rounds are dropped.
    pub fn run_frame(&mut self) -> Result<TickOutcome, GameError> {
        let mut outcome = TickOutcome::Continued;
        for id in self.ticker.handlers() {
            match self.runner {
                Some(runner) if runner.id == id => {
                    if let TickOutcome::RoundEnded(reason) = self.run_tick(runner)? {
                        outcome = TickOutcome::RoundEnded(reason);
                    }
                }
                _ => {
                    self.ticker.remove(id);
                    log!("Dropped stale tick handler {}", id.value());
                }
            }
        }
        Ok(outcome)
    }

    fn run_tick(&mut self, runner: ActiveRunner) -> Result<TickOutcome, GameError> {
        self.resolve_food()?;

        let ended = match runner.policy {
            TickPolicy::Standard => self.resolve_walls().or_else(|| self.resolve_body()),
            TickPolicy::NoDie => {
                self.resolve_out_of_bounds();
                None
            }
        };

        if self.state.playing {
            self.snake.advance(self.state.direction);
            self.sync_snake()?;
            return Ok(TickOutcome::Continued);
        }

        self.ticker.remove(runner.id);
        Ok(TickOutcome::RoundEnded(ended.unwrap_or(RoundEndReason::Stopped)))
    }

    /// Every segment is checked; the body length is taken before the pass so
    /// segments grown here are not.
    pub(super) fn resolve_food(&mut self) -> Result<u32, GameError> {
        if !self.state.playing {
            return Ok(0);
        }

        let mut eaten = 0;
        let length = self.snake.len();
        for index in 0..length {
            let rect = self.field.cell_rect(self.snake.segments()[index]);
            let Some(item) = self.food.overlapping(&self.field, rect) else {
                continue;
            };

            let mut ctx = EatContext {
                snake: &mut self.snake,
                walls: &mut self.walls,
                field: &self.field,
                rng: &mut self.rng,
                scene: &mut self.scene,
                ticker: &mut self.ticker,
                speed_factor: self.settings.speed_factor,
            };
            self.food.eat(&mut ctx, item)?;
            self.state.add_points(self.settings.points_per_food);
            eaten += 1;
            log_verbose!("Segment {} ate food item {}, score {}", index, item, self.state.score());
        }
        Ok(eaten)
    }

    /// Head against every wall, boundary and spawned alike.
    pub(super) fn resolve_walls(&mut self) -> Option<RoundEndReason> {
        if !self.state.playing {
            return None;
        }

        let head = self.field.cell_rect(self.snake.head());
        if self.walls.iter().any(|wall| wall.rect.overlaps(&head)) {
            self.stop_round(RoundEndReason::WallCollision);
            return Some(RoundEndReason::WallCollision);
        }
        None
    }

    pub(super) fn resolve_body(&mut self) -> Option<RoundEndReason> {
        if !self.state.playing {
            return None;
        }

        let head = self.field.cell_rect(self.snake.head());
        let hit = self.snake.segments()[1..]
            .iter()
            .any(|segment| self.field.cell_rect(*segment).overlaps(&head));
        if hit {
            self.stop_round(RoundEndReason::SelfCollision);
            return Some(RoundEndReason::SelfCollision);
        }
        None
    }

    /// Only the boundary walls wrap; spawned walls are ignored.
    pub(super) fn resolve_out_of_bounds(&mut self) {
        if !self.state.playing {
            return;
        }

        let head_rect = self.field.cell_rect(self.snake.head());
        let Some(side) = self.walls.boundary_hit(head_rect) else {
            return;
        };

        let (dx, dy) = self.wrap_offsets.offset(side, &self.walls, &self.field);
        let head = self.snake.head_mut();
        *head = head.translate(dx, dy);
        log_verbose!("Head wrapped through {:?} wall to ({}, {})", side, head.x, head.y);
    }
}
