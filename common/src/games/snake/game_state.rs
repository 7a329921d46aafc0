use super::types::{Direction, GameMode};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u32,
    pub best: u32,
}

/// Session-wide game state. `mode` is a single enum value, so exactly one
/// mode is active at any time.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    pub mode: GameMode,
    pub playing: bool,
    pub direction: Direction,
    score: u32,
    best: u32,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Best only ever goes up.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
        if score > self.best {
            self.best = score;
        }
    }

    pub fn add_points(&mut self, points: u32) {
        self.set_score(self.score.saturating_add(points));
    }

    pub fn reset_round(&mut self) {
        self.set_score(0);
        self.direction = Direction::default();
    }

    /// Applies `requested` unless it would reverse the snake into itself.
    pub fn turn(&mut self, requested: Direction) -> bool {
        if !accept_direction(self.direction, requested) {
            return false;
        }
        self.direction = requested;
        true
    }

    /// One flag per entry of `GameMode::ALL`.
    pub fn modes(&self) -> [bool; 5] {
        GameMode::ALL.map(|mode| mode == self.mode)
    }

    pub fn score_board(&self) -> ScoreBoard {
        ScoreBoard {
            score: self.score,
            best: self.best,
        }
    }
}

pub fn accept_direction(current: Direction, requested: Direction) -> bool {
    !requested.is_opposite(&current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_direction_rejects_only_exact_inverse() {
        for current in Direction::ALL {
            for requested in Direction::ALL {
                let expected = requested != current.opposite();
                assert_eq!(accept_direction(current, requested), expected, "{:?} -> {:?}", current, requested);
            }
        }
    }

    #[test]
    fn test_turn_keeps_direction_on_reversal() {
        let mut state = GameState::new(GameMode::Classic);
        assert_eq!(state.direction, Direction::Up);
        assert!(!state.turn(Direction::Down));
        assert_eq!(state.direction, Direction::Up);
        assert!(state.turn(Direction::Left));
        assert_eq!(state.direction, Direction::Left);
    }

    #[test]
    fn test_best_only_increases() {
        let mut state = GameState::default();
        state.add_points(10);
        state.add_points(10);
        assert_eq!(state.score_board(), ScoreBoard { score: 20, best: 20 });

        state.reset_round();
        assert_eq!(state.score_board(), ScoreBoard { score: 0, best: 20 });

        state.add_points(10);
        assert_eq!(state.score_board(), ScoreBoard { score: 10, best: 20 });
    }

    #[test]
    fn test_exactly_one_mode_flag() {
        for mode in GameMode::ALL {
            let state = GameState::new(mode);
            let flags = state.modes();
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            assert!(flags[mode.index()]);
        }
    }
}
