use serde::{Deserialize, Serialize};

/// Grid cell coordinates. The playable interior starts at `(1, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn step(&self, direction: Direction) -> Point {
        let (dx, dy) = direction.delta();
        self.translate(dx, dy)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in grid cells; `y` grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Classic,
    NoDie,
    Walls,
    Portal,
    Speed,
}

impl GameMode {
    /// Order matches the mode list shown to the player.
    pub const ALL: [GameMode; 5] = [
        GameMode::Classic,
        GameMode::NoDie,
        GameMode::Walls,
        GameMode::Portal,
        GameMode::Speed,
    ];

    pub fn from_index(index: usize) -> Option<GameMode> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            GameMode::Classic => 0,
            GameMode::NoDie => 1,
            GameMode::Walls => 2,
            GameMode::Portal => 3,
            GameMode::Speed => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::NoDie => "No Die",
            GameMode::Walls => "Walls",
            GameMode::Portal => "Portal",
            GameMode::Speed => "Speed",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundEndReason {
    WallCollision,
    SelfCollision,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continued,
    RoundEnded(RoundEndReason),
}

/// Raw keys the game reacts to. `Restart`, `Pause` and `Stop` are reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Restart,
    Pause,
    Stop,
}

impl GameKey {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameKey::Up => Some(Direction::Up),
            GameKey::Down => Some(Direction::Down),
            GameKey::Left => Some(Direction::Left),
            GameKey::Right => Some(Direction::Right),
            GameKey::Restart | GameKey::Pause | GameKey::Stop => None,
        }
    }
}
