use crate::games::SessionRng;
use super::geometry::Rect;
use super::scene::{EntityId, EntityKind, Scene, SceneError};
use super::types::Point;

/// Playable area of `width` x `height` cells at columns/rows `1..=n`,
/// surrounded by a one-cell ring of boundary walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Field {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self { width, height, cell_size }
    }

    pub fn cell_rect(&self, cell: Point) -> Rect {
        Rect::new(
            cell.x * self.cell_size,
            cell.y * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Total size in pixels, boundary walls included.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            (self.width + 2) * self.cell_size,
            (self.height + 2) * self.cell_size,
        )
    }

    /// Uniform over the interior. Does not avoid the snake or walls.
    pub fn random_cell(&self, rng: &mut SessionRng) -> Point {
        Point::new(
            rng.random_range(1..=self.width),
            rng.random_range(1..=self.height),
        )
    }

    pub fn snake_start(&self) -> Point {
        Point::new((self.width / 4).max(1), (self.height / 2).max(1))
    }

    pub fn boundary_rect(&self, side: Side) -> Rect {
        let (total_width, total_height) = self.pixel_size();
        let cell = self.cell_size;
        match side {
            Side::Top => Rect::new(0, 0, total_width, cell),
            Side::Left => Rect::new(0, 0, cell, total_height),
            Side::Right => Rect::new((self.width + 1) * cell, 0, cell, total_height),
            Side::Bottom => Rect::new(0, (self.height + 1) * cell, total_width, cell),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Left,
    Right,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Right, Side::Bottom];

    pub fn opposite(&self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
        }
    }

    fn index(&self) -> usize {
        match self {
            Side::Top => 0,
            Side::Left => 1,
            Side::Right => 2,
            Side::Bottom => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wall {
    pub rect: Rect,
    pub entity: EntityId,
}

/// Four boundary walls, always present, plus walls spawned during a round.
pub struct Walls {
    boundary: [Wall; 4],
    extra: Vec<Wall>,
}

impl Walls {
    pub fn create(field: &Field, scene: &mut dyn Scene) -> Result<Self, SceneError> {
        let mut spawned = Vec::with_capacity(Side::ALL.len());
        for side in Side::ALL {
            let rect = field.boundary_rect(side);
            match scene.spawn(EntityKind::Wall, rect, true) {
                Ok(entity) => spawned.push(Wall { rect, entity }),
                Err(e) => {
                    for wall in &spawned {
                        scene.despawn(wall.entity);
                    }
                    return Err(e);
                }
            }
        }

        let boundary = [spawned[0], spawned[1], spawned[2], spawned[3]];
        Ok(Self {
            boundary,
            extra: Vec::new(),
        })
    }

    pub fn boundary(&self, side: Side) -> &Wall {
        &self.boundary[side.index()]
    }

    pub fn extra(&self) -> &[Wall] {
        &self.extra
    }

    pub fn count(&self) -> usize {
        self.boundary.len() + self.extra.len()
    }

    /// Boundary walls first, in top, left, right, bottom order.
    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        self.boundary.iter().chain(self.extra.iter())
    }

    pub fn push_extra(&mut self, wall: Wall) {
        self.extra.push(wall);
    }

    pub fn clear_extra(&mut self, scene: &mut dyn Scene) {
        for wall in self.extra.drain(..) {
            scene.despawn(wall.entity);
        }
    }

    pub fn boundary_hit(&self, rect: Rect) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|side| self.boundary(*side).rect.overlaps(&rect))
    }
}

/// Grid translation that moves a head sitting in a boundary wall to just
/// inside the opposite wall. Derived from the wall rects the first time a
/// side is hit and reused afterwards.
#[derive(Clone, Debug, Default)]
pub struct WrapOffsets {
    cache: [Option<(i32, i32)>; 4],
}

impl WrapOffsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cached(&self, side: Side) -> bool {
        self.cache[side.index()].is_some()
    }

    pub fn offset(&mut self, side: Side, walls: &Walls, field: &Field) -> (i32, i32) {
        if let Some(offset) = self.cache[side.index()] {
            return offset;
        }
        let offset = Self::compute(side, walls, field);
        self.cache[side.index()] = Some(offset);
        offset
    }

    fn compute(side: Side, walls: &Walls, field: &Field) -> (i32, i32) {
        let cell = field.cell_size;
        let hit = walls.boundary(side).rect;
        let opposite = walls.boundary(side.opposite()).rect;
        match side {
            // last interior column/row before the opposite wall
            Side::Left => ((opposite.x - cell - hit.x) / cell, 0),
            Side::Top => (0, (opposite.y - cell - hit.y) / cell),
            // first interior column/row after the opposite wall
            Side::Right => ((opposite.right() - hit.x) / cell, 0),
            Side::Bottom => (0, (opposite.bottom() - hit.y) / cell),
        }
    }
}
