use crate::games::SessionRng;
use crate::log_verbose;
use super::field::{Field, Wall, Walls};
use super::geometry::Rect;
use super::scene::{EntityId, EntityKind, Scene, SceneError};
use super::snake::Snake;
use super::ticker::TickSource;
use super::types::{GameMode, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodVariant {
    Classic,
    Wall,
    Teleport,
    Speed,
}

impl From<GameMode> for FoodVariant {
    fn from(mode: GameMode) -> Self {
        match mode {
            GameMode::Classic | GameMode::NoDie => FoodVariant::Classic,
            GameMode::Walls => FoodVariant::Wall,
            GameMode::Portal => FoodVariant::Teleport,
            GameMode::Speed => FoodVariant::Speed,
        }
    }
}

impl FoodVariant {
    pub fn behavior(&self) -> Box<dyn FoodBehavior> {
        match self {
            FoodVariant::Classic => Box::new(ClassicFood),
            FoodVariant::Wall => Box::new(WallFood),
            FoodVariant::Teleport => Box::new(TeleportFood),
            FoodVariant::Speed => Box::new(SpeedFood),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodItem {
    pub position: Point,
    pub visible: bool,
    pub entity: EntityId,
}

/// Everything an eat effect may touch.
pub struct EatContext<'a> {
    pub snake: &'a mut Snake,
    pub walls: &'a mut Walls,
    pub field: &'a Field,
    pub rng: &'a mut SessionRng,
    pub scene: &'a mut dyn Scene,
    pub ticker: &'a mut dyn TickSource,
    pub speed_factor: f64,
}

pub trait FoodBehavior {
    fn item_count(&self) -> usize {
        1
    }

    /// `eaten` indexes the item a snake segment overlapped.
    fn eat(
        &self,
        ctx: &mut EatContext<'_>,
        items: &mut [FoodItem],
        eaten: usize,
    ) -> Result<(), SceneError>;
}

/// Shared effect of every variant: grow by one and move the eaten item.
fn eat_base(ctx: &mut EatContext<'_>, items: &mut [FoodItem], eaten: usize) {
    ctx.snake.grow_up();
    relocate(&mut items[eaten], ctx.field, ctx.rng, ctx.scene);
}

fn relocate(item: &mut FoodItem, field: &Field, rng: &mut SessionRng, scene: &mut dyn Scene) {
    item.position = field.random_cell(rng);
    scene.place(item.entity, field.cell_rect(item.position));
}

pub struct ClassicFood;

impl FoodBehavior for ClassicFood {
    fn eat(
        &self,
        ctx: &mut EatContext<'_>,
        items: &mut [FoodItem],
        eaten: usize,
    ) -> Result<(), SceneError> {
        eat_base(ctx, items, eaten);
        Ok(())
    }
}

pub struct WallFood;

impl FoodBehavior for WallFood {
    fn eat(
        &self,
        ctx: &mut EatContext<'_>,
        items: &mut [FoodItem],
        eaten: usize,
    ) -> Result<(), SceneError> {
        eat_base(ctx, items, eaten);

        let cell = ctx.field.random_cell(ctx.rng);
        let rect = ctx.field.cell_rect(cell);
        let entity = ctx.scene.spawn(EntityKind::Wall, rect, true)?;
        ctx.walls.push_extra(Wall { rect, entity });
        log_verbose!("Wall spawned at ({}, {})", cell.x, cell.y);
        Ok(())
    }
}

pub struct TeleportFood;

impl FoodBehavior for TeleportFood {
    fn item_count(&self) -> usize {
        2
    }

    fn eat(
        &self,
        ctx: &mut EatContext<'_>,
        items: &mut [FoodItem],
        eaten: usize,
    ) -> Result<(), SceneError> {
        assert_eq!(items.len(), 2, "Teleport food needs exactly two items");

        let head_rect = ctx.field.cell_rect(ctx.snake.head());
        let target = if head_rect.overlaps(&ctx.field.cell_rect(items[0].position)) {
            items[1].position
        } else {
            items[0].position
        };

        // head only; the body catches up through normal movement
        let head = ctx.snake.head_mut();
        let (dx, dy) = (target.x - head.x, target.y - head.y);
        *head = head.translate(dx, dy);
        log_verbose!("Teleported head by ({}, {}) to ({}, {})", dx, dy, target.x, target.y);

        eat_base(ctx, items, eaten);
        Ok(())
    }
}

pub struct SpeedFood;

impl FoodBehavior for SpeedFood {
    fn eat(
        &self,
        ctx: &mut EatContext<'_>,
        items: &mut [FoodItem],
        eaten: usize,
    ) -> Result<(), SceneError> {
        eat_base(ctx, items, eaten);

        let max_fps = ctx.ticker.max_fps() * ctx.speed_factor;
        let min_fps = ctx.ticker.min_fps() * ctx.speed_factor;
        ctx.ticker.set_max_fps(max_fps);
        ctx.ticker.set_min_fps(min_fps);
        log_verbose!("Tick rate raised to {:.3}..{:.3} fps", min_fps, max_fps);
        Ok(())
    }
}

/// Food items of the active variant together with its eat behavior.
pub struct Food {
    variant: FoodVariant,
    behavior: Box<dyn FoodBehavior>,
    items: Vec<FoodItem>,
}

impl Food {
    /// Spawns the variant's items hidden. On failure nothing stays in the scene.
    pub fn new(
        variant: FoodVariant,
        field: &Field,
        rng: &mut SessionRng,
        scene: &mut dyn Scene,
    ) -> Result<Self, SceneError> {
        let behavior = variant.behavior();
        let mut items = Vec::with_capacity(behavior.item_count());

        for _ in 0..behavior.item_count() {
            let position = field.random_cell(rng);
            match scene.spawn(EntityKind::Food, field.cell_rect(position), false) {
                Ok(entity) => items.push(FoodItem {
                    position,
                    visible: false,
                    entity,
                }),
                Err(e) => {
                    for item in &items {
                        scene.despawn(item.entity);
                    }
                    return Err(e);
                }
            }
        }

        Ok(Self {
            variant,
            behavior,
            items,
        })
    }

    pub fn variant(&self) -> FoodVariant {
        self.variant
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// First visible item overlapping `rect`.
    pub fn overlapping(&self, field: &Field, rect: Rect) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.visible && field.cell_rect(item.position).overlaps(&rect))
    }

    pub fn show_all(&mut self, field: &Field, rng: &mut SessionRng, scene: &mut dyn Scene) {
        for item in &mut self.items {
            relocate(item, field, rng, scene);
            item.visible = true;
            scene.set_visible(item.entity, true);
        }
    }

    pub fn hide_all(&mut self, scene: &mut dyn Scene) {
        for item in &mut self.items {
            item.visible = false;
            scene.set_visible(item.entity, false);
        }
    }

    pub fn discard(self, scene: &mut dyn Scene) {
        for item in self.items {
            scene.despawn(item.entity);
        }
    }

    pub fn eat(&mut self, ctx: &mut EatContext<'_>, eaten: usize) -> Result<(), SceneError> {
        self.behavior.eat(ctx, &mut self.items, eaten)
    }

    #[cfg(test)]
    pub(crate) fn put_item(&mut self, index: usize, position: Point, field: &Field, scene: &mut dyn Scene) {
        let item = &mut self.items[index];
        item.position = position;
        scene.place(item.entity, field.cell_rect(position));
    }
}
