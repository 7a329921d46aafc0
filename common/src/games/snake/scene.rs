use std::collections::HashMap;

use super::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Wall,
    Food,
    SnakeBody,
    SnakeHead,
}

impl EntityKind {
    /// Lower layers are painted first.
    pub fn layer(&self) -> u8 {
        match self {
            EntityKind::Wall => 0,
            EntityKind::Food => 1,
            EntityKind::SnakeBody => 2,
            EntityKind::SnakeHead => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    SpawnFailed { kind: EntityKind, reason: String },
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::SpawnFailed { kind, reason } => {
                write!(f, "Failed to create {:?} entity: {}", kind, reason)
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Rendering collaborator. The engine owns all game positions and mirrors
/// them here; ids handed out by `spawn` must stay valid until `despawn`.
/// Passing an unknown id to any other method is a wiring defect.
pub trait Scene {
    fn spawn(&mut self, kind: EntityKind, rect: Rect, visible: bool) -> Result<EntityId, SceneError>;
    fn place(&mut self, id: EntityId, rect: Rect);
    fn set_visible(&mut self, id: EntityId, visible: bool);
    fn despawn(&mut self, id: EntityId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub rect: Rect,
    pub visible: bool,
}

/// In-memory entity table. Hosts paint it; headless runs and benches use it as is.
#[derive(Default)]
pub struct RetainedScene {
    entities: HashMap<EntityId, Entity>,
    next_id: u64,
}

impl RetainedScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// All entities in paint order: by layer, then by creation order.
    pub fn entities(&self) -> Vec<&Entity> {
        let mut entities: Vec<&Entity> = self.entities.values().collect();
        entities.sort_by_key(|e| (e.kind.layer(), e.id));
        entities
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.entities.values().filter(|e| e.kind == kind).count()
    }

    fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        self.entities
            .get_mut(&id)
            .unwrap_or_else(|| panic!("Scene has no entity {:?}", id))
    }
}

impl Scene for RetainedScene {
    fn spawn(&mut self, kind: EntityKind, rect: Rect, visible: bool) -> Result<EntityId, SceneError> {
        self.next_id += 1;
        let id = EntityId::new(self.next_id);
        self.entities.insert(id, Entity { id, kind, rect, visible });
        Ok(id)
    }

    fn place(&mut self, id: EntityId, rect: Rect) {
        self.entity_mut(id).rect = rect;
    }

    fn set_visible(&mut self, id: EntityId, visible: bool) {
        self.entity_mut(id).visible = visible;
    }

    fn despawn(&mut self, id: EntityId) {
        if self.entities.remove(&id).is_none() {
            panic!("Scene has no entity {:?}", id);
        }
    }
}
