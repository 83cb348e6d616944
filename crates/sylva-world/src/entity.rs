use sylva_geom::{Rect, Vec2};

/// Render and collision layer an entity is registered into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Background,
    StaticObjects,
}

impl Layer {
    #[inline]
    pub fn collides(self) -> bool {
        matches!(self, Layer::StaticObjects)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Ground,
    Trunk,
    Leaf,
    Fruit,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Ground,
        EntityKind::Trunk,
        EntityKind::Leaf,
        EntityKind::Fruit,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Ground => "ground",
            EntityKind::Trunk => "trunk",
            EntityKind::Leaf => "leaf",
            EntityKind::Fruit => "fruit",
        }
    }

    pub fn layer(self) -> Layer {
        match self {
            EntityKind::Leaf => Layer::Background,
            EntityKind::Ground | EntityKind::Trunk | EntityKind::Fruit => Layer::StaticObjects,
        }
    }

    /// Fruit may hang above the top edge without being swept.
    #[inline]
    pub fn exempt_from_top_sweep(self) -> bool {
        matches!(self, EntityKind::Fruit)
    }
}

/// Which tree a part belongs to: the column the tree is rooted on and the
/// canopy slot within it. Trunks use slot 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeSlot {
    pub column: i32,
    pub slot: i32,
}

/// A generated world object. Generators return these; the caller decides
/// when and where to register them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldEntity {
    pub kind: EntityKind,
    pub rect: Rect,
    /// Set on trunks, leaves and fruit.
    pub tree: Option<TreeSlot>,
}

impl WorldEntity {
    #[inline]
    pub fn new(kind: EntityKind, rect: Rect) -> Self {
        Self {
            kind,
            rect,
            tree: None,
        }
    }

    #[inline]
    pub fn in_tree(mut self, column: i32, slot: i32) -> Self {
        self.tree = Some(TreeSlot { column, slot });
        self
    }

    /// Identity of a tree part that stays stable across regenerations.
    #[inline]
    pub fn part_key(&self) -> Option<(EntityKind, TreeSlot)> {
        self.tree.map(|t| (self.kind, t))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    #[inline]
    pub fn layer(&self) -> Layer {
        self.kind.layer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_mapping() {
        assert_eq!(EntityKind::Ground.layer(), Layer::StaticObjects);
        assert_eq!(EntityKind::Trunk.layer(), Layer::StaticObjects);
        assert_eq!(EntityKind::Fruit.layer(), Layer::StaticObjects);
        assert_eq!(EntityKind::Leaf.layer(), Layer::Background);
        assert!(!Layer::Background.collides());
        assert!(Layer::StaticObjects.collides());
    }

    #[test]
    fn only_fruit_is_exempt_from_top_sweep() {
        let exempt: Vec<_> = EntityKind::ALL
            .into_iter()
            .filter(|k| k.exempt_from_top_sweep())
            .collect();
        assert_eq!(exempt, vec![EntityKind::Fruit]);
    }

    #[test]
    fn tags() {
        let tags: Vec<_> = EntityKind::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(tags, ["ground", "trunk", "leaf", "fruit"]);
    }
}
