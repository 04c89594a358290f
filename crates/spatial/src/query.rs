//! Sphere overlap queries against the hecs world.

use glam::Vec3;
use hecs::{Entity, World};
use sim_core::{Interactable, Specimen, Transform};

/// Broad categories an overlap query can filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Entities the interaction probe may target.
    Interactable,
    /// Entities carrying capturable specimen data.
    Specimen,
}

/// Sphere overlap queries. Results come back in the implementation's
/// enumeration order; callers that take "the first hit" get exactly that,
/// not the nearest.
pub trait SpatialQuery {
    fn overlap_sphere(&self, center: Vec3, radius: f32, filter: Option<Category>) -> Vec<Entity>;
}

/// Naive O(n) scan over every positioned entity in the world.
///
/// Fine at this simulation's entity counts; swap in a grid or BVH behind the
/// same trait when the world grows.
pub struct WorldIndex<'w> {
    world: &'w World,
}

impl<'w> WorldIndex<'w> {
    pub fn new(world: &'w World) -> Self {
        Self { world }
    }
}

impl SpatialQuery for WorldIndex<'_> {
    fn overlap_sphere(&self, center: Vec3, radius: f32, filter: Option<Category>) -> Vec<Entity> {
        let r_sq = radius * radius;
        let within = |t: &Transform| t.position.distance_squared(center) <= r_sq;

        match filter {
            None => self
                .world
                .query::<&Transform>()
                .iter()
                .filter(|(_, t)| within(t))
                .map(|(e, _)| e)
                .collect(),
            Some(Category::Interactable) => self
                .world
                .query::<(&Transform, &Interactable)>()
                .iter()
                .filter(|(_, (t, _))| within(t))
                .map(|(e, _)| e)
                .collect(),
            Some(Category::Specimen) => self
                .world
                .query::<(&Transform, &Specimen)>()
                .iter()
                .filter(|(_, (t, _))| within(t))
                .map(|(e, _)| e)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_respects_radius() {
        let mut world = World::new();
        let near = world.spawn((Transform::from_position(Vec3::new(1.0, 0.0, 0.0)),));
        let far = world.spawn((Transform::from_position(Vec3::new(10.0, 0.0, 0.0)),));

        let hits = WorldIndex::new(&world).overlap_sphere(Vec3::ZERO, 2.0, None);
        assert!(hits.contains(&near));
        assert!(!hits.contains(&far));
    }

    #[test]
    fn category_filter_selects_component() {
        let mut world = World::new();
        let creature = world.spawn((
            Transform::from_position(Vec3::ZERO),
            Specimen::new("Nigersaurus"),
            Interactable,
        ));
        let prop = world.spawn((Transform::from_position(Vec3::ZERO),));

        let index = WorldIndex::new(&world);
        let specimens = index.overlap_sphere(Vec3::ZERO, 1.0, Some(Category::Specimen));
        assert_eq!(specimens, vec![creature]);

        let interactables = index.overlap_sphere(Vec3::ZERO, 1.0, Some(Category::Interactable));
        assert_eq!(interactables, vec![creature]);

        let all = index.overlap_sphere(Vec3::ZERO, 1.0, None);
        assert!(all.contains(&prop));
    }

    #[test]
    fn boundary_is_inclusive() {
        let mut world = World::new();
        let edge = world.spawn((Transform::from_position(Vec3::new(2.0, 0.0, 0.0)),));
        let hits = WorldIndex::new(&world).overlap_sphere(Vec3::ZERO, 2.0, None);
        assert!(hits.contains(&edge));
    }
}
