use crate::api::types::TargetId;
use crate::core::registry::TargetRegistry;
use glam::Vec3;

/// A world-space pick ray, built by the camera from a normalized
/// viewport coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Slab-method ray/AABB intersection. Returns the entry distance along
/// the ray, or None if the ray misses the box. A ray starting inside the
/// box hits at distance 0.
fn ray_aabb(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_min = 0.0f32;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.dir[axis];
        if dir.abs() < 1e-8 {
            // Parallel to the slab: must already be within it.
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
        } else {
            let inv = 1.0 / dir;
            let t1 = (min[axis] - origin) * inv;
            let t2 = (max[axis] - origin) * inv;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
            if t_min > t_max {
                return None;
            }
        }
    }

    Some(t_min)
}

/// Find the nearest target intersecting the ray. Closest hit wins; the
/// strict comparison keeps the earliest registry entry on exact ties.
/// An empty registry or a miss yields None and changes nothing.
pub fn resolve_pick(registry: &TargetRegistry, ray: &Ray) -> Option<TargetId> {
    let mut best: Option<(f32, TargetId)> = None;
    for target in registry.iter() {
        let (min, max) = target.aabb();
        if let Some(t) = ray_aabb(ray, min, max) {
            if best.map_or(true, |(best_t, _)| t < best_t) {
                best = Some((t, target.id));
            }
        }
    }
    best.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::target::LetterTarget;

    fn ray_down_z(x: f32, y: f32) -> Ray {
        Ray {
            origin: Vec3::new(x, y, 15.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        }
    }

    fn target(id: u32, pos: Vec3) -> LetterTarget {
        LetterTarget::new(TargetId(id), 'A').with_pos(pos)
    }

    #[test]
    fn empty_registry_is_a_no_op() {
        let reg = TargetRegistry::new();
        assert!(resolve_pick(&reg, &ray_down_z(0.0, 0.0)).is_none());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn hits_target_on_the_ray() {
        let mut reg = TargetRegistry::new();
        reg.spawn(target(1, Vec3::new(0.0, 2.0, -10.0)));
        assert_eq!(resolve_pick(&reg, &ray_down_z(0.0, 2.0)), Some(TargetId(1)));
    }

    #[test]
    fn misses_target_off_the_ray() {
        let mut reg = TargetRegistry::new();
        reg.spawn(target(1, Vec3::new(5.0, 2.0, -10.0)));
        assert!(resolve_pick(&reg, &ray_down_z(0.0, 2.0)).is_none());
    }

    #[test]
    fn nearest_target_wins() {
        let mut reg = TargetRegistry::new();
        reg.spawn(target(1, Vec3::new(0.0, 2.0, -12.0)));
        reg.spawn(target(2, Vec3::new(0.0, 2.0, -6.0)));
        // Ray travels toward -z; the box at -6 is closer to the origin.
        assert_eq!(resolve_pick(&reg, &ray_down_z(0.0, 2.0)), Some(TargetId(2)));
    }

    #[test]
    fn exact_tie_keeps_registry_order() {
        let mut reg = TargetRegistry::new();
        // Two targets at the same depth, both under the ray.
        reg.spawn(target(7, Vec3::new(0.2, 2.0, -10.0)));
        reg.spawn(target(8, Vec3::new(-0.2, 2.0, -10.0)));
        assert_eq!(resolve_pick(&reg, &ray_down_z(0.0, 2.0)), Some(TargetId(7)));
    }

    #[test]
    fn ray_starting_inside_box_hits_at_zero() {
        let ray = Ray {
            origin: Vec3::new(0.0, 2.0, -10.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        let t = target(1, Vec3::new(0.0, 2.0, -10.0));
        let (min, max) = t.aabb();
        assert_eq!(ray_aabb(&ray, min, max), Some(0.0));
    }

    #[test]
    fn box_behind_ray_is_missed() {
        let ray = Ray {
            origin: Vec3::new(0.0, 2.0, -20.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        let t = target(1, Vec3::new(0.0, 2.0, -10.0));
        let (min, max) = t.aabb();
        assert!(ray_aabb(&ray, min, max).is_none());
    }
}
