use crate::systems::picking::Ray;
use glam::{Mat4, Vec3};

/// Perspective camera for the 3D scene, fixed at z = 15 looking down -Z.
/// Its one job beyond projection is translating a normalized viewport
/// pick coordinate into a world-space ray for hit resolution.
pub struct Camera3D {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Camera position in scene space.
    pub pos: Vec3,
}

impl Camera3D {
    pub fn new() -> Self {
        Self {
            fov_y_deg: 75.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            pos: Vec3::new(0.0, 0.0, 15.0),
        }
    }

    /// Update the aspect ratio (e.g. on window resize).
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_width > 0.0 && viewport_height > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }

    /// Perspective projection matrix (depth range [0, 1]).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    /// View matrix looking down -Z.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.pos, self.pos + Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Build a world-space pick ray from a normalized device coordinate
    /// (x right, y up, both in [-1, 1]). The ray starts at the camera and
    /// passes through the pick point on the near plane.
    pub fn pick_ray(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let inv = self.view_projection().inverse();
        let near_point = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        Ray {
            origin: self.pos,
            dir: (near_point - self.pos).normalize(),
        }
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pick_looks_straight_ahead() {
        let cam = Camera3D::new();
        let ray = cam.pick_ray(0.0, 0.0);
        assert_eq!(ray.origin, cam.pos);
        assert!(ray.dir.z < -0.999, "dir was {:?}", ray.dir);
        assert!(ray.dir.x.abs() < 1e-4);
        assert!(ray.dir.y.abs() < 1e-4);
    }

    #[test]
    fn off_center_pick_tilts_the_ray() {
        let cam = Camera3D::new();
        let right = cam.pick_ray(0.5, 0.0);
        assert!(right.dir.x > 0.0);
        let up = cam.pick_ray(0.0, 0.5);
        assert!(up.dir.y > 0.0);
    }

    #[test]
    fn projected_point_picks_back_onto_itself() {
        let cam = Camera3D::new();
        let point = Vec3::new(2.0, 2.0, -10.0);
        let ndc = cam.view_projection().project_point3(point);
        let ray = cam.pick_ray(ndc.x, ndc.y);

        // Distance from the point to the ray line should be ~0.
        let offset = point - ray.origin;
        let dist = offset.cross(ray.dir).length();
        assert!(dist < 1e-3, "distance was {}", dist);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = Camera3D::new();
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        // Degenerate sizes are ignored.
        cam.resize(0.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }
}
