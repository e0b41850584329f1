//! Hero scene math shared by the web and native frontends.
//!
//! These types avoid platform-specific APIs. Hosts use them to build camera
//! matrices, to turn pointer positions into points on the glider's plane,
//! and to pack per-frame uniforms for the glider pipeline.

use crate::constants::*;
use crate::glider::Pose;
use glam::{EulerRot, Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Banner camera: raised slightly and looking straight down -Z.
    pub fn hero(aspect: f32) -> Self {
        let eye = camera_eye_vec3();
        Self {
            eye,
            target: eye - Vec3::Z,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point in normalized device coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize();
        (self.eye, rd)
    }

    /// World point to NDC; `None` when it sits behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

/// Pixel coordinates (origin top-left) to NDC.
#[inline]
pub fn pixels_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((2.0 * px.x / w) - 1.0, 1.0 - (2.0 * px.y / h))
}

/// NDC to pixel coordinates (origin top-left).
#[inline]
pub fn ndc_to_pixels(ndc: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Intersection of a ray with the plane `z = plane_z`.
#[inline]
pub fn ray_plane_z(ray_origin: Vec3, ray_dir: Vec3, plane_z: f32) -> Option<Vec3> {
    if ray_dir.z.abs() <= 1e-6 {
        return None;
    }
    let t = (plane_z - ray_origin.z) / ray_dir.z;
    (t >= 0.0).then(|| ray_origin + ray_dir * t)
}

/// Where the pointer ray meets the glider's plane, in scene units.
pub fn pointer_on_drag_plane(camera: &Camera, ndc: Vec2) -> Option<Vec2> {
    let (ro, rd) = camera.ray_from_ndc(ndc);
    ray_plane_z(ro, rd, DRAG_PLANE_Z).map(|p| p.truncate())
}

/// Whether the pointer ray passes close enough to grab the glider.
pub fn hits_glider(camera: &Camera, ndc: Vec2, glider_at: Vec2) -> bool {
    let (ro, rd) = camera.ray_from_ndc(ndc);
    let center = glider_at.extend(DRAG_PLANE_Z);
    ray_sphere(ro, rd, center, PICK_SPHERE_RADIUS).is_some()
}

/// Model matrix for a pose. The mesh is turned half a revolution about y so
/// the nose faces the viewer, then pitched and banked.
pub fn model_matrix(pose: &Pose) -> Mat4 {
    let t = Vec3::new(pose.translation.x, pose.translation.y, DRAG_PLANE_Z);
    Mat4::from_translation(t)
        * Mat4::from_euler(EulerRot::XYZ, pose.pitch, std::f32::consts::PI, pose.roll)
        * Mat4::from_scale(Vec3::splat(GLIDER_SCALE))
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GliderVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub light_dir: [f32; 4], // xyz direction toward the light, w intensity
    pub ambient: [f32; 4],   // x intensity
}

impl SceneUniforms {
    pub fn new(camera: &Camera, pose: &Pose) -> Self {
        let sun = sun_direction();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: model_matrix(pose).to_cols_array_2d(),
            color: [GLIDER_COLOR[0], GLIDER_COLOR[1], GLIDER_COLOR[2], 1.0],
            light_dir: [sun.x, sun.y, sun.z, SUN_INTENSITY],
            ambient: [AMBIENT_INTENSITY, 0.0, 0.0, 0.0],
        }
    }
}

// Unit-wingspan delta wing, nose toward -Z in model space.
const NOSE: [f32; 3] = [0.0, 0.05, -0.35];
const LEFT_TIP: [f32; 3] = [-0.5, 0.0, 0.2];
const RIGHT_TIP: [f32; 3] = [0.5, 0.0, 0.2];
const KEEL_TAIL: [f32; 3] = [0.0, 0.03, 0.25];
const HANG_POINT: [f32; 3] = [0.0, 0.0, 0.0];
const BAR_LEFT: [f32; 3] = [-0.12, -0.3, 0.03];
const BAR_RIGHT: [f32; 3] = [0.12, -0.3, 0.03];

const GLIDER_TRIANGLES: [[[f32; 3]; 3]; 3] = [
    [NOSE, LEFT_TIP, KEEL_TAIL],
    [NOSE, KEEL_TAIL, RIGHT_TIP],
    [HANG_POINT, BAR_LEFT, BAR_RIGHT],
];

/// Flat-shaded triangle list for the glider (drawn double sided).
pub fn glider_mesh() -> Vec<GliderVertex> {
    let mut out = Vec::with_capacity(GLIDER_TRIANGLES.len() * 3);
    for tri in GLIDER_TRIANGLES {
        let [a, b, c] = tri.map(Vec3::from);
        let normal = (b - a).cross(c - a).normalize_or_zero().to_array();
        for p in tri {
            out.push(GliderVertex { position: p, normal });
        }
    }
    out
}
