use glam::Vec3;

// Shared tuning constants used by both web and native frontends.

// Flight envelope (scene units)
pub const BOUNDS_X: (f32, f32) = (-5.0, 5.0);
pub const BOUNDS_Y: (f32, f32) = (-1.0, 3.0);

// Idle wandering
pub const WANDER_MAX_STEP: f32 = 2.0; // full width of a reroll around the current position
pub const IDLE_TICK_MS: u32 = 2000;
pub const SMOOTHING_X: f32 = 0.003; // per-frame fraction of the remaining distance
pub const SMOOTHING_Y: f32 = 0.002; // y floats ~1.5x slower than x
pub const TURBULENCE_AMPLITUDE: f32 = 0.005; // +/- jitter folded into position.x

// Vertical bob added to the rendered pose only
pub const BOB_PRIMARY: (f32, f32) = (1.2, 0.2); // (angular rate, amplitude)
pub const BOB_SECONDARY: (f32, f32) = (0.7, 0.1);

// Attitude
pub const ROLL_PER_UNIT_DX: f32 = 0.12;
pub const ROLL_SWAY: (f32, f32) = (0.8, 0.05);
pub const PITCH_PER_UNIT_DY: f32 = 0.01;
pub const PITCH_DRIFT: (f32, f32) = (0.1, 0.1);

// Hero camera (matches the banner framing)
pub const CAMERA_EYE: [f32; 3] = [0.0, 2.0, 10.0];
pub const CAMERA_FOVY_DEG: f32 = 20.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Marker sizing and picking
pub const GLIDER_SCALE: f32 = 0.55; // wingspan in scene units for the procedural mesh
pub const PICK_SPHERE_RADIUS: f32 = 0.6;
pub const DRAG_PLANE_Z: f32 = 0.0;

// Lighting (ambient + one directional light)
pub const AMBIENT_INTENSITY: f32 = 0.7;
pub const SUN_INTENSITY: f32 = 0.7;
pub const SUN_POSITION: [f32; 3] = [0.0, 10.0, 10.0];
pub const GLIDER_COLOR: [f32; 3] = [0.96, 0.76, 0.18]; // sail yellow

// Contact
pub const WHATSAPP_NUMBER: &str = "5521975931852";

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn sun_direction() -> Vec3 {
    Vec3::from(SUN_POSITION).normalize()
}
