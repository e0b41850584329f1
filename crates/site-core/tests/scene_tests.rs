// Host-side tests for hero camera math and the glider mesh.

use glam::{Vec2, Vec3};
use site_core::{
    glider_mesh, hits_glider, model_matrix, ndc_to_pixels, pixels_to_ndc, pointer_on_drag_plane,
    ray_plane_z, ray_sphere, Camera, Pose, SceneUniforms,
};

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn hero_camera_looks_down_negative_z() {
    let cam = Camera::hero(3.0);
    let (ro, rd) = cam.ray_from_ndc(Vec2::ZERO);
    assert_eq!(ro, Vec3::new(0.0, 2.0, 10.0));
    assert!((rd - Vec3::NEG_Z).length() < 1e-4);
    let center = cam.project(Vec3::new(0.0, 2.0, 0.0)).unwrap();
    assert!(approx(center, Vec2::ZERO));
}

#[test]
fn project_then_unproject_lands_on_drag_plane() {
    let cam = Camera::hero(16.0 / 6.0);
    for p in [
        Vec2::new(1.5, 2.3),
        Vec2::new(-3.0, 1.0),
        Vec2::new(0.0, 0.5),
    ] {
        let ndc = cam.project(p.extend(0.0)).unwrap();
        let back = pointer_on_drag_plane(&cam, ndc).unwrap();
        assert!(approx(back, p), "{p:?} came back as {back:?}");
    }
}

#[test]
fn points_behind_camera_do_not_project() {
    let cam = Camera::hero(1.0);
    assert!(cam.project(Vec3::new(0.0, 2.0, 20.0)).is_none());
}

#[test]
fn glider_is_hit_only_near_its_position() {
    let cam = Camera::hero(3.0);
    let at = Vec2::new(1.0, 2.0);
    let ndc = cam.project(at.extend(0.0)).unwrap();
    assert!(hits_glider(&cam, ndc, at));
    assert!(!hits_glider(&cam, Vec2::new(0.99, -0.99), at));
}

#[test]
fn ray_sphere_hits_and_misses() {
    let center = Vec3::new(0.0, 0.0, 5.0);
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, center, 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, center, 2.0).is_none());
}

#[test]
fn ray_plane_rejects_parallel_and_backward_rays() {
    assert!(ray_plane_z(Vec3::new(0.0, 0.0, 5.0), Vec3::X, 0.0).is_none());
    assert!(ray_plane_z(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, 0.0).is_none());
    let hit = ray_plane_z(Vec3::new(1.0, 1.0, 5.0), Vec3::NEG_Z, 0.0).unwrap();
    assert_eq!(hit, Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn pixel_and_ndc_conversions_agree() {
    assert_eq!(pixels_to_ndc(Vec2::ZERO, 800.0, 400.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pixels_to_ndc(Vec2::new(800.0, 400.0), 800.0, 400.0), Vec2::new(1.0, -1.0));
    let px = Vec2::new(123.0, 77.0);
    let back = ndc_to_pixels(pixels_to_ndc(px, 800.0, 400.0), 800.0, 400.0);
    assert!(approx(back, px));
}

#[test]
fn model_matrix_places_the_glider_at_its_pose() {
    let pose = Pose {
        translation: Vec2::new(-2.0, 1.5),
        roll: 0.3,
        pitch: -0.1,
    };
    let m = model_matrix(&pose);
    let origin = m.transform_point3(Vec3::ZERO);
    assert!((origin - Vec3::new(-2.0, 1.5, 0.0)).length() < 1e-5);
}

#[test]
fn mesh_is_a_flat_shaded_triangle_list() {
    let mesh = glider_mesh();
    assert_eq!(mesh.len() % 3, 0);
    assert!(!mesh.is_empty());
    for v in &mesh {
        let n = Vec3::from(v.normal).length();
        assert!((n - 1.0).abs() < 1e-4);
    }
}

#[test]
fn uniforms_are_uniform_buffer_aligned() {
    assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    let u = SceneUniforms::new(&Camera::hero(2.0), &Pose::default());
    assert_eq!(u.color[3], 1.0);
}
