use glam::Vec2;
use site_core::pixels_to_ndc;
use web_sys as web;

/// Events that abort a drag. The canvas holds pointer capture while
/// dragging, so leaving the canvas does not end a drag; only a cancel or a
/// lost capture does.
pub const DRAG_CANCEL_EVENTS: &[&str] = &["pointercancel", "lostpointercapture"];

/// Map a CSS-pixel offset inside an element to its backing-store pixels.
#[inline]
pub fn css_to_backing(css: Vec2, css_size: Vec2, backing: Vec2) -> Vec2 {
    if css_size.x <= 0.0 || css_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    css / css_size * backing
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let css = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    css_to_backing(
        css,
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let px = pointer_canvas_px(ev, canvas);
    pixels_to_ndc(px, canvas.width() as f32, canvas.height() as f32)
}

/// Backing-store aspect ratio, guarded against a collapsed canvas.
#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}
