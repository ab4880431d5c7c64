use glam::{Mat4, Vec2, Vec3, Vec4};
use web_sys as web;

// Pointer picking: canvas pixel to world ray to nearest photo panel.

/// Live pointer state shared between the event handlers and the frame
/// loop. `travel` accumulates drag distance so a release can be told
/// apart from a click.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub travel: f32,
}

/// Pointer position in canvas backing pixels (CSS px scaled by the
/// backing-store ratio).
pub fn pointer_canvas_px(event: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width().max(1.0) as f32;
    let h = rect.height().max(1.0) as f32;
    let sx = canvas.width() as f32 / w;
    let sy = canvas.height() as f32 / h;
    Vec2::new(
        (event.client_x() as f32 - rect.left() as f32) * sx,
        (event.client_y() as f32 - rect.top() as f32) * sy,
    )
}

/// World-space ray through a backing pixel for the current camera pose.
/// `inv_view_proj` must invert the same matrix the renderer draws with.
pub fn screen_ray(px: Vec2, size: Vec2, eye: Vec3, inv_view_proj: Mat4) -> (Vec3, Vec3) {
    let ndc = Vec2::new(
        px.x / size.x.max(1.0) * 2.0 - 1.0,
        1.0 - px.y / size.y.max(1.0) * 2.0,
    );
    let far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let far = far.truncate() / far.w;
    (eye, (far - eye).normalize_or_zero())
}

/// Nearest positive hit distance of a ray against a sphere, if any.
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t0 = -b - sqrt_disc;
    let t1 = -b + sqrt_disc;
    if t0 > 0.0 {
        Some(t0)
    } else if t1 > 0.0 {
        Some(t1)
    } else {
        None
    }
}

/// Index of the closest sphere the ray hits. `spheres` is (center, radius)
/// per photo, index-aligned with the photo list.
pub fn pick_sphere(origin: Vec3, dir: Vec3, spheres: &[(Vec3, f32)]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, (center, radius)) in spheres.iter().enumerate() {
        if let Some(t) = ray_sphere(origin, dir, *center, *radius) {
            if best.map_or(true, |(_, bt)| t < bt) {
                best = Some((i, t));
            }
        }
    }
    best.map(|(i, _)| i)
}
