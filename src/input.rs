use glam::Vec2;

/// Canvas box in CSS px, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Convert a client-space pointer position into normalized device
/// coordinates (x right, y up, both in [-1, 1] inside the canvas).
///
/// Returns `None` for a collapsed canvas.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, rect: CanvasRect) -> Option<Vec2> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let u = (client_x - rect.left) / rect.width;
    let v = (client_y - rect.top) / rect.height;
    Some(Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0))
}

/// Aspect ratio of a canvas backing store, falling back to square.
#[inline]
pub fn aspect(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}
