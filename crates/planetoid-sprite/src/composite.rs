//! CPU compositing of sprites onto a canvas.
//!
//! Mirrors the window path: sprites are centred and blended with
//! `src * src_alpha + dst * (1 - src_alpha)` on every channel.

use crate::image::RasterImage;
use crate::renderer::RenderState;

/// Opaque black canvas colour.
pub const CANVAS_CLEAR: [u8; 4] = [0, 0, 0, 255];

/// Top-left canvas position that centres a `sprite`-sized image.
///
/// May be negative when the sprite is larger than the canvas.
pub fn centered_origin(canvas: (u32, u32), sprite: (u32, u32)) -> (i64, i64) {
    (
        (i64::from(canvas.0) - i64::from(sprite.0)) / 2,
        (i64::from(canvas.1) - i64::from(sprite.1)) / 2,
    )
}

/// Blend one RGBA pixel over another.
pub fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let alpha = f32::from(src[3]) / 255.0;
    let mut out = [0u8; 4];
    for (i, channel) in out.iter_mut().enumerate() {
        let value = f32::from(src[i]) * alpha + f32::from(dst[i]) * (1.0 - alpha);
        *channel = value.round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Blend `sprite` centred onto `canvas`, clipping at the canvas edges.
pub fn draw_centered(canvas: &mut RasterImage, sprite: &RasterImage) {
    let (ox, oy) = centered_origin(canvas.dimensions(), sprite.dimensions());

    for sy in 0..sprite.height {
        let cy = oy + i64::from(sy);
        if cy < 0 || cy >= i64::from(canvas.height) {
            continue;
        }
        for sx in 0..sprite.width {
            let cx = ox + i64::from(sx);
            if cx < 0 || cx >= i64::from(canvas.width) {
                continue;
            }
            let src = sprite.get_pixel(sx, sy);
            if src[3] == 0 {
                continue;
            }
            let (cx, cy) = (cx as u32, cy as u32);
            let blended = blend_over(src, canvas.get_pixel(cx, cy));
            canvas.set_pixel(cx, cy, blended);
        }
    }
}

/// Compose a full frame: clear, planet, then clouds on top.
pub fn compose_frame(state: &RenderState, width: u32, height: u32) -> RasterImage {
    let mut canvas = RasterImage::filled(width, height, CANVAS_CLEAR);
    draw_centered(&mut canvas, &state.planet);
    draw_centered(&mut canvas, &state.clouds);
    canvas
}
