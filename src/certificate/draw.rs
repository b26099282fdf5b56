use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::imageops::{self, FilterType};
use image::{DynamicImage, Pixel, Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use super::fonts::Typeface;

pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Builtin glyphs are 8x8 cells drawn at this integer scale.
const BUILTIN_SCALE: u32 = 2;
const BUILTIN_CELL: u32 = 8;

/// Resizes to exactly `width` x `height`, ignoring aspect ratio.
pub fn fit(image: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    image
        .resize_exact(width, height, FilterType::CatmullRom)
        .to_rgba8()
}

/// Alpha-composites `image` with its top-left corner at (x, y). Pixels
/// falling outside the canvas are clipped.
pub fn paste(canvas: &mut RgbaImage, image: &RgbaImage, x: i32, y: i32) {
    imageops::overlay(canvas, image, i64::from(x), i64::from(y));
}

/// Draws one line of text; (x, y) is the top-left of the line box.
pub fn draw_text(canvas: &mut RgbaImage, face: &Typeface, x: i32, y: i32, color: Rgba<u8>, text: &str) {
    match face {
        Typeface::Outline { font, px } => draw_outline(canvas, font, *px, x, y, color, text),
        Typeface::Builtin => draw_builtin(canvas, x, y, color, text),
    }
}

/// `px` is an em size; rusttype scales by ascent-to-descent height.
fn em_scale(font: &Font<'static>, px: f32) -> Scale {
    let vm = font.v_metrics_unscaled();
    let height_units = vm.ascent - vm.descent;
    let upem = f32::from(font.units_per_em().max(1));
    Scale::uniform(px * height_units / upem)
}

fn draw_outline(
    canvas: &mut RgbaImage,
    font: &Font<'static>,
    px: f32,
    x: i32,
    y: i32,
    color: Rgba<u8>,
    text: &str,
) {
    let scale = em_scale(font, px);
    let baseline = y as f32 + font.v_metrics(scale).ascent;

    for glyph in font.layout(text, scale, point(x as f32, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let alpha = (coverage * f32::from(color[3])).round() as u8;
            blend(canvas, gx as i32 + bb.min.x, gy as i32 + bb.min.y, color, alpha);
        });
    }
}

fn draw_builtin(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
    let advance = (BUILTIN_CELL * BUILTIN_SCALE) as i32;

    for (i, ch) in text.chars().enumerate() {
        let rows = builtin_glyph(ch);
        let origin_x = x + i as i32 * advance;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..BUILTIN_CELL {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..BUILTIN_SCALE {
                    for dx in 0..BUILTIN_SCALE {
                        let px = origin_x + (col * BUILTIN_SCALE + dx) as i32;
                        let py = y + (row as u32 * BUILTIN_SCALE + dy) as i32;
                        blend(canvas, px, py, color, color[3]);
                    }
                }
            }
        }
    }
}

fn builtin_glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn blend(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, alpha: u8) {
    if alpha == 0 || x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    let src = Rgba([color[0], color[1], color[2], alpha]);
    canvas.get_pixel_mut(x, y).blend(&src);
}
