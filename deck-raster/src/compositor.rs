//! Symbol compositor — mask → colored sprite → canvas.

use deck_core::{Color, Point, SymbolId};
use image::{imageops, Rgba, RgbaImage};

use crate::cache::MaskCache;
use crate::mask::{Mask, RasterError};

/// One suit glyph to stamp onto a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub symbol: SymbolId,
    /// Where the sprite's centre lands, in canvas pixels.
    pub center: Point,
    /// Mask side length in pixels.
    pub size: i32,
    pub color: Color,
    /// Rotate 180° (lower-half pips read correctly upside down).
    pub rotated: bool,
}

/// Fetch the glyph's mask, colorize, optionally rotate, and paste it
/// centered at `glyph.center`. Only the canvas is mutated.
pub fn place(
    cache: &MaskCache,
    canvas: &mut RgbaImage,
    glyph: &Glyph,
) -> Result<(), RasterError> {
    let mask = cache.get_or_create(glyph.symbol, glyph.size)?;
    let mut sprite = colorize(&mask, glyph.color);
    if glyph.rotated {
        sprite = rotate_half_turn(&sprite);
    }
    paste_centered(canvas, &sprite, glyph.center);
    Ok(())
}

/// RGBA sprite whose alpha is the mask and whose RGB is `color` everywhere.
pub fn colorize(mask: &Mask, color: Color) -> RgbaImage {
    let size = mask.size();
    let mut sprite = RgbaImage::new(size, size);
    for (dst, &alpha) in sprite.pixels_mut().zip(mask.pixels()) {
        *dst = Rgba(color.with_alpha(alpha));
    }
    sprite
}

/// 180° rotation. An exact pixel permutation, so applying it twice is the
/// identity.
pub fn rotate_half_turn(sprite: &RgbaImage) -> RgbaImage {
    imageops::rotate180(sprite)
}

/// Alpha-blend `sprite` onto `canvas` with its centre at `center`.
///
/// The top-left corner is `center - size / 2`, truncated toward zero.
/// Pixels falling outside the canvas are clipped.
pub fn paste_centered(canvas: &mut RgbaImage, sprite: &RgbaImage, center: Point) {
    let left = (center.x - sprite.width() as f32 / 2.0) as i64;
    let top = (center.y - sprite.height() as f32 / 2.0) as i64;
    paste_at(canvas, sprite, left, top);
}

/// Alpha-blend (source-over) `sprite` onto `canvas` with its top-left at
/// `(left, top)`. Pixels outside the canvas are clipped.
pub fn paste_at(canvas: &mut RgbaImage, sprite: &RgbaImage, left: i64, top: i64) {
    imageops::overlay(canvas, sprite, left, top);
}

// ===================================================================
// Tests
// ===================================================================
