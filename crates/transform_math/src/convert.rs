//! Interop layouts for external vector libraries.
//!
//! Renderers and FFI boundaries want plain `#[repr(C)]` structs they can
//! reinterpret as bytes, while the math in this crate works on [`glam`]
//! types. The `Raw*` types here are that external layout. Each pair converts
//! both ways by copying fields, so a round trip is bit-exact for every
//! input, NaN and infinities included.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::angles::Position;

/// Three packed `f32`s.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct RawVec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

/// Two packed `f32`s.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct RawVec2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

/// Four packed bytes in R, G, B, A order.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct RawColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

/// An 8-bit-per-channel colour with alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Create a colour from its channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack as `0xAARRGGBB`.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl From<Vec3> for RawVec3 {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<RawVec3> for Vec3 {
    fn from(v: RawVec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Position> for RawVec3 {
    fn from(p: Position) -> Self {
        p.0.into()
    }
}

impl From<RawVec3> for Position {
    fn from(v: RawVec3) -> Self {
        Position(v.into())
    }
}

impl From<Vec2> for RawVec2 {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<RawVec2> for Vec2 {
    fn from(v: RawVec2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Color> for RawColor {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<RawColor> for Color {
    fn from(c: RawColor) -> Self {
        Self::rgba(c.r, c.g, c.b, c.a)
    }
}
