//! Distance to wall strip: height and gray shade.
use raylib::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallStrip {
    pub top: f32,
    pub height: f32,
    pub shade: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct Projector {
    pub viewport_height: f32,
    /// Distance scale `k` in `h = H / (d * k)`.
    pub scale: f32,
}

impl Projector {
    pub fn new(viewport_height: f32, scale: f32) -> Self {
        Self { viewport_height, scale }
    }

    /// Hyperbolic falloff capped at the viewport height.
    #[inline]
    pub fn strip_height(&self, d: f32) -> f32 {
        let h = self.viewport_height;
        (h / (d * self.scale)).min(h)
    }

    /// `255 - d`, clamped to the valid channel range.
    #[inline]
    pub fn shade(d: f32) -> Color {
        let v = (255.0 - d).clamp(0.0, 255.0) as u8;
        Color::new(v, v, v, 255)
    }

    pub fn project(&self, d: f32) -> WallStrip {
        let height = self.strip_height(d);
        WallStrip {
            top: (self.viewport_height - height) / 2.0,
            height,
            shade: Self::shade(d),
        }
    }
}
