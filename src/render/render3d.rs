//! Wall column renderer.
use crate::render::framebuffer::Framebuffer;
use crate::render::projector::Projector;

/// Draws one 1-px strip per column from precomputed distances.
pub fn render_walls(fb: &mut Framebuffer, distances: &[f32], projector: &Projector) {
    for (i, &d) in distances.iter().enumerate() {
        let strip = projector.project(d);
        fb.fill_rect(i as f32, strip.top, 1.0, strip.height, strip.shade);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Color;

    #[test]
    fn columns_are_centered_and_shaded() {
        let mut fb = Framebuffer::new(2, 100);
        let p = Projector::new(100.0, 0.02);
        // 100 / (100 * 0.02) = 50 px, rows 25..75
        render_walls(&mut fb, &[1.0, 100.0], &p);
        assert_eq!(fb.get_pixel(0, 0), Color::new(254, 254, 254, 255));
        assert_eq!(fb.get_pixel(1, 24), Color::BLACK);
        assert_eq!(fb.get_pixel(1, 25), Color::new(155, 155, 155, 255));
        assert_eq!(fb.get_pixel(1, 74), Color::new(155, 155, 155, 255));
        assert_eq!(fb.get_pixel(1, 75), Color::BLACK);
    }
}
