use raylib::prelude::*;
use raylib::core::texture::RaylibTexture2D; // trait para .update_texture()

/// CPU draw surface, row-major RGBA.
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.color_buffer[self.index(x, y)] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[self.index(x, y)];
        }
        self.background_color
    }

    /// Fills the axis-aligned rectangle, clipped to the surface.
    /// Pixel centers inside `[x, x+w) x [y, y+h)` are painted.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if !(w > 0.0 && h > 0.0) { return; }
        let x0 = (x - 0.5).ceil().max(0.0);
        let y0 = (y - 0.5).ceil().max(0.0);
        let x1 = (x + w - 0.5).ceil().min(self.width as f32);
        let y1 = (y + h - 0.5).ceil().min(self.height as f32);
        if x0 >= x1 || y0 >= y1 { return; }
        let (x0, x1, y0, y1) = (x0 as u32, x1 as u32, y0 as u32, y1 as u32);
        for py in y0..y1 {
            let (a, b) = (self.index(x0, py), self.index(x1, py));
            self.color_buffer[a..b].fill(color);
        }
    }

    /// Sube los píxeles a una textura persistente del mismo tamaño.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) {
        // &[Color] → &[u8] (RGBA8) sin copiar
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        let bytes: &[u8] = unsafe {
            std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len)
        };
        if let Err(e) = tex.update_texture(bytes) {
            tracing::warn!(error = ?e, "framebuffer upload failed");
        }
    }
}
