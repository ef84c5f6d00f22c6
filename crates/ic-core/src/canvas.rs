use crate::color::Rgba;

/// Buffer de pixels RGBA, row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use ic_core::Canvas;
/// let canvas = Canvas::new(10, 10);
/// assert_eq!(canvas.data.len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Crée un canvas transparent aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use ic_core::Canvas;
    /// let canvas = Canvas::new(6, 3);
    /// assert_eq!(canvas.pixel(5, 2), [0, 0, 0, 0]);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Accès au pixel (x, y) → [r, g, b, a]. Hors bornes : transparent.
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let idx = self.index(x, y);
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Remplit tout le canvas.
    pub fn fill(&mut self, color: Rgba) {
        let px = color.to_array();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Peint un rectangle opaque, découpé aux bornes du canvas.
    ///
    /// # Example
    /// ```
    /// use ic_core::{Canvas, Rgba};
    /// let mut canvas = Canvas::new(4, 4);
    /// canvas.fill_rect(2, 2, 10, 10, Rgba::opaque(1, 2, 3));
    /// assert_eq!(canvas.pixel(3, 3), [1, 2, 3, 255]);
    /// assert_eq!(canvas.pixel(1, 1), [0, 0, 0, 0]);
    /// ```
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end || y >= y_end {
            return;
        }

        let px = color.to_array();
        for row in y..y_end {
            let start = self.index(x, row);
            let end = self.index(x_end - 1, row) + 4;
            for chunk in self.data[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_covers_every_pixel() {
        let mut canvas = Canvas::new(7, 5);
        canvas.fill(Rgba::opaque(9, 8, 7));
        for y in 0..5 {
            for x in 0..7 {
                assert_eq!(canvas.pixel(x, y), [9, 8, 7, 255]);
            }
        }
    }

    #[test]
    fn fill_rect_exact_bounds() {
        let mut canvas = Canvas::new(6, 6);
        canvas.fill_rect(1, 2, 2, 3, Rgba::opaque(255, 0, 0));
        let painted: usize = canvas
            .data
            .chunks_exact(4)
            .filter(|p| *p == [255, 0, 0, 255])
            .count();
        assert_eq!(painted, 6);
        assert_eq!(canvas.pixel(1, 2), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(2, 4), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(3, 4), [0, 0, 0, 0]);
        assert_eq!(canvas.pixel(1, 5), [0, 0, 0, 0]);
    }

    #[test]
    fn degenerate_rects_are_noops() {
        let mut canvas = Canvas::new(3, 3);
        canvas.fill_rect(0, 0, 0, 3, Rgba::opaque(1, 1, 1));
        canvas.fill_rect(5, 5, 2, 2, Rgba::opaque(1, 1, 1));
        assert!(canvas.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn out_of_bounds_pixel_is_transparent() {
        let canvas = Canvas::new(2, 2);
        assert_eq!(canvas.pixel(2, 0), [0; 4]);
    }
}
