pub const PIXEL_BYTES: usize = 4;

pub type Color = [u8; PIXEL_BYTES];

/// RGBA view over one frame of the pixel buffer. Drawing outside the frame is clipped.
pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl<'a> RenderFrame<'a> {
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.buffer.chunks_exact_mut(PIXEL_BYTES)
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (x as usize + y as usize * self.width as usize) * PIXEL_BYTES;
        self.buffer.get_mut(index..index + PIXEL_BYTES)
    }

    pub fn draw_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            pixel.copy_from_slice(&color);
        }
    }

    pub fn draw_square(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);

        for y in y..y_end {
            for x in x..x_end {
                self.draw_pixel(x, y, color);
            }
        }
    }

    pub fn draw_vertical_line(&mut self, x: u32, color: Color) {
        for y in 0..self.height {
            self.draw_pixel(x, y, color);
        }
    }

    pub fn draw_horizontal_line(&mut self, y: u32, color: Color) {
        for x in 0..self.width {
            self.draw_pixel(x, y, color);
        }
    }

    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels_mut() {
            pixel.copy_from_slice(&color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = [255, 0, 0, 255];

    fn pixel(buffer: &[u8], width: u32, x: u32, y: u32) -> &[u8] {
        let index = (x + y * width) as usize * PIXEL_BYTES;
        &buffer[index..index + PIXEL_BYTES]
    }

    #[test]
    fn test_square_is_clipped() {
        let mut buffer = vec![0; 4 * 3 * PIXEL_BYTES];
        let mut frame = RenderFrame {
            width: 4,
            height: 3,
            buffer: &mut buffer,
        };

        frame.draw_square(2, 1, 10, 10, RED);

        assert_eq!(pixel(&buffer, 4, 3, 2), RED);
        assert_eq!(pixel(&buffer, 4, 2, 1), RED);
        assert_eq!(pixel(&buffer, 4, 1, 1), [0; 4]);
        assert_eq!(pixel(&buffer, 4, 3, 0), [0; 4]);
    }

    #[test]
    fn test_out_of_bounds_pixel() {
        let mut buffer = vec![0; 2 * 2 * PIXEL_BYTES];
        let mut frame = RenderFrame {
            width: 2,
            height: 2,
            buffer: &mut buffer,
        };

        // Would wrap onto the next row without the column check.
        assert!(frame.pixel_mut(2, 0).is_none());
        assert!(frame.pixel_mut(0, 2).is_none());
        assert!(frame.pixel_mut(1, 1).is_some());
    }

    #[test]
    fn test_lines() {
        let mut buffer = vec![0; 3 * 3 * PIXEL_BYTES];
        let mut frame = RenderFrame {
            width: 3,
            height: 3,
            buffer: &mut buffer,
        };

        frame.fill([9; 4]);
        frame.draw_vertical_line(0, RED);
        frame.draw_horizontal_line(2, RED);

        assert_eq!(pixel(&buffer, 3, 0, 1), RED);
        assert_eq!(pixel(&buffer, 3, 2, 2), RED);
        assert_eq!(pixel(&buffer, 3, 1, 1), [9; 4]);
    }
}
