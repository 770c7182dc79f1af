use crate::traits::{Screen, TileImage};

#[cfg(feature = "software")]
use crate::Result;
#[cfg(feature = "software")]
use image::{Rgba, RgbaImage};

/// One blit issued to a [`RenderContext`]
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand<I> {
    pub image: I,
    pub x: i32,
    pub y: i32,
}

/// Screen that records blits instead of compositing them
///
/// Useful for hosts that composite later, and for checking exactly what a
/// layer asked to draw.
#[derive(Debug, Clone)]
pub struct RenderContext<I> {
    pub width: u32,
    pub height: u32,
    /// Blits recorded since the last `begin_frame`
    pub drawing_queue: Vec<DrawCommand<I>>,
    /// Whether blits falling entirely off-screen are dropped
    pub clipping_enabled: bool,
}

impl<I: TileImage + Clone> RenderContext<I> {
    /// Create a new render context
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            drawing_queue: Vec::new(),
            clipping_enabled: false,
        }
    }

    /// Begin a frame
    pub fn begin_frame(&mut self) {
        self.drawing_queue.clear();
    }

    /// Get the current drawing queue
    pub fn get_drawing_queue(&self) -> &[DrawCommand<I>] {
        &self.drawing_queue
    }

    /// Enable or disable clipping
    pub fn set_clipping_enabled(&mut self, enabled: bool) {
        self.clipping_enabled = enabled;
    }

    fn is_off_screen(&self, image: &I, x: i32, y: i32) -> bool {
        x + image.width() as i32 <= 0
            || y + image.height() as i32 <= 0
            || x >= self.width as i32
            || y >= self.height as i32
    }
}

impl<I: TileImage + Clone> Screen<I> for RenderContext<I> {
    fn draw_transparent_image(&mut self, image: &I, x: i32, y: i32) {
        if self.clipping_enabled && self.is_off_screen(image, x, y) {
            return;
        }
        self.drawing_queue.push(DrawCommand {
            image: image.clone(),
            x,
            y,
        });
    }
}

#[cfg(feature = "software")]
impl TileImage for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }
}

/// Software RGBA screen
///
/// Tiles are alpha-composited onto the surface; fully transparent pixels
/// leave whatever is underneath untouched.
#[cfg(feature = "software")]
#[derive(Debug, Clone)]
pub struct ImageScreen {
    pixels: RgbaImage,
    blits: usize,
}

#[cfg(feature = "software")]
impl ImageScreen {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            blits: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Paint the whole surface one colour and reset the blit counter
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = color;
        }
        self.blits = 0;
    }

    /// Fill with transparent black
    pub fn clear(&mut self) {
        self.fill(Rgba([0, 0, 0, 0]));
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Blits since the last fill
    pub fn blit_count(&self) -> usize {
        self.blits
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Write the surface to disk; the format follows the file extension
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        self.pixels.save(path)?;
        Ok(())
    }
}

#[cfg(feature = "software")]
impl Screen<RgbaImage> for ImageScreen {
    fn draw_transparent_image(&mut self, image: &RgbaImage, x: i32, y: i32) {
        image::imageops::overlay(&mut self.pixels, image, x as i64, y as i64);
        self.blits += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Block(u32);

    impl TileImage for Block {
        fn width(&self) -> u32 {
            self.0
        }

        fn height(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_render_context_records_blits() {
        let mut context = RenderContext::new(32, 32);
        context.draw_transparent_image(&Block(16), -4, 8);
        context.draw_transparent_image(&Block(16), 40, 0);

        let queue = context.get_drawing_queue();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0], DrawCommand { image: Block(16), x: -4, y: 8 });

        context.begin_frame();
        assert!(context.get_drawing_queue().is_empty());
    }

    #[test]
    fn test_render_context_clipping() {
        let mut context = RenderContext::new(32, 32);
        context.set_clipping_enabled(true);

        context.draw_transparent_image(&Block(16), -16, 0); // just off the left edge
        context.draw_transparent_image(&Block(16), -15, 0);
        context.draw_transparent_image(&Block(16), 32, 0); // just off the right edge
        context.draw_transparent_image(&Block(16), 31, 31);

        let xs: Vec<i32> = context.get_drawing_queue().iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![-15, 31]);
    }

    #[cfg(feature = "software")]
    #[test]
    fn test_image_screen_respects_transparency() {
        let red = Rgba([255, 0, 0, 255]);
        let blue = Rgba([0, 0, 255, 255]);

        let mut tile = RgbaImage::from_pixel(2, 2, red);
        tile.put_pixel(1, 1, Rgba([0, 0, 0, 0]));

        let mut screen = ImageScreen::new(4, 4);
        screen.fill(blue);
        screen.draw_transparent_image(&tile, 1, 1);

        assert_eq!(screen.pixel(0, 0), blue);
        assert_eq!(screen.pixel(1, 1), red);
        assert_eq!(screen.pixel(2, 1), red);
        assert_eq!(screen.pixel(2, 2), blue, "transparent pixel keeps the background");
        assert_eq!(screen.blit_count(), 1);
    }

    #[cfg(feature = "software")]
    #[test]
    fn test_image_screen_clips_partial_tiles() {
        let green = Rgba([0, 255, 0, 255]);
        let tile = RgbaImage::from_pixel(4, 4, green);

        let mut screen = ImageScreen::new(4, 4);
        assert_eq!((screen.width(), screen.height()), (4, 4));
        screen.clear();
        screen.draw_transparent_image(&tile, -3, 2);

        assert_eq!(screen.pixel(0, 2), green);
        assert_eq!(screen.pixel(0, 3), green);
        assert_eq!(screen.pixel(1, 2), Rgba([0, 0, 0, 0]));
        assert_eq!(screen.pixel(0, 1), Rgba([0, 0, 0, 0]));

        let image = screen.into_image();
        assert_eq!(image.dimensions(), (4, 4));
        assert_eq!(*image.get_pixel(0, 3), green);
    }
}
