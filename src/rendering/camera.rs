use crate::core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// 2D scrolling camera as seen by overlay layers
///
/// Only the pixel scroll position and the viewport size matter to a layer;
/// everything else about the host's camera stays on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Camera {
    /// World x of the screen's left edge, in pixels
    pub draw_offset_x: i32,
    /// World y of the screen's top edge, in pixels
    pub draw_offset_y: i32,
    /// Viewport width in pixels
    pub screen_width: u32,
    /// Viewport height in pixels
    pub screen_height: u32,
}

impl Camera {
    /// Create a camera at the world origin
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            draw_offset_x: 0,
            draw_offset_y: 0,
            screen_width,
            screen_height,
        }
    }

    /// Same camera scrolled to a different offset
    pub fn with_offset(mut self, draw_offset_x: i32, draw_offset_y: i32) -> Self {
        self.set_offset(draw_offset_x, draw_offset_y);
        self
    }

    /// Update camera scroll position
    pub fn set_offset(&mut self, draw_offset_x: i32, draw_offset_y: i32) {
        self.draw_offset_x = draw_offset_x;
        self.draw_offset_y = draw_offset_y;
    }

    /// Update viewport size
    pub fn set_screen_size(&mut self, screen_width: u32, screen_height: u32) {
        self.screen_width = screen_width;
        self.screen_height = screen_height;
    }

    /// Scroll by a pixel delta
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.draw_offset_x = self.draw_offset_x.saturating_add(dx);
        self.draw_offset_y = self.draw_offset_y.saturating_add(dy);
    }

    /// Scroll so the world point `(x, y)` sits in the middle of the screen
    pub fn center_on(&mut self, x: i32, y: i32) {
        self.set_offset(
            x.saturating_sub((self.screen_width / 2) as i32),
            y.saturating_sub((self.screen_height / 2) as i32),
        );
    }

    /// World-space rectangle covered by the screen, as `(left, top, right, bottom)`
    pub fn visible_rect(&self) -> (i32, i32, i32, i32) {
        (
            self.draw_offset_x,
            self.draw_offset_y,
            self.draw_offset_x.saturating_add(self.screen_width as i32),
            self.draw_offset_y.saturating_add(self.screen_height as i32),
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_is_arcade_screen() {
        let camera = Camera::default();
        assert_eq!(camera.screen_width, 160);
        assert_eq!(camera.screen_height, 120);
        assert_eq!((camera.draw_offset_x, camera.draw_offset_y), (0, 0));
    }

    #[test]
    fn test_pan_and_center() {
        let mut camera = Camera::new(160, 120);
        camera.pan(20, 10);
        camera.pan(-5, 0);
        assert_eq!((camera.draw_offset_x, camera.draw_offset_y), (15, 10));

        camera.center_on(100, 100);
        assert_eq!((camera.draw_offset_x, camera.draw_offset_y), (20, 40));
        assert_eq!(camera.visible_rect(), (20, 40, 180, 160));
    }

    #[test]
    fn test_resize_and_pan_at_world_edge() {
        let mut camera = Camera::default().with_offset(i32::MAX - 1, 0);
        camera.set_screen_size(320, 240);
        assert_eq!((camera.screen_width, camera.screen_height), (320, 240));

        camera.pan(10, 0);
        assert_eq!(camera.draw_offset_x, i32::MAX);
        assert_eq!(camera.visible_rect(), (i32::MAX, 0, i32::MAX, 240));
    }
}
