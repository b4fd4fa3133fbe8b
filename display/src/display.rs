use sdl2::pixels::PixelFormatEnum;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::FrameBuffer;

/// RGB colours indexed by `(plane 2 << 1) | plane 1`
pub const PALETTE: [[u8; 3]; 4] = [
    [0xF9, 0xFF, 0xB3],
    [0x3D, 0x80, 0x26],
    [0x00, 0x00, 0x00],
    [0xFF, 0x00, 0xFF],
];

/// # Display
/// The frame buffer is composed of two 128x64 bit-planes.
/// Each pixel's bits in the two planes pick one of four palette colours.
/// Low resolution programs have already been scaled up by the frame buffer, so the texture
/// is always 128x64.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of bytes that represent concatenated rows of RGB pixels.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        let [first, second] = frame.planes();
        first
            .iter()
            .zip(second.iter())
            .flat_map(|(&low, &high)| PALETTE[usize::from(high << 1 | low)])
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = Display::frame_to_sdl_texture(frame);
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (row, line) in pixels.chunks_exact(self.width * 3).enumerate() {
                buffer[row * pitch..row * pitch + line.len()].copy_from_slice(line);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chip8_core::frame_buffer::{Edges, Sprite};

    #[test]
    fn test_blank_frame_is_background() {
        let frame = FrameBuffer::new();
        let texture = Display::frame_to_sdl_texture(&frame);
        assert_eq!(texture.len(), DISPLAY_WIDTH * DISPLAY_HEIGHT * 3);
        assert!(texture.chunks_exact(3).all(|pixel| pixel == PALETTE[0]));
    }

    #[test]
    fn test_frame_to_sdl_texture() {
        let mut frame = FrameBuffer::new();
        frame.set_mode(chip8_core::DisplayMode::HighRes);
        let sprite = Sprite::new(&[0xA0], 8, 1);
        frame.draw(0, 0, 0, &sprite, Edges::Clip);
        let sprite = Sprite::new(&[0x60], 8, 1);
        frame.draw(1, 0, 0, &sprite, Edges::Clip);
        let texture = Display::frame_to_sdl_texture(&frame);

        assert_eq!(&texture[0..3], &PALETTE[1]);
        assert_eq!(&texture[3..6], &PALETTE[2]);
        assert_eq!(&texture[6..9], &PALETTE[3]);
        assert_eq!(&texture[9..12], &PALETTE[0]);
        assert_eq!(&texture[DISPLAY_WIDTH * 3..DISPLAY_WIDTH * 3 + 3], &PALETTE[0]);
    }
}
