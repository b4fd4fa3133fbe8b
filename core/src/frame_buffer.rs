use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

pub const PLANE_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// One byte (0 or 1) per pixel, indexed as `y * DISPLAY_WIDTH + x`
pub type Plane = [u8; PLANE_SIZE];

/// Resolution that programs address.
///
/// Planes are always stored at the high resolution; in low resolution every logical pixel
/// covers a 2x2 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    LowRes,
    HighRes,
}

impl DisplayMode {
    pub fn width(self) -> usize {
        DISPLAY_WIDTH / self.scale()
    }

    pub fn height(self) -> usize {
        DISPLAY_HEIGHT / self.scale()
    }

    /// Physical pixels per logical pixel along each axis
    pub fn scale(self) -> usize {
        match self {
            DisplayMode::LowRes => 2,
            DisplayMode::HighRes => 1,
        }
    }
}

/// What happens to the parts of a sprite that run off the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edges {
    Clip,
    Wrap,
}

/// A monochrome bitmap, 8 or 16 pixels wide, most significant bit leftmost.
pub struct Sprite<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> Sprite<'a> {
    /// # Arguments
    /// * `data` at least `width / 8 * height` bytes of row data
    /// * `width` 8 or 16
    /// * `height` rows
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Self {
        Sprite {
            data,
            width,
            height,
        }
    }

    /// Bytes of memory the sprite occupies
    pub fn size(width: usize, height: usize) -> usize {
        width / 8 * height
    }

    fn pixel(&self, x: usize, y: usize) -> bool {
        let byte = self.data[y * (self.width / 8) + x / 8];
        (byte >> (7 - x % 8)) & 1 == 1
    }
}

/// Iterates over the plane indices (0 and/or 1) selected by a bitplane mask
pub fn selected_planes(bitplane: u8) -> impl Iterator<Item = usize> {
    (0..2).filter(move |&plane| bitplane & (1u8 << plane) != 0)
}

/// # Frame Buffer
/// Two parallel bit-planes plus the state that decides how they are drawn to.
///
/// - `mode` selects the logical resolution
/// - `bitplane` is a mask (bit 0 = plane 1, bit 1 = plane 2) of the planes that
///   clear, scroll and draw operations affect
/// - `dirty` is set whenever pixels change and cleared by the host once it has rendered
#[derive(Clone)]
pub struct FrameBuffer {
    planes: [Plane; 2],
    mode: DisplayMode,
    bitplane: u8,
    dirty: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            planes: [[0; PLANE_SIZE]; 2],
            mode: DisplayMode::LowRes,
            bitplane: 0x1,
            dirty: false,
        }
    }

    pub fn reset(&mut self) {
        *self = FrameBuffer::new();
    }

    /// # Arguments
    /// * `plane` 0 for the first bit-plane, 1 for the second
    pub fn plane(&self, plane: usize) -> &Plane {
        &self.planes[plane]
    }

    pub fn planes(&self) -> &[Plane; 2] {
        &self.planes
    }

    /// Physical pixel of a plane
    pub fn pixel(&self, plane: usize, x: usize, y: usize) -> u8 {
        self.planes[plane][y * DISPLAY_WIDTH + x]
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Switching resolution always blanks both planes, whatever the bitplane mask.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.planes = [[0; PLANE_SIZE]; 2];
        self.dirty = true;
    }

    pub fn bitplane(&self) -> u8 {
        self.bitplane
    }

    pub fn select_bitplane(&mut self, mask: u8) {
        self.bitplane = mask & 0x3;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Blank the selected planes
    pub fn clear(&mut self) {
        for plane in selected_planes(self.bitplane) {
            self.planes[plane].fill(0);
        }
        self.dirty = true;
    }

    /// XOR a sprite onto one plane with its top left corner at logical (`x`, `y`).
    ///
    /// The origin always wraps onto the screen; `edges` decides what happens to the rest.
    /// Returns true if any set pixel was cleared.
    pub fn draw(
        &mut self,
        plane: usize,
        x: usize,
        y: usize,
        sprite: &Sprite,
        edges: Edges,
    ) -> bool {
        let (width, height) = (self.mode.width(), self.mode.height());
        let (x, y) = (x % width, y % height);
        let mut collided = false;

        for row in 0..sprite.height {
            let mut py = y + row;
            if py >= height {
                match edges {
                    Edges::Clip => break,
                    Edges::Wrap => py %= height,
                }
            }
            for col in 0..sprite.width {
                let mut px = x + col;
                if px >= width {
                    match edges {
                        Edges::Clip => break,
                        Edges::Wrap => px %= width,
                    }
                }
                if sprite.pixel(col, row) {
                    collided |= self.toggle(plane, px, py);
                }
            }
        }

        self.dirty = true;
        collided
    }

    /// Flip the block of physical pixels behind logical pixel (`x`, `y`)
    fn toggle(&mut self, plane: usize, x: usize, y: usize) -> bool {
        let scale = self.mode.scale();
        let origin = y * scale * DISPLAY_WIDTH + x * scale;
        let collided = self.planes[plane][origin] == 1;
        for dy in 0..scale {
            for dx in 0..scale {
                self.planes[plane][origin + dy * DISPLAY_WIDTH + dx] ^= 1;
            }
        }
        collided
    }

    /// Scroll the selected planes down by `amount` physical rows
    pub fn scroll_down(&mut self, amount: usize) {
        let shift = amount.min(DISPLAY_HEIGHT) * DISPLAY_WIDTH;
        for plane in selected_planes(self.bitplane) {
            let pixels = &mut self.planes[plane];
            pixels.copy_within(..PLANE_SIZE - shift, shift);
            pixels[..shift].fill(0);
        }
        self.dirty = true;
    }

    /// Scroll the selected planes up by `amount` physical rows
    pub fn scroll_up(&mut self, amount: usize) {
        let shift = amount.min(DISPLAY_HEIGHT) * DISPLAY_WIDTH;
        for plane in selected_planes(self.bitplane) {
            let pixels = &mut self.planes[plane];
            pixels.copy_within(shift.., 0);
            pixels[PLANE_SIZE - shift..].fill(0);
        }
        self.dirty = true;
    }

    /// Scroll the selected planes right by `amount` physical columns
    pub fn scroll_right(&mut self, amount: usize) {
        let shift = amount.min(DISPLAY_WIDTH);
        for plane in selected_planes(self.bitplane) {
            for row in self.planes[plane].chunks_exact_mut(DISPLAY_WIDTH) {
                row.copy_within(..DISPLAY_WIDTH - shift, shift);
                row[..shift].fill(0);
            }
        }
        self.dirty = true;
    }

    /// Scroll the selected planes left by `amount` physical columns
    pub fn scroll_left(&mut self, amount: usize) {
        let shift = amount.min(DISPLAY_WIDTH);
        for plane in selected_planes(self.bitplane) {
            for row in self.planes[plane].chunks_exact_mut(DISPLAY_WIDTH) {
                row.copy_within(shift.., 0);
                row[DISPLAY_WIDTH - shift..].fill(0);
            }
        }
        self.dirty = true;
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
