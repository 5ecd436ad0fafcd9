//! Pixel sinks: where finished 8-bit RGBA pixels go.

use glint_math::Color;

/// Destination for rendered pixels.
pub trait PixelSink {
    /// Frame width in pixels.
    fn width(&self) -> u32;

    /// Frame height in pixels.
    fn height(&self) -> u32;

    /// Store the RGBA value of pixel (x, y).
    fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]);
}

/// Convert one channel to a byte the way an 8-bit clamped canvas does:
/// clamp to [0, 255], round half to even, NaN becomes 0.
#[inline]
pub fn channel_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

/// Convert a 0-255 scale color to opaque RGBA bytes.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    [
        channel_to_byte(color.x),
        channel_to_byte(color.y),
        channel_to_byte(color.z),
        255,
    ]
}

/// Flat RGBA byte buffer laid out like canvas image data:
/// pixel (x, y) starts at byte `(y * width + x) * 4`.
///
/// Starts zeroed, i.e. fully transparent black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Create a new transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Convert into an `image` buffer for saving.
    pub fn into_image(self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data)
    }
}

impl PixelSink for RgbaBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }
}

impl PixelSink for image::RgbaImage {
    fn width(&self) -> u32 {
        image::ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        image::ImageBuffer::height(self)
    }

    fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        self.put_pixel(x, y, image::Rgba(rgba));
    }
}
