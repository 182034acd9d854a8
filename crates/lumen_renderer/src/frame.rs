//! Frame buffer shared by the scanline tasks.
//!
//! The buffer is a flat run of RGB byte triples, row-major with row 0 at the
//! top. Clones share the same storage. Each scanline task writes only its own
//! row, so the bytes are plain relaxed atomics and need no lock; the pool's
//! completion barrier makes every write visible before the frame is read.

use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::error::RenderResult;

/// Bytes per pixel.
pub const CHANNELS: usize = 3;

/// A `width` x `height` RGB8 image.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Arc<[AtomicU8]>,
}

impl FrameBuffer {
    /// Allocate a black frame.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            width,
            height,
            data: (0..len).map(|_| AtomicU8::new(0)).collect(),
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Write the pixel at (x, y).
    #[inline]
    pub fn set_pixel(&self, x: u32, y: u32, rgb: [u8; 3]) {
        let offset = self.offset(x, y);
        for (slot, value) in self.data[offset..offset + CHANNELS].iter().zip(rgb) {
            slot.store(value, Ordering::Relaxed);
        }
    }

    /// Read the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = self.offset(x, y);
        let px = &self.data[offset..offset + CHANNELS];
        [
            px[0].load(Ordering::Relaxed),
            px[1].load(Ordering::Relaxed),
            px[2].load(Ordering::Relaxed),
        ]
    }

    /// Copy out the flat RGB bytes, top row first, no padding.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.data.iter().map(|b| b.load(Ordering::Relaxed)).collect()
    }

    /// Write the frame to an image file. The format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.to_rgb_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        log::info!("Saved {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_black() {
        let frame = FrameBuffer::new(4, 3);
        assert_eq!(frame.to_rgb_bytes(), vec![0; 4 * 3 * 3]);
    }

    #[test]
    fn test_row_major_layout() {
        let frame = FrameBuffer::new(2, 2);
        frame.set_pixel(1, 0, [1, 2, 3]);
        frame.set_pixel(0, 1, [4, 5, 6]);

        assert_eq!(frame.pixel(1, 0), [1, 2, 3]);
        assert_eq!(
            frame.to_rgb_bytes(),
            vec![0, 0, 0, 1, 2, 3, 4, 5, 6, 0, 0, 0]
        );
    }

    #[test]
    fn test_clones_share_storage() {
        let frame = FrameBuffer::new(2, 1);
        let handle = frame.clone();
        std::thread::spawn(move || handle.set_pixel(1, 0, [9, 9, 9]))
            .join()
            .unwrap();

        assert_eq!(frame.pixel(1, 0), [9, 9, 9]);
    }

    #[test]
    fn test_save_bmp_roundtrip() {
        let frame = FrameBuffer::new(3, 2);
        frame.set_pixel(0, 0, [255, 0, 0]);
        frame.set_pixel(2, 1, [0, 0, 255]);

        let path = std::env::temp_dir().join(format!("lumen_frame_{}.bmp", std::process::id()));
        frame.save(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.into_raw(), frame.to_rgb_bytes());
    }
}
