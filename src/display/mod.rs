/*
 * Display sampler
 *
 * The 1 KiB window #0x0200 → #0x05FF is shown as a 32 × 32 grid, one byte
 * per cell, left to right and top to bottom. Each byte is a shade of grey.
 *
 * The sampler reads the memory through a MemoryView: there is no lock
 * between the processor and the display, so a frame may mix bytes written
 * by different ticks. This is accepted, the picture is only informative.
 */
use tracing::debug;

use super::memory::{Memory, MemoryError, MemoryView};
use super::{DISPLAY_LEN, DISPLAY_START_ADDR};

#[cfg(feature = "minifb-display")]
mod minifb_window;
#[cfg(feature = "minifb-display")]
pub use minifb_window::{spawn_window, WindowError};

pub const DISPLAY_WIDTH: usize = 32;
pub const DISPLAY_HEIGHT: usize = DISPLAY_LEN / DISPLAY_WIDTH;

/// Grey level of a byte encoded as 0x00RRGGBB, saturating at white.
pub fn pixel(byte: u8, intensity: u8) -> u32 {
    let level = (byte as u32 * intensity as u32).min(0xff);

    level << 16 | level << 8 | level
}

#[derive(Debug, Clone)]
pub struct DisplaySampler {
    view: MemoryView,
    intensity: u8,
}

impl DisplaySampler {
    pub fn new(memory: &Memory, intensity: u8) -> Result<Self, MemoryError> {
        Ok(DisplaySampler {
            view: memory.view(DISPLAY_START_ADDR, DISPLAY_LEN)?,
            intensity,
        })
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// One pixel per cell, row after row.
    pub fn frame(&self) -> Vec<u32> {
        let frame: Vec<u32> = self
            .view
            .snapshot()
            .into_iter()
            .map(|byte| pixel(byte, self.intensity))
            .collect();
        debug!("frame sampled from {:?}", self.view);

        frame
    }

    /// Same frame, each cell blown up to `scale` × `scale` pixels.
    pub fn scaled_frame(&self, scale: usize) -> Vec<u32> {
        let frame = self.frame();
        let width = DISPLAY_WIDTH * scale;
        let mut scaled = Vec::with_capacity(width * DISPLAY_HEIGHT * scale);

        for row in frame.chunks(DISPLAY_WIDTH) {
            let line: Vec<u32> = row
                .iter()
                .flat_map(|pixel| std::iter::repeat(*pixel).take(scale))
                .collect();
            for _ in 0..scale {
                scaled.extend_from_slice(&line);
            }
        }

        scaled
    }
}
