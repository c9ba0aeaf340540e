use std::thread;

use minifb::{Window, WindowOptions};
use thiserror::Error;
use tracing::info;

use super::{DisplaySampler, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::runner::StopSignal;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("cannot open the display window: {0}")]
    Open(String),
    #[error("cannot refresh the display window: {0}")]
    Refresh(String),
}

/*
 * spawn_window
 * The window lives in its own thread and samples the memory at `fps`
 * frames per second. Closing the window raises the stop signal, raising
 * the stop signal closes the window.
 */
pub fn spawn_window(
    sampler: DisplaySampler,
    scale: usize,
    fps: u32,
    stop: StopSignal,
) -> thread::JoinHandle<Result<(), WindowError>> {
    thread::spawn(move || {
        let (width, height) = (DISPLAY_WIDTH * scale, DISPLAY_HEIGHT * scale);
        let mut window = Window::new("emu6502", width, height, WindowOptions::default())
            .map_err(|e| WindowError::Open(e.to_string()))?;
        window.set_target_fps(fps as usize);
        info!("window opened {}×{} at {} fps", width, height, fps);

        while window.is_open() && !stop.is_raised() {
            window
                .update_with_buffer(&sampler.scaled_frame(scale), width, height)
                .map_err(|e| WindowError::Refresh(e.to_string()))?;
        }

        if !stop.is_raised() {
            info!("window closed, stopping");
            stop.raise();
        }

        Ok(())
    })
}
