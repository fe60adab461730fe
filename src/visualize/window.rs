extern crate image as image_rs;

use std::thread;
use std::time::{Duration,Instant};
use image_rs::{GrayImage,RgbImage};
use minifb::{Key,Window,WindowOptions};
use log::debug;

use crate::driver::{FrameSink,RenderedFrame};
use crate::ViewerError;

pub const LEFT_WINDOW: &str = "Left image";
pub const FLOW_WINDOW: &str = "Flow image";
pub const DISPARITY_WINDOW: &str = "Disp image";

const POLL_INTERVAL: Duration = Duration::from_millis(5);

struct View {
    title: &'static str,
    window: Option<Window>,
    buffer: Vec<u32>,
    width: usize,
    height: usize
}

impl View {

    fn new(title: &'static str) -> View {
        View { title, window: None, buffer: Vec::new(), width: 0, height: 0 }
    }

    fn present(&mut self, width: usize, height: usize, pixels: impl Iterator<Item = u32>) -> Result<(), ViewerError> {
        let title = self.title;
        if width == 0 || height == 0 {
            return Ok(());
        }
        if self.window.is_none() || self.width != width || self.height != height {
            debug!("opening window '{}' at {}x{}", title, width, height);
            let window = Window::new(title, width, height, WindowOptions { resize: false, ..WindowOptions::default() })
                .map_err(|e| ViewerError::Display(format!("{}: {}", title, e)))?;
            self.window = Some(window);
            self.width = width;
            self.height = height;
        }
        self.buffer.clear();
        self.buffer.extend(pixels);
        match self.window.as_mut() {
            Some(window) => window.update_with_buffer(&self.buffer, width, height).map_err(|e| ViewerError::Display(format!("{}: {}", title, e))),
            None => Ok(())
        }
    }

    fn pump(&mut self) -> () {
        if let Some(window) = self.window.as_mut() {
            window.update();
        }
    }

    fn quit_requested(&self, quit_on_q: bool) -> bool {
        match self.window.as_ref() {
            Some(window) => !window.is_open() || window.is_key_down(Key::Escape) || (quit_on_q && window.is_key_down(Key::Q)),
            None => false
        }
    }
}

fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

fn rgb_pixels(image: &RgbImage) -> impl Iterator<Item = u32> + '_ {
    image.pixels().map(|p| pack_rgb(p[0], p[1], p[2]))
}

fn gray_pixels(image: &GrayImage) -> impl Iterator<Item = u32> + '_ {
    image.pixels().map(|p| pack_rgb(p[0], p[0], p[0]))
}

pub struct WindowSink {
    left: View,
    flow: View,
    disparity: View,
    quit_on_q: bool
}

impl WindowSink {
    pub fn new(quit_on_q: bool) -> WindowSink {
        WindowSink {
            left: View::new(LEFT_WINDOW),
            flow: View::new(FLOW_WINDOW),
            disparity: View::new(DISPARITY_WINDOW),
            quit_on_q
        }
    }

    fn views(&mut self) -> [&mut View; 3] {
        [&mut self.left, &mut self.flow, &mut self.disparity]
    }
}

impl FrameSink for WindowSink {

    fn show(&mut self, frame: &RenderedFrame) -> Result<(), ViewerError> {
        self.left.present(frame.left.width() as usize, frame.left.height() as usize, rgb_pixels(&frame.left))?;
        self.flow.present(frame.flow.width() as usize, frame.flow.height() as usize, rgb_pixels(&frame.flow))?;
        self.disparity.present(frame.disparity.width() as usize, frame.disparity.height() as usize, gray_pixels(&frame.disparity))
    }

    fn poll_quit(&mut self, budget: Duration) -> bool {
        let deadline = Instant::now() + budget;
        let quit_on_q = self.quit_on_q;
        loop {
            for view in self.views() {
                view.pump();
                if view.quit_requested(quit_on_q) {
                    return true;
                }
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }
}
