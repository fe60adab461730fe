extern crate image as image_rs;

use std::time::Duration;
use image_rs::{GrayImage,Rgb,RgbImage};
use log::info;

use crate::io::{LoadError,loaded_data::FrameBundle};
use crate::visualize::{DisplayParameters,flow_color::flow_to_rgb,overlay::draw_ego_motion_overlay};
use crate::ViewerError;

#[derive(Debug,Clone)]
pub struct RenderedFrame {
    pub frame: usize,
    pub left: RgbImage,
    pub flow: RgbImage,
    pub disparity: GrayImage
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Termination {
    EndOfSequence,
    UserQuit
}

pub trait FrameSink {
    fn show(&mut self, frame: &RenderedFrame) -> Result<(), ViewerError>;

    fn poll_quit(&mut self, budget: Duration) -> bool;
}

pub fn render_frame(bundle: &FrameBundle, parameters: &DisplayParameters) -> RenderedFrame {
    let mut left = bundle.left_image.clone();
    draw_ego_motion_overlay(&mut left, bundle.ego_motion.as_ref(), Rgb(parameters.overlay_color), parameters.overlay_scale);

    let flow = flow_to_rgb(&bundle.flow);

    let disparity = match &bundle.disparity {
        Some(grid) => grid.to_normalized_gray(),
        None => GrayImage::new(left.width(), left.height())
    };

    RenderedFrame { frame: bundle.frame, left, flow, disparity }
}

pub fn run<I, S>(sequence: I, sink: &mut S, parameters: &DisplayParameters) -> Result<Termination, ViewerError>
    where I: IntoIterator<Item = Result<FrameBundle, LoadError>>, S: FrameSink {
    let budget = Duration::from_millis(parameters.frame_budget_ms);
    let mut shown = 0usize;

    for bundle in sequence {
        let bundle = bundle?;
        let rendered = render_frame(&bundle, parameters);
        sink.show(&rendered)?;
        shown += 1;

        if sink.poll_quit(budget) {
            info!("quit requested at frame {} after {} frames", bundle.frame, shown);
            return Ok(Termination::UserQuit);
        }
    }

    info!("sequence ended after {} frames", shown);
    Ok(Termination::EndOfSequence)
}
