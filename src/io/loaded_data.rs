extern crate image as image_rs;

use image_rs::RgbImage;
use crate::image::{FloatGrid,flow_field::FlowField};
use crate::numerics::pose::EgoMotion;

// flow and ego-motion describe the transition from frame - 1 to frame
#[derive(Debug,Clone)]
pub struct FrameBundle {
    pub frame: usize,
    pub left_image: RgbImage,
    pub flow: FlowField,
    pub disparity: Option<FloatGrid>,
    pub ego_motion: Option<EgoMotion>
}
