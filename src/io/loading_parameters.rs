use std::path::{Path,PathBuf};
use serde::{Serialize,Deserialize};

use crate::io::frame_number_string;

// {curr} and {prev} are replaced with the zero padded current and previous frame numbers
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct SequenceLayout {
    pub left_image: String,
    pub flow_x: String,
    pub flow_y: String,
    pub disparity: String,
    pub ego_motion: String
}

impl Default for SequenceLayout {
    fn default() -> SequenceLayout {
        SequenceLayout {
            left_image: "colour-left-S2/img_c0_{curr}.ppm".to_string(),
            flow_x: "flowX-S2/flowU_from_{prev}_to_{curr}.raw".to_string(),
            flow_y: "flowY-S2/flowV_from_{prev}_to_{curr}.raw".to_string(),
            disparity: "disparityGT-S2/stereo_{curr}.raw".to_string(),
            ego_motion: "egoMotion/from_{prev}_to_{curr}.txt".to_string()
        }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct LoadingParameters {
    pub starting_index: usize,
    pub step: usize,
    pub count: Option<usize>,
    pub index_width: usize,
    pub left_image_gain: f32,
    pub layout: SequenceLayout
}

impl Default for LoadingParameters {
    fn default() -> LoadingParameters {
        LoadingParameters {
            starting_index: 2,
            step: 1,
            count: None,
            index_width: 3,
            left_image_gain: 16.0,
            layout: SequenceLayout::default()
        }
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct FramePaths {
    pub left_image: PathBuf,
    pub flow_x: PathBuf,
    pub flow_y: PathBuf,
    pub disparity: PathBuf,
    pub ego_motion: PathBuf
}

impl LoadingParameters {

    pub fn frame_paths(&self, root_path: &Path, frame: usize) -> FramePaths {
        let curr = frame_number_string(frame, self.index_width);
        let prev = frame_number_string(frame.saturating_sub(1), self.index_width);
        let resolve = |pattern: &str| root_path.join(pattern.replace("{curr}", &curr).replace("{prev}", &prev));
        FramePaths {
            left_image: resolve(&self.layout.left_image),
            flow_x: resolve(&self.layout.flow_x),
            flow_y: resolve(&self.layout.flow_y),
            disparity: resolve(&self.layout.disparity),
            ego_motion: resolve(&self.layout.ego_motion)
        }
    }
}
