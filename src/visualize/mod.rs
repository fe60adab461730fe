use serde::{Serialize,Deserialize};

pub mod flow_color;
pub mod overlay;
pub mod window;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct DisplayParameters {
    pub frame_budget_ms: u64,
    pub overlay_scale: u32,
    pub overlay_color: [u8; 3],
    pub quit_on_q: bool
}

impl Default for DisplayParameters {
    fn default() -> DisplayParameters {
        DisplayParameters {
            frame_budget_ms: 100,
            overlay_scale: 1,
            overlay_color: [255, 255, 0],
            quit_on_q: false
        }
    }
}
