use std::path::{Path,PathBuf};
use log::{debug,info,warn};

use crate::image::flow_field::FlowField;
use crate::io::{LoadError,loaded_data::FrameBundle,loading_parameters::LoadingParameters};
use crate::io::{raw_loader::load_raw_grid,ego_motion_loader::load_ego_motion,left_image_loader::load_left_image};

// ends at the first missing left image or flow component, a malformed file is yielded once and ends it too
pub struct FrameSequence {
    root_path: PathBuf,
    parameters: LoadingParameters,
    next_frame: usize,
    produced: usize,
    finished: bool
}

impl FrameSequence {

    pub fn new(root_path: &Path, parameters: LoadingParameters) -> FrameSequence {
        info!("reading sequence {} from frame {}", root_path.display(), parameters.starting_index);
        FrameSequence {
            root_path: root_path.to_path_buf(),
            next_frame: parameters.starting_index,
            parameters,
            produced: 0,
            finished: false
        }
    }

    fn load_frame(&self, frame: usize) -> Result<FrameBundle, LoadError> {
        let paths = self.parameters.frame_paths(&self.root_path, frame);

        let left_image = load_left_image(&paths.left_image, self.parameters.left_image_gain)?;
        let flow_x = load_raw_grid(&paths.flow_x)?;
        let flow_y = load_raw_grid(&paths.flow_y)?;
        let flow = FlowField::new(flow_x, flow_y).ok_or_else(|| LoadError::malformed(&paths.flow_y, "flow components differ in size"))?;

        let disparity = match load_raw_grid(&paths.disparity) {
            Ok(grid) => Some(grid),
            Err(LoadError::NotFound(path)) => {
                warn!("frame {}: no disparity at {}", frame, path.display());
                None
            },
            Err(e) => return Err(e)
        };

        let ego_motion = match load_ego_motion(&paths.ego_motion) {
            Ok(ego_motion) => Some(ego_motion),
            Err(LoadError::NotFound(path)) => {
                warn!("frame {}: no ego-motion at {}", frame, path.display());
                None
            },
            Err(e) => return Err(e)
        };

        Ok(FrameBundle { frame, left_image, flow, disparity, ego_motion })
    }
}

impl Iterator for FrameSequence {
    type Item = Result<FrameBundle, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if let Some(count) = self.parameters.count {
            if self.produced >= count {
                self.finished = true;
                return None;
            }
        }

        let frame = self.next_frame;
        match self.load_frame(frame) {
            Ok(bundle) => {
                debug!("loaded frame {}", frame);
                self.next_frame += self.parameters.step.max(1);
                self.produced += 1;
                Some(Ok(bundle))
            },
            Err(e) if e.is_not_found() => {
                info!("end of sequence at frame {}: {}", frame, e);
                self.finished = true;
                None
            },
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for FrameSequence {}
