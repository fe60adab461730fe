#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path,PathBuf};

use eisats_view::image::FloatGrid;
use eisats_view::io::loading_parameters::LoadingParameters;
use eisats_view::io::raw_loader::write_raw_grid;

/// Per-test directory under the system temp dir, removed on drop.
pub struct TempDir {
    pub path: PathBuf
}

impl TempDir {
    pub fn new(name: &str) -> TempDir {
        let path = std::env::temp_dir().join(format!("eisats_view_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        TempDir { path }
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Writes a 16-bit binary PPM with every channel set to `value`.
pub fn write_ppm16(path: &Path, width: usize, height: usize, value: u16) {
    let mut bytes = format!("P6\n{} {}\n65535\n", width, height).into_bytes();
    for _ in 0..width*height*3 {
        bytes.extend_from_slice(&value.to_be_bytes());
    }
    fs::write(path, bytes).unwrap();
}

pub fn write_text(path: &Path, contents: &str) {
    let mut file = fs::File::create(path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
}

/// Synthetic sequence in the default directory layout.
pub struct SequenceFixture {
    pub dir: TempDir,
    pub parameters: LoadingParameters,
    pub width: usize,
    pub height: usize
}

impl SequenceFixture {
    pub fn new(name: &str, width: usize, height: usize) -> SequenceFixture {
        let dir = TempDir::new(name);
        for sub in ["colour-left-S2", "flowX-S2", "flowY-S2", "disparityGT-S2", "egoMotion"].iter() {
            fs::create_dir_all(dir.path.join(sub)).unwrap();
        }
        SequenceFixture { dir, parameters: LoadingParameters::default(), width, height }
    }

    pub fn root(&self) -> &Path {
        &self.dir.path
    }

    pub fn write_left(&self, frame: usize, value: u16) {
        let paths = self.parameters.frame_paths(self.root(), frame);
        write_ppm16(&paths.left_image, self.width, self.height, value);
    }

    pub fn write_flow(&self, frame: usize, fx: f32, fy: f32) {
        let paths = self.parameters.frame_paths(self.root(), frame);
        let n = self.width*self.height;
        write_raw_grid(&paths.flow_x, &FloatGrid::from_row_major(self.width, self.height, &vec![fx; n]), &["flow u"]).unwrap();
        write_raw_grid(&paths.flow_y, &FloatGrid::from_row_major(self.width, self.height, &vec![fy; n]), &["flow v"]).unwrap();
    }

    pub fn write_disparity(&self, frame: usize) {
        let paths = self.parameters.frame_paths(self.root(), frame);
        let values = (0..self.width*self.height).map(|i| i as f32).collect::<Vec<f32>>();
        write_raw_grid(&paths.disparity, &FloatGrid::from_row_major(self.width, self.height, &values), &[]).unwrap();
    }

    pub fn write_ego_motion(&self, frame: usize, contents: &str) {
        let paths = self.parameters.frame_paths(self.root(), frame);
        write_text(&paths.ego_motion, contents);
    }

    /// Left image, flow, disparity and an identity ego-motion with translation (1,2,3).
    pub fn write_complete_frame(&self, frame: usize) {
        self.write_left(frame, 1000);
        self.write_flow(frame, 1.0, 0.0);
        self.write_disparity(frame);
        self.write_ego_motion(frame, "# ego motion\n1 0 0 1\n0 1 0 2\n0 0 1 3\n");
    }
}
