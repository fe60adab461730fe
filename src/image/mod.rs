extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{GrayImage, Luma};
use na::DMatrix;

pub mod flow_field;

#[derive(Debug,Clone,PartialEq)]
pub struct FloatGrid {
    pub buffer: DMatrix<f32>
}

impl FloatGrid {

    pub fn from_row_major(width: usize, height: usize, values: &[f32]) -> FloatGrid {
        assert_eq!(values.len(), width*height);
        FloatGrid { buffer: DMatrix::<f32>::from_row_slice(height, width, values) }
    }

    pub fn zeros(width: usize, height: usize) -> FloatGrid {
        FloatGrid { buffer: DMatrix::<f32>::zeros(height, width) }
    }

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn size(&self) -> usize {
        self.buffer.ncols()*self.buffer.nrows()
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.buffer[(row,col)]
    }

    pub fn to_row_major(&self) -> Vec<f32> {
        let mut values = Vec::with_capacity(self.size());
        for r in 0..self.height() {
            for c in 0..self.width() {
                values.push(self.buffer[(r,c)]);
            }
        }
        values
    }

    pub fn min_max(&self) -> Option<(f32,f32)> {
        self.buffer.iter().filter(|v| v.is_finite()).fold(None, |acc, &v| match acc {
            None => Some((v,v)),
            Some((min,max)) => Some((min.min(v), max.max(v)))
        })
    }

    pub fn normalize_min_max(&self) -> FloatGrid {
        let (min, max) = match self.min_max() {
            Some(extrema) => extrema,
            None => return FloatGrid::zeros(self.width(), self.height())
        };
        let range = max - min;
        let buffer = self.buffer.map(|v| {
            match v.is_finite() && range > 0.0 {
                true => (v - min)/range,
                false => 0.0
            }
        });
        FloatGrid { buffer }
    }

    pub fn to_normalized_gray(&self) -> GrayImage {
        let normalized = self.normalize_min_max();
        let mut image = GrayImage::new(self.width() as u32, self.height() as u32);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            let value = normalized.buffer[(y as usize, x as usize)];
            *pixel = Luma([(value*255.0).round().clamp(0.0, 255.0) as u8]);
        }
        image
    }
}
