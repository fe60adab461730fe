extern crate nalgebra as na;

use na::{Vector3,Matrix3};
use crate::numerics::lie::rotation_vector;
use crate::Float;

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct EgoMotion {
    pub rotation: Matrix3<Float>,
    pub translation: Vector3<Float>
}

impl EgoMotion {

    pub fn new(rotation: Matrix3<Float>, translation: Vector3<Float>) -> EgoMotion {
        EgoMotion { rotation, translation }
    }

    pub fn rotation_vector(&self) -> Vector3<Float> {
        rotation_vector(&self.rotation)
    }
}
