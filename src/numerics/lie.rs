extern crate nalgebra as na;

use std::cmp::Ordering;

use na::{Vector,Vector3,Matrix3,Matrix,Rotation3,U3,U1,base::storage::Storage};
use crate::{Float,float};

const SMALL_ANGLE: Float = 1e-8;
const NEAR_PI: Float = 1e-6;
const ORTHONORMALITY_TOLERANCE: Float = 1e-9;

pub fn skew_symmetric<T>(w: &Vector<Float,U3,T>) -> Matrix3<Float> where T: Storage<Float,U3,U1>  {
    Matrix3::<Float>::new(0.0, -w[2], w[1],
                          w[2], 0.0, -w[0],
                          -w[1], w[0], 0.0)
}

pub fn vector_from_skew_symmetric(w_x: &Matrix3<Float>) -> Vector3<Float> {
    Vector3::<Float>::new(w_x[(2,1)],w_x[(0,2)],w_x[(1,0)])
}

#[allow(non_snake_case)]
pub fn ln_SO3<T>(R: &Matrix<Float,U3,U3,T>) -> Matrix3<Float> where T: Storage<Float,U3,U3> {
    let cos_omega = ((R.trace() - 1.0)/2.0).clamp(-1.0, 1.0);
    let omega = cos_omega.acos();
    let R_minus_Rt = R - R.transpose();

    match omega {
        // first order taylor expansion of omega/(2 sin omega)
        o if o < SMALL_ANGLE => 0.5*(1.0 + o*o/6.0)*R_minus_Rt,
        // R - R^T vanishes, the axis is read from (R + I)/2 = n*n^T instead
        o if float::consts::PI - o < NEAR_PI => {
            let B = 0.5*(R.clone_owned() + Matrix3::<Float>::identity());
            let k = (0..3).max_by(|&a, &b| B[(a,a)].partial_cmp(&B[(b,b)]).unwrap_or(Ordering::Equal)).unwrap_or(0);
            let mut axis = B.column(k).into_owned().normalize();
            if axis.dot(&vector_from_skew_symmetric(&R_minus_Rt)) < 0.0 {
                axis = -axis;
            }
            skew_symmetric(&(o*axis))
        },
        o => (o/(2.0*o.sin()))*R_minus_Rt
    }
}

#[allow(non_snake_case)]
pub fn project_to_SO3<T>(R: &Matrix<Float,U3,U3,T>) -> Matrix3<Float> where T: Storage<Float,U3,U3> {
    let svd = R.clone_owned().svd(true, true);
    match (svd.u, svd.v_t) {
        (Some(u), Some(v_t)) => u*v_t,
        _ => R.clone_owned()
    }
}

// matrices that are not orthonormal are projected onto SO(3) first
pub fn rotation_vector<T>(rotation: &Matrix<Float,U3,U3,T>) -> Vector3<Float> where T: Storage<Float,U3,U3> {
    let orthonormality_error = (rotation.transpose()*rotation - Matrix3::<Float>::identity()).norm();
    match orthonormality_error > ORTHONORMALITY_TOLERANCE {
        true => vector_from_skew_symmetric(&ln_SO3(&project_to_SO3(rotation))),
        false => vector_from_skew_symmetric(&ln_SO3(rotation))
    }
}

pub fn exp_r<T>(w: &Vector<Float,U3,T>) -> Matrix3<Float> where T: Storage<Float,U3,U1> {
    Rotation3::new(w.clone_owned()).into_inner()
}
