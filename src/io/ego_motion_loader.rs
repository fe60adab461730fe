extern crate nalgebra as na;

use std::fs::File;
use std::io::{BufRead,BufReader};
use std::path::Path;
use na::{Matrix3,Vector3};

use crate::io::{LoadError,first_non_comment_line,parse_leading_numbers};
use crate::numerics::pose::EgoMotion;
use crate::Float;

pub fn load_ego_motion(file_path: &Path) -> Result<EgoMotion, LoadError> {
    let file = File::open(file_path).map_err(|_| LoadError::NotFound(file_path.to_path_buf()))?;
    let mut reader = BufReader::new(file);

    let first_row = first_non_comment_line(&mut reader, file_path)?
        .ok_or_else(|| LoadError::malformed(file_path, "no rows"))?;
    let mut lines = vec!(first_row);
    for line in reader.lines().take(2) {
        lines.push(line.map_err(|source| LoadError::Io { path: file_path.to_path_buf(), source })?);
    }
    if lines.len() != 3 {
        return Err(LoadError::malformed(file_path, format!("expected 3 rows, found {}", lines.len())));
    }

    let mut rotation = Matrix3::<Float>::zeros();
    let mut translation = Vector3::<Float>::zeros();
    for (i, line) in lines.iter().enumerate() {
        let row = parse_leading_numbers::<Float>(line, 4)
            .ok_or_else(|| LoadError::malformed(file_path, format!("row {} '{}' is not 'r0 r1 r2 t'", i, line)))?;
        for j in 0..3 {
            rotation[(i,j)] = row[j];
        }
        translation[i] = row[3];
    }

    Ok(EgoMotion::new(rotation, translation))
}
