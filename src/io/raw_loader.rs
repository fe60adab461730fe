use std::fs::File;
use std::io::{BufReader,BufWriter,Read,Write};
use std::path::Path;

use crate::image::FloatGrid;
use crate::io::{LoadError,first_non_comment_line,parse_leading_numbers};

pub const RAW_DEPTH: i64 = 32;

pub fn load_raw_grid(file_path: &Path) -> Result<FloatGrid, LoadError> {
    let file = File::open(file_path).map_err(|_| LoadError::NotFound(file_path.to_path_buf()))?;
    let mut reader = BufReader::new(file);

    let header = first_non_comment_line(&mut reader, file_path)?
        .ok_or_else(|| LoadError::malformed(file_path, "missing header line"))?;
    let dims = parse_leading_numbers::<i64>(&header, 3)
        .ok_or_else(|| LoadError::malformed(file_path, format!("header '{}' is not 'width height depth'", header)))?;
    let (width, height, depth) = (dims[0], dims[1], dims[2]);

    assert_eq!(depth, RAW_DEPTH, "{}: unsupported raw depth", file_path.display());

    if width < 0 || height < 0 {
        return Err(LoadError::malformed(file_path, format!("negative dimensions {}x{}", width, height)));
    }
    let (width, height) = (width as usize, height as usize);

    let byte_count = width.checked_mul(height).and_then(|n| n.checked_mul(std::mem::size_of::<f32>()))
        .ok_or_else(|| LoadError::malformed(file_path, format!("dimensions {}x{} overflow", width, height)))?;
    // grows with the bytes actually present, not with the header
    let mut payload = Vec::new();
    reader.by_ref().take(byte_count as u64).read_to_end(&mut payload).map_err(|source| LoadError::Io { path: file_path.to_path_buf(), source })?;
    if payload.len() != byte_count {
        return Err(LoadError::malformed(file_path, format!("expected {} payload bytes, found {}", byte_count, payload.len())));
    }

    let values = payload.chunks_exact(4).map(|b| f32::from_ne_bytes([b[0],b[1],b[2],b[3]])).collect::<Vec<f32>>();
    Ok(FloatGrid::from_row_major(width, height, &values))
}

pub fn write_raw_grid(file_path: &Path, grid: &FloatGrid, comments: &[&str]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(file_path)?);
    for comment in comments {
        writeln!(writer, "# {}", comment)?;
    }
    writeln!(writer, "{} {} {}", grid.width(), grid.height(), RAW_DEPTH)?;
    for value in grid.to_row_major() {
        writer.write_all(&value.to_ne_bytes())?;
    }
    writer.flush()
}
