use std::fmt;
use std::io::BufRead;
use std::path::{Path,PathBuf};

pub mod raw_loader;
pub mod ego_motion_loader;
pub mod left_image_loader;
pub mod loading_parameters;
pub mod loaded_data;
pub mod sequence;

#[derive(Debug)]
pub enum LoadError {
    NotFound(PathBuf),
    Malformed { path: PathBuf, reason: String },
    Io { path: PathBuf, source: std::io::Error }
}

impl LoadError {
    pub fn malformed(path: &Path, reason: impl Into<String>) -> LoadError {
        LoadError::Malformed { path: path.to_path_buf(), reason: reason.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "{} not found", path.display()),
            LoadError::Malformed { path, reason } => write!(f, "{} is malformed: {}", path.display(), reason),
            LoadError::Io { path, source } => write!(f, "failed to read {}: {}", path.display(), source)
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None
        }
    }
}

pub fn frame_number_string(frame: usize, width: usize) -> String {
    format!("{:0width$}", frame, width = width)
}

pub fn first_non_comment_line<R: BufRead>(reader: &mut R, path: &Path) -> Result<Option<String>, LoadError> {
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        let read = reader.read_until(b'\n', &mut buffer).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
        if read == 0 {
            return Ok(None);
        }
        if buffer.first() != Some(&b'#') {
            let line = String::from_utf8_lossy(&buffer);
            return Ok(Some(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string()));
        }
    }
}

// scanf style, trailing tokens are ignored
pub fn parse_leading_numbers<T: std::str::FromStr>(line: &str, count: usize) -> Option<Vec<T>> {
    let values = line.split_whitespace().take(count).map(|token| token.parse::<T>().ok()).collect::<Option<Vec<T>>>()?;
    match values.len() == count {
        true => Some(values),
        false => None
    }
}
