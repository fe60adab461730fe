use std::fmt;
use std::path::PathBuf;

use self::io::LoadError;

pub mod image;
pub mod io;
pub mod numerics;
pub mod visualize;
pub mod config;
pub mod driver;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

#[derive(Debug)]
pub enum ViewerError {
    Load(LoadError),
    Config { path: PathBuf, reason: String },
    Display(String)
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Load(e) => write!(f, "{}", e),
            ViewerError::Config { path, reason } => write!(f, "invalid config {}: {}", path.display(), reason),
            ViewerError::Display(reason) => write!(f, "display failed: {}", reason)
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::Load(e) => Some(e),
            _ => None
        }
    }
}

impl From<LoadError> for ViewerError {
    fn from(e: LoadError) -> Self {
        ViewerError::Load(e)
    }
}
