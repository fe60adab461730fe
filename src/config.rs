use std::fs;
use std::path::Path;
use serde::{Serialize,Deserialize};

use crate::io::loading_parameters::LoadingParameters;
use crate::visualize::DisplayParameters;
use crate::ViewerError;

#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub loading: LoadingParameters,
    pub display: DisplayParameters
}

impl ViewerConfig {

    pub fn from_yaml_str(yaml: &str, origin: &Path) -> Result<ViewerConfig, ViewerError> {
        serde_yaml::from_str(yaml).map_err(|e| ViewerError::Config { path: origin.to_path_buf(), reason: e.to_string() })
    }

    pub fn load(file_path: &Path) -> Result<ViewerConfig, ViewerError> {
        let contents = fs::read_to_string(file_path).map_err(|e| ViewerError::Config { path: file_path.to_path_buf(), reason: e.to_string() })?;
        ViewerConfig::from_yaml_str(&contents, file_path)
    }

    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
