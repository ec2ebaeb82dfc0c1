use crate::model::Location;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a dataset file.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("reading dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Root of a site-characterization dataset file: an ordered sequence of
/// locations. Deserialization doubles as the structural validation pass;
/// a file that does not match the record shapes fails here rather than
/// mid-render.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteDataset {
    pub location: Vec<Location>,
}

impl SiteDataset {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|source| DatasetError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        let dataset = Self::from_json_str(&contents).map_err(|source| DatasetError::Parse {
            path: path_ref.display().to_string(),
            source,
        })?;
        debug!(
            "loaded {} locations from {}",
            dataset.location.len(),
            path_ref.display()
        );
        Ok(dataset)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}
