use std::path::Path;

use thiserror::Error;
use tracing::info;

use super::memory::MEMORY_SIZE;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("'{0}' is empty")]
    Empty(String),
    #[error("'{path}' is {len} bytes long, it does not fit in memory")]
    TooLarge { path: String, len: usize },
}

/// Read a raw program image. Nothing is interpreted, the bytes are meant
/// to be copied as is at the load address.
pub fn load_image(path: &Path) -> Result<Vec<u8>, LoaderError> {
    let name = path.display().to_string();
    let image = std::fs::read(path).map_err(|source| LoaderError::Io {
        path: name.clone(),
        source,
    })?;

    if image.is_empty() {
        return Err(LoaderError::Empty(name));
    }
    if image.len() > MEMORY_SIZE {
        return Err(LoaderError::TooLarge {
            path: name,
            len: image.len(),
        });
    }
    info!("{} bytes read from '{}'", image.len(), name);

    Ok(image)
}
