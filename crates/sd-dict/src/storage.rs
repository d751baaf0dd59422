//! File access for import and export.

use std::path::Path;

use crate::error::{DictError, DictResult};

/// UTF-8 byte-order mark.
pub const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Read a whole file, optionally dropping a leading byte-order mark.
pub fn read(path: &Path, strip_bom: bool) -> DictResult<Vec<u8>> {
    let mut data = std::fs::read(path).map_err(|source| DictError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if strip_bom && data.starts_with(&BOM) {
        data.drain(..BOM.len());
    }
    Ok(data)
}

/// Write a whole file, optionally prefixed with a byte-order mark.
pub fn write(path: &Path, data: &[u8], with_bom: bool) -> DictResult<()> {
    let mut bytes = Vec::with_capacity(data.len() + BOM.len());
    if with_bom {
        bytes.extend_from_slice(&BOM);
    }
    bytes.extend_from_slice(data);
    std::fs::write(path, bytes).map_err(|source| DictError::Write {
        path: path.to_path_buf(),
        source,
    })
}
