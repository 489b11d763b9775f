//! JSON layout loader.
//!
//! Loading does not validate; call [`validate`][crate::validate] before
//! simulating.

use std::io::Read;
use std::path::Path;

use crate::{Layout, LayoutResult};

/// Parse a layout from a JSON string.
pub fn load_layout_str(json: &str) -> LayoutResult<Layout> {
    Ok(serde_json::from_str(json)?)
}

/// Like [`load_layout_str`] but accepts any `Read` source.
pub fn load_layout_reader<R: Read>(reader: R) -> LayoutResult<Layout> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a layout from a JSON file.
pub fn load_layout_path(path: &Path) -> LayoutResult<Layout> {
    let file = std::fs::File::open(path)?;
    load_layout_reader(std::io::BufReader::new(file))
}
