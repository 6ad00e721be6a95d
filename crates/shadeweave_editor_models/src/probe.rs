// SPDX-License-Identifier: MIT OR Apache-2.0
//! Image dimension probing.

use shadeweave_editor_graph::Size;
use std::path::Path;

/// Reads the pixel dimensions of an image without decoding it.
///
/// The subimage model only ever needs sizes; actual pixel decoding belongs
/// to the hosting view. Tests substitute a fixed table.
pub trait ImageSizeProbe {
    /// Dimensions of the image at `path`, or `None` when unreadable
    fn probe(&self, path: &str) -> Option<Size>;
}

/// Probe reading dimensions from image file headers on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageProbe;

impl ImageSizeProbe for FileImageProbe {
    fn probe(&self, path: &str) -> Option<Size> {
        match image::image_dimensions(Path::new(path)) {
            Ok((width, height)) => Some(Size::new(width, height)),
            Err(error) => {
                tracing::debug!(%path, %error, "could not read image dimensions");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_probes_none() {
        let probe = FileImageProbe;
        assert_eq!(probe.probe("/definitely/not/here.png"), None);
    }
}
