// SPDX-License-Identifier: MIT OR Apache-2.0
//! Widget-model adapters for Shadeweave Editor.
//!
//! These models sit between resource data and the hosting views: an ordered
//! string-list adapter with drag/drop payload transfer, and the sprite
//! subimage decorator that computes icon display sizes and gates drops on a
//! shared frame size.

pub mod probe;
pub mod string_list;
pub mod subimage;

pub use probe::{FileImageProbe, ImageSizeProbe};
pub use string_list::{DropAction, PayloadError, RowPayload, StringListModel, MIME_FORMAT};
pub use subimage::{ListRole, SubimageModel};
