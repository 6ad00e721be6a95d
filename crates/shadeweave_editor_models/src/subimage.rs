// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sprite subimage list model.
//!
//! Decorates the string-list adapter with icon size hints and drop gating.
//! Every subimage of a sprite must share one frame size; the size hint of
//! row 0 is the canonical size for the whole list, and drops declaring a
//! different size are rejected with a mismatch notification instead of being
//! silently accepted.

use crate::probe::ImageSizeProbe;
use crate::string_list::{DropAction, RowPayload, StringListModel};
use shadeweave_editor_graph::{Size, Value};

/// Size reported for an empty list
const EMPTY_LIST_ICON_SIZE: Size = Size {
    width: 32,
    height: 32,
};

/// Role selecting which facet of a row is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListRole {
    /// The row's raw value (the image file path)
    Display,
    /// Renderable icon source; decoding belongs to the host view
    Decoration,
    /// Display size computed for the row's image
    SizeHint,
}

/// Listener invoked when a drop declares a size different from the list's
/// established one; arguments are (expected, actual).
pub type MismatchListener = Box<dyn FnMut(Size, Size)>;

/// List model exposing a sprite's subimage file paths as an icon list
pub struct SubimageModel {
    list: StringListModel,
    probe: Box<dyn ImageSizeProbe>,
    max_icon_size: Size,
    min_icon_size: Size,
    mismatch_listeners: Vec<MismatchListener>,
}

impl std::fmt::Debug for SubimageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubimageModel")
            .field("rows", &self.list.row_count())
            .field("max_icon_size", &self.max_icon_size)
            .field("min_icon_size", &self.min_icon_size)
            .finish()
    }
}

impl SubimageModel {
    /// Create an empty model reading image dimensions through `probe`
    pub fn new(probe: impl ImageSizeProbe + 'static) -> Self {
        Self {
            list: StringListModel::new(),
            probe: Box::new(probe),
            max_icon_size: Size::new(128, 128),
            min_icon_size: Size::new(16, 16),
            mismatch_listeners: Vec::new(),
        }
    }

    /// Create a model over existing subimage paths
    pub fn with_paths(probe: impl ImageSizeProbe + 'static, paths: Vec<String>) -> Self {
        let mut model = Self::new(probe);
        model.list = StringListModel::from_rows(paths);
        model
    }

    /// Upper bound for computed icon sizes
    pub fn set_max_icon_size(&mut self, width: u32, height: u32) {
        self.max_icon_size = Size::new(width, height);
    }

    /// Lower bound for computed icon sizes, applied per dimension
    pub fn set_min_icon_size(&mut self, width: u32, height: u32) {
        self.min_icon_size = Size::new(width, height);
    }

    /// Register a listener for rejected drops with mismatched sizes
    pub fn on_size_mismatch(&mut self, listener: impl FnMut(Size, Size) + 'static) {
        self.mismatch_listeners.push(Box::new(listener));
    }

    /// The underlying row list
    pub fn rows(&self) -> &StringListModel {
        &self.list
    }

    /// Mutable access to the underlying row list
    pub fn rows_mut(&mut self) -> &mut StringListModel {
        &mut self.list
    }

    /// Number of subimages
    pub fn row_count(&self) -> usize {
        self.list.row_count()
    }

    /// The path at `row`, if in range
    pub fn path(&self, row: usize) -> Option<&str> {
        self.list.get(row)
    }

    /// Read one facet of the row at `row`.
    ///
    /// Out-of-range rows and unsupported roles degrade to [`Value::Null`].
    pub fn data(&self, row: usize, role: ListRole) -> Value {
        let Some(path) = self.list.get(row) else {
            return Value::Null;
        };
        match role {
            ListRole::Display => Value::Text(path.to_string()),
            ListRole::Decoration => Value::Text(path.to_string()),
            ListRole::SizeHint => Value::Size(self.size_hint(row)),
        }
    }

    /// The canonical per-item display size: the size hint of row 0, or
    /// 32x32 for an empty list.
    pub fn icon_size(&self) -> Size {
        if self.list.is_empty() {
            EMPTY_LIST_ICON_SIZE
        } else {
            self.size_hint(0)
        }
    }

    /// Display size for the image at `row`.
    ///
    /// Reads only the image header for its dimensions, then applies the
    /// clamp rule below. An unreadable image degrades to the minimum size.
    pub fn size_hint(&self, row: usize) -> Size {
        let actual = self.list.get(row).and_then(|path| self.probe.probe(path));
        self.clamped_icon_size(actual)
    }

    /// The icon clamp rule.
    ///
    /// When either dimension exceeds the maximum, only the dimension
    /// opposite the longer side is rescaled by min/max of the two. Not true
    /// proportional scaling; existing sprite views are laid out against
    /// these exact sizes, so the rule must not change.
    fn clamped_icon_size(&self, actual: Option<Size>) -> Size {
        let Some(actual) = actual else {
            return self.min_icon_size;
        };
        let longer = actual.width.max(actual.height).max(1);
        let aspect = actual.width.min(actual.height) as f32 / longer as f32;

        let mut width = actual.width.min(self.max_icon_size.width);
        let mut height = actual.height.min(self.max_icon_size.height);

        if actual.width > self.max_icon_size.width || actual.height > self.max_icon_size.height {
            if actual.width < actual.height {
                width = (width as f32 * aspect) as u32;
            }
            if actual.width > actual.height {
                height = (height as f32 * aspect) as u32;
            }
        }

        Size::new(
            width.max(self.min_icon_size.width),
            height.max(self.min_icon_size.height),
        )
    }

    /// Build a drag payload for the given rows, carrying the list's
    /// established size so the target can gate the drop.
    pub fn payload_for(&self, rows: &[usize]) -> RowPayload {
        let mut payload = self.list.payload_for(rows);
        if !self.list.is_empty() {
            payload.image_size = Some(self.size_hint(0));
        }
        payload
    }

    /// Handle a drop.
    ///
    /// An `Ignore` action is accepted as a no-op. Foreign formats and
    /// non-zero target columns are rejected. When the list already has
    /// rows, a payload declaring a different image size is rejected and the
    /// mismatch listeners fire with (expected, actual). Accepted payloads
    /// are inserted by the base list adapter.
    pub fn drop_payload(
        &mut self,
        payload: &RowPayload,
        action: DropAction,
        row: Option<usize>,
        column: usize,
    ) -> bool {
        if action == DropAction::Ignore {
            return true;
        }
        if !payload.has_expected_format() {
            tracing::debug!(format = %payload.format, "drop rejected: foreign format");
            return false;
        }
        if column > 0 {
            return false;
        }

        if self.list.row_count() > 0 {
            let expected = self.size_hint(0);
            let actual = payload.image_size.unwrap_or_default();
            if actual != expected {
                tracing::debug!(%expected, %actual, "drop rejected: mismatched subimage size");
                for listener in &mut self.mismatch_listeners {
                    listener(expected, actual);
                }
                return false;
            }
        } // an empty list takes whatever size comes first

        self.list.insert_payload(payload, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Probe backed by a fixed path -> size table
    #[derive(Default)]
    struct FakeProbe(HashMap<String, Size>);

    impl FakeProbe {
        fn with(sizes: &[(&str, u32, u32)]) -> Self {
            Self(
                sizes
                    .iter()
                    .map(|&(path, w, h)| (path.to_string(), Size::new(w, h)))
                    .collect(),
            )
        }
    }

    impl ImageSizeProbe for FakeProbe {
        fn probe(&self, path: &str) -> Option<Size> {
            self.0.get(path).copied()
        }
    }

    fn frame_payload(paths: &[&str], size: Option<Size>) -> RowPayload {
        let mut payload = RowPayload::new(paths.iter().map(|p| (*p).to_string()).collect());
        payload.image_size = size;
        payload
    }

    #[test]
    fn test_roles() {
        let probe = FakeProbe::with(&[("walk0.png", 64, 64)]);
        let model = SubimageModel::with_paths(probe, vec!["walk0.png".into()]);

        assert_eq!(model.data(0, ListRole::Display), Value::Text("walk0.png".into()));
        assert_eq!(model.data(0, ListRole::Decoration), Value::Text("walk0.png".into()));
        assert_eq!(model.data(0, ListRole::SizeHint), Value::Size(Size::new(64, 64)));
        assert_eq!(model.data(5, ListRole::Display), Value::Null);
    }

    #[test]
    fn test_icon_size_defaults_when_empty() {
        let model = SubimageModel::new(FakeProbe::default());
        assert_eq!(model.icon_size(), Size::new(32, 32));
    }

    #[test]
    fn test_wide_image_clamps_width_and_rescales_height() {
        // 300x100 against max 128x128: width clamps to 128, and because
        // width is the longer side the *height* is rescaled by 100/300.
        let probe = FakeProbe::with(&[("wide.png", 300, 100)]);
        let model = SubimageModel::with_paths(probe, vec!["wide.png".into()]);
        assert_eq!(model.size_hint(0), Size::new(128, 33));
    }

    #[test]
    fn test_tall_image_rescales_width() {
        let probe = FakeProbe::with(&[("tall.png", 100, 300)]);
        let model = SubimageModel::with_paths(probe, vec!["tall.png".into()]);
        assert_eq!(model.size_hint(0), Size::new(33, 128));
    }

    #[test]
    fn test_square_oversized_image_clamps_both() {
        let probe = FakeProbe::with(&[("big.png", 256, 256)]);
        let model = SubimageModel::with_paths(probe, vec!["big.png".into()]);
        assert_eq!(model.size_hint(0), Size::new(128, 128));
    }

    #[test]
    fn test_small_image_clamps_up_to_minimum() {
        let probe = FakeProbe::with(&[("dot.png", 4, 9)]);
        let model = SubimageModel::with_paths(probe, vec!["dot.png".into()]);
        assert_eq!(model.size_hint(0), Size::new(16, 16));
    }

    #[test]
    fn test_unreadable_image_degrades_to_minimum() {
        let model = SubimageModel::with_paths(FakeProbe::default(), vec!["missing.png".into()]);
        assert_eq!(model.size_hint(0), Size::new(16, 16));
    }

    #[test]
    fn test_configured_bounds_apply() {
        let probe = FakeProbe::with(&[("walk0.png", 640, 480)]);
        let mut model = SubimageModel::with_paths(probe, vec!["walk0.png".into()]);
        model.set_max_icon_size(64, 64);
        model.set_min_icon_size(8, 8);
        // 640x480, max 64: width clamps to 64, height rescaled by 480/640.
        assert_eq!(model.size_hint(0), Size::new(64, 48));
    }

    #[test]
    fn test_mismatched_drop_rejected_with_event() {
        let probe = FakeProbe::with(&[("walk0.png", 64, 64)]);
        let mut model = SubimageModel::with_paths(probe, vec!["walk0.png".into()]);

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        model.on_size_mismatch(move |expected, actual| {
            sink.borrow_mut().push((expected, actual));
        });

        let payload = frame_payload(&["walk1.png"], Some(Size::new(32, 32)));
        assert!(!model.drop_payload(&payload, DropAction::Copy, None, 0));
        assert_eq!(model.row_count(), 1);
        assert_eq!(*events.borrow(), vec![(Size::new(64, 64), Size::new(32, 32))]);
    }

    #[test]
    fn test_matching_drop_accepted() {
        let probe = FakeProbe::with(&[("walk0.png", 64, 64)]);
        let mut model = SubimageModel::with_paths(probe, vec!["walk0.png".into()]);

        let payload = frame_payload(&["walk1.png"], Some(Size::new(64, 64)));
        assert!(model.drop_payload(&payload, DropAction::Copy, None, 0));
        assert_eq!(model.row_count(), 2);
        assert_eq!(model.path(1), Some("walk1.png"));
    }

    #[test]
    fn test_empty_list_takes_any_size() {
        let mut model = SubimageModel::new(FakeProbe::default());
        let payload = frame_payload(&["first.png"], Some(Size::new(48, 48)));
        assert!(model.drop_payload(&payload, DropAction::Copy, None, 0));
        assert_eq!(model.row_count(), 1);
    }

    #[test]
    fn test_drop_gating() {
        let mut model = SubimageModel::new(FakeProbe::default());

        // Ignore action accepted without touching the list
        let payload = frame_payload(&["a.png"], None);
        assert!(model.drop_payload(&payload, DropAction::Ignore, None, 0));
        assert_eq!(model.row_count(), 0);

        // Non-zero column rejected
        assert!(!model.drop_payload(&payload, DropAction::Copy, None, 1));

        // Foreign format rejected
        let mut foreign = frame_payload(&["a.png"], None);
        foreign.format = "text/uri-list".into();
        assert!(!model.drop_payload(&foreign, DropAction::Copy, None, 0));
    }

    #[test]
    fn test_payload_carries_established_size() {
        let probe = FakeProbe::with(&[("walk0.png", 64, 64)]);
        let model = SubimageModel::with_paths(probe, vec!["walk0.png".into()]);
        let payload = model.payload_for(&[0]);
        assert_eq!(payload.image_size, Some(Size::new(64, 64)));
        assert_eq!(payload.rows, vec!["walk0.png".to_string()]);

        let empty = SubimageModel::new(FakeProbe::default());
        assert_eq!(empty.payload_for(&[]).image_size, None);
    }
}
