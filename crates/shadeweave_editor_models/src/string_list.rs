// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ordered string-list model, the base adapter behind the repeated-field
//! views (sprite subimages, include paths, ...).

use shadeweave_editor_graph::Size;
use serde::{Deserialize, Serialize};

/// Custom format tag gating drag/drop and clipboard payloads
pub const MIME_FORMAT: &str = "application/x-shadeweave-stringrows";

/// Action requested for a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    /// Drop should be ignored; accepting it is a no-op
    Ignore,
    /// Copy the payload rows into the target
    Copy,
    /// Move the payload rows into the target
    Move,
}

/// Drag/clipboard payload produced and consumed by the list models.
///
/// `image_size` is the auxiliary property the subimage model attaches so a
/// drop target can compare declared sizes before accepting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPayload {
    /// Format tag; payloads with a foreign tag are rejected
    pub format: String,
    /// The dragged row values
    pub rows: Vec<String>,
    /// Declared per-item display size, if the source list had one
    #[serde(rename = "ImageSize", skip_serializing_if = "Option::is_none", default)]
    pub image_size: Option<Size>,
}

impl RowPayload {
    /// Create a payload carrying `rows` under the expected format tag
    pub fn new(rows: Vec<String>) -> Self {
        Self {
            format: MIME_FORMAT.to_string(),
            rows,
            image_size: None,
        }
    }

    /// Whether the payload carries the expected format tag
    pub fn has_expected_format(&self) -> bool {
        self.format == MIME_FORMAT
    }

    /// Encode for the clipboard / drag source
    pub fn encode(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a payload a drag source produced with [`Self::encode`]
    pub fn decode(encoded: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(encoded)?)
    }
}

/// Error while decoding a transferred payload
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// Payload bytes were not a valid encoded payload
    #[error("malformed row payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Ordered list of strings with row-level editing and payload transfer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringListModel {
    rows: Vec<String>,
}

impl StringListModel {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from existing rows
    pub fn from_rows(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the list holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The value at `row`, if in range
    pub fn get(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(String::as_str)
    }

    /// Iterate over the rows in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(String::as_str)
    }

    /// Append a row at the end
    pub fn append(&mut self, value: impl Into<String>) {
        self.rows.push(value.into());
    }

    /// Insert a row; an out-of-range `row` appends
    pub fn insert(&mut self, row: usize, value: impl Into<String>) {
        let row = row.min(self.rows.len());
        self.rows.insert(row, value.into());
    }

    /// Remove a row; returns whether removal occurred
    pub fn remove(&mut self, row: usize) -> bool {
        if row < self.rows.len() {
            self.rows.remove(row);
            true
        } else {
            false
        }
    }

    /// Overwrite the value at `row`; returns whether the write was accepted
    pub fn set(&mut self, row: usize, value: impl Into<String>) -> bool {
        match self.rows.get_mut(row) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Move a row to a new position; returns whether anything moved
    pub fn move_row(&mut self, from: usize, to: usize) -> bool {
        if from >= self.rows.len() || to >= self.rows.len() {
            return false;
        }
        let value = self.rows.remove(from);
        self.rows.insert(to, value);
        true
    }

    /// Build a payload for the given rows, skipping out-of-range indices
    pub fn payload_for(&self, rows: &[usize]) -> RowPayload {
        RowPayload::new(
            rows.iter()
                .filter_map(|&row| self.get(row).map(str::to_string))
                .collect(),
        )
    }

    /// Insert a payload's rows starting at `row` (or append when `None`).
    ///
    /// Rejects payloads with a foreign format tag.
    pub fn insert_payload(&mut self, payload: &RowPayload, row: Option<usize>) -> bool {
        if !payload.has_expected_format() {
            return false;
        }
        let mut at = row.unwrap_or(self.rows.len()).min(self.rows.len());
        for value in &payload.rows {
            self.rows.insert(at, value.clone());
            at += 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_move() {
        let mut list = StringListModel::new();
        list.append("a.png");
        list.append("c.png");
        list.insert(1, "b.png");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a.png", "b.png", "c.png"]);

        assert!(list.move_row(2, 0));
        assert_eq!(list.get(0), Some("c.png"));
        assert!(!list.move_row(0, 9));
        assert!(!list.remove(9));
    }

    #[test]
    fn test_out_of_range_insert_appends() {
        let mut list = StringListModel::from_rows(vec!["a".into()]);
        list.insert(99, "b");
        assert_eq!(list.get(1), Some("b"));
    }

    #[test]
    fn test_payload_round_trip() {
        let source = StringListModel::from_rows(vec!["a".into(), "b".into(), "c".into()]);
        let payload = source.payload_for(&[0, 2, 7]);
        assert_eq!(payload.rows, vec!["a".to_string(), "c".to_string()]);
        assert!(payload.has_expected_format());

        let mut target = StringListModel::from_rows(vec!["x".into()]);
        assert!(target.insert_payload(&payload, Some(0)));
        assert_eq!(target.iter().collect::<Vec<_>>(), vec!["a", "c", "x"]);
    }

    #[test]
    fn test_encode_decode() {
        let mut payload = RowPayload::new(vec!["a.png".into()]);
        payload.image_size = Some(Size::new(64, 64));
        let encoded = payload.encode().expect("payload encodes");
        let decoded = RowPayload::decode(&encoded).expect("payload decodes");
        assert_eq!(decoded, payload);
        assert!(RowPayload::decode("not json").is_err());
    }

    #[test]
    fn test_foreign_format_rejected() {
        let mut list = StringListModel::new();
        let payload = RowPayload {
            format: "text/plain".into(),
            rows: vec!["a".into()],
            image_size: None,
        };
        assert!(!list.insert_payload(&payload, None));
        assert!(list.is_empty());
    }
}
