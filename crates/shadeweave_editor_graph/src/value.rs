// SPDX-License-Identifier: MIT OR Apache-2.0
//! Role-keyed accessor values and 2D geometry primitives.

use serde::{Deserialize, Serialize};

/// Integer 2D size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// Create a size
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// 2D position in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Create a point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Value returned or accepted by the role-keyed accessors.
///
/// Unsupported or absent roles degrade to [`Value::Null`], never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Empty value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f32),
    /// 2D size
    Size(Size),
    /// 2D position
    Point(Point),
    /// Text
    Text(String),
    /// Opaque structured payload
    Json(serde_json::Value),
}

impl Value {
    /// Whether this is the empty value
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Extract a size, if that is what this value holds
    pub fn as_size(&self) -> Option<Size> {
        match self {
            Self::Size(s) => Some(*s),
            _ => None,
        }
    }

    /// Extract a point, if that is what this value holds
    pub fn as_point(&self) -> Option<Point> {
        match self {
            Self::Point(p) => Some(*p),
            _ => None,
        }
    }

    /// Extract text, if that is what this value holds
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Size> for Value {
    fn from(s: Size) -> Self {
        Self::Size(s)
    }
}

impl From<Point> for Value {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Size(Size::new(4, 8)).as_size(), Some(Size::new(4, 8)));
        assert_eq!(Value::Text("uv".into()).as_text(), Some("uv"));
        assert_eq!(Value::Bool(true).as_size(), None);
    }

    #[test]
    fn test_size_display() {
        assert_eq!(Size::new(64, 64).to_string(), "64x64");
    }
}
