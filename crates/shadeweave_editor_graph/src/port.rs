// SPDX-License-Identifier: MIT OR Apache-2.0
//! Port addressing and shader value types.

use serde::{Deserialize, Serialize};

/// Zero-based ordinal of a port among a node's ports of one direction
pub type PortIndex = u32;

/// Port direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortDirection {
    /// Input port
    In,
    /// Output port
    Out,
}

impl PortDirection {
    /// The opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

/// Value type carried by a shader port or operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderType {
    /// Floating point scalar
    Scalar,
    /// Signed integer scalar
    ScalarInt,
    /// Unsigned integer scalar
    ScalarUInt,
    /// 2D vector
    Vector2,
    /// 3D vector
    Vector3,
    /// 4D vector
    Vector4,
    /// Boolean value
    Boolean,
    /// 4x4 transform matrix
    Transform,
    /// Texture sampler
    Sampler,
}

impl ShaderType {
    /// Short GLSL-flavored name, used for port captions
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Scalar => "float",
            Self::ScalarInt => "int",
            Self::ScalarUInt => "uint",
            Self::Vector2 => "vec2",
            Self::Vector3 => "vec3",
            Self::Vector4 => "vec4",
            Self::Boolean => "bool",
            Self::Transform => "mat4",
            Self::Sampler => "sampler2D",
        }
    }
}

/// Role selecting which facet of a port's data is accessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortRole {
    /// The value flowing through the port
    Data,
    /// The port's declared value type
    DataType,
    /// Display caption
    Caption,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(PortDirection::In.opposite(), PortDirection::Out);
        assert_eq!(PortDirection::Out.opposite(), PortDirection::In);
    }

    #[test]
    fn test_shader_type_keywords() {
        assert_eq!(ShaderType::Scalar.keyword(), "float");
        assert_eq!(ShaderType::Vector3.keyword(), "vec3");
        assert_eq!(ShaderType::Sampler.keyword(), "sampler2D");
    }
}
