// SPDX-License-Identifier: MIT OR Apache-2.0
//! Static catalog of shader node types.
//!
//! The catalog is a read-only table populated once for the process lifetime;
//! the node-creation dialog groups it by category path and hands the chosen
//! type tag back to the editor, which calls [`crate::GraphModel::add_node`].

use crate::port::ShaderType;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Immutable descriptor of one creatable node type
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Display name
    pub name: &'static str,
    /// Slash-delimited grouping path, e.g. `"Vector/Operators"`
    pub category_path: &'static str,
    /// Tag passed to [`crate::GraphModel::add_node`]
    pub type_tag: &'static str,
    /// Human-readable description shown in the dialog
    pub description: &'static str,
    /// Declared operand types, in input-port order
    pub operands: &'static [ShaderType],
    /// Return type; `None` for sink nodes with no output port
    pub return_type: Option<ShaderType>,
}

/// Ordered, read-only table of catalog entries
#[derive(Debug, Default)]
pub struct NodeCatalog {
    entries: Vec<CatalogEntry>,
    by_tag: IndexMap<&'static str, usize>,
}

impl NodeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry; later registrations under the same tag replace
    /// earlier ones.
    pub fn register(&mut self, entry: CatalogEntry) {
        if let Some(&slot) = self.by_tag.get(entry.type_tag) {
            self.entries[slot] = entry;
        } else {
            self.by_tag.insert(entry.type_tag, self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Look up an entry by its type tag
    pub fn get(&self, type_tag: &str) -> Option<&CatalogEntry> {
        self.by_tag.get(type_tag).map(|&slot| &self.entries[slot])
    }

    /// All entries, in registration order
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The process-wide shader node catalog
pub static SHADER_CATALOG: Lazy<NodeCatalog> = Lazy::new(build_shader_catalog);

macro_rules! entry {
    ($catalog:ident, $name:literal, $path:literal, $tag:literal, $desc:literal,
     [$($op:ident),*], $ret:expr) => {
        $catalog.register(CatalogEntry {
            name: $name,
            category_path: $path,
            type_tag: $tag,
            description: $desc,
            operands: &[$(ShaderType::$op),*],
            return_type: $ret,
        });
    };
}

fn build_shader_catalog() -> NodeCatalog {
    use ShaderType::*;
    let mut c = NodeCatalog::new();

    // ========================================================================
    // Output
    // ========================================================================

    entry!(c, "Fragment Output", "Output", "fragment_output",
        "Final fragment color and alpha for the shader.",
        [Vector3, Scalar], None);
    entry!(c, "Vertex Output", "Output", "vertex_output",
        "Final vertex position offset for the shader.",
        [Vector3], None);

    // ========================================================================
    // Input
    // ========================================================================

    entry!(c, "UV Coordinates", "Input/Geometry", "uv_coord",
        "Texture coordinates of the current fragment.",
        [], Some(Vector2));
    entry!(c, "Fragment Position", "Input/Geometry", "fragment_position",
        "Screen-space position of the current fragment.",
        [], Some(Vector2));
    entry!(c, "Vertex Color", "Input/Geometry", "vertex_color",
        "Interpolated per-vertex color.",
        [], Some(Vector4));
    entry!(c, "Time", "Input/Time", "time",
        "Seconds since the shader started running.",
        [], Some(Scalar));
    entry!(c, "Delta Time", "Input/Time", "delta_time",
        "Seconds elapsed since the previous frame.",
        [], Some(Scalar));

    // ========================================================================
    // Scalar
    // ========================================================================

    entry!(c, "Float Constant", "Scalar/Constants", "float_constant",
        "Constant floating point value.",
        [], Some(Scalar));
    entry!(c, "Int Constant", "Scalar/Constants", "int_constant",
        "Constant signed integer value.",
        [], Some(ScalarInt));
    entry!(c, "UInt Constant", "Scalar/Constants", "uint_constant",
        "Constant unsigned integer value.",
        [], Some(ScalarUInt));
    entry!(c, "Boolean Constant", "Scalar/Constants", "bool_constant",
        "Constant true/false value.",
        [], Some(Boolean));
    entry!(c, "Float Operator", "Scalar/Operators", "float_op",
        "Applies an arithmetic operator to two floats.",
        [Scalar, Scalar], Some(Scalar));
    entry!(c, "Int Operator", "Scalar/Operators", "int_op",
        "Applies an arithmetic operator to two integers.",
        [ScalarInt, ScalarInt], Some(ScalarInt));
    entry!(c, "Float Function", "Scalar/Functions", "float_func",
        "Applies a built-in function (sin, floor, abs, ...) to a float.",
        [Scalar], Some(Scalar));
    entry!(c, "Int Function", "Scalar/Functions", "int_func",
        "Applies a built-in function (abs, sign, ...) to an integer.",
        [ScalarInt], Some(ScalarInt));
    entry!(c, "Clamp", "Scalar/Functions", "float_clamp",
        "Constrains a value between a lower and an upper bound.",
        [Scalar, Scalar, Scalar], Some(Scalar));
    entry!(c, "Mix", "Scalar/Functions", "float_mix",
        "Linear interpolation between two scalars by a weight.",
        [Scalar, Scalar, Scalar], Some(Scalar));
    entry!(c, "Smoothstep", "Scalar/Functions", "float_smoothstep",
        "Hermite interpolation between two edge values.",
        [Scalar, Scalar, Scalar], Some(Scalar));

    // ========================================================================
    // Vector
    // ========================================================================

    entry!(c, "Vector2 Constant", "Vector/Constants", "vec2_constant",
        "Constant 2D vector value.",
        [], Some(Vector2));
    entry!(c, "Vector3 Constant", "Vector/Constants", "vec3_constant",
        "Constant 3D vector value.",
        [], Some(Vector3));
    entry!(c, "Vector4 Constant", "Vector/Constants", "vec4_constant",
        "Constant 4D vector value.",
        [], Some(Vector4));
    entry!(c, "Vector Operator", "Vector/Operators", "vector_op",
        "Component-wise arithmetic on two vectors.",
        [Vector3, Vector3], Some(Vector3));
    entry!(c, "Vector Function", "Vector/Functions", "vector_func",
        "Applies a built-in function (normalize, fract, ...) to a vector.",
        [Vector3], Some(Vector3));
    entry!(c, "Dot Product", "Vector/Operators", "dot_product",
        "Dot product of two vectors.",
        [Vector3, Vector3], Some(Scalar));
    entry!(c, "Cross Product", "Vector/Operators", "cross_product",
        "Cross product of two 3D vectors.",
        [Vector3, Vector3], Some(Vector3));
    entry!(c, "Vector Length", "Vector/Functions", "vector_length",
        "Euclidean length of a vector.",
        [Vector3], Some(Scalar));
    entry!(c, "Distance", "Vector/Functions", "vector_distance",
        "Distance between two points.",
        [Vector3, Vector3], Some(Scalar));
    entry!(c, "Compose Vector", "Vector/Composition", "vector_compose",
        "Builds a 3D vector from three scalars.",
        [Scalar, Scalar, Scalar], Some(Vector3));
    entry!(c, "Decompose Vector", "Vector/Composition", "vector_decompose",
        "Splits a 3D vector into its scalar components.",
        [Vector3], Some(Scalar));

    // ========================================================================
    // Color
    // ========================================================================

    entry!(c, "Color Constant", "Color/Constants", "color_constant",
        "Constant RGBA color value.",
        [], Some(Vector4));
    entry!(c, "Color Operator", "Color/Operators", "color_op",
        "Blend-style operator (screen, burn, ...) on two colors.",
        [Vector3, Vector3], Some(Vector3));
    entry!(c, "Color Function", "Color/Functions", "color_func",
        "Applies a color function (grayscale, sepia, ...).",
        [Vector3], Some(Vector3));
    entry!(c, "RGB to HSV", "Color/Functions", "rgb_to_hsv",
        "Converts an RGB color to HSV.",
        [Vector3], Some(Vector3));
    entry!(c, "HSV to RGB", "Color/Functions", "hsv_to_rgb",
        "Converts an HSV color to RGB.",
        [Vector3], Some(Vector3));

    // ========================================================================
    // Conditional
    // ========================================================================

    entry!(c, "Compare", "Conditional/Comparison", "compare",
        "Compares two values with a chosen comparison operator.",
        [Scalar, Scalar], Some(Boolean));
    entry!(c, "If", "Conditional/Branch", "if_branch",
        "Selects between two vectors based on a scalar comparison.",
        [Scalar, Scalar, Vector3, Vector3, Vector3], Some(Vector3));
    entry!(c, "Switch", "Conditional/Branch", "switch",
        "Selects between two vectors based on a boolean.",
        [Boolean, Vector3, Vector3], Some(Vector3));

    // ========================================================================
    // Textures
    // ========================================================================

    entry!(c, "Texture Sample", "Textures", "texture_sample",
        "Samples a 2D texture at the given coordinates.",
        [Sampler, Vector2], Some(Vector4));

    // ========================================================================
    // Transform
    // ========================================================================

    entry!(c, "Transform Constant", "Transform/Constants", "transform_constant",
        "Constant 4x4 matrix value.",
        [], Some(Transform));
    entry!(c, "Transform Multiply", "Transform/Operators", "transform_mult",
        "Multiplies two 4x4 matrices.",
        [Transform, Transform], Some(Transform));
    entry!(c, "Transform Vector", "Transform/Operators", "transform_vec_mult",
        "Applies a 4x4 matrix to a vector.",
        [Transform, Vector3], Some(Vector3));

    c
}
