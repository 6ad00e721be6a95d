// SPDX-License-Identifier: MIT OR Apache-2.0
//! Category tree presented by the node-creation dialog.
//!
//! Catalog entries carry slash-delimited category paths; the tree nests one
//! level per path segment, and entries whose paths share a prefix share the
//! corresponding branch.

use crate::catalog::{CatalogEntry, NodeCatalog};
use indexmap::IndexMap;

/// One branch of the category tree
#[derive(Debug, Default)]
pub struct CategoryNode<'a> {
    name: String,
    path: String,
    children: IndexMap<String, CategoryNode<'a>>,
    entries: Vec<&'a CatalogEntry>,
}

impl<'a> CategoryNode<'a> {
    /// Last path segment, e.g. `"Operators"`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full slash-delimited path, e.g. `"Vector/Operators"`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Child categories, in first-seen order
    pub fn children(&self) -> impl Iterator<Item = &CategoryNode<'a>> {
        self.children.values()
    }

    /// Entries filed directly under this category
    pub fn entries(&self) -> &[&'a CatalogEntry] {
        &self.entries
    }

    fn find(&self, segments: &[&str]) -> Option<&CategoryNode<'a>> {
        match segments {
            [] => Some(self),
            [head, rest @ ..] => self.children.get(*head)?.find(rest),
        }
    }
}

/// Tree of catalog entries grouped by category path
#[derive(Debug, Default)]
pub struct CategoryTree<'a> {
    roots: IndexMap<String, CategoryNode<'a>>,
    uncategorized: Vec<&'a CatalogEntry>,
}

impl<'a> CategoryTree<'a> {
    /// Group a catalog's entries into a tree
    pub fn build(catalog: &'a NodeCatalog) -> Self {
        let mut tree = Self::default();
        for entry in catalog.entries() {
            tree.insert(entry);
        }
        tree
    }

    fn insert(&mut self, entry: &'a CatalogEntry) {
        let segments = split_category_path(entry.category_path);
        // A path with no usable segments files the entry at the top level
        if segments.is_empty() {
            self.uncategorized.push(entry);
            return;
        }
        let mut path = String::new();
        let mut children = &mut self.roots;
        for segment in segments {
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(segment);
            let child = children
                .entry(segment.to_string())
                .or_insert_with(|| CategoryNode {
                    name: segment.to_string(),
                    path: path.clone(),
                    ..CategoryNode::default()
                });
            children = &mut child.children;
        }
        if let Some(node) = self.node_mut(entry.category_path) {
            node.entries.push(entry);
        }
    }

    fn node_mut(&mut self, path: &str) -> Option<&mut CategoryNode<'a>> {
        let mut segments = split_category_path(path).into_iter();
        let mut node = self.roots.get_mut(segments.next()?)?;
        for segment in segments {
            node = node.children.get_mut(segment)?;
        }
        Some(node)
    }

    /// Top-level categories, in first-seen order
    pub fn roots(&self) -> impl Iterator<Item = &CategoryNode<'a>> {
        self.roots.values()
    }

    /// Entries whose category path had no usable segments, shown alongside
    /// the top-level categories
    pub fn uncategorized(&self) -> &[&'a CatalogEntry] {
        &self.uncategorized
    }

    /// Look up a category by its full slash-delimited path
    pub fn find(&self, path: &str) -> Option<&CategoryNode<'a>> {
        let segments = split_category_path(path);
        let (head, rest) = segments.split_first()?;
        self.roots.get(*head)?.find(rest)
    }

    /// Visit every category depth-first, parents before children
    pub fn walk(&self, mut visit: impl FnMut(&CategoryNode<'a>, usize)) {
        fn go<'a>(
            node: &CategoryNode<'a>,
            depth: usize,
            visit: &mut impl FnMut(&CategoryNode<'a>, usize),
        ) {
            visit(node, depth);
            for child in node.children() {
                go(child, depth + 1, visit);
            }
        }
        for root in self.roots() {
            go(root, 0, &mut visit);
        }
    }

    /// Total number of entries filed anywhere in the tree
    pub fn entry_count(&self) -> usize {
        let mut count = self.uncategorized.len();
        self.walk(|node, _| count += node.entries().len());
        count
    }
}

/// Split a slash-delimited category path into its segments, dropping empty
/// ones so `"A//B"` and `"/A/B"` behave like `"A/B"`.
pub fn split_category_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SHADER_CATALOG;
    use crate::port::ShaderType;

    fn sample_catalog() -> NodeCatalog {
        let mut catalog = NodeCatalog::new();
        for (name, path, tag) in [
            ("Float Operator", "Scalar/Operators", "float_op"),
            ("Float Function", "Scalar/Functions", "float_func"),
            ("Vector Operator", "Vector/Operators", "vector_op"),
            ("Time", "Input/Time", "time"),
        ] {
            catalog.register(CatalogEntry {
                name,
                category_path: path,
                type_tag: tag,
                description: "",
                operands: &[ShaderType::Scalar],
                return_type: Some(ShaderType::Scalar),
            });
        }
        catalog
    }

    #[test]
    fn test_shared_prefixes_share_a_branch() {
        let catalog = sample_catalog();
        let tree = CategoryTree::build(&catalog);

        let scalar = tree.find("Scalar").expect("Scalar branch exists");
        assert_eq!(scalar.children().count(), 2);
        assert_eq!(tree.roots().count(), 3); // Scalar, Vector, Input

        let ops = tree.find("Scalar/Operators").expect("leaf exists");
        assert_eq!(ops.entries().len(), 1);
        assert_eq!(ops.entries()[0].type_tag, "float_op");
        assert_eq!(ops.path(), "Scalar/Operators");
    }

    #[test]
    fn test_find_unknown_path() {
        let catalog = sample_catalog();
        let tree = CategoryTree::build(&catalog);
        assert!(tree.find("Scalar/Nope").is_none());
        assert!(tree.find("").is_none());
    }

    #[test]
    fn test_walk_visits_parents_first() {
        let catalog = sample_catalog();
        let tree = CategoryTree::build(&catalog);
        let mut order = Vec::new();
        tree.walk(|node, depth| order.push((node.path().to_string(), depth)));
        let scalar = order.iter().position(|(p, _)| p == "Scalar").expect("visited");
        let ops = order
            .iter()
            .position(|(p, _)| p == "Scalar/Operators")
            .expect("visited");
        assert!(scalar < ops);
        assert_eq!(order[scalar].1, 0);
        assert_eq!(order[ops].1, 1);
    }

    #[test]
    fn test_empty_category_path_files_at_top_level() {
        let mut catalog = sample_catalog();
        catalog.register(CatalogEntry {
            name: "Loose",
            category_path: "",
            type_tag: "loose",
            description: "",
            operands: &[],
            return_type: Some(ShaderType::Scalar),
        });
        let tree = CategoryTree::build(&catalog);
        assert_eq!(tree.uncategorized().len(), 1);
        assert_eq!(tree.uncategorized()[0].type_tag, "loose");
        assert_eq!(tree.entry_count(), catalog.len());
    }

    #[test]
    fn test_split_category_path_drops_empty_segments() {
        assert_eq!(split_category_path("A//B/"), vec!["A", "B"]);
        assert_eq!(split_category_path("/A"), vec!["A"]);
        assert!(split_category_path("").is_empty());
    }

    #[test]
    fn test_full_catalog_is_covered() {
        let tree = CategoryTree::build(&SHADER_CATALOG);
        assert_eq!(tree.entry_count(), SHADER_CATALOG.len());
        // Every entry's category resolves to a tree node that files it
        for entry in SHADER_CATALOG.entries() {
            let node = tree.find(entry.category_path).expect("category exists");
            assert!(node.entries().iter().any(|e| e.type_tag == entry.type_tag));
        }
    }
}
