use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::TreeError;

/// Category hierarchy of authored entries.
///
/// Labels keep the order they were inserted in (document order when
/// deserialized) and are unique among siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermTree {
    nodes: Vec<(String, TermNode)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TermNode {
    /// Leaf category, never empty
    Entries(Vec<Entry>),
    Subtree(TermTree),
}

impl TermTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category, rejecting duplicate labels and empty entry lists
    pub fn insert(&mut self, label: impl Into<String>, node: TermNode) -> Result<(), TreeError> {
        let label = label.into();

        if self.get(&label).is_some() {
            return Err(TreeError::DuplicateCategory(label));
        }
        if matches!(&node, TermNode::Entries(entries) if entries.is_empty()) {
            return Err(TreeError::EmptyCategory(label));
        }

        self.nodes.push((label, node));
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&TermNode> {
        self.nodes
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermNode)> {
        self.nodes.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Serialize for TermTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.nodes.len()))?;
        for (label, node) in &self.nodes {
            map.serialize_entry(label, node)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TermTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TermTreeVisitor)
    }
}

impl<'de> Deserialize<'de> for TermNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TermNodeVisitor)
    }
}

struct TermTreeVisitor;

impl<'de> Visitor<'de> for TermTreeVisitor {
    type Value = TermTree;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of category labels")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut tree = TermTree::new();
        while let Some((label, node)) = map.next_entry::<String, TermNode>()? {
            tree.insert(label, node)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(tree)
    }
}

struct TermNodeVisitor;

impl<'de> Visitor<'de> for TermNodeVisitor {
    type Value = TermNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of entries or a map of subcategories")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(entry) = seq.next_element::<Entry>()? {
            entries.push(entry);
        }
        Ok(TermNode::Entries(entries))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        TermTreeVisitor.visit_map(map).map(TermNode::Subtree)
    }
}
