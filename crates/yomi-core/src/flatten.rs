use yomi_types::{Entry, TermNode, TermTree};

/// An entry paired with the category labels leading to it
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry<'a> {
    pub entry: &'a Entry,
    pub category: Vec<String>,
}

/// Walk `tree` depth-first in document order, prefixing every path with `category`
pub fn flatten<'a>(tree: &'a TermTree, category: &[String]) -> Vec<FlatEntry<'a>> {
    let mut entries = Vec::new();
    let mut path = category.to_vec();
    flatten_into(tree, &mut path, &mut entries);
    entries
}

fn flatten_into<'a>(tree: &'a TermTree, path: &mut Vec<String>, entries: &mut Vec<FlatEntry<'a>>) {
    for (label, node) in tree.iter() {
        path.push(label.to_string());

        match node {
            TermNode::Entries(list) => {
                entries.extend(list.iter().map(|entry| FlatEntry {
                    entry,
                    category: path.clone(),
                }));
            }
            TermNode::Subtree(subtree) => flatten_into(subtree, path, entries),
        }

        path.pop();
    }
}
