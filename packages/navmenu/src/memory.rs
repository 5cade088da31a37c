//! A headless element tree for running menus without a browser.

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::dom::{Document, Element};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct NodeId(usize);

#[derive(Debug)]
struct Node {
    parent: Option<NodeId>,
    id: Option<String>,
    class_name: String,
}

#[derive(Debug, Default)]
struct Tree {
    nodes: Vec<Node>,
    id_index: HashMap<String, NodeId>,
}

impl Tree {
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

/// An in-memory document. Elements are kept in creation order, which is also
/// their document order.
#[derive(Clone, Default)]
pub struct MemoryDocument(Rc<RefCell<Tree>>);

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `parent`, or at the top level when `parent` is
    /// `None`.
    ///
    /// As with `getElementById`, the first element created with a given id is
    /// the one lookups find.
    pub fn create_element(
        &self,
        parent: Option<&MemoryElement>,
        id: Option<&str>,
        class_name: &str,
    ) -> MemoryElement {
        let mut tree = self.0.borrow_mut();
        let node = NodeId(tree.nodes.len());

        tree.nodes.push(Node {
            parent: parent.map(|parent| parent.node),
            id: id.map(str::to_owned),
            class_name: class_name.to_owned(),
        });

        if let Some(id) = id {
            tree.id_index.entry(id.to_owned()).or_insert(node);
        }

        MemoryElement {
            tree: self.0.clone(),
            node,
        }
    }

    fn element(&self, node: NodeId) -> MemoryElement {
        MemoryElement {
            tree: self.0.clone(),
            node,
        }
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let node = self.0.borrow().id_index.get(id).copied();
        node.map(|node| self.element(node))
    }

    fn elements_by_class(&self, class: &str) -> Vec<MemoryElement> {
        let matching: Vec<NodeId> = self
            .0
            .borrow()
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| tokens(&node.class_name).any(|token| token == class))
            .map(|(index, _)| NodeId(index))
            .collect();

        matching.into_iter().map(|node| self.element(node)).collect()
    }
}

#[derive(Clone)]
pub struct MemoryElement {
    tree: Rc<RefCell<Tree>>,
    node: NodeId,
}

impl MemoryElement {
    fn update_tokens(&self, update: impl FnOnce(&mut Vec<String>)) {
        let mut tree = self.tree.borrow_mut();
        let node = tree.node_mut(self.node);
        let mut classes = token_set(&node.class_name);
        update(&mut classes);
        node.class_name = classes.join(" ");
    }
}

impl Element for MemoryElement {
    fn id(&self) -> Option<String> {
        self.tree.borrow().node(self.node).id.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        tokens(&self.tree.borrow().node(self.node).class_name).any(|token| token == class)
    }

    fn add_class(&self, class: &str) {
        self.update_tokens(|classes| {
            if !classes.iter().any(|existing| existing == class) {
                classes.push(class.to_owned());
            }
        })
    }

    fn remove_class(&self, class: &str) {
        self.update_tokens(|classes| classes.retain(|existing| existing != class))
    }

    fn class_name(&self) -> String {
        self.tree.borrow().node(self.node).class_name.clone()
    }

    fn set_class_name(&self, class_name: &str) {
        self.tree.borrow_mut().node_mut(self.node).class_name = class_name.to_owned();
    }

    fn closest(&self, class: &str) -> Option<Self> {
        let tree = self.tree.borrow();
        let mut current = Some(self.node);

        while let Some(node) = current {
            if tokens(&tree.node(node).class_name).any(|token| token == class) {
                return Some(Self {
                    tree: self.tree.clone(),
                    node,
                });
            }

            current = tree.node(node).parent;
        }

        None
    }

    fn is_same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.node == other.node
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree.borrow();
        let node = tree.node(self.node);

        f.debug_struct("MemoryElement")
            .field("id", &node.id)
            .field("class_name", &node.class_name)
            .finish()
    }
}

fn tokens(class_name: &str) -> impl Iterator<Item = &str> {
    class_name.split_ascii_whitespace()
}

/// Class tokens with duplicates removed, keeping first occurrences.
fn token_set(class_name: &str) -> Vec<String> {
    let mut set: Vec<String> = Vec::new();

    for token in tokens(class_name) {
        if !set.iter().any(|existing| existing == token) {
            set.push(token.to_owned());
        }
    }

    set
}
