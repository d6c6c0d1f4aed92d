//! Unbalanced binary search tree.
//!
//! Keys smaller than a node live in its left subtree, larger keys in its
//! right subtree. Duplicate inserts are ignored, so an in-order traversal is
//! always strictly increasing.

use std::cmp::Ordering;
use std::fmt;

type Link<K> = Option<Box<TreeNode<K>>>;

/// A single node of the tree
#[derive(Debug, Clone)]
pub struct TreeNode<K> {
    pub key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> TreeNode<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

impl<K: fmt::Display> fmt::Display for TreeNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// Binary search tree over any totally ordered key
#[derive(Debug, Clone)]
pub struct BinarySearchTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord> BinarySearchTree<K> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a key. Returns `false` when the key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = Self::insert_at(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_at(link: &mut Link<K>, key: K) -> bool {
        match link {
            None => {
                *link = Some(Box::new(TreeNode::new(key)));
                true
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_at(&mut node.left, key),
                Ordering::Greater => Self::insert_at(&mut node.right, key),
                Ordering::Equal => false,
            },
        }
    }

    /// Find the node holding `key`
    pub fn search(&self, key: &K) -> Option<&TreeNode<K>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Whether `key` is stored in the tree
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Smallest key in the tree
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Remove `key`. Returns `false` when it was not present.
    ///
    /// A node with two children takes the key of its in-order successor,
    /// which is then removed from the right subtree.
    pub fn delete(&mut self, key: &K) -> bool {
        let removed = Self::delete_at(&mut self.root, key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn delete_at(link: &mut Link<K>, key: &K) -> bool {
        let Some(node) = link else {
            return false;
        };

        match key.cmp(&node.key) {
            Ordering::Less => Self::delete_at(&mut node.left, key),
            Ordering::Greater => Self::delete_at(&mut node.right, key),
            Ordering::Equal => {
                match (node.left.take(), node.right.take()) {
                    (None, right) => *link = right,
                    (left, None) => *link = left,
                    (left, Some(right)) => {
                        node.left = left;
                        node.right = Some(right);
                        if let Some(successor) = Self::take_min(&mut node.right) {
                            node.key = successor;
                        }
                    }
                }
                true
            }
        }
    }

    /// Detach the minimum node of a subtree and return its key
    fn take_min(link: &mut Link<K>) -> Option<K> {
        if link.as_ref()?.left.is_some() {
            return Self::take_min(&mut link.as_mut()?.left);
        }
        let node = link.take()?;
        let TreeNode { key, right, .. } = *node;
        *link = right;
        Some(key)
    }

    /// Keys in ascending order
    pub fn inorder_traversal(&self) -> Vec<&K> {
        let mut result = Vec::with_capacity(self.len);
        Self::inorder_at(self.root.as_deref(), &mut result);
        result
    }

    fn inorder_at<'a>(node: Option<&'a TreeNode<K>>, result: &mut Vec<&'a K>) {
        if let Some(node) = node {
            Self::inorder_at(node.left.as_deref(), result);
            result.push(&node.key);
            Self::inorder_at(node.right.as_deref(), result);
        }
    }
}

impl<K: Ord> FromIterator<K> for BinarySearchTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> BinarySearchTree<i32> {
        [2, 89, 50, 30, 20, 40, 70, 4, 67, 100, 60, 80, 500].into_iter().collect()
    }

    #[test]
    fn test_inorder_is_sorted() {
        let tree = sample_tree();
        let keys: Vec<i32> = tree.inorder_traversal().into_iter().copied().collect();
        assert_eq!(keys, vec![2, 4, 20, 30, 40, 50, 60, 67, 70, 80, 89, 100, 500]);
        assert_eq!(tree.len(), 13);
    }

    #[test]
    fn test_search() {
        let tree = sample_tree();
        assert_eq!(tree.search(&80).map(|n| n.key), Some(80));
        assert_eq!(tree.search(&80).map(|n| n.to_string()), Some("80".to_string()));
        assert!(tree.search(&81).is_none());
    }

    #[test]
    fn test_delete_node_with_two_children() {
        let mut tree = sample_tree();
        assert!(tree.delete(&67));
        assert!(!tree.contains(&67));
        assert!(tree.delete(&50));
        let keys: Vec<i32> = tree.inorder_traversal().into_iter().copied().collect();
        assert_eq!(keys, vec![2, 4, 20, 30, 40, 60, 70, 80, 89, 100, 500]);
        assert_eq!(tree.len(), 11);
    }

    #[test]
    fn test_delete_root_and_leaves() {
        let mut tree = sample_tree();
        assert!(tree.delete(&2));
        assert!(tree.delete(&500));
        assert!(!tree.delete(&500));
        assert_eq!(tree.min(), Some(&4));
    }

    #[test]
    fn test_duplicates_ignored() {
        let mut tree = BinarySearchTree::new();
        assert!(tree.insert("b"));
        assert!(!tree.insert("b"));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_empty_tree() {
        let mut tree: BinarySearchTree<u8> = BinarySearchTree::new();
        assert!(tree.is_empty());
        assert!(tree.min().is_none());
        assert!(!tree.delete(&1));
        assert!(tree.inorder_traversal().is_empty());
    }
}
