//! Weighted directed graph with a Dijkstra shortest-path report.
//!
//! Nodes keep their declaration order; when two unvisited nodes share the
//! smallest tentative distance the one declared first is settled first.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DrillError, Result};

/// A single outgoing edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub to: String,
    pub weight: u64,
}

/// Adjacency-list graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<String>,
    edges: HashMap<String, Vec<Edge>>,
}

/// On-disk form: `{"A": [["B", 5], ["C", 3]], ...}`
type GraphFile = serde_json::Map<String, serde_json::Value>;

impl Graph {
    /// Build a graph from `(node, [(neighbor, weight)])` pairs.
    ///
    /// Every neighbor must also be declared as a node.
    pub fn new<N, E>(adjacency: Vec<(N, Vec<(E, u64)>)>) -> Result<Self>
    where
        N: Into<String>,
        E: Into<String>,
    {
        let mut nodes = Vec::with_capacity(adjacency.len());
        let mut edges = HashMap::with_capacity(adjacency.len());

        for (node, neighbors) in adjacency {
            let node = node.into();
            if edges.contains_key(&node) {
                return Err(DrillError::validation(format!("node '{}' declared twice", node)));
            }
            let list: Vec<Edge> = neighbors
                .into_iter()
                .map(|(to, weight)| Edge { to: to.into(), weight })
                .collect();
            nodes.push(node.clone());
            edges.insert(node, list);
        }

        for (node, list) in &edges {
            if let Some(edge) = list.iter().find(|e| !edges.contains_key(&e.to)) {
                return Err(DrillError::validation(format!(
                    "edge {} -> {} points to an undeclared node",
                    node, edge.to
                )));
            }
        }

        Ok(Self { nodes, edges })
    }

    /// The six-node sample graph
    pub fn demo() -> Self {
        let adjacency = vec![
            ("A", vec![("B", 5), ("C", 3), ("E", 11)]),
            ("B", vec![("A", 5), ("C", 1), ("F", 2)]),
            ("C", vec![("A", 3), ("B", 1), ("D", 1), ("E", 5)]),
            ("D", vec![("C", 1), ("E", 9), ("F", 3)]),
            ("E", vec![("A", 11), ("C", 5), ("D", 9)]),
            ("F", vec![("B", 2), ("D", 3)]),
        ];
        Self {
            nodes: adjacency.iter().map(|(n, _)| n.to_string()).collect(),
            edges: adjacency
                .into_iter()
                .map(|(n, list)| {
                    let list = list
                        .into_iter()
                        .map(|(to, weight)| Edge { to: to.to_string(), weight })
                        .collect();
                    (n.to_string(), list)
                })
                .collect(),
        }
    }

    /// Load a graph from a JSON object mapping nodes to `[neighbor, weight]` pairs.
    ///
    /// Object keys are read in sorted order, which becomes the declaration order.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parse the JSON graph format
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: GraphFile = serde_json::from_str(content)?;
        let mut adjacency = Vec::with_capacity(raw.len());
        for (node, value) in raw {
            let pairs: Vec<(String, u64)> = serde_json::from_value(value)?;
            adjacency.push((node, pairs));
        }
        Self::new(adjacency)
    }

    /// Declared nodes in order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Outgoing edges of a node
    pub fn neighbors(&self, node: &str) -> Option<&[Edge]> {
        self.edges.get(node).map(Vec::as_slice)
    }

    /// Run Dijkstra from `start`.
    pub fn shortest_path(&self, start: &str) -> Result<ShortestPaths> {
        if !self.edges.contains_key(start) {
            return Err(DrillError::not_found(format!("start node '{}'", start)));
        }

        let mut distances: HashMap<String, Option<u64>> =
            self.nodes.iter().map(|n| (n.clone(), None)).collect();
        let mut previous: HashMap<String, String> = HashMap::new();
        distances.insert(start.to_string(), Some(0));

        let mut unvisited: Vec<&String> = self.nodes.iter().collect();

        loop {
            // Settle the closest reachable node, first-declared on ties.
            let closest = unvisited
                .iter()
                .enumerate()
                .filter_map(|(i, n)| distances.get(*n).copied().flatten().map(|d| (d, i)))
                .min();
            let Some((current_distance, position)) = closest else {
                break;
            };
            let current = unvisited.remove(position);

            for edge in &self.edges[current] {
                let Some(candidate) = current_distance.checked_add(edge.weight) else {
                    return Err(DrillError::validation(format!(
                        "path length from '{}' to '{}' overflows u64",
                        start, edge.to
                    )));
                };
                let better = match distances.get(&edge.to).copied().flatten() {
                    Some(known) => candidate < known,
                    None => true,
                };
                if better {
                    distances.insert(edge.to.clone(), Some(candidate));
                    previous.insert(edge.to.clone(), current.clone());
                }
            }
        }

        let paths = self
            .nodes
            .iter()
            .map(|node| {
                let path = if distances.get(node).copied().flatten().is_some() {
                    let mut path = vec![node.clone()];
                    let mut cursor = node;
                    while let Some(prev) = previous.get(cursor) {
                        path.push(prev.clone());
                        cursor = prev;
                    }
                    path.reverse();
                    path
                } else {
                    Vec::new()
                };
                (node.clone(), path)
            })
            .collect();

        Ok(ShortestPaths {
            start: start.to_string(),
            order: self.nodes.clone(),
            distances,
            paths,
        })
    }
}

/// Result of a single-source shortest-path run
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub start: String,
    order: Vec<String>,
    distances: HashMap<String, Option<u64>>,
    paths: HashMap<String, Vec<String>>,
}

impl ShortestPaths {
    /// Distance to `node`, `None` when it cannot be reached
    pub fn distance(&self, node: &str) -> Option<u64> {
        self.distances.get(node).copied().flatten()
    }

    /// Nodes along the shortest path, start first; empty when unreachable
    pub fn path(&self, node: &str) -> &[String] {
        self.paths.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Render the distance and path to `target`, or to every other node.
    pub fn report(&self, target: Option<&str>) -> Result<String> {
        let targets: Vec<&String> = match target {
            Some(t) => {
                let node = self
                    .order
                    .iter()
                    .find(|n| n.as_str() == t)
                    .ok_or_else(|| DrillError::not_found(format!("target node '{}'", t)))?;
                vec![node]
            }
            None => self.order.iter().collect(),
        };

        let mut out = String::new();
        for node in targets {
            if *node == self.start {
                continue;
            }
            match self.distance(node) {
                Some(d) => out.push_str(&format!(
                    "\n{}-{} distance: {}\nPath: {}\n",
                    self.start,
                    node,
                    d,
                    self.path(node).join(" -> ")
                )),
                None => out.push_str(&format!(
                    "\n{}-{} distance: unreachable\n",
                    self.start, node
                )),
            }
        }
        Ok(out)
    }
}
