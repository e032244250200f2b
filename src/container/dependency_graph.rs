//! Dependency graph over modules.
//!
//! This module provides the graph used to order modules so that every module comes
//! after the modules it references, with cycle detection that reports the offending
//! chain.

use anyhow::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

use crate::core::AssetError;
use crate::module::ModuleRef;

/// Visit state during cycle search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    /// On the current DFS path
    Gray,
    Black,
}

/// Directed graph of module references.
///
/// An edge `from -> to` means `from` references `to`, so `to` must load first.
/// Nodes are keyed by module path ignoring ASCII case, matching container lookup:
/// two handles whose paths differ only in case are one node.
pub struct DependencyGraph {
    graph: DiGraph<ModuleRef, ()>,
    /// Lowercased module path -> node
    node_map: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// The node for `module`, and whether this call added it.
    pub fn ensure_node(&mut self, module: &ModuleRef) -> (NodeIndex, bool) {
        let key = node_key(module);
        if let Some(&index) = self.node_map.get(&key) {
            (index, false)
        } else {
            let index = self.graph.add_node(module.clone());
            self.node_map.insert(key, index);
            (index, true)
        }
    }

    /// Record that `from` references `to`.
    pub fn add_dependency(&mut self, from: &ModuleRef, to: &ModuleRef) {
        let (from_idx, _) = self.ensure_node(from);
        let (to_idx, _) = self.ensure_node(to);

        if !self.graph.contains_edge(from_idx, to_idx) {
            self.graph.add_edge(from_idx, to_idx, ());
        }
    }

    /// Fail with [`AssetError::CircularDependency`] naming the first cycle found.
    ///
    /// The chain starts and ends with the same module path.
    pub fn detect_cycles(&self) -> Result<()> {
        let mut colors: HashMap<NodeIndex, Color> =
            self.graph.node_indices().map(|node| (node, Color::White)).collect();
        let mut path: Vec<NodeIndex> = Vec::new();

        for node in self.graph.node_indices() {
            if matches!(colors.get(&node), Some(Color::White))
                && let Some(cycle) = self.dfs_visit(node, &mut colors, &mut path)
            {
                let chain = cycle.iter().map(|&idx| self.graph[idx].path().to_string()).collect();
                return Err(AssetError::CircularDependency {
                    chain,
                }
                .into());
            }
        }

        Ok(())
    }

    fn dfs_visit(
        &self,
        node: NodeIndex,
        colors: &mut HashMap<NodeIndex, Color>,
        path: &mut Vec<NodeIndex>,
    ) -> Option<Vec<NodeIndex>> {
        colors.insert(node, Color::Gray);
        path.push(node);

        for neighbor in self.dependencies_of(node) {
            match colors.get(&neighbor) {
                Some(Color::Gray) => {
                    let cycle_start = path.iter().position(|&n| n == neighbor).unwrap_or(0);
                    let mut cycle = path[cycle_start..].to_vec();
                    cycle.push(neighbor);
                    return Some(cycle);
                }
                Some(Color::White) => {
                    if let Some(cycle) = self.dfs_visit(neighbor, colors, path) {
                        return Some(cycle);
                    }
                }
                _ => {}
            }
        }

        path.pop();
        colors.insert(node, Color::Black);
        None
    }

    /// Direct dependencies of a node, in the order the edges were added.
    fn dependencies_of(&self, node: NodeIndex) -> Vec<NodeIndex> {
        // petgraph yields neighbors newest-first.
        let mut deps: Vec<NodeIndex> = self.graph.neighbors(node).collect();
        deps.reverse();
        deps
    }

    /// Load order for the graph, starting from `roots`.
    ///
    /// Every module comes after all of its dependencies. Roots are visited in the
    /// given order and each module's dependencies in declaration order, so unrelated
    /// modules keep their relative order. Nodes unreachable from `roots` are appended
    /// in insertion order.
    pub fn load_order(&self, roots: &[ModuleRef]) -> Result<Vec<ModuleRef>> {
        self.detect_cycles()?;

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut order: Vec<ModuleRef> = Vec::with_capacity(self.graph.node_count());

        let root_indices = roots.iter().filter_map(|m| self.node_map.get(&node_key(m)).copied());
        for index in root_indices.chain(self.graph.node_indices()) {
            self.post_order(index, &mut visited, &mut order);
        }

        Ok(order)
    }

    fn post_order(
        &self,
        node: NodeIndex,
        visited: &mut HashSet<NodeIndex>,
        order: &mut Vec<ModuleRef>,
    ) {
        if !visited.insert(node) {
            return;
        }
        for dep in self.dependencies_of(node) {
            self.post_order(dep, visited, order);
        }
        order.push(self.graph[node].clone());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

fn node_key(module: &ModuleRef) -> String {
    module.path().to_ascii_lowercase()
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
