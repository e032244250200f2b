//! Module lookup and dependency ordering.
//!
//! [`ModuleContainer`] holds every module known to the application for one manifest.
//! It answers two questions for the reference collector:
//!
//! - which module owns a given path ([`ModuleContainer::find_module_containing_path`])
//! - in which order a set of modules, plus everything they reference, must load
//!   ([`ModuleContainer::include_references_and_sort`])

pub mod dependency_graph;

pub use dependency_graph::DependencyGraph;

use anyhow::Result;
use std::collections::{HashSet, VecDeque};

use crate::core::AssetError;
use crate::module::ModuleRef;

/// The set of modules available to a page.
#[derive(Debug, Default)]
pub struct ModuleContainer {
    modules: Vec<ModuleRef>,
}

impl ModuleContainer {
    /// Create a container. Module paths must be unique, ignoring case.
    pub fn new(modules: Vec<ModuleRef>) -> Result<Self> {
        let mut seen = HashSet::new();
        for module in &modules {
            if !seen.insert(module.path().to_ascii_lowercase()) {
                return Err(AssetError::DuplicateModule {
                    path: module.path().to_string(),
                }
                .into());
            }
        }

        tracing::debug!("Created module container with {} module(s)", modules.len());
        Ok(Self {
            modules,
        })
    }

    pub fn modules(&self) -> &[ModuleRef] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Find the module whose path, or one of whose assets, equals `path`.
    ///
    /// Comparison ignores case. `path` is expected in app-relative form.
    pub fn find_module_containing_path(&self, path: &str) -> Option<ModuleRef> {
        self.modules.iter().find(|module| module.contains_path(path)).cloned()
    }

    /// Expand `modules` with everything they reference, transitively, and sort the
    /// result so each module follows its dependencies.
    ///
    /// The output has no duplicates. Modules passed in that are not part of the
    /// container (external modules) take part with their own references.
    ///
    /// # Errors
    ///
    /// - [`AssetError::UnresolvedReference`] if a reference matches no module
    /// - [`AssetError::CircularDependency`] if references form a cycle
    pub fn include_references_and_sort(&self, modules: &[ModuleRef]) -> Result<Vec<ModuleRef>> {
        let mut graph = DependencyGraph::new();
        let mut queue: VecDeque<ModuleRef> = VecDeque::new();

        for module in modules {
            if graph.ensure_node(module).1 {
                queue.push_back(module.clone());
            }
        }

        while let Some(module) = queue.pop_front() {
            for reference in module.references() {
                let dependency = self.find_module_containing_path(reference).ok_or_else(|| {
                    AssetError::UnresolvedReference {
                        module: module.path().to_string(),
                        reference: reference.clone(),
                    }
                })?;

                if graph.ensure_node(&dependency).1 {
                    queue.push_back(dependency.clone());
                }
                graph.add_dependency(&module, &dependency);
            }
        }

        let order = graph.load_order(modules)?;
        tracing::debug!(
            "Sorted {} module(s) into {} ({} reference edge(s))",
            modules.len(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(order)
    }
}
