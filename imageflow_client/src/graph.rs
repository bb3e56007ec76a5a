//! Append-only adjacency structure backing the graph pipeline builder.
//!
//! Vertices are registered with sequentially allocated ids; edges carry the
//! wire `EdgeKind`. There are no removal operations. `to_edges` flattens in
//! vertex-registration order, then edge-insertion order within a vertex, so
//! the serialized adjacency is stable for a given insertion sequence.

use crate::errors::{ClientError, Result};
use imageflow_client_types as s;
use std::collections::BTreeMap;

#[derive(Default, Debug, Clone)]
pub struct GraphBuilder {
    adjacency: BTreeMap<i32, Vec<(i32, s::EdgeKind)>>,
}

impl GraphBuilder {
    pub fn new() -> GraphBuilder {
        GraphBuilder::default()
    }

    pub fn add_vertex(&mut self, id: i32) -> Result<()> {
        if self.adjacency.contains_key(&id) {
            return Err(ClientError::DuplicateVertex { id });
        }
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    pub fn add_edge(&mut self, from: i32, to: i32, kind: s::EdgeKind) -> Result<()> {
        if !self.adjacency.contains_key(&to) {
            return Err(ClientError::UnknownVertex { id: to });
        }
        let list = self
            .adjacency
            .get_mut(&from)
            .ok_or(ClientError::UnknownVertex { id: from })?;
        list.push((to, kind));
        Ok(())
    }

    pub fn to_edges(&self) -> Vec<s::Edge> {
        let mut edges = Vec::new();
        for (&from, targets) in &self.adjacency {
            for &(to, kind) in targets {
                edges.push(s::Edge { from, to, kind });
            }
        }
        edges
    }
}
