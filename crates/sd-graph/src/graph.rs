//! Core graph data structure.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use sd_core::{VertexId, check_vertex_name};
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::validate;

/// String-keyed adjacency listing: vertex name -> neighbor names.
///
/// This is the exchange form used by the codecs; the graph itself stores
/// handles.
pub type Adjacency = BTreeMap<String, BTreeSet<String>>;

/// A live vertex slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vertex {
    pub(crate) word: String,
    pub(crate) neighbors: HashSet<VertexId>,
}

/// Undirected graph of words.
///
/// Vertices live in a slab of slots addressed by `VertexId`; neighbor sets
/// hold handles, so traversals never hash or clone strings. Removed slots are
/// recycled through a free list. The public API is keyed by word.
///
/// Invariants kept by every mutator:
/// - `a` lists `b` iff `b` lists `a`
/// - no vertex lists itself
/// - no vertex name is empty or contains `;`
///
/// Listings (`vertices`, `neighbors`, `connected_vertices`, groups) are
/// returned in lexicographic order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) slots: Vec<Option<Vertex>>,
    pub(crate) index: HashMap<String, VertexId>,
    pub(crate) free: Vec<VertexId>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(crate) fn id(&self, word: &str) -> Option<VertexId> {
        self.index.get(word).copied()
    }

    pub(crate) fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slots.get(id.slot()).and_then(Option::as_ref)
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.slots.get_mut(id.slot()).and_then(Option::as_mut)
    }

    pub(crate) fn word(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(|v| v.word.as_str())
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Iterate over live vertices with their handles, in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, vertex)| Some((VertexId::from_index(slot as u32), vertex.as_ref()?)))
    }

    /// Resolve handles to words, sorted.
    pub(crate) fn words_of(&self, ids: impl IntoIterator<Item = VertexId>) -> Vec<String> {
        let mut words: Vec<String> = ids
            .into_iter()
            .filter_map(|id| self.word(id))
            .map(str::to_string)
            .collect();
        words.sort_unstable();
        words
    }

    /// Return the handle for `word`, creating an isolated vertex if needed.
    ///
    /// Does not check the name; callers do.
    fn intern(&mut self, word: &str) -> VertexId {
        if let Some(id) = self.id(word) {
            return id;
        }

        let vertex = Vertex {
            word: word.to_string(),
            neighbors: HashSet::new(),
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.slot()] = Some(vertex);
                id
            }
            None => {
                let id = VertexId::from_index(self.slots.len() as u32);
                self.slots.push(Some(vertex));
                id
            }
        };
        self.index.insert(word.to_string(), id);
        id
    }

    fn check_name(word: &str) -> GraphResult<()> {
        check_vertex_name(word).map_err(|reason| GraphError::invalid_vertex(word, reason))
    }

    /// Add an isolated vertex. No-op if it already exists.
    pub fn add_vertex(&mut self, word: &str) -> GraphResult<()> {
        if self.has_vertex(word) {
            return Ok(());
        }
        Self::check_name(word)?;
        self.intern(word);
        Ok(())
    }

    pub fn has_vertex(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// All vertex names, sorted.
    pub fn vertices(&self) -> Vec<String> {
        let mut words: Vec<String> = self.index.keys().cloned().collect();
        words.sort_unstable();
        words
    }

    /// Remove a vertex and every edge touching it. No-op if absent.
    pub fn remove_vertex(&mut self, word: &str) {
        let Some(id) = self.index.remove(word) else {
            return;
        };

        if let Some(vertex) = self.slots.get_mut(id.slot()).and_then(Option::take) {
            for neighbor in vertex.neighbors {
                if let Some(other) = self.vertex_mut(neighbor) {
                    other.neighbors.remove(&id);
                }
            }
        }
        self.free.push(id);
    }

    /// Remove `word` only if it exists and has no neighbors.
    ///
    /// Returns whether the vertex was removed.
    pub fn remove_vertex_if_isolated(&mut self, word: &str) -> bool {
        let isolated = self
            .id(word)
            .and_then(|id| self.vertex(id))
            .is_some_and(|v| v.neighbors.is_empty());
        if isolated {
            self.remove_vertex(word);
        }
        isolated
    }

    /// Add the undirected edge `a`-`b`, creating missing endpoints.
    ///
    /// Both names are checked before anything is inserted, so a failure
    /// leaves the graph untouched. `a == b` only ensures the vertex exists.
    pub fn add_edge(&mut self, a: &str, b: &str) -> GraphResult<()> {
        if self.has_edge(a, b) {
            return Ok(());
        }
        for word in [a, b] {
            if !self.has_vertex(word) {
                Self::check_name(word)?;
            }
        }

        let ia = self.intern(a);
        if a == b {
            return Ok(());
        }
        let ib = self.intern(b);
        self.link(ia, ib);
        Ok(())
    }

    fn link(&mut self, a: VertexId, b: VertexId) {
        if let Some(vertex) = self.vertex_mut(a) {
            vertex.neighbors.insert(b);
        }
        if let Some(vertex) = self.vertex_mut(b) {
            vertex.neighbors.insert(a);
        }
    }

    fn unlink(&mut self, a: VertexId, b: VertexId) {
        if let Some(vertex) = self.vertex_mut(a) {
            vertex.neighbors.remove(&b);
        }
        if let Some(vertex) = self.vertex_mut(b) {
            vertex.neighbors.remove(&a);
        }
    }

    fn edge_ids(&self, a: &str, b: &str) -> Option<(VertexId, VertexId)> {
        let (ia, ib) = (self.id(a)?, self.id(b)?);
        self.vertex(ia)?.neighbors.contains(&ib).then_some((ia, ib))
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_ids(a, b).is_some()
    }

    /// Remove the edge `a`-`b`. Returns whether it existed.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        match self.edge_ids(a, b) {
            Some((ia, ib)) => {
                self.unlink(ia, ib);
                true
            }
            None => false,
        }
    }

    /// Remove the edge, then drop either endpoint left without neighbors.
    pub fn remove_edge_and_cleanup(&mut self, a: &str, b: &str) {
        self.remove_edge(a, b);
        self.remove_vertex_if_isolated(a);
        self.remove_vertex_if_isolated(b);
    }

    /// Direct neighbors of `word`, sorted; empty if absent.
    pub fn neighbors(&self, word: &str) -> Vec<String> {
        match self.id(word).and_then(|id| self.vertex(id)) {
            Some(vertex) => self.words_of(vertex.neighbors.iter().copied()),
            None => Vec::new(),
        }
    }

    /// Remove every isolated vertex. Returns how many were removed.
    pub fn cleanup(&mut self) -> usize {
        let isolated: Vec<String> = self
            .iter()
            .filter(|(_, v)| v.neighbors.is_empty())
            .map(|(_, v)| v.word.clone())
            .collect();
        for word in &isolated {
            self.remove_vertex(word);
        }
        debug!(removed = isolated.len(), remaining = self.order(), "graph cleanup");
        isolated.len()
    }

    /// Check the structural invariants.
    pub fn validate(&self) -> GraphResult<()> {
        validate::validate_graph(self)
    }

    /// Union `other` into this graph after validating it.
    pub fn merge(&mut self, other: Graph) -> GraphResult<()> {
        other.validate()?;
        self.merge_unsafe(other);
        Ok(())
    }

    /// Union `other` into this graph without validating it.
    ///
    /// New vertices are adopted, existing ones get their neighbor sets
    /// unioned. Only for graphs already known to be valid.
    pub fn merge_unsafe(&mut self, other: Graph) {
        let before = self.order();

        let mut remap: Vec<Option<VertexId>> = vec![None; other.slot_count()];
        for (id, vertex) in other.iter() {
            remap[id.slot()] = Some(self.intern(&vertex.word));
        }

        for (id, vertex) in other.iter() {
            let Some(local) = remap[id.slot()] else {
                continue;
            };
            let adopted: Vec<VertexId> = vertex
                .neighbors
                .iter()
                .filter_map(|n| remap.get(n.slot()).copied().flatten())
                .collect();
            if let Some(target) = self.vertex_mut(local) {
                target.neighbors.extend(adopted);
            }
        }

        debug!(
            added = self.order() - before,
            total = self.order(),
            "merged graph"
        );
    }

    /// Replace this graph with `other` after validating it.
    pub fn from_graph(&mut self, other: Graph) -> GraphResult<()> {
        other.validate()?;
        self.from_graph_unsafe(other);
        Ok(())
    }

    /// Replace this graph with `other` outright.
    pub fn from_graph_unsafe(&mut self, other: Graph) {
        debug!(from = self.order(), to = other.order(), "replaced graph");
        *self = other;
    }

    /// Snapshot the graph as a string-keyed adjacency listing.
    pub fn to_adjacency(&self) -> Adjacency {
        self.iter()
            .map(|(_, vertex)| {
                let neighbors = vertex
                    .neighbors
                    .iter()
                    .filter_map(|&n| self.word(n))
                    .map(str::to_string)
                    .collect();
                (vertex.word.clone(), neighbors)
            })
            .collect()
    }

    /// Build a graph from an adjacency listing, validating it first.
    pub fn from_adjacency(adjacency: Adjacency) -> GraphResult<Self> {
        validate::validate_adjacency(&adjacency)?;
        Ok(Self::from_adjacency_unchecked(&adjacency))
    }

    /// Build a graph from an adjacency listing as-is.
    ///
    /// Neighbors that are not keys are dropped; symmetry is not enforced.
    pub(crate) fn from_adjacency_unchecked(adjacency: &Adjacency) -> Self {
        let mut graph = Graph::new();
        for word in adjacency.keys() {
            graph.intern(word);
        }
        for (word, neighbors) in adjacency {
            let Some(id) = graph.id(word) else {
                continue;
            };
            let ids: Vec<VertexId> = neighbors.iter().filter_map(|n| graph.id(n)).collect();
            if let Some(vertex) = graph.vertex_mut(id) {
                vertex.neighbors.extend(ids);
            }
        }
        graph
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.order() == other.order() && self.to_adjacency() == other.to_adjacency()
    }
}

impl Eq for Graph {}
