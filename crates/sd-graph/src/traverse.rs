//! Breadth-first connectivity queries.
//!
//! Every query runs on one primitive: a FIFO traversal over handles that marks
//! the start visited before expanding it and can stop as soon as a target
//! handle is discovered.

use sd_core::VertexId;

use crate::graph::Graph;

/// Result of one traversal: vertices in discovery order, start first.
#[derive(Debug)]
pub(crate) struct Reach {
    pub(crate) visited: Vec<VertexId>,
    pub(crate) found: bool,
}

impl Graph {
    /// Traverse from `start`, skipping vertices already flagged in `seen`.
    ///
    /// `seen` is indexed by slot and is updated in place so repeated runs can
    /// share it.
    pub(crate) fn breadth_first(
        &self,
        start: VertexId,
        target: Option<VertexId>,
        seen: &mut [bool],
    ) -> Reach {
        // The visited list doubles as the queue; `head` is the front.
        let mut visited = vec![start];
        if let Some(flag) = seen.get_mut(start.slot()) {
            *flag = true;
        }
        if target == Some(start) {
            return Reach {
                visited,
                found: true,
            };
        }

        let mut head = 0;
        while let Some(&current) = visited.get(head) {
            head += 1;
            let Some(vertex) = self.vertex(current) else {
                continue;
            };
            for &neighbor in &vertex.neighbors {
                match seen.get_mut(neighbor.slot()) {
                    Some(flag) if !*flag => *flag = true,
                    _ => continue,
                }
                visited.push(neighbor);
                if target == Some(neighbor) {
                    return Reach {
                        visited,
                        found: true,
                    };
                }
            }
        }

        Reach {
            visited,
            found: false,
        }
    }

    fn reach(&self, word: &str, target: Option<VertexId>) -> Option<Reach> {
        let start = self.id(word)?;
        let mut seen = vec![false; self.slot_count()];
        Some(self.breadth_first(start, target, &mut seen))
    }

    /// Every vertex reachable from `word`, excluding `word`; sorted.
    pub fn connected_vertices(&self, word: &str) -> Vec<String> {
        match self.reach(word, None) {
            Some(reach) => self.words_of(reach.visited.into_iter().skip(1)),
            None => Vec::new(),
        }
    }

    /// Size of the component of `word`, minus `word` itself.
    pub fn connected_vertex_count(&self, word: &str) -> usize {
        self.reach(word, None)
            .map_or(0, |reach| reach.visited.len() - 1)
    }

    /// Whether `b` is reachable from `a`.
    pub fn are_connected(&self, a: &str, b: &str) -> bool {
        let Some(target) = self.id(b) else {
            return false;
        };
        self.reach(a, Some(target)).is_some_and(|reach| reach.found)
    }

    /// Partition all vertices into connected components.
    ///
    /// Each group is sorted; groups are ordered by their smallest word.
    pub fn connectivity_groups(&self) -> Vec<Vec<String>> {
        let mut seen = vec![false; self.slot_count()];
        let mut groups = Vec::new();

        for (id, _) in self.iter() {
            if seen[id.slot()] {
                continue;
            }
            let reach = self.breadth_first(id, None, &mut seen);
            groups.push(self.words_of(reach.visited));
        }

        groups.sort_unstable();
        groups
    }

    /// Number of connected components.
    pub fn connectivity_group_count(&self) -> usize {
        let mut seen = vec![false; self.slot_count()];
        let mut count = 0;
        for (id, _) in self.iter() {
            if !seen[id.slot()] {
                self.breadth_first(id, None, &mut seen);
                count += 1;
            }
        }
        count
    }
}
