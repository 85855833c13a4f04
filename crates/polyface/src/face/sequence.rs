//! Sequence operations: edges, collapsing, flipping, and circular comparison.

use tracing::trace;

use super::types::{Edge, Face, Orientation};

impl Face {
    /// Edges in traversal order, closing edge `(last, first)` included.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.len();
        (0..n).map(move |i| Edge::new(self.verts[i], self.verts[self.next(i)]))
    }

    /// Edge `i`, joining local vertices `i` and `i+1`.
    #[inline]
    pub fn edge(&self, i: usize) -> Edge {
        Edge::new(self.verts[i], self.verts[self.next(i)])
    }

    /// Direction of `e` relative to this face's traversal.
    ///
    /// Looks only at the first vertex matching either endpoint. `None` when
    /// no endpoint is found, or when the match is not followed or preceded
    /// by the other endpoint.
    pub fn edge_direction(&self, e: &Edge) -> Option<Orientation> {
        for (i, &v) in self.verts.iter().enumerate() {
            let prev = self.verts[self.prev(i)];
            let next = self.verts[self.next(i)];
            if v == e.start() {
                return if prev == e.end() {
                    Some(Orientation::Reverse)
                } else if next == e.end() {
                    Some(Orientation::Forward)
                } else {
                    None
                };
            } else if v == e.end() {
                return if prev == e.start() {
                    Some(Orientation::Forward)
                } else if next == e.start() {
                    Some(Orientation::Reverse)
                } else {
                    None
                };
            }
        }
        None
    }

    /// Local position of global vertex `v`.
    pub fn which(&self, v: usize) -> Option<usize> {
        self.verts.iter().position(|&x| x == v)
    }

    /// Remove consecutive duplicates in place, including a last vertex equal
    /// to the first. Returns the new size.
    ///
    /// A face whose vertices are all equal keeps a single vertex.
    pub fn collapse(&mut self) -> usize {
        if self.len() > 1 {
            let mut ci = 0;
            for i in 1..self.len() {
                if self.verts[i] != self.verts[ci] {
                    ci += 1;
                    self.verts[ci] = self.verts[i];
                }
            }
            if ci == 0 || self.verts[ci] != self.verts[0] {
                ci += 1;
            }
            self.verts.truncate(ci);
        }
        self.len()
    }

    /// Collapsed copy; `self` is unchanged.
    pub fn collapsed(&self) -> Face {
        let mut f = self.clone();
        f.collapse();
        f
    }

    /// True when fewer than three distinct consecutive vertices remain.
    pub fn is_degenerate(&self) -> bool {
        self.collapsed().len() < 3
    }

    /// Reverse the traversal in place, keeping vertex 0 first.
    pub fn flip(&mut self) {
        if self.len() > 2 {
            self.verts[1..].reverse();
        }
    }

    /// Reversed copy; its first vertex equals this face's first vertex.
    pub fn reverse_face(&self) -> Face {
        let mut verts = Vec::with_capacity(self.len());
        if let Some((&first, rest)) = self.verts.split_first() {
            verts.push(first);
            verts.extend(rest.iter().rev());
        }
        Face::new(verts)
    }

    /// Compare two faces as circular boundaries.
    ///
    /// `Forward` for the same boundary in the same sense (any starting
    /// vertex), `Reverse` for the opposite sense, `None` otherwise. If `a`
    /// carries a repeated vertex at its start (second or last equal to
    /// first), both faces are collapsed and compared again.
    pub fn compare(a: &Face, b: &Face) -> Option<Orientation> {
        let n = a.len();
        if n != b.len() || n == 0 {
            return None;
        }
        let first = a.verts[0];
        let mut bi = b.which(first)?;
        if n == 1 {
            return Some(Orientation::Forward);
        }

        let second = a.verts[1];
        if second == first || a.verts[n - 1] == first {
            trace!(n, "compare: collapsing repeated vertices");
            return Face::compare(&a.collapsed(), &b.collapsed());
        }

        let dir = if b.verts[b.next(bi)] == second {
            Orientation::Forward
        } else if b.verts[b.prev(bi)] == second {
            Orientation::Reverse
        } else {
            return None;
        };

        let mut ai = 1;
        bi = match dir {
            Orientation::Forward => b.next(bi),
            Orientation::Reverse => b.prev(bi),
        };
        for _ in 2..n {
            ai = a.next(ai);
            bi = match dir {
                Orientation::Forward => b.next(bi),
                Orientation::Reverse => b.prev(bi),
            };
            if a.verts[ai] != b.verts[bi] {
                return None;
            }
        }
        Some(dir)
    }
}
