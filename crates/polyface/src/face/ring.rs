//! Circular index arithmetic over a face of fixed size.
//!
//! Edge `i` joins local vertices `i` and `i+1`. The right edge of vertex `i`
//! leaves it (edge `i`); the left edge arrives at it (edge `i-1`).

use super::types::Face;

/// Index ring of size `n`. Callers keep indices in `[0, n)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    n: usize,
}

impl Ring {
    #[inline]
    pub fn new(n: usize) -> Self {
        Self { n }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
    #[inline]
    pub fn next(&self, i: usize) -> usize {
        if i + 1 == self.n {
            0
        } else {
            i + 1
        }
    }
    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        if i == 0 {
            self.n - 1
        } else {
            i - 1
        }
    }
    /// Index `k` steps ahead of `i`.
    #[inline]
    pub fn advance(&self, i: usize, k: usize) -> usize {
        (i + k) % self.n
    }
    /// Forward distance from `from` to `to`.
    #[inline]
    pub fn steps(&self, from: usize, to: usize) -> usize {
        (to + self.n - from) % self.n
    }
    /// Edge arriving at vertex `i`.
    #[inline]
    pub fn left_edge(&self, i: usize) -> usize {
        self.prev(i)
    }
    /// Edge leaving vertex `i`.
    #[inline]
    pub fn right_edge(&self, i: usize) -> usize {
        i
    }
}

impl Face {
    #[inline]
    pub fn ring(&self) -> Ring {
        Ring::new(self.len())
    }
    /// Local index after `i`, wrapping.
    #[inline]
    pub fn next(&self, i: usize) -> usize {
        self.ring().next(i)
    }
    /// Local index before `i`, wrapping.
    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        self.ring().prev(i)
    }

    /// The circular run of vertices from local `from` to local `to`, inclusive.
    pub(crate) fn run(&self, from: usize, to: usize) -> Face {
        let ring = self.ring();
        let count = ring.steps(from, to) + 1;
        let mut verts = Vec::with_capacity(count);
        let mut i = from;
        for _ in 0..count {
            verts.push(self.verts[i]);
            i = ring.next(i);
        }
        Face::new(verts)
    }
}
