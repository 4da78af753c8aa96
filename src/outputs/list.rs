use smallvec::{Array, SmallVec};

/// A growable list of triangles, each written as three vertex indices of type `V`.
///
/// Implemented for flat buffers (`Vec<u32>`) as well as per-triangle containers.
pub trait List<V> {
    /// Append the triangle `v0`, `v1`, `v2`
    fn push(&mut self, v0: V, v1: V, v2: V);

    /// The number of triangles in the list
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> List<V> for Vec<V> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, v0);
        Vec::push(self, v1);
        Vec::push(self, v2);
    }

    fn len(&self) -> usize {
        Vec::len(self) / 3
    }
}

impl<V> List<V> for Vec<[V; 3]> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, [v0, v1, v2]);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<V> List<V> for Vec<(V, V, V)> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, (v0, v1, v2));
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<V, A: Array<Item = V>> List<V> for SmallVec<A> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        SmallVec::push(self, v0);
        SmallVec::push(self, v1);
        SmallVec::push(self, v2);
    }

    fn len(&self) -> usize {
        SmallVec::len(self) / 3
    }
}

impl<V, L: List<V>> List<V> for &mut L {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        (**self).push(v0, v1, v2)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
