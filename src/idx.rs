use std::{fmt, marker::PhantomData, num::NonZeroUsize, ops, hash};

/// A typed index into a `Vec<T>`.
///
/// Stored as a [NonZeroUsize] so `Option<Idx<T>>` costs no more than `Idx<T>`.
#[repr(transparent)]
pub struct Idx<T>(NonZeroUsize, PhantomData<T>);

impl<T> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.usize(), f)
    }
}

impl<T> Idx<T> {
    pub fn new(index: usize) -> Self {
        debug_assert!(index < usize::MAX);
        let index = index + 1;
        Self(unsafe { NonZeroUsize::new_unchecked(index) }, PhantomData)
    }

    pub fn usize(&self) -> usize {
        self.0.get() - 1
    }
}

// #[derive] does not work where type parameters do not implement the trait
// https://github.com/rust-lang/rust/issues/26925
impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        Self(self.0, PhantomData)
    }
}

impl<T> Copy for Idx<T> { }

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Idx<T> { }

impl<T> hash::Hash for Idx<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> ops::Index<Idx<T>> for Vec<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: Idx<T>) -> &Self::Output {
        &self[index.usize()]
    }
}

impl<T> ops::IndexMut<Idx<T>> for Vec<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: Idx<T>) -> &mut Self::Output {
        &mut self[index.usize()]
    }
}

pub trait VecExt<T> {
    fn push_get_index(&mut self, value: T) -> Idx<T>;

    fn next_index(&self) -> Idx<T>;
}

impl<T> VecExt<T> for Vec<T> {
    fn push_get_index(&mut self, value: T) -> Idx<T> {
        let index = Idx::new(self.len());
        self.push(value);
        index
    }

    fn next_index(&self) -> Idx<T> {
        Idx::new(self.len())
    }
}
