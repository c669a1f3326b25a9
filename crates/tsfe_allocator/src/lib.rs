//! Memory arena for the tsfe scanner and parser.
//!
//! A single [`Allocator`] backs one [`tsfe_parser::Parser`] invocation. Every
//! token value, AST node and `NodeArray` is bump-allocated into it; nothing
//! is freed until the allocator itself is dropped, which is also why a
//! finished `Program` can be thrown away in one pointer bump instead of a
//! tree walk full of `Drop` calls.

use std::ops;

use bumpalo::Bump;

/// Bump-allocated, growable vector. An alias over [`bumpalo::collections::Vec`]
/// so call sites read like `std::vec::Vec` while allocating into the arena.
pub type Vec<'a, T> = bumpalo::collections::Vec<'a, T>;

/// Bump-allocated box.
pub type Box<'a, T> = bumpalo::boxed::Box<'a, T>;

/// Bump-allocated string.
pub type String<'a> = bumpalo::collections::String<'a>;

/// Arena allocator wrapping [`bumpalo::Bump`].
///
/// One `Allocator` is created per parse and handed to both the lexer (for
/// escaped string/template buffers) and the parser (for every AST node).
#[derive(Default)]
pub struct Allocator {
    bump: Bump,
}

impl Allocator {
    /// Create a new, empty allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new allocator with `capacity` bytes pre-reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { bump: Bump::with_capacity(capacity) }
    }

    /// Allocate `value` in the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, value: T) -> &mut T {
        self.bump.alloc(value)
    }

    /// Create a new, empty [`Vec`] backed by this arena.
    #[inline]
    pub fn new_vec<T>(&self) -> Vec<'_, T> {
        Vec::new_in(&self.bump)
    }

    /// Create a new [`Vec`] backed by this arena, with `capacity` reserved.
    #[inline]
    pub fn new_vec_with_capacity<T>(&self, capacity: usize) -> Vec<'_, T> {
        Vec::with_capacity_in(capacity, &self.bump)
    }

    /// Create a new, empty [`String`] backed by this arena.
    #[inline]
    pub fn new_str(&self, value: &str) -> &str {
        self.bump.alloc_str(value)
    }

    /// Box `value` in the arena.
    #[inline]
    pub fn new_box<T>(&self, value: T) -> Box<'_, T> {
        Box::new_in(value, &self.bump)
    }

    /// Number of bytes currently allocated into the arena's chunks.
    pub fn used_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl ops::Deref for Allocator {
    type Target = Bump;

    fn deref(&self) -> &Self::Target {
        &self.bump
    }
}

#[cfg(test)]
mod test {
    use super::Allocator;

    #[test]
    fn alloc_and_reuse() {
        let allocator = Allocator::default();
        let x = allocator.alloc(42u32);
        assert_eq!(*x, 42);

        let mut v = allocator.new_vec::<u32>();
        v.push(1);
        v.push(2);
        assert_eq!(v.as_slice(), [1, 2]);
    }

    #[test]
    fn with_capacity_preallocates() {
        let allocator = Allocator::with_capacity(1024);
        assert!(allocator.used_bytes() >= 1024 || allocator.used_bytes() == 0);
    }
}
