use rustc_hash::FxHashMap;
use tsfe_allocator::Allocator;

/// Deduplicates identifier text across a parse: interning the same name
/// twice returns the same arena-allocated `&'a str` both times, so a
/// downstream binder grouping declarations by name can compare pointers
/// instead of bytes.
#[derive(Debug, Default)]
pub struct InternTable<'a> {
    strings: FxHashMap<&'a str, &'a str>,
}

impl<'a> InternTable<'a> {
    pub fn new() -> Self {
        Self { strings: FxHashMap::default() }
    }

    pub fn intern(&mut self, allocator: &'a Allocator, value: &str) -> &'a str {
        if let Some(&existing) = self.strings.get(value) {
            return existing;
        }
        let interned = allocator.new_str(value);
        self.strings.insert(interned, interned);
        interned
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
