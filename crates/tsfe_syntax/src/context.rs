use bitflags::bitflags;

bitflags! {
    /// Parser context flags: grammar-changing bits inherited down the
    /// recursive descent, plus a few bookkeeping bits copied onto finished
    /// nodes unconditionally.
    ///
    /// Each flag's unset state is the common case, by design: most nodes
    /// parse with `in` allowed, outside a generator, outside `async`, and
    /// not as part of a decorator, so leaving those flags at `0` means most
    /// finished nodes carry no extra bits. Only the grammar positions that
    /// actually change a flag need to touch it.
    #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
    pub struct Context: u32 {
        /// `[~In]`: the `in` operator is not a `RelationalExpression`
        /// operator here (inside a `for(;;)` head's init clause).
        const DISALLOW_IN = 1 << 0;
        /// `[Yield]`: `yield` is a keyword, not an identifier.
        const YIELD = 1 << 1;
        /// `[Await]`: `await` is a keyword, not an identifier; also gates
        /// top-level `await` in a module.
        const AWAIT = 1 << 2;
        /// Node was parsed as part of a decorator expression.
        const DECORATOR = 1 << 3;
        /// Suppresses conditional-type parsing inside the `extends` arm of
        /// an enclosing conditional type (`infer U extends X ? ... : ...`).
        const DISALLOW_CONDITIONAL_TYPES = 1 << 4;
        /// Plain JavaScript file: type syntax is a parse error, not a
        /// grammar option.
        const JAVASCRIPT_FILE = 1 << 5;
        /// `.json` file: only a JSON value expression is permitted.
        const JSON_FILE = 1 << 6;
        /// Ambient context: inside `declare ...` or a `.d.ts` file: function
        /// and method bodies are forbidden, not optional.
        const AMBIENT = 1 << 7;

        // Bookkeeping bits, copied onto every node finished while set.
        /// A parse error was recorded since the last finished node.
        const THIS_NODE_HAS_ERROR = 1 << 8;
        /// The file may contain a top-level `await` expression.
        const CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT = 1 << 9;
        /// The file may contain `import(...)`.
        const POSSIBLY_CONTAINS_DYNAMIC_IMPORT = 1 << 10;
        /// The file may contain `import.meta`.
        const POSSIBLY_CONTAINS_IMPORT_META = 1 << 11;
        /// Set inside a function/method/arrow body: a `return` statement is
        /// legal here. Unset at the top of a source file and inside a class
        /// static block, so `return` outside a function is a parse error
        /// rather than silently accepted.
        const ALLOW_RETURN = 1 << 12;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::empty()
    }
}

macro_rules! context_accessor {
    ($has:ident, $and:ident, $flag:ident) => {
        #[inline]
        pub fn $has(self) -> bool {
            self.contains(Self::$flag)
        }

        #[inline]
        #[must_use]
        pub fn $and(self, include: bool) -> Self {
            if include { self | Self::$flag } else { self - Self::$flag }
        }
    };
}

impl Context {
    context_accessor!(has_disallow_in, and_disallow_in, DISALLOW_IN);
    context_accessor!(has_yield, and_yield, YIELD);
    context_accessor!(has_await, and_await, AWAIT);
    context_accessor!(has_decorator, and_decorator, DECORATOR);
    context_accessor!(
        has_disallow_conditional_types,
        and_disallow_conditional_types,
        DISALLOW_CONDITIONAL_TYPES
    );
    context_accessor!(has_javascript_file, and_javascript_file, JAVASCRIPT_FILE);
    context_accessor!(has_json_file, and_json_file, JSON_FILE);
    context_accessor!(has_ambient, and_ambient, AMBIENT);
    context_accessor!(has_error, and_error, THIS_NODE_HAS_ERROR);
    context_accessor!(
        has_top_level_await,
        and_top_level_await,
        CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT
    );
    context_accessor!(
        has_dynamic_import,
        and_dynamic_import,
        POSSIBLY_CONTAINS_DYNAMIC_IMPORT
    );
    context_accessor!(has_import_meta, and_import_meta, POSSIBLY_CONTAINS_IMPORT_META);
    context_accessor!(has_allow_return, and_allow_return, ALLOW_RETURN);

    /// The bookkeeping subset (as opposed to the grammar-mode subset) of
    /// these flags: the bits [`crate::NodeFlags::from`] folds onto a
    /// finished node via [`crate::finish_node`]-style bookkeeping, as
    /// opposed to the grammar-mode bits (`YIELD`/`AWAIT`/...) that only ever
    /// steer parsing decisions and are never copied onto a node.
    #[inline]
    pub fn bookkeeping_bits(self) -> Self {
        self & (Self::THIS_NODE_HAS_ERROR
            | Self::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT
            | Self::POSSIBLY_CONTAINS_DYNAMIC_IMPORT
            | Self::POSSIBLY_CONTAINS_IMPORT_META)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert_eq!(Context::default(), Context::empty());
        assert!(!Context::default().has_yield());
    }

    #[test]
    fn and_toggles_without_disturbing_others() {
        let ctx = Context::default().and_yield(true).and_await(true);
        assert!(ctx.has_yield());
        assert!(ctx.has_await());
        let ctx = ctx.and_yield(false);
        assert!(!ctx.has_yield());
        assert!(ctx.has_await());
    }
}
