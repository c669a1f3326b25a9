use bitflags::bitflags;

use crate::Context;

bitflags! {
    /// Bookkeeping bits folded onto a finished node by [`finish_node`],
    /// mirroring the subset of [`Context`] that's observational rather
    /// than grammar-steering: whether a diagnostic was raised while the
    /// node was being parsed, and whether the node (or anything nested
    /// inside it) contains a top-level `await`, a dynamic `import(...)`,
    /// or an `import.meta`.
    #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
    pub struct NodeFlags: u32 {
        const THIS_NODE_HAS_ERROR = 1 << 0;
        const CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT = 1 << 1;
        const POSSIBLY_CONTAINS_DYNAMIC_IMPORT = 1 << 2;
        const POSSIBLY_CONTAINS_IMPORT_META = 1 << 3;
    }
}

impl From<Context> for NodeFlags {
    fn from(ctx: Context) -> Self {
        let mut flags = NodeFlags::empty();
        flags.set(NodeFlags::THIS_NODE_HAS_ERROR, ctx.has_error());
        flags.set(NodeFlags::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT, ctx.has_top_level_await());
        flags.set(NodeFlags::POSSIBLY_CONTAINS_DYNAMIC_IMPORT, ctx.has_dynamic_import());
        flags.set(NodeFlags::POSSIBLY_CONTAINS_IMPORT_META, ctx.has_import_meta());
        flags
    }
}

/// Folds `ctx`'s bookkeeping bits into `flags`, the way the original
/// implementation's `finishNode` ORs `contextFlags` onto every node it
/// completes. `THIS_NODE_HAS_ERROR` is local to the node just finished and
/// is cleared from `ctx` afterward so it doesn't stick to the next
/// sibling; the sighting flags (top-level `await`/dynamic `import`/
/// `import.meta`) are left set so they keep propagating up to whatever
/// encloses this node. This crate's AST has no single node base to carry
/// a per-node `flags` field (see `DESIGN.md`); callers fold the bits onto
/// whichever aggregate they're building instead — for this crate,
/// `Program`, the only node any spec operation actually reads these flags
/// from.
pub fn finish_node(ctx: &mut Context, flags: &mut NodeFlags) {
    flags.insert(NodeFlags::from(ctx.bookkeeping_bits()));
    *ctx = ctx.and_error(false);
}
