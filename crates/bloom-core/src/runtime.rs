use crate::View;

/// Runs one composition pass: builds the tree under whatever locals the
/// caller provides, then numbers the nodes in pre-order.
pub fn compose(build: impl FnOnce() -> View) -> View {
    let root = build().stamp_ids();
    log::trace!("compose: {} nodes", root.node_count());
    root
}
