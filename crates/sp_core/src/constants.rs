/// Edge weight and path distance type
pub type Weight = u64;
/// Distance of a node that cannot be reached from the source.
/// Larger than any path sum as long as edge weights are at most [`MAX_WEIGHT`].
pub const INFINITY: Weight = Weight::MAX;
/// Largest accepted edge weight. A path visits fewer than `u32::MAX` nodes,
/// so every path sum stays below [`INFINITY`].
pub const MAX_WEIGHT: Weight = u32::MAX as Weight;
