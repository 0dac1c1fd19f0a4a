use std::fmt;

/// Registry handle for a block type
///
/// Handles are only meaningful for the registry that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct BlockId(pub u16);

impl BlockId {
    /// Air is always registered first
    pub const AIR: BlockId = BlockId(0);

    /// Create a new BlockId from a raw u16 value
    pub const fn new(id: u16) -> Self {
        BlockId(id)
    }
}

impl Default for BlockId {
    fn default() -> Self {
        BlockId::AIR
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({})", self.0)
    }
}
