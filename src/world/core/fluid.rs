use std::fmt;

/// Registry handle for a fluid type
///
/// Id 0 is the empty fluid, matching vanilla's registry order:
///   0 = empty
///   1 = flowing_water
///   2 = water
///   3 = flowing_lava
///   4 = lava
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct FluidId(pub u16);

impl FluidId {
    pub const EMPTY: FluidId = FluidId(0);

    pub const fn new(id: u16) -> Self {
        FluidId(id)
    }

    /// Returns true if this is the empty fluid
    pub fn is_empty(&self) -> bool {
        *self == FluidId::EMPTY
    }
}

impl Default for FluidId {
    fn default() -> Self {
        FluidId::EMPTY
    }
}

impl fmt::Display for FluidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fluid({})", self.0)
    }
}
