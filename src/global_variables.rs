// Layout of one logical grid cell, in pixels.
pub const CELL_SIZE: i32 = 50;

// Each logical cell spans this many layout cells (intersection + two road tiles).
pub const LAYOUT_MULTIPLIER: i32 = 3;
