//! Shared primitive types used across the generator.

/// A hex color string such as `"#F4A261"`, as stored in palette tables.
pub type Color = &'static str;

/// A generated stat value.
pub type Stat = u32;

/// Adventure difficulty: biome danger plus complication bonus.
pub type Difficulty = u8;
