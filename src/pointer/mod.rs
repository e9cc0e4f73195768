pub mod cursor;
pub mod magnetic;
