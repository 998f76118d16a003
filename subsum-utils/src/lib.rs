mod hash;
pub use hash::*;
mod json;
pub use json::*;
mod plain;
pub use plain::*;
