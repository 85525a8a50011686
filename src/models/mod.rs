mod asset;

pub use asset::*;
