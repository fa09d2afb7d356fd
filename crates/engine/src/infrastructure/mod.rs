//! Infrastructure: storage, reference loading, asset lookup.

pub mod assets;
pub mod companion;
pub mod ports;
pub mod reference;
