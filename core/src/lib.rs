//! Sonar ping record model and packed binary codec.
//!
//! A ping is a fixed header followed by a count-prefixed array of fixed-size
//! beam blocks. The codec writes an explicit little-endian layout instead of
//! dumping native structs, and every read is bounds-checked.

pub mod codec;
pub mod filter;
pub mod prelude;
pub mod record;
pub mod store;
pub mod telemetry;

pub use prelude::{CodecError, CodecResult};
pub use record::{Beam, SonarPing};
