pub mod layout;
pub mod wire;

pub use layout::{encoded_len, BEAM_SIZE, HEADER_SIZE};
pub use wire::{decode_from_slice, decode_ping, encode_ping, encode_to_vec};
