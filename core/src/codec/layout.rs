//! Packed on-disk layout of a ping record.
//!
//! All fields are little-endian with no padding and no magic or version tag.
//!
//! Header (20 bytes):
//! - Timestamp: i64 (offset 0)
//! - Ship heading: f64 (offset 8)
//! - Beam count: u32 (offset 16)
//!
//! Beam block (28 bytes, repeated `beam_count` times from offset 20):
//! - Id: i32 (offset 0)
//! - Angle: f64 (offset 4)
//! - Depth: f64 (offset 12)
//! - Intensity: f64 (offset 20)

pub const TIMESTAMP_OFFSET: usize = 0;
pub const HEADING_OFFSET: usize = 8;
pub const BEAM_COUNT_OFFSET: usize = 16;
pub const HEADER_SIZE: usize = 20;

pub const BEAM_ID_OFFSET: usize = 0;
pub const BEAM_ANGLE_OFFSET: usize = 4;
pub const BEAM_DEPTH_OFFSET: usize = 12;
pub const BEAM_INTENSITY_OFFSET: usize = 20;
pub const BEAM_SIZE: usize = 28;

/// Upper bound on beams reserved up front; larger counts grow as blocks arrive.
pub const MAX_PREALLOCATED_BEAMS: usize = 4096;

/// Total encoded size of a ping carrying `beam_count` beams.
pub fn encoded_len(beam_count: usize) -> usize {
    HEADER_SIZE + beam_count * BEAM_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_tile_without_gaps() {
        assert_eq!(HEADING_OFFSET, TIMESTAMP_OFFSET + 8);
        assert_eq!(BEAM_COUNT_OFFSET, HEADING_OFFSET + 8);
        assert_eq!(HEADER_SIZE, BEAM_COUNT_OFFSET + 4);

        assert_eq!(BEAM_ANGLE_OFFSET, BEAM_ID_OFFSET + 4);
        assert_eq!(BEAM_DEPTH_OFFSET, BEAM_ANGLE_OFFSET + 8);
        assert_eq!(BEAM_INTENSITY_OFFSET, BEAM_DEPTH_OFFSET + 8);
        assert_eq!(BEAM_SIZE, BEAM_INTENSITY_OFFSET + 8);
    }

    #[test]
    fn encoded_len_counts_header_and_blocks() {
        assert_eq!(encoded_len(0), 20);
        assert_eq!(encoded_len(4), 20 + 4 * 28);
    }
}
