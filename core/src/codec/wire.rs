use crate::codec::layout::*;
use crate::prelude::{CodecError, CodecResult};
use crate::record::{Beam, SonarPing};
use log::debug;
use std::io::{self, Read, Write};

/// Writes `ping` as a header followed by one block per beam.
pub fn encode_ping<W: Write>(ping: &SonarPing, writer: &mut W) -> CodecResult<()> {
    let count = beam_count_field(ping.beams.len())?;

    let mut header = [0u8; HEADER_SIZE];
    put(&mut header, TIMESTAMP_OFFSET, &ping.timestamp.to_le_bytes());
    put(&mut header, HEADING_OFFSET, &ping.ship_heading_deg.to_le_bytes());
    put(&mut header, BEAM_COUNT_OFFSET, &count.to_le_bytes());
    writer.write_all(&header)?;

    let mut block = [0u8; BEAM_SIZE];
    for beam in &ping.beams {
        encode_beam(beam, &mut block);
        writer.write_all(&block)?;
    }

    Ok(())
}

pub fn encode_to_vec(ping: &SonarPing) -> CodecResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(encoded_len(ping.beams.len()));
    encode_ping(ping, &mut bytes)?;
    Ok(bytes)
}

/// Reads one ping. The beam count is taken from the header, but every block
/// is read with `read_exact` so a short stream fails instead of yielding
/// garbage.
pub fn decode_ping<R: Read>(reader: &mut R) -> CodecResult<SonarPing> {
    let mut header = [0u8; HEADER_SIZE];
    fill(reader, &mut header, "header", 0, 0)?;

    let timestamp = i64::from_le_bytes(take(&header, TIMESTAMP_OFFSET));
    let ship_heading_deg = f64::from_le_bytes(take(&header, HEADING_OFFSET));
    let count = u32::from_le_bytes(take(&header, BEAM_COUNT_OFFSET));

    let mut beams = Vec::with_capacity((count as usize).min(MAX_PREALLOCATED_BEAMS));
    let mut block = [0u8; BEAM_SIZE];
    for decoded in 0..count {
        fill(reader, &mut block, "beam array", count, decoded)?;
        beams.push(decode_beam(&block));
    }

    Ok(SonarPing {
        timestamp,
        ship_heading_deg,
        beams,
    })
}

pub fn decode_from_slice(bytes: &[u8]) -> CodecResult<SonarPing> {
    let mut cursor = bytes;
    let ping = decode_ping(&mut cursor)?;
    if !cursor.is_empty() {
        debug!("ignoring {} trailing bytes after ping", cursor.len());
    }
    Ok(ping)
}

fn beam_count_field(len: usize) -> CodecResult<u32> {
    u32::try_from(len).map_err(|_| CodecError::CountOverflow(len))
}

fn encode_beam(beam: &Beam, block: &mut [u8; BEAM_SIZE]) {
    put(block, BEAM_ID_OFFSET, &beam.id.to_le_bytes());
    put(block, BEAM_ANGLE_OFFSET, &beam.angle_deg.to_le_bytes());
    put(block, BEAM_DEPTH_OFFSET, &beam.depth_m.to_le_bytes());
    put(block, BEAM_INTENSITY_OFFSET, &beam.intensity_db.to_le_bytes());
}

fn decode_beam(block: &[u8; BEAM_SIZE]) -> Beam {
    Beam {
        id: i32::from_le_bytes(take(block, BEAM_ID_OFFSET)),
        angle_deg: f64::from_le_bytes(take(block, BEAM_ANGLE_OFFSET)),
        depth_m: f64::from_le_bytes(take(block, BEAM_DEPTH_OFFSET)),
        intensity_db: f64::from_le_bytes(take(block, BEAM_INTENSITY_OFFSET)),
    }
}

fn put(buffer: &mut [u8], offset: usize, bytes: &[u8]) {
    buffer[offset..offset + bytes.len()].copy_from_slice(bytes);
}

fn take<const N: usize>(buffer: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&buffer[offset..offset + N]);
    out
}

fn fill<R: Read>(
    reader: &mut R,
    buffer: &mut [u8],
    section: &'static str,
    expected_beams: u32,
    decoded_beams: u32,
) -> CodecResult<()> {
    reader.read_exact(buffer).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => CodecError::TruncatedStream {
            section,
            expected_beams,
            decoded_beams,
        },
        _ => CodecError::Io(err),
    })
}
