use crate::codec::{decode_ping, encode_ping, encoded_len};
use crate::prelude::{CodecError, CodecResult};
use crate::record::SonarPing;
use crate::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Persists single pings to flat binary files.
///
/// Each call opens its own handle and drops it before returning, on the
/// error paths as well.
pub struct PingStore {
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl PingStore {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new("store"),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Creates or truncates `path` and writes `ping` to it.
    pub fn save<P: AsRef<Path>>(&self, path: P, ping: &SonarPing) -> CodecResult<usize> {
        let path = path.as_ref();
        self.logger.detail(&format!(
            "encoding {} beams to {}",
            ping.beam_count(),
            path.display()
        ));
        let result = Self::write_file(path, ping);
        match &result {
            Ok(bytes) => {
                self.metrics.record_saved(*bytes);
                self.logger.record(&format!(
                    "saved ping {} ({} beams, {} bytes) to {}",
                    ping.timestamp,
                    ping.beam_count(),
                    bytes,
                    path.display()
                ));
            }
            Err(err) => {
                self.metrics.record_error();
                self.logger.failure(&format!("save failed: {}", err));
            }
        }
        result
    }

    /// Reads one ping back from `path`.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> CodecResult<SonarPing> {
        let path = path.as_ref();
        let result = Self::read_file(path);
        match &result {
            Ok(ping) => {
                self.metrics.record_loaded();
                self.logger.record(&format!(
                    "loaded ping {} ({} beams) from {}",
                    ping.timestamp,
                    ping.beam_count(),
                    path.display()
                ));
            }
            Err(err) => {
                self.metrics.record_error();
                self.logger.failure(&format!("load failed: {}", err));
            }
        }
        result
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn write_file(path: &Path, ping: &SonarPing) -> CodecResult<usize> {
        let file = File::create(path).map_err(|source| CodecError::OpenFailure {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        encode_ping(ping, &mut writer)?;
        writer.flush()?;
        Ok(encoded_len(ping.beam_count()))
    }

    fn read_file(path: &Path) -> CodecResult<SonarPing> {
        let file = File::open(path).map_err(|source| CodecError::OpenFailure {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        decode_ping(&mut reader)
    }
}

impl Default for PingStore {
    fn default() -> Self {
        Self::new()
    }
}
