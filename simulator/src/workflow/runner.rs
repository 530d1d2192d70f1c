use crate::workflow::config::DemoConfig;
use anyhow::Context;
use sonarcore::store::PingStore;
use sonarcore::telemetry::MetricsSnapshot;
use sonarcore::SonarPing;

/// Outcome of reading the file back. A failed read is reported, not fatal.
#[derive(Debug)]
pub enum ReadBack {
    Decoded(SonarPing),
    Failed(String),
}

pub struct RunResult {
    pub bytes_written: usize,
    pub readback: ReadBack,
    pub metrics: MetricsSnapshot,
}

pub struct Runner {
    config: DemoConfig,
    store: PingStore,
}

impl Runner {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            store: PingStore::new(),
        }
    }

    /// Writes `ping` to the configured output, then decodes it back.
    ///
    /// Only a write failure is returned as an error.
    pub fn execute(&self, ping: &SonarPing) -> anyhow::Result<RunResult> {
        let output = &self.config.output;
        let bytes_written = self
            .store
            .save(output, ping)
            .with_context(|| format!("writing ping to {}", output.display()))?;

        let readback = match self.store.load(output) {
            Ok(decoded) => ReadBack::Decoded(decoded),
            Err(err) => {
                ReadBack::Failed(format!("reading ping from {}: {}", output.display(), err))
            }
        };

        Ok(RunResult {
            bytes_written,
            readback,
            metrics: self.store.metrics(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::{build_synthetic_from_args, sample_ping};
    use crate::workflow::config::DemoVariant;
    use sonarcore::codec::encoded_len;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn config_for(output: PathBuf) -> DemoConfig {
        DemoConfig::from_args(output, DemoVariant::Verify, 100.0, None, 0)
    }

    #[test]
    fn runner_round_trips_sample_ping() {
        let dir = tempdir().unwrap();
        let runner = Runner::new(config_for(dir.path().join("data.bin")));
        let ping = sample_ping();

        let result = runner.execute(&ping).unwrap();
        assert_eq!(result.bytes_written, encoded_len(4));
        match result.readback {
            ReadBack::Decoded(decoded) => assert_eq!(decoded, ping),
            ReadBack::Failed(reason) => panic!("read back failed: {}", reason),
        }
        assert_eq!(result.metrics.saved, 1);
        assert_eq!(result.metrics.loaded, 1);
    }

    #[test]
    fn runner_round_trips_synthetic_ping() {
        let dir = tempdir().unwrap();
        let runner = Runner::new(config_for(dir.path().join("synthetic.bin")));
        let ping = build_synthetic_from_args(256, 42).unwrap();

        let result = runner.execute(&ping).unwrap();
        match result.readback {
            ReadBack::Decoded(decoded) => assert_eq!(decoded, ping),
            ReadBack::Failed(reason) => panic!("read back failed: {}", reason),
        }
    }

    #[test]
    fn runner_fails_when_output_cannot_be_opened() {
        let dir = tempdir().unwrap();
        let runner = Runner::new(config_for(dir.path().join("no_such_dir").join("data.bin")));

        let err = runner.execute(&sample_ping()).err().unwrap();
        let message = format!("{:#}", err);
        assert!(message.contains("writing ping to"));
        assert!(message.contains("could not open"));
    }
}
