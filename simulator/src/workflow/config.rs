use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sonarcore::filter::{DepthFilter, DEFAULT_MIN_DEPTH_M};
use std::fs;
use std::path::{Path, PathBuf};

/// Which demonstration of the codec to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DemoVariant {
    /// Write the four sample beams, read them back and list every beam
    Verify,
    /// Build three beams, append a fourth, then list only the deep ones
    Filter,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub output: PathBuf,
    pub variant: DemoVariant,
    pub min_depth_m: f64,
    pub synthetic_beams: Option<usize>,
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("data.bin"),
            variant: DemoVariant::Verify,
            min_depth_m: DEFAULT_MIN_DEPTH_M,
            synthetic_beams: None,
            seed: 0,
        }
    }
}

impl DemoConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading demo config {}", path_ref.display()))?;
        let config: DemoConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing demo config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        output: PathBuf,
        variant: DemoVariant,
        min_depth_m: f64,
        synthetic_beams: Option<usize>,
        seed: u64,
    ) -> Self {
        Self {
            output,
            variant,
            min_depth_m,
            synthetic_beams,
            seed,
        }
    }

    pub fn depth_filter(&self) -> DepthFilter {
        DepthFilter::new(self.min_depth_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_builds_filter() {
        let cfg = DemoConfig::from_args(
            PathBuf::from("out.bin"),
            DemoVariant::Filter,
            50.0,
            None,
            0,
        );
        assert_eq!(cfg.depth_filter().min_depth_m(), 50.0);
        assert_eq!(cfg.variant, DemoVariant::Filter);
    }

    #[test]
    fn config_load_reads_yaml_with_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"variant: filter\nsynthetic_beams: 12\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = DemoConfig::load(&path).unwrap();
        assert_eq!(cfg.variant, DemoVariant::Filter);
        assert_eq!(cfg.synthetic_beams, Some(12));
        assert_eq!(cfg.output, PathBuf::from("data.bin"));
        assert_eq!(cfg.min_depth_m, DEFAULT_MIN_DEPTH_M);
    }

    #[test]
    fn config_load_rejects_unknown_variant() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"variant: replay\n").unwrap();
        let path = temp.into_temp_path();
        assert!(DemoConfig::load(&path).is_err());
    }
}
