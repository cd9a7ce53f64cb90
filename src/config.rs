use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// 篩ドメインの上限 N（排他的）。探索範囲は `[2, N-1]`。
    pub upper_bound: u64,
    /// 並列エンジンのワーカースレッド数。1 未満は実行時に 1 へ丸められる。
    pub num_threads: usize,
    /// primecount による π(N-1) クロスチェックを行うかどうか。
    #[serde(default = "default_verify_count")]
    pub verify_count: bool,
    /// ベンチマークレポートをファイルに書き出すかどうか。
    #[serde(default = "default_report_enabled")]
    pub report_enabled: bool,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_use_timestamp_prefix")]
    pub use_timestamp_prefix: bool,
}

fn default_verify_count() -> bool {
    true
}

fn default_report_enabled() -> bool {
    true
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_use_timestamp_prefix() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upper_bound: 10_000_000,
            num_threads: 8,
            verify_count: default_verify_count(),
            report_enabled: default_report_enabled(),
            output_dir: default_output_dir(),
            use_timestamp_prefix: default_use_timestamp_prefix(),
        }
    }
}

const SETTINGS_FILE: &str = "settings.toml";

pub fn load_or_create_config() -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    if Path::new(SETTINGS_FILE).exists() {
        let mut file = File::open(SETTINGS_FILE)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let cfg = toml::from_str(&contents)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

pub fn save_config(cfg: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let toml_str = toml::to_string_pretty(cfg)?;
    let file = File::create(SETTINGS_FILE)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(toml_str.as_bytes())?;
    Ok(())
}
