use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;

use crate::bench::BenchReport;
use crate::config::Config;

impl BenchReport {
    /// ベンチマーク結果をTXTファイルに書き出す
    ///
    /// - `cfg` の内容も併せて出力し、再現性のための設定スナップショットとする。
    /// - `timestamp_prefix` が与えられた場合、レポートファイル名の先頭にも付与する。
    pub fn write_to_file(
        &self,
        output_dir: &str,
        cfg: &Config,
        timestamp_prefix: Option<&str>,
    ) -> io::Result<PathBuf> {
        let base_dir = PathBuf::from(output_dir);
        if !output_dir.is_empty() {
            create_dir_all(&base_dir)?;
        }

        let prefix = timestamp_prefix.unwrap_or("");
        let report_name = format!("{prefix}sieve_bench.txt");
        let report_path = base_dir.join(report_name);
        let file = File::create(&report_path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "=== Parallel Sieve Benchmark Report ===")?;
        writeln!(writer, "Domain: [2, {}]", self.upper_bound - 1)?;
        writeln!(writer, "Worker Threads: {}", self.num_threads)?;
        writeln!(writer, "Prime Count: {}", self.stats.count)?;
        write!(writer, "Top 10 Primes (desc):")?;
        if self.stats.top10_desc.is_empty() {
            writeln!(writer, " (none)")?;
        } else {
            for p in &self.stats.top10_desc {
                write!(writer, " {p}")?;
            }
            writeln!(writer)?;
        }
        writeln!(writer, "Sequential Time: {} ms", self.sequential_ms)?;
        writeln!(writer, "Parallel Time: {} ms", self.parallel_ms)?;
        match self.speedup() {
            Some(s) => writeln!(writer, "Speedup: {s:.2}x")?,
            None => writeln!(writer, "Speedup: n/a (parallel run under 1 ms)")?,
        }
        writeln!(
            writer,
            "π(x) Verified: {}",
            match self.count_verified {
                Some(true) => "OK",
                Some(false) => "MISMATCH",
                None => "SKIPPED",
            }
        )?;
        writeln!(
            writer,
            "Generated: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(writer, "Tool Version: {}", env!("CARGO_PKG_VERSION"))?;

        // 設定スナップショット
        writeln!(writer)?;
        writeln!(writer, "--- Settings Snapshot ---")?;
        writeln!(writer, "upper_bound = {}", cfg.upper_bound)?;
        writeln!(writer, "num_threads = {}", cfg.num_threads)?;
        writeln!(writer, "verify_count = {}", cfg.verify_count)?;
        writeln!(writer, "report_enabled = {}", cfg.report_enabled)?;
        writeln!(writer, "output_dir = {}", cfg.output_dir)?;
        writeln!(writer, "use_timestamp_prefix = {}", cfg.use_timestamp_prefix)?;
        writer.flush()?;

        Ok(report_path)
    }
}
