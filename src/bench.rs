//! 逐次 / 並列エンジンを同一条件で実行し、結果を突き合わせるランナー。
//!
//! 計時は篩エンジンの外側（このモジュール）で行います。エンジン自体は
//! クロックに依存しないエントリポイントだけを公開し、呼び出し側が
//! `Instant` で囲む方針です。

use std::time::Instant;

use crate::config::Config;
use crate::engine_types::{PrimeResult, PrimeStats};
use crate::parallel_engine::generate_primes_parallel;
use crate::prime_pi_engine::expected_prime_count;
use crate::sequential_engine::generate_primes_sequential;
use crate::verify::verify_stats;

/// ベンチマーク 1 回分の実行結果。
///
/// `write_to_file`（`output.rs`）でレポートとして書き出せます。
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub upper_bound: u64,
    pub num_threads: usize,
    pub stats: PrimeStats,
    pub sequential_ms: u64,
    pub parallel_ms: u64,
    /// primecount による π(N-1) クロスチェックを行い、一致した場合 true。
    /// `Config::verify_count` が無効なら None。
    pub count_verified: Option<bool>,
}

impl BenchReport {
    /// 逐次時間 / 並列時間。並列時間が 0ms に丸まった場合は None。
    pub fn speedup(&self) -> Option<f64> {
        if self.parallel_ms == 0 {
            return None;
        }
        Some(self.sequential_ms as f64 / self.parallel_ms as f64)
    }
}

/// 逐次篩と並列篩を実行し、結果を比較したうえで `BenchReport` を返す。
///
/// エラーになるケース:
/// - `upper_bound < 2`（ドメインが不正）
/// - 推定メモリ使用量が物理メモリを超える（確保前に即失敗）
/// - 逐次と並列で `count` または `top10_desc` が一致しない
///   （チャンク分割か篩本体の欠陥。警告ではなくハードエラーとして返す）
/// - primecount のクロスチェックが有効で、π(N-1) と一致しない
pub fn run_benchmark(cfg: &Config) -> PrimeResult<BenchReport> {
    let n = cfg.upper_bound;
    if n < 2 {
        return Err(format!("upper_bound must be >= 2 (got {n})").into());
    }

    crate::memory::check_memory_budget(n, cfg.num_threads)?;
    log::info!(
        "{}",
        crate::memory::get_memory_info(n, cfg.num_threads).format()
    );

    log::info!("Running sequential sieve (N = {n})...");
    let t0 = Instant::now();
    let seq = generate_primes_sequential(n)?;
    let sequential_ms = t0.elapsed().as_millis() as u64;
    log::info!("Sequential sieve done: {} primes in {sequential_ms} ms", seq.count);

    log::info!("Running parallel sieve ({} threads)...", cfg.num_threads);
    let t1 = Instant::now();
    let par = generate_primes_parallel(n, cfg.num_threads)?;
    let parallel_ms = t1.elapsed().as_millis() as u64;
    log::info!("Parallel sieve done: {} primes in {parallel_ms} ms", par.count);

    if seq.count != par.count {
        return Err(format!(
            "prime count mismatch between engines: sequential={}, parallel={}",
            seq.count, par.count
        )
        .into());
    }
    if seq.top10_desc != par.top10_desc {
        return Err(format!(
            "top-10 mismatch between engines: sequential={:?}, parallel={:?}",
            seq.top10_desc, par.top10_desc
        )
        .into());
    }

    verify_stats(&par)?;

    let count_verified = if cfg.verify_count {
        let expected = expected_prime_count(n)?;
        if expected != par.count {
            return Err(format!(
                "prime count mismatch against primecount: pi({}) = {expected}, sieve found {}",
                n - 1,
                par.count
            )
            .into());
        }
        Some(true)
    } else {
        None
    };

    Ok(BenchReport {
        upper_bound: n,
        num_threads: cfg.num_threads,
        stats: par,
        sequential_ms,
        parallel_ms,
        count_verified,
    })
}
