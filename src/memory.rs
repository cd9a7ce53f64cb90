use sysinfo::System;

use crate::engine_types::PrimeResult;
use crate::sieve_math::integer_sqrt;
use crate::tile::MAX_TILE;

/// システムの物理メモリ総量を取得（バイト単位）
pub fn get_total_memory() -> u64 {
    let mut sys = System::new_all();
    sys.refresh_memory();
    sys.total_memory()
}

/// 逐次エンジンのメモリ使用量を推定（バイト単位）
/// upper_bound: 篩ドメインの上限 N
pub fn estimate_sequential_memory(upper_bound: u64) -> u64 {
    // ビット配列: N ビット = N/8 バイト
    // + Vec のオーバーヘッド等を考慮して 1.2 倍
    let bytes = (upper_bound / 8).max(1);
    (bytes as f64 * 1.2) as u64
}

/// 並列エンジンのメモリ使用量を推定（バイト単位）
/// upper_bound: 篩ドメインの上限 N
/// num_threads: ワーカースレッド数
pub fn estimate_parallel_memory(upper_bound: u64, num_threads: usize) -> u64 {
    // スレッドごとのセグメントバッファは最大 MAX_TILE ビット
    let per_thread = (MAX_TILE / 8).max(1);
    // ベース素数列: isqrt(N) 個未満の u64
    let base_primes = integer_sqrt(upper_bound) * 8;
    let total = per_thread * num_threads as u64 + base_primes;
    (total as f64 * 1.2) as u64
}

/// 逐次 + 並列のベンチマーク一式が物理メモリに収まるかを事前に確認する。
///
/// 収まらない場合は、黙って切り詰めた結果を返す代わりに
/// 説明付きのエラーで即座に失敗させる。
pub fn check_memory_budget(upper_bound: u64, num_threads: usize) -> PrimeResult<()> {
    let total_memory = get_total_memory();
    let needed = estimate_sequential_memory(upper_bound)
        + estimate_parallel_memory(upper_bound, num_threads);

    if needed > total_memory {
        return Err(format!(
            "estimated sieve memory {needed} bytes exceeds physical memory {total_memory} bytes \
             (upper_bound={upper_bound}, num_threads={num_threads})"
        )
        .into());
    }
    Ok(())
}

/// メモリ使用量の情報を表示用に取得
pub fn get_memory_info(upper_bound: u64, num_threads: usize) -> MemoryInfo {
    let total_memory = get_total_memory();
    let sequential_memory = estimate_sequential_memory(upper_bound);
    let parallel_memory = estimate_parallel_memory(upper_bound, num_threads);
    let estimated_total = sequential_memory + parallel_memory;
    let usage_percent = (estimated_total as f64 / total_memory as f64) * 100.0;

    MemoryInfo {
        total_memory,
        sequential_memory,
        parallel_memory,
        usage_percent,
    }
}

#[derive(Debug, Clone)]
pub struct MemoryInfo {
    pub total_memory: u64,
    pub sequential_memory: u64,
    pub parallel_memory: u64,
    pub usage_percent: f64,
}

impl MemoryInfo {
    pub fn format(&self) -> String {
        format!(
            "メモリ: システム {:.1}GB, 逐次篩 {:.1}MB, 並列篩 {:.1}MB (計 {:.1}%)",
            self.total_memory as f64 / (1024.0 * 1024.0 * 1024.0),
            self.sequential_memory as f64 / (1024.0 * 1024.0),
            self.parallel_memory as f64 / (1024.0 * 1024.0),
            self.usage_percent
        )
    }
}
