//! 可変チャンク + アトミックカーソルによる並列篩エンジン。
//!
//! 制御フロー:
//! 1. ベース素数（`<= isqrt(N-1)`）を同期的に 1 回だけ構築する
//! 2. 呼び出しごとに新しい `TileCursor` を作り、固定数のワーカースレッドを起動する
//! 3. 各ワーカーは「claim -> セグメント篩 -> ローカル集計」を枯渇までループする
//! 4. 全スレッド join 後、単一スレッドで集計をマージする
//!
//! 共有する可変状態はカーソルだけで、ベース素数列は構築後読み取り専用。
//! 各ワーカーの集計は値としてスレッドから返し、並列フェーズ中に共有の
//! 出力配列へ書き込むことはしません。
//!
//! 制限事項: 途中キャンセルの仕組みは持たず、各ワーカーはキュー枯渇まで走ります。

use std::thread;

use crate::engine_types::{PrimeResult, PrimeStats, WorkerAccumulator, TOP_PRIMES};
use crate::segment_sieve::sieve_segment;
use crate::sieve_math::{integer_sqrt, simple_sieve};
use crate::work_queue::{ChunkSource, TileCursor};

/// `[2, n-1]` の素数を `num_threads` 本のワーカースレッドで数える。
///
/// - `n < 2` はエラー（呼び出し側の前提条件違反）。
/// - `num_threads < 1` は 1 に丸める（致命的エラーにはしない）。
///
/// 最終的な `count` と `top10_desc` は順序に依存しない簡約（総和と
/// 全体ソート）なので、スレッド数やスケジューリングによらず決定的です。
pub fn generate_primes_parallel(n: u64, num_threads: usize) -> PrimeResult<PrimeStats> {
    if n < 2 {
        return Err(format!("upper_bound must be >= 2 (got {n})").into());
    }

    let num_threads = if num_threads < 1 {
        log::warn!("num_threads < 1 requested, clamped to 1");
        1
    } else {
        num_threads
    };

    let base_primes = simple_sieve(integer_sqrt(n - 1))?;
    let queue = TileCursor::new(n - 1);

    log::info!(
        "Parallel sieve over [2, {}] with {} worker threads ({} base primes)",
        n - 1,
        num_threads,
        base_primes.len()
    );

    let accumulators: Vec<WorkerAccumulator> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(num_threads);
        for _ in 0..num_threads {
            let queue = &queue;
            let base_primes = &base_primes;
            handles.push(scope.spawn(move || {
                let mut acc = WorkerAccumulator::default();
                while let Some(chunk) = queue.claim() {
                    acc.absorb(sieve_segment(chunk, base_primes));
                }
                acc
            }));
        }

        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(acc) => acc,
                // ワーカーの panic は握りつぶさずそのまま伝播させる
                Err(e) => std::panic::resume_unwind(e),
            })
            .collect()
    });

    Ok(merge_results(accumulators))
}

/// join 済みワーカーのローカル集計を単一の `PrimeStats` にマージする。
///
/// カウントは総和、top-10 は全候補を連結して降順ソートした先頭 10 個。
/// 払い出された区間が互いに素である以上、同じ値が複数回現れることは
/// ないため、数値順以外のタイブレークは不要です。
pub fn merge_results(accumulators: Vec<WorkerAccumulator>) -> PrimeStats {
    let mut count = 0u64;
    let mut all_tails = Vec::new();
    for acc in accumulators {
        count += acc.count;
        all_tails.extend(acc.tails);
    }

    all_tails.sort_unstable_by(|a, b| b.cmp(a));
    all_tails.truncate(TOP_PRIMES);

    PrimeStats {
        count,
        top10_desc: all_tails,
    }
}
