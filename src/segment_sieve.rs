//! 確保済みチャンク 1 つ分のセグメント篩。
//!
//! ベース素数列（`sieve_math::simple_sieve` の出力）以外に共有状態を読まず、
//! ビット配列はスレッドローカルに確保する。並列フェーズでデータ競合が
//! 起きないことはこの性質から構成的に保証されます。

use bitvec::prelude::*;

use crate::engine_types::{Chunk, SegmentResult, TOP_PRIMES};

/// `chunk = [lo, hi]` をベース素数で篩い、生き残りの個数と
/// 区間内の大きい方から高々 `TOP_PRIMES` 個（降順）を返す。
///
/// - ベース素数は `isqrt(N-1)` まで揃っている前提なので、`p * p > hi` に
///   なった時点で打ち切れる（それより大きい合成数は既により小さい
///   ベース素数で打ち消されている）。
/// - 打ち消しの開始位置は `max(p*p, ceil(lo / p) * p)`。`p*p` 未満から
///   始めると素数 `p` 自身を誤って消すため、この下限が必要。
pub fn sieve_segment(chunk: Chunk, base_primes: &[u64]) -> SegmentResult {
    let lo = chunk.lo;
    let hi = chunk.hi;
    let len = chunk.width() as usize;

    let mut is_prime = bitvec![1; len];

    // ドメインは [2, N-1] なので通常到達しないが、0 / 1 が含まれる場合は明示的に落とす
    if lo == 0 {
        is_prime.set(0, false);
    }
    if lo <= 1 && 1 <= hi {
        is_prime.set((1 - lo) as usize, false);
    }

    for &p in base_primes {
        let pp = p * p;
        if pp > hi {
            break;
        }

        let first_multiple = lo.div_ceil(p) * p;
        let mut j = pp.max(first_multiple);
        while j <= hi {
            is_prime.set((j - lo) as usize, false);
            j += p;
        }
    }

    let count = is_prime.count_ones() as u64;

    // 大きい方から高々 TOP_PRIMES 個を収集（降順）
    let mut tails = Vec::with_capacity(TOP_PRIMES);
    for idx in (0..len).rev() {
        if tails.len() == TOP_PRIMES {
            break;
        }
        if is_prime[idx] {
            tails.push(lo + idx as u64);
        }
    }

    SegmentResult { count, tails }
}
