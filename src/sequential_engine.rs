//! 逐次リファレンス実装。
//!
//! `[0, N)` 全域を 1 本のビット配列で篩う古典的なエラトステネスの篩。
//! 並列エンジンの正しさ検証（カウントと top-10 の突き合わせ）と
//! スピードアップ計測のベースラインにのみ使い、並列結果のホットパスには
//! 一切関与しません。

use bitvec::prelude::*;

use crate::engine_types::{PrimeResult, PrimeStats, TOP_PRIMES};
use crate::sieve_math::integer_sqrt;

/// `[2, n-1]` の素数を単一スレッドで数え、`PrimeStats` を返す。
///
/// 並列エンジンと同じ結果形状（count + top10_desc）を返すため、
/// 呼び出し側はそのまま等値比較できます。
pub fn generate_primes_sequential(n: u64) -> PrimeResult<PrimeStats> {
    if n < 2 {
        return Err(format!("upper_bound must be >= 2 (got {n})").into());
    }

    let size: usize = n
        .try_into()
        .map_err(|e| format!("upper_bound too large for a full in-memory sieve (n={n}): {e}"))?;

    let mut is_prime = bitvec![1; size];
    is_prime.set(0, false);
    if n > 1 {
        is_prime.set(1, false);
    }

    let root = integer_sqrt(n - 1);
    for p in 2..=root as usize {
        if is_prime[p] {
            let mut j = p * p;
            while j < size {
                is_prime.set(j, false);
                j += p;
            }
        }
    }

    let mut count = 0u64;
    for idx in 2..size {
        if is_prime[idx] {
            count += 1;
        }
    }

    let mut top10_desc = Vec::with_capacity(TOP_PRIMES);
    for idx in (2..size).rev() {
        if top10_desc.len() == TOP_PRIMES {
            break;
        }
        if is_prime[idx] {
            top10_desc.push(idx as u64);
        }
    }

    Ok(PrimeStats { count, top10_desc })
}
