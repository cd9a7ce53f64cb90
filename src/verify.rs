use crate::engine_types::{PrimeResult, PrimeStats, TOP_PRIMES};

/// 64bit 整数に対する決定的 Miller-Rabin 素数判定。
///
/// この関数は篩結果の「top-10 サンプル」の素数性チェックに使われます。
/// 篩本体とはアルゴリズムが独立なので、チャンク境界のオフバイワンのような
/// 欠陥をカウント比較とは別の角度から検出できます。
///
/// 参考: https://miller-rabin.appspot.com/ （64bit 用の既知の基数セット）
pub fn is_probable_prime(n: u64) -> bool {
    // 小さいケース
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // n-1 = d * 2^s を求める
    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    // 64bit 決定的テスト用の基数
    const BASES: [u64; 7] = [2, 325, 9375, 28178, 450775, 9780504, 1795265022];

    for &a in &BASES {
        if a % n == 0 {
            continue;
        }
        if !miller_rabin_round(n, d, s, a) {
            return false;
        }
    }
    true
}

fn miller_rabin_round(n: u64, d: u64, s: u32, a: u64) -> bool {
    let mut x = mod_pow(a % n, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }

    for _ in 1..s {
        x = mod_mul(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn mod_pow(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut res = 1u64;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            res = mod_mul(res, base, m);
        }
        base = mod_mul(base, base, m);
        exp >>= 1;
    }
    res
}

/// `PrimeStats` の自己整合性を検証する。
///
/// - `top10_desc` は高々 `TOP_PRIMES` 個で、狭義降順であること
/// - `top10_desc` の各値が Miller-Rabin で素数と判定されること
/// - `count >= top10_desc.len()`（リストは見つかった素数の部分集合）
///
/// カウントの一致検証（逐次 vs 並列 vs primecount）は `bench.rs` 側で行い、
/// ここでは単一の結果が内部矛盾していないことだけを見ます。
pub fn verify_stats(stats: &PrimeStats) -> PrimeResult<()> {
    if stats.top10_desc.len() > TOP_PRIMES {
        return Err(format!(
            "top10_desc holds {} entries, more than {TOP_PRIMES}",
            stats.top10_desc.len()
        )
        .into());
    }

    if stats.count < stats.top10_desc.len() as u64 {
        return Err(format!(
            "count {} is smaller than top10_desc length {}",
            stats.count,
            stats.top10_desc.len()
        )
        .into());
    }

    for pair in stats.top10_desc.windows(2) {
        if pair[0] <= pair[1] {
            return Err(format!(
                "top10_desc is not strictly descending: {} followed by {}",
                pair[0], pair[1]
            )
            .into());
        }
    }

    for &p in &stats.top10_desc {
        if !is_probable_prime(p) {
            return Err(format!("composite value in top10_desc: {p}").into());
        }
    }

    Ok(())
}
