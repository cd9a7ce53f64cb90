use crate::engine_types::PrimeResult;

/// primecount クレートを用いた Prime counting function π(x) エンジン。
///
/// - 入力: `x`（x 以下の素数の個数を求める）
/// - 戻り値: `PrimeResult<u64>`（成功時は π(x)）
///
/// 自前の篩とは完全に独立した実装（C++ primecount）なので、
/// ベンチマーク結果のクロスチェックの「第三者」として使えます。
pub fn compute_prime_pi(x: u64) -> PrimeResult<u64> {
    // primecount::pi は i64 を受け取って i64 を返すため、u64 からの変換を行う。
    let x_i64: i64 = x
        .try_into()
        .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
            format!("x is too large for primecount::pi (x={x}): {e}").into()
        })?;
    let pi_i64 = primecount::pi(x_i64);
    Ok(pi_i64 as u64)
}

/// ドメイン `[2, n-1]` に含まれる素数の個数を primecount で計算するヘルパー。
///
/// - `n < 2` はエラー（空ドメインは n = 2 で count 0 として表現される）。
/// - 篩エンジンの `PrimeStats::count` はこの値と一致しなければならない。
pub fn expected_prime_count(n: u64) -> PrimeResult<u64> {
    if n < 2 {
        return Err(format!("upper_bound must be >= 2 (got {n})").into());
    }
    compute_prime_pi(n - 1)
}
