//! 可変チャンク長（タイル）の決定ロジック。
//!
//! 固定長の等分割では、ドメイン前半（小さい素数の打ち消しが相対的に重い領域）で
//! スレッド間の負荷が偏りやすい。そこでカーソル位置に応じてチャンク長を
//! `MIN_TILE` から `MAX_TILE` へ線形に増やし、序盤は細かく・終盤は粗く配る。

/// チャンク長の下限（整数の個数）。
pub const MIN_TILE: u64 = 1 << 18; // 262,144

/// チャンク長の上限（整数の個数）。
pub const MAX_TILE: u64 = 1 << 21; // 2,097,152

/// カーソル位置 `lo` に対して、次に払い出すチャンク長を返す。
///
/// - `f = (lo - 2) / total` をドメイン全体に対する進捗率として `[0, 1]` にクランプし、
///   `MIN_TILE + (MAX_TILE - MIN_TILE) * f` を線形補間で求める。
/// - `total` はドメイン生成時に固定されるため、ランプが `MAX_TILE` に達するのは
///   `lo -> end` の漸近のみ（最終チャンクは `end` で切り詰められる）。
/// - `lo > end` の場合は 0（仕事なし）。
///
/// 戻り値は `end` での切り詰めを除き `lo` について単調非減少で、
/// 常に `MAX_TILE` 以下です。
pub fn tile_len_for(lo: u64, end: u64, total: u64) -> u64 {
    if lo > end {
        return 0;
    }

    let f = if total > 0 {
        ((lo.saturating_sub(2)) as f64 / total as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let len = MIN_TILE + ((MAX_TILE - MIN_TILE) as f64 * f) as u64;
    let len = len.clamp(MIN_TILE, MAX_TILE);

    // 最終チャンクはドメイン端で切り詰める
    let remaining = end - lo + 1;
    len.min(remaining)
}
