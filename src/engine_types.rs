use std::error::Error;

// エンジン層（逐次 / 並列 / 検証）で共有するエラー型と結果型の定義。
//
// - このモジュールの型は各エンジンと `bench.rs` の「結果契約」の一部です。
// - 特に `PrimeStats` のフィールド意味はレポート出力とテストの比較に直結するため、
//   互換性を壊さないようにしてください。

/// エンジン共通の結果型。
///
/// - すべての篩タスク（逐次・並列・π(x) クロスチェックなど）はこの型を返します。
/// - エラーは `Send + Sync` な Box でラップされ、ワーカースレッドから安全に伝播できる想定です。
pub type PrimeResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// 最終結果と各セグメントで保持する「最大素数リスト」の長さ。
pub const TOP_PRIMES: usize = 10;

/// ワークキューから払い出される閉区間 `[lo, hi]`。
///
/// 契約:
/// - 常に `lo <= hi`（空区間は `Chunk` を作らず `None` で表現する）
/// - 同一カーソルから払い出された区間同士は互いに素で、`lo` は単調増加
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub lo: u64,
    pub hi: u64,
}

impl Chunk {
    /// 区間に含まれる整数の個数。
    pub fn width(&self) -> u64 {
        self.hi - self.lo + 1
    }
}

/// セグメント篩 1 回分の出力。
///
/// `tails` は区間内の生き残りのうち大きい方から高々 `TOP_PRIMES` 個（降順）。
#[derive(Clone, Debug, Default)]
pub struct SegmentResult {
    pub count: u64,
    pub tails: Vec<u64>,
}

/// ワーカースレッドが所有するローカル集計。
///
/// join までそのスレッドだけが触る前提で、共有状態は一切持ちません。
/// 各チャンクの `SegmentResult` を `absorb` で取り込み、join 後に
/// `merge_results` へ値として渡されます。
#[derive(Clone, Debug, Default)]
pub struct WorkerAccumulator {
    pub count: u64,
    pub tails: Vec<u64>,
}

impl WorkerAccumulator {
    pub fn absorb(&mut self, seg: SegmentResult) {
        self.count += seg.count;
        self.tails.extend(seg.tails);
    }
}

/// 篩 1 回分の最終結果。
///
/// - `count`: `[2, N-1]` に含まれる素数の個数
/// - `top10_desc`: 見つかった素数のうち大きい方から高々 10 個（降順）
///
/// 逐次エンジンと並列エンジンは同じ N に対して同一の `PrimeStats` を
/// 返さなければなりません。不一致は分割か篩自体の欠陥です（`bench.rs` 参照）。
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PrimeStats {
    pub count: u64,
    pub top10_desc: Vec<u64>,
}
