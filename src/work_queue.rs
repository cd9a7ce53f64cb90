//! ロックフリーなワーク分配。
//!
//! 共有する可変状態は「次の未払い出し位置」を指すカーソル 1 個だけで、
//! 更新は compare-and-swap に限定する。チャンク長の計算 O(1) に対して
//! セグメント篩は O(チャンク長) なので、CAS 失敗時はバックオフなしの
//! 即時リトライで十分という設計です。

use std::sync::atomic::{AtomicU64, Ordering};

use crate::engine_types::Chunk;
use crate::tile::tile_len_for;

/// チャンク払い出し元の抽象。
///
/// ワーカーのループはこのトレイトにのみ依存するため、カーソル分割以外の
/// バックエンド（シャーディングされたカウンタやチケットキューなど）に
/// 差し替えてもワーカー側の変更は不要です。
pub trait ChunkSource: Sync {
    /// 次のチャンクを 1 つ確保する。仕事が残っていなければ `None`。
    fn claim(&self) -> Option<Chunk>;
}

/// アトミックカーソル + 可変タイル長によるチャンク払い出し。
///
/// 契約:
/// - 払い出される区間は互いに素で、`lo` は単調増加
/// - 全区間の和集合はちょうど `[2, end]`
/// - カーソルは減少しない。`end` を超えた値がキュー枯渇を意味する
///
/// 1 回の篩呼び出しごとに新しく構築し、join 後にそのまま破棄します
/// （プロセス全体で共有するシングルトンにはしない）。
pub struct TileCursor {
    cursor: AtomicU64,
    end: u64,
    total: u64,
}

impl TileCursor {
    /// ドメイン `[2, end]`（閉区間）用のカーソルを作る。
    ///
    /// `end < 2` の場合は最初の `claim` が即座に `None` を返す空キューになる。
    pub fn new(end: u64) -> Self {
        let total = if end >= 2 { end - 2 + 1 } else { 0 };
        Self {
            cursor: AtomicU64::new(2),
            end,
            total,
        }
    }
}

impl ChunkSource for TileCursor {
    fn claim(&self) -> Option<Chunk> {
        loop {
            let cur = self.cursor.load(Ordering::Relaxed);
            if cur > self.end {
                return None;
            }

            let len = tile_len_for(cur, self.end, self.total);
            if len == 0 {
                return None;
            }

            let next = cur + len;
            if self
                .cursor
                .compare_exchange_weak(cur, next, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                return Some(Chunk {
                    lo: cur,
                    hi: cur + len - 1,
                });
            }
            // CAS 失敗時はリトライ
        }
    }
}
