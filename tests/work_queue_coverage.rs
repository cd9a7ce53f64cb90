use std::thread;

use sosu_heiretsu::engine_types::Chunk;
use sosu_heiretsu::segment_sieve::sieve_segment;
use sosu_heiretsu::sieve_math::{integer_sqrt, simple_sieve};
use sosu_heiretsu::tile::{tile_len_for, MAX_TILE, MIN_TILE};
use sosu_heiretsu::work_queue::{ChunkSource, TileCursor};

/// 単一スレッドでカーソルを払い切ると、チャンクは隙間も重なりもなく
/// ドメイン [2, end] をちょうど覆う。
#[test]
fn single_thread_claims_cover_domain_exactly() {
    let end = 5_000_000u64;
    let queue = TileCursor::new(end);

    let mut chunks = Vec::new();
    while let Some(chunk) = queue.claim() {
        chunks.push(chunk);
    }

    assert!(!chunks.is_empty());
    assert_eq!(chunks[0].lo, 2);
    assert_eq!(chunks.last().unwrap().hi, end);

    for pair in chunks.windows(2) {
        assert_eq!(
            pair[1].lo,
            pair[0].hi + 1,
            "chunks must be contiguous and non-overlapping"
        );
    }

    for chunk in &chunks {
        assert!(chunk.lo <= chunk.hi);
        assert!(chunk.width() <= MAX_TILE);
    }

    // 最終チャンク（端で切り詰められる）を除き、幅は単調非減少
    for pair in chunks[..chunks.len() - 1].windows(2) {
        assert!(
            pair[1].width() >= pair[0].width(),
            "chunk widths must not shrink as the cursor advances"
        );
    }

    // 払い切ったあとの claim は常に None
    assert!(queue.claim().is_none());
}

/// 複数スレッドから claim しても、全チャンクの和集合はちょうど [2, end] で
/// 各整数は 1 回だけ払い出される。
#[test]
fn concurrent_claims_are_disjoint_and_complete() {
    let end = 4_000_000u64;
    let queue = TileCursor::new(end);

    let mut all_chunks: Vec<Chunk> = thread::scope(|scope| {
        let mut handles = Vec::new();
        for _ in 0..4 {
            let queue = &queue;
            handles.push(scope.spawn(move || {
                let mut local = Vec::new();
                while let Some(chunk) = queue.claim() {
                    local.push(chunk);
                }
                local
            }));
        }
        handles
            .into_iter()
            .flat_map(|h| h.join().expect("claimer thread panicked"))
            .collect()
    });

    all_chunks.sort_by_key(|c| c.lo);

    assert_eq!(all_chunks[0].lo, 2);
    assert_eq!(all_chunks.last().unwrap().hi, end);
    for pair in all_chunks.windows(2) {
        assert_eq!(pair[1].lo, pair[0].hi + 1, "claims must not overlap or leave gaps");
    }
}

/// 空ドメイン（end < 2）では最初の claim から None が返る。
#[test]
fn empty_domain_yields_no_chunks() {
    let queue = TileCursor::new(1);
    assert!(queue.claim().is_none());
}

/// タイル長は lo について単調非減少で、常に [0, MAX_TILE] に収まる。
#[test]
fn tile_len_is_monotone_and_bounded() {
    let end = 100_000_000u64;
    let total = end - 1;

    let mut prev = 0u64;
    let mut lo = 2u64;
    while lo <= end - MAX_TILE {
        let len = tile_len_for(lo, end, total);
        assert!(len >= MIN_TILE);
        assert!(len <= MAX_TILE);
        assert!(len >= prev, "tile length must not shrink (lo={lo})");
        prev = len;
        lo += 999_983; // 適当な素数ステップでサンプリング
    }

    // 終端の切り詰め
    assert_eq!(tile_len_for(end, end, total), 1);
    assert_eq!(tile_len_for(end + 1, end, total), 0);
}

/// ベース篩のエッジケース。
#[test]
fn simple_sieve_edge_cases() {
    assert_eq!(simple_sieve(0).unwrap(), Vec::<u64>::new());
    assert_eq!(simple_sieve(1).unwrap(), Vec::<u64>::new());
    assert_eq!(simple_sieve(2).unwrap(), vec![2]);
    assert_eq!(simple_sieve(10).unwrap(), vec![2, 3, 5, 7]);
    assert_eq!(
        simple_sieve(30).unwrap(),
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
    );
}

/// integer_sqrt の境界値。
#[test]
fn integer_sqrt_boundaries() {
    assert_eq!(integer_sqrt(0), 0);
    assert_eq!(integer_sqrt(1), 1);
    assert_eq!(integer_sqrt(3), 1);
    assert_eq!(integer_sqrt(4), 2);
    assert_eq!(integer_sqrt(99), 9);
    assert_eq!(integer_sqrt(100), 10);
    assert_eq!(integer_sqrt(u64::MAX), 4_294_967_295);
}

/// セグメント篩単体: [2, 29] をベース素数 {2, 3, 5} で篩うと
/// 10 個の素数が降順 tail として得られる。
#[test]
fn segment_sieve_counts_and_tails() {
    let base = simple_sieve(integer_sqrt(29)).unwrap();
    assert_eq!(base, vec![2, 3, 5]);

    let result = sieve_segment(Chunk { lo: 2, hi: 29 }, &base);
    assert_eq!(result.count, 10);
    assert_eq!(result.tails, vec![29, 23, 19, 17, 13, 11, 7, 5, 3, 2]);
}

/// セグメント篩単体: ドメイン中腹のチャンクでもベース素数だけで
/// 正しく合成数が打ち消される。
#[test]
fn segment_sieve_mid_range_chunk() {
    // [100, 120] の素数は {101, 103, 107, 109, 113}
    let base = simple_sieve(integer_sqrt(120)).unwrap();
    let result = sieve_segment(Chunk { lo: 100, hi: 120 }, &base);
    assert_eq!(result.count, 5);
    assert_eq!(result.tails, vec![113, 109, 107, 103, 101]);
}

/// tail リストはチャンクあたり高々 10 個に制限される。
#[test]
fn segment_sieve_tails_are_capped_at_ten() {
    let base = simple_sieve(integer_sqrt(999)).unwrap();
    let result = sieve_segment(Chunk { lo: 2, hi: 999 }, &base);
    assert_eq!(result.count, 168);
    assert_eq!(result.tails.len(), 10);
    assert_eq!(result.tails[0], 997);
}
