use chrono::Local;

use sosu_heiretsu::bench::run_benchmark;
use sosu_heiretsu::config::load_or_create_config;

fn main() {
    env_logger::init();

    let mut cfg = match load_or_create_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load settings.toml: {e}");
            std::process::exit(1);
        }
    };

    // CLI 引数: `sosu-heiretsu [N] [threads]`
    // 指定された値は settings.toml の内容を上書きする。
    if let Err(msg) = apply_cli_args(&mut cfg) {
        eprintln!("{msg}");
        eprintln!("Usage: sosu-heiretsu [upper_bound] [num_threads]");
        std::process::exit(1);
    }

    if cfg.upper_bound < 2 {
        eprintln!("upper_bound must be >= 2 (got {})", cfg.upper_bound);
        std::process::exit(1);
    }

    let report = match run_benchmark(&cfg) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Benchmark failed: {e}");
            std::process::exit(1);
        }
    };

    println!("N = {}, threads = {}", report.upper_bound, report.num_threads);
    println!("Prime count: {}", report.stats.count);
    if report.stats.top10_desc.is_empty() {
        println!("Top 10 primes (desc): (none)");
    } else {
        let joined = report
            .stats
            .top10_desc
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("Top 10 primes (desc): {joined}");
    }
    println!("Sequential: {} ms", report.sequential_ms);
    println!("Parallel:   {} ms", report.parallel_ms);
    match report.speedup() {
        Some(s) => println!("Speedup: {s:.2}x"),
        None => println!("Speedup: n/a (parallel run under 1 ms)"),
    }

    if cfg.report_enabled {
        let prefix = cfg
            .use_timestamp_prefix
            .then(|| Local::now().format("%Y%m%d_%H%M%S_").to_string());
        match report.write_to_file(&cfg.output_dir, &cfg, prefix.as_deref()) {
            Ok(path) => log::info!("Report written to {}", path.display()),
            Err(e) => {
                eprintln!("Failed to write report: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// 位置引数 `[N] [threads]` を読み取り、設定に反映する。
///
/// - 引数なしは設定ファイルの値をそのまま使う。
/// - パースできない値はエラーメッセージを返す（GUI 等はないため即終了でよい）。
fn apply_cli_args(cfg: &mut sosu_heiretsu::config::Config) -> Result<(), String> {
    let mut args = std::env::args().skip(1);

    if let Some(n_str) = args.next() {
        cfg.upper_bound = n_str
            .parse::<u64>()
            .map_err(|e| format!("Invalid upper_bound {n_str:?}: {e}"))?;
    }

    if let Some(t_str) = args.next() {
        cfg.num_threads = t_str
            .parse::<usize>()
            .map_err(|e| format!("Invalid num_threads {t_str:?}: {e}"))?;
    }

    if args.next().is_some() {
        return Err("Too many arguments".to_string());
    }

    Ok(())
}
