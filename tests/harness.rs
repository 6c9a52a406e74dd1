//! End-to-end harness tests against small tempfile-backed stores.
//!
//! These exercise the full phase sequence with a scaled-down workload:
//! 100 records seeded 10 per transaction, scans bounded to the leading half
//! of the key range (50 rows per iteration).

use copybench::bench::export::export_snapshot;
use copybench::bench::inspect::inspect;
use copybench::bench::{BenchRunner, scan, seed::seed};
use copybench::config::BenchConfig;
use copybench::signal::StopSignal;
use copybench::store::{DATASET, KEY_LEN, Store, encode_key};
use redb::ReadableTable;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn scenario_config() -> BenchConfig {
    BenchConfig {
        item_count: 100,
        batch_size: 10,
        value_size: 1024,
        iterate_pct: 0.5,
        measure_window: Duration::from_millis(50),
    }
}

fn seeded_store(dir: &TempDir, config: &BenchConfig) -> Arc<Store> {
    let store = Store::open(&dir.path().join("bench.redb")).unwrap();
    seed(&store, config).unwrap();
    Arc::new(store)
}

#[test]
fn test_seed_creates_contiguous_key_range() {
    let dir = TempDir::new().unwrap();
    let config = scenario_config();
    let store = seeded_store(&dir, &config);

    assert_eq!(store.record_count().unwrap(), 100);

    let txn = store.database().begin_read().unwrap();
    let table = txn.open_table(DATASET).unwrap();
    let mut expected = 0u64;
    for item in table.iter().unwrap() {
        let (key, value) = item.unwrap();
        assert_eq!(key.value(), encode_key(expected).as_slice());
        assert_eq!(value.value().len(), config.value_size);
        expected += 1;
    }
    assert_eq!(expected, 100);
}

#[test]
fn test_scan_matches_exactly_half_the_keys() {
    let dir = TempDir::new().unwrap();
    let config = scenario_config();
    let store = seeded_store(&dir, &config);

    let signal = StopSignal::new();
    signal.request_stop();
    let report = scan::spawn(Arc::clone(&store), &config, signal).join().unwrap();

    assert_eq!(report.rows, 50);
    assert!(report.total > Duration::ZERO);
    assert_eq!(report.average(), report.total / report.iterations);
}

#[test]
fn test_concurrent_export_does_not_change_scan_counts() {
    let dir = TempDir::new().unwrap();
    let config = scenario_config();
    let store = seeded_store(&dir, &config);

    // Baseline: worker alone.
    let signal = StopSignal::new();
    signal.request_stop();
    let isolated = scan::spawn(Arc::clone(&store), &config, signal).join().unwrap();

    // Worker racing a full export.
    let signal = StopSignal::new();
    let worker = scan::spawn(Arc::clone(&store), &config, signal.clone());
    let export = export_snapshot(&store, &mut std::io::sink()).unwrap();
    signal.request_stop();
    let concurrent = worker.join().unwrap();

    assert_eq!(isolated.rows, 50);
    assert_eq!(concurrent.rows, isolated.rows);
    assert_eq!(export.records, 100);
    assert!(export.duration > Duration::ZERO);
}

#[test]
fn test_export_volume_accounts_for_every_record() {
    let dir = TempDir::new().unwrap();
    let config = scenario_config();
    let store = seeded_store(&dir, &config);

    let mut buffer = Vec::new();
    let report = export_snapshot(&store, &mut buffer).unwrap();

    let record_len = (KEY_LEN + config.value_size) as u64;
    assert_eq!(report.records, 100);
    assert_eq!(report.bytes, 100 * record_len);
    assert_eq!(buffer.len() as u64, report.bytes);
}

#[test]
fn test_inspection_reports_dataset_size() {
    let dir = TempDir::new().unwrap();
    let config = scenario_config();
    let store = seeded_store(&dir, &config);

    let size = inspect(&store).unwrap();
    assert_eq!(size.records, 100);
    assert!(size.stored_bytes > 0);
    assert!(size.file_bytes > 0);
}

#[test]
fn test_full_run_reports_all_phases() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bench.redb");
    let config = scenario_config();

    let summary = BenchRunner::new(config.clone()).run(&path).unwrap();

    let seeded = summary.seeded.expect("first run must seed");
    assert_eq!(seeded.records, 100);
    assert_eq!(summary.size.records, 100);

    assert!(summary.warmup.iterations >= 1);
    assert!(summary.isolated.iterations >= 1);
    assert!(summary.concurrent.iterations >= 1);

    assert_eq!(summary.warmup.rows, 50);
    assert_eq!(summary.isolated.rows, 50);
    assert_eq!(summary.concurrent.rows, 50);

    assert_eq!(summary.export.records, 100);
    assert!(summary.export.duration > Duration::ZERO);
    assert!(summary.isolated.total > Duration::ZERO);
}

#[test]
fn test_rerun_skips_seeding_and_keeps_count() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bench.redb");
    let config = scenario_config();

    let first = BenchRunner::new(config.clone()).run(&path).unwrap();
    assert!(first.seeded.is_some());
    assert_eq!(first.size.records, 100);

    let second = BenchRunner::new(config).run(&path).unwrap();
    assert!(second.seeded.is_none());
    assert_eq!(second.size.records, 100);
    assert_eq!(second.isolated.rows, 50);
}

#[test]
fn test_run_fails_for_unusable_store_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("bench.redb");

    let result = BenchRunner::new(scenario_config()).run(&path);
    assert!(result.is_err());
}

#[test]
fn test_phase_windows_bound_worker_lifetime() {
    let dir = TempDir::new().unwrap();
    let config = scenario_config();
    let store = seeded_store(&dir, &config);

    // A free-running worker keeps iterating until stopped; the join after
    // the stop request is what hands the phase back to the caller.
    let signal = StopSignal::new();
    let worker = scan::spawn(Arc::clone(&store), &config, signal.clone());
    std::thread::sleep(config.measure_window);
    signal.request_stop();
    let report = worker.join().unwrap();

    assert!(report.iterations >= 1);
    assert_eq!(report.rows, 50);
    assert!(report.min <= report.max);
}
