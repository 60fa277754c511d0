use bless_uptime_tracker::models::RawEarningsRecord;
use bless_uptime_tracker::services::calculate_daily_uptime;
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Two years of daily readings with occasional counter regressions.
fn history(days: i64) -> Vec<RawEarningsRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut total = 0u64;
    (0..days)
        .map(|i| {
            total = if i % 97 == 0 { total / 2 } else { total + 600 + (i as u64 % 240) };
            RawEarningsRecord {
                date: (start + Duration::days(i)).format("%Y-%m-%d").to_string(),
                base_reward: total * 3 / 4,
                total_reward: total,
                referral_reward: total / 4,
            }
        })
        .collect()
}

fn benchmark_calculate_daily_uptime(c: &mut Criterion) {
    let sorted = history(730);
    let mut reversed = sorted.clone();
    reversed.reverse();

    let mut group = c.benchmark_group("daily_uptime");

    group.bench_function("sorted_history", |b| {
        b.iter(|| calculate_daily_uptime(black_box(&sorted)))
    });

    group.bench_function("reversed_history", |b| {
        b.iter(|| calculate_daily_uptime(black_box(&reversed)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_calculate_daily_uptime);
criterion_main!(benches);
