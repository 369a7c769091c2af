//! Pagination benchmarks.
//!
//! Paging is recomputed on every render, so it must stay cheap for large
//! tables and deep page numbers.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dashnav::state::{page_numbers, paginate, PageSize};

fn benchmark_pagination(c: &mut Criterion) {
    const NUM_ITEMS: usize = 1_000_000;
    let items: Vec<u64> = (0..NUM_ITEMS as u64).collect();
    let page_size = PageSize::new(25).expect("positive page size");

    c.bench_function("paginate_1m_first_page", |b| {
        b.iter(|| {
            let state = paginate(black_box(&items), page_size, black_box(1));
            black_box(state.current_items().len())
        })
    });

    c.bench_function("paginate_1m_middle_page", |b| {
        b.iter(|| {
            let state = paginate(black_box(&items), page_size, black_box(20_000));
            black_box(state.current_items().len())
        })
    });

    c.bench_function("paginate_1m_out_of_range", |b| {
        b.iter(|| {
            let state = paginate(black_box(&items), page_size, black_box(i64::MAX));
            black_box(state.current_page())
        })
    });

    c.bench_function("page_numbers_large_total", |b| {
        b.iter(|| black_box(page_numbers(black_box(40_000), black_box(12_345))))
    });
}

criterion_group!(benches, benchmark_pagination);
criterion_main!(benches);
