//! Performance benchmarks for the Payroll Engine.
//!
//! This benchmark suite measures the payroll reduction over rosters of
//! increasing size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use payroll_engine::models::{Company, Employee};

/// Builds a roster of the given size, alternating employment kinds.
fn create_company(size: usize) -> Company {
    let mut company = Company::new();
    for i in 0..size {
        let employee = match i % 3 {
            0 => Employee::full_time(
                format!("Employee {}", i),
                format!("E{:04}", i),
                Decimal::from(50_000),
                Decimal::from(10_000),
            ),
            1 => Employee::part_time(
                format!("Employee {}", i),
                format!("E{:04}", i),
                Decimal::from(20),
                Decimal::from(100),
            ),
            _ => Employee::new(
                format!("Employee {}", i),
                format!("E{:04}", i),
                Decimal::from(30_000),
            ),
        };
        company.add_employee(employee);
    }
    company
}

fn bench_total_salary(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_total_salary");

    for size in [1usize, 10, 100, 1_000] {
        let company = create_company(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &company, |b, company| {
            b.iter(|| black_box(company.calculate_total_salary()));
        });
    }

    group.finish();
}

fn bench_roster_report(c: &mut Criterion) {
    let company = create_company(100);

    c.bench_function("display_employees/100", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(16 * 1024);
            company.display_employees(&mut out).unwrap();
            black_box(out)
        });
    });
}

criterion_group!(benches, bench_total_salary, bench_roster_report);
criterion_main!(benches);
