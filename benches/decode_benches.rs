use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use zero_cql::ResultMessage;
use zero_cql::value::Value;

pub struct User<'a> {
    pub id: i32,
    pub name: &'a str,
    pub hair_color: Option<&'a str>,
}

fn push_string(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u16).to_be_bytes());
    out.extend_from_slice(s.as_bytes());
}

fn push_bytes(out: &mut Vec<u8>, b: &[u8]) {
    out.extend_from_slice(&(b.len() as i32).to_be_bytes());
    out.extend_from_slice(b);
}

/// Rows result for `users(id int, name varchar, hair_color varchar)`
fn users_payload(size: usize) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&0x0002_u32.to_be_bytes());
    out.extend_from_slice(&0x0001_u32.to_be_bytes());
    out.extend_from_slice(&3_i32.to_be_bytes());
    push_string(&mut out, "bench");
    push_string(&mut out, "users");
    for (name, ty) in [("id", 0x0009_u16), ("name", 0x000D), ("hair_color", 0x000D)] {
        push_string(&mut out, name);
        out.extend_from_slice(&ty.to_be_bytes());
    }
    out.extend_from_slice(&(size as i32).to_be_bytes());
    for i in 0..size {
        push_bytes(&mut out, &(i as i32).to_be_bytes());
        push_bytes(&mut out, format!("User {}", i).as_bytes());
        if i % 2 == 0 {
            push_bytes(&mut out, b"black");
        } else {
            out.extend_from_slice(&(-1_i32).to_be_bytes());
        }
    }
    out
}

fn bench_fetch_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("fetch_all");
    for size in [1, 100, 1000] {
        let payload = users_payload(size);

        group.bench_with_input(BenchmarkId::new("rows", size), &payload, |b, payload| {
            b.iter(|| {
                let message = ResultMessage::new(payload);
                black_box(message.fetch_all().unwrap())
            })
        });

        group.bench_with_input(BenchmarkId::new("tuples", size), &payload, |b, payload| {
            b.iter(|| {
                let message = ResultMessage::new(payload);
                let rows: Vec<(i32, &str, Option<&str>)> = message.fetch_all_as().unwrap();
                black_box(
                    rows.into_iter()
                        .map(|(id, name, hair_color)| User {
                            id,
                            name,
                            hair_color,
                        })
                        .collect::<Vec<_>>(),
                )
            })
        });
    }
    group.finish();
}

fn bench_fetch_column(c: &mut Criterion) {
    let payload = users_payload(1000);
    c.bench_function("fetch_column/1000", |b| {
        b.iter(|| {
            let message = ResultMessage::new(&payload);
            let ids = message.fetch_column(0).unwrap();
            black_box(ids.iter().filter_map(Value::as_i64).sum::<i64>())
        })
    });
}

criterion_group!(benches, bench_fetch_all, bench_fetch_column);
criterion_main!(benches);
