use criterion::{black_box, criterion_group, criterion_main, Criterion};

use brightstar::{convert_text, ConverterConfig};

/// Builds a catalog the size of the Bright Star Catalog (9110 entries)
fn synthetic_catalog() -> String {
    let entries: Vec<String> = (0..9110)
        .map(|i| {
            let hours = i % 24;
            let minutes = (i * 7) % 60;
            let seconds = ((i * 13) % 600) as f64 / 10.0;
            let sign = if i % 2 == 0 { '+' } else { '-' };
            let degrees = i % 90;
            let class = if i % 5 == 0 {
                String::new()
            } else {
                format!(r#","K":"{}""#, 3000 + i)
            };
            format!(
                r#"{{"RA":"{:02}h {:02}m {:04.1}s","Dec":"{}{:02}° {:02}′ {:02}″","V":"{:.2}"{}}}"#,
                hours,
                minutes,
                seconds,
                sign,
                degrees,
                minutes,
                i % 60,
                (i % 800) as f64 / 100.0,
                class
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

fn bench_convert(c: &mut Criterion) {
    let catalog = synthetic_catalog();
    let config = ConverterConfig::default();

    c.bench_function("convert_bsc_sized_catalog", |b| {
        b.iter(|| convert_text(black_box(&catalog), &config).unwrap())
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
