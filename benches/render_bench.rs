use criterion::{criterion_group, criterion_main, Criterion};

use identigen::{Identicon, IdenticonConfig};

const HASH: &str = "89f5597cfb3a45083543660d2f6f8b479d06ea0";

fn bench_render_png(c: &mut Criterion) {
    let icon = Identicon::from_hash(HASH).expect("valid config");
    c.bench_function("render_png_64", |b| {
        b.iter(|| {
            let _ = icon.render().unwrap();
        })
    });
}

fn bench_render_svg(c: &mut Criterion) {
    let cfg = IdenticonConfig {
        hash: Some(HASH.to_string()),
        format: "svg".to_string(),
        ..Default::default()
    };
    let icon = Identicon::new(cfg).expect("valid config");
    c.bench_function("render_svg_64", |b| {
        b.iter(|| {
            let _ = icon.render().unwrap();
        })
    });
}

fn bench_digest_synthesis(c: &mut Criterion) {
    c.bench_function("hash_from_string", |b| {
        b.iter(|| identigen::digest::hash_from_string("bench-seed-string"))
    });
}

criterion_group!(
    benches,
    bench_render_png,
    bench_render_svg,
    bench_digest_synthesis
);
criterion_main!(benches);
