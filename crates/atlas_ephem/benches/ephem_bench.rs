use atlas_ephem::{Body, EphemerisConfig, MinorBody, Planet, ecliptic_lon_lat, position, positions};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn single_body_bench(c: &mut Criterion) {
    let jd = 2_448_058.104_166_7;

    let mut group = c.benchmark_group("single_body");
    group.bench_function("sun_lon_lat", |b| {
        b.iter(|| ecliptic_lon_lat(Body::Planet(Planet::Sun), black_box(jd)))
    });
    group.bench_function("moon_lon_lat", |b| {
        b.iter(|| ecliptic_lon_lat(Body::Planet(Planet::Moon), black_box(jd)))
    });
    group.bench_function("chiron_lon_lat", |b| {
        b.iter(|| ecliptic_lon_lat(Body::Minor(MinorBody::Chiron), black_box(jd)))
    });
    group.bench_function("mars_position", |b| {
        let cfg = EphemerisConfig::default();
        b.iter(|| position(Body::Planet(Planet::Mars), black_box(jd), &cfg))
    });
    group.finish();
}

fn all_bodies_bench(c: &mut Criterion) {
    let jd = 2_448_058.104_166_7;
    let primary = EphemerisConfig::default();
    let with_minor = EphemerisConfig {
        include_minor_bodies: true,
        ..EphemerisConfig::default()
    };

    let mut group = c.benchmark_group("all_bodies");
    group.bench_function("primary", |b| b.iter(|| positions(black_box(jd), &primary)));
    group.bench_function("with_minor", |b| {
        b.iter(|| positions(black_box(jd), &with_minor))
    });
    group.finish();
}

criterion_group!(benches, single_body_bench, all_bodies_bench);
criterion_main!(benches);
