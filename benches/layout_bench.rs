use criterion::{criterion_group, criterion_main, Criterion};
use keycraft::config::Customizations;
use keycraft::configuration::{
    create_empty_configuration, update_key_mapping, KeyAction, KeyMapping,
};
use keycraft::consts::DEFAULT_LAYER_ID;
use keycraft::geometry::validate_layout;
use keycraft::layouts::create_full_size_layout;
use keycraft::steps::create_build_guide;
use keycraft::validator::validate_configuration;
use std::hint::black_box;

fn bench_layouts(c: &mut Criterion) {
    c.bench_function("generate_full_size", |b| {
        b.iter(|| black_box(create_full_size_layout()))
    });

    let layout = create_full_size_layout();
    c.bench_function("validate_layout_full_size", |b| {
        b.iter(|| validate_layout(black_box(&layout)))
    });
}

fn bench_configuration(c: &mut Criterion) {
    let layout = create_full_size_layout();
    let mut cfg = create_empty_configuration(&layout.id, None);
    for key in &layout.keys {
        let mapping = KeyMapping::new(&key.id, KeyAction::key("KeyA"));
        cfg = update_key_mapping(&cfg, DEFAULT_LAYER_ID, mapping).expect("default layer");
    }

    c.bench_function("validate_configuration_full_size", |b| {
        b.iter(|| validate_configuration(black_box(&cfg), black_box(&layout)))
    });

    let customizations = Customizations::default();
    c.bench_function("create_build_guide", |b| {
        b.iter(|| create_build_guide(black_box(&cfg), &layout, &customizations))
    });
}

criterion_group!(benches, bench_layouts, bench_configuration);
criterion_main!(benches);
