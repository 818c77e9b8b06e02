use blockform_core::{
    FieldEntry, FieldKind, FormBlock, FormInstance, FormSnapshot, InputEvent, SubmitEvent,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn form_with_fields(count: usize) -> FormBlock {
    let fields = (0..count)
        .map(|i| {
            let kind = FieldKind::ALL[i % FieldKind::ALL.len()];
            FieldEntry::new(format!("Field {}", i), kind)
                .with_placeholder("type here")
                .with_options(["A", "B", "C"])
        })
        .collect();

    FormBlock {
        fields,
        ..Default::default()
    }
}

fn benchmark_render_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_form");

    for count in [8, 64, 512] {
        let spec = form_with_fields(count).spec();
        let form = FormInstance::mount(spec, |_: &FormSnapshot| {});

        group.bench_with_input(BenchmarkId::from_parameter(count), &form, |b, form| {
            b.iter(|| black_box(form.render().to_html()));
        });
    }

    group.finish();
}

fn benchmark_input_and_submit(c: &mut Criterion) {
    let spec = form_with_fields(64).spec();

    c.bench_function("input_and_submit_64", |b| {
        b.iter(|| {
            let mut form = FormInstance::mount(spec.clone(), |s: &FormSnapshot| {
                black_box(s.len());
            });
            for index in 0..64 {
                form.dispatch(InputEvent::Text {
                    index,
                    value: "value".to_string(),
                });
            }
            form.submit(&mut SubmitEvent::new());
            form.unmount();
        });
    });
}

criterion_group!(benches, benchmark_render_form, benchmark_input_and_submit);
criterion_main!(benches);
