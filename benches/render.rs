// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use railgram::compile::{compile_all, compile_rule};
use railgram::grammar::python_registry;
use railgram::layout::layout_diagram;
use railgram::render::{render_diagram_unicode, RenderOptions};

// Benchmark identity (keep stable):
// - Group names: `compile.python`, `render.python`
// - Case IDs after the `/` stay stable so results remain comparable across refactors.
fn benches_render(c: &mut Criterion) {
    let registry = python_registry().expect("python_registry");

    let mut group = c.benchmark_group("compile.python");
    group.bench_function("all_rules", |b| {
        b.iter(|| black_box(compile_all(black_box(&registry))).len())
    });
    group.finish();

    let mut group = c.benchmark_group("render.python");
    for rule in ["pass_stmt", "assignment", "compound_stmt", "parameters", "atom"] {
        let diagram = compile_rule(&registry, rule);
        group.bench_function(format!("layout_{rule}"), |b| {
            b.iter(|| {
                let layout = layout_diagram(black_box(&diagram), &RenderOptions::default());
                black_box(layout.width())
            })
        });
        group.bench_function(rule, |b| {
            b.iter(|| {
                let rendered = render_diagram_unicode(black_box(&diagram), RenderOptions::default())
                    .expect("render_diagram_unicode");
                black_box(rendered.len())
            })
        });
    }

    let diagrams = compile_all(&registry);
    group.bench_function("all_rules", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for diagram in &diagrams {
                total += render_diagram_unicode(black_box(diagram), RenderOptions::default())
                    .expect("render_diagram_unicode")
                    .len();
            }
            black_box(total)
        })
    });
    group.finish();
}

criterion_group!(benches, benches_render);
criterion_main!(benches);
