use console_panel::commands::CommandEntry;
use console_panel::layout::{layout_grid, LayoutParams};
use console_panel::panel::{render, PanelState, PointerInput};
use criterion::{criterion_group, criterion_main, Criterion};
use eframe::egui::pos2;

fn bench_layout(c: &mut Criterion) {
    let entries: Vec<CommandEntry> = (0..1_000)
        .map(|i| CommandEntry::new(&format!("Item {i}"), &format!("cmd {i}"), "tooltip"))
        .collect();
    let params = LayoutParams {
        scale: 1.5,
        ..LayoutParams::default()
    };
    c.bench_function("layout_grid_1k", |b| {
        b.iter(|| layout_grid(entries.len(), &params))
    });

    let mut state = PanelState::default();
    let input = PointerInput {
        pos: Some(pos2(200.0, 200.0)),
        ..Default::default()
    };
    c.bench_function("render_frame_1k", |b| {
        b.iter(|| render(&mut state, &entries, &params, &input))
    });
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
