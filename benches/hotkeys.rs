//! Benchmarks for hotkey lookup.
//!
//! Every key press is matched against the binding table of the current mode.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use number_picker::config::hotkeys::{default_hotkeys, get_action_for_event};
use number_picker::config::InputMode;

fn bench_action_lookup(c: &mut Criterion) {
    let hotkeys = default_hotkeys();
    let bound = KeyEvent::new(KeyCode::Up, KeyModifiers::empty());
    let unbound = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::empty());

    c.bench_function("hotkey_lookup_bound", |b| {
        b.iter(|| get_action_for_event(black_box(&bound), InputMode::Picker, &hotkeys))
    });
    c.bench_function("hotkey_lookup_unbound", |b| {
        b.iter(|| get_action_for_event(black_box(&unbound), InputMode::Picker, &hotkeys))
    });
}

fn bench_hotkeys_yaml(c: &mut Criterion) {
    let hotkeys = default_hotkeys();
    c.bench_function("hotkeys_to_yaml", |b| {
        b.iter(|| serde_yaml::to_string(black_box(&hotkeys)))
    });
}

criterion_group!(benches, bench_action_lookup, bench_hotkeys_yaml);
criterion_main!(benches);
