//! Benchmarks for the picker model.
//!
//! These benchmarks measure value computation and the settle path a host
//! drives on every tick.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use number_picker::picker::{NumberPickerDelegate, NumberPickerView, StripSlot};
use std::cell::Cell;
use std::rc::Rc;

struct Counter(Cell<usize>);

impl NumberPickerDelegate for Counter {
    fn number_picker_did_change_value(&self, picker: &NumberPickerView) {
        self.0.set(self.0.get() + usize::from(picker.value()));
    }
}

fn bench_value(c: &mut Criterion) {
    let picker = NumberPickerView::builder().value(482).build().unwrap();
    c.bench_function("picker_value", |b| b.iter(|| black_box(&picker).value()));
}

fn bench_step_and_settle(c: &mut Criterion) {
    let mut picker = NumberPickerView::new();
    let counter = Rc::new(Counter(Cell::new(0)));
    picker.set_delegate(&counter);
    c.bench_function("picker_step_and_settle_all_strips", |b| {
        b.iter(|| {
            for slot in StripSlot::ALL {
                picker.step(slot, black_box(1));
            }
            picker.advance(black_box(1.0))
        })
    });
}

fn bench_wheel_scroll_animation(c: &mut Criterion) {
    let mut picker = NumberPickerView::new();
    c.bench_function("picker_wheel_scroll_animation", |b| {
        b.iter(|| {
            for _ in 0..5 {
                picker.scroll_by(StripSlot::Units, black_box(0.33));
            }
            picker.end_scroll(StripSlot::Units);
            while picker.is_scrolling() {
                picker.advance(0.1);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_value,
    bench_step_and_settle,
    bench_wheel_scroll_animation
);
criterion_main!(benches);
