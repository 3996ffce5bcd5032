//! Sample host for the number picker.
//!
//! `SampleViewController` owns a picker, registers itself as its delegate and
//! mirrors the picker's value into a text label.

use crate::picker::{NumberPickerDelegate, NumberPickerView};
use log::*;
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

pub struct SampleViewController {
    picker: RefCell<NumberPickerView>,
    value_label: RefCell<String>,
    change_count: Cell<usize>,
}

impl SampleViewController {
    /// Return a new controller hosting the given picker. The controller
    /// becomes the picker's delegate and the label starts at the picker's
    /// current value.
    ///
    pub fn new(mut picker: NumberPickerView) -> Rc<SampleViewController> {
        Rc::new_cyclic(|this: &Weak<SampleViewController>| {
            picker.set_delegate_weak(this.clone());
            let value_label = RefCell::new(picker.value().to_string());
            SampleViewController {
                picker: RefCell::new(picker),
                value_label,
                change_count: Cell::new(0),
            }
        })
    }

    pub fn picker(&self) -> Ref<'_, NumberPickerView> {
        self.picker.borrow()
    }

    /// Mutable access for forwarding gestures. Delegate callbacks fire while
    /// this borrow is held, so they must not borrow the picker again.
    ///
    pub fn picker_mut(&self) -> RefMut<'_, NumberPickerView> {
        self.picker.borrow_mut()
    }

    /// Text currently shown in the value label.
    ///
    pub fn value_label(&self) -> String {
        self.value_label.borrow().clone()
    }

    /// Number of change notifications received so far.
    ///
    pub fn change_count(&self) -> usize {
        self.change_count.get()
    }
}

impl NumberPickerDelegate for SampleViewController {
    fn number_picker_did_change_value(&self, picker: &NumberPickerView) {
        let value = picker.value();
        info!("Picker value changed to {}", value);
        *self.value_label.borrow_mut() = value.to_string();
        self.change_count.set(self.change_count.get() + 1);
    }
}
