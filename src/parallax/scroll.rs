use std::{cell::Cell, rc::Rc};

/// The pager's live scroll position. Only the pager holds this writer.
#[derive(Debug, Default)]
pub struct ScrollPosition {
    value: Rc<Cell<f64>>,
}

impl ScrollPosition {
    pub fn new(initial: f64) -> Self {
        Self {
            value: Rc::new(Cell::new(initial)),
        }
    }

    pub fn set(&mut self, value: f64) {
        self.value.set(value);
    }

    pub fn get(&self) -> f64 {
        self.value.get()
    }

    /// A read-only view for dots and images.
    pub fn reader(&self) -> ScrollReader {
        ScrollReader {
            value: Rc::clone(&self.value),
        }
    }
}

/// Read-only view of a [`ScrollPosition`].
#[derive(Clone, Debug)]
pub struct ScrollReader {
    value: Rc<Cell<f64>>,
}

impl ScrollReader {
    pub fn get(&self) -> f64 {
        self.value.get()
    }
}
