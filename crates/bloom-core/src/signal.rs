use std::cell::RefCell;
use std::rc::Rc;

/// Shared mutable value. Clones share the same cell.
pub struct Signal<T: 'static>(Rc<RefCell<T>>);

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().clone()
    }
    /// Reads the value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }
    pub fn set(&self, v: T) {
        *self.0.borrow_mut() = v;
    }
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut());
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
