pub mod contact_form;
pub mod detail_panel;
pub mod dialog_box;
pub mod item_bag;
pub mod picker;

use std::ops::Deref;
use std::rc::Rc;

/// An item list handed to a variant renderer.
///
/// Equality is identity, so a renderer resets its selection whenever it is
/// given a different list, even one with the same contents.
#[derive(Debug)]
pub struct ItemList<T>(Rc<Vec<T>>);

impl<T> Clone for ItemList<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for ItemList<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> From<Vec<T>> for ItemList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(Rc::new(items))
    }
}

impl<T> Deref for ItemList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}
