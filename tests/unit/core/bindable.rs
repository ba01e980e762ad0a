use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl FnMut(&bool)) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |v: &bool| sink.borrow_mut().push(*v))
}

#[test]
fn notifies_on_change() {
    let (seen, sub) = recorder();
    let mut cell = Bindable::new(false);
    cell.bind(sub, false);

    cell.set(true);
    cell.set(false);
    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn setting_equal_value_does_not_notify() {
    let (seen, sub) = recorder();
    let mut cell = Bindable::new(false);
    cell.bind(sub, false);

    cell.set(false);
    cell.set(false);
    assert!(seen.borrow().is_empty());
}

#[test]
fn bind_can_fire_immediately() {
    let (seen, sub) = recorder();
    let mut cell = Bindable::new(true);
    cell.bind(sub, true);

    assert_eq!(*seen.borrow(), vec![true]);
}

#[test]
fn all_subscribers_are_notified() {
    let (first, sub1) = recorder();
    let (second, sub2) = recorder();
    let mut cell = Bindable::new(false);
    cell.bind(sub1, false);
    cell.bind(sub2, false);

    cell.set(true);
    assert_eq!(*first.borrow(), vec![true]);
    assert_eq!(*second.borrow(), vec![true]);
}

#[test]
fn value_returns_a_copy() {
    let mut cell = Bindable::new(false);
    assert!(!cell.value());
    cell.set(true);
    assert!(cell.value());
    assert_eq!(cell.get(), &true);
}
