use std::cell::RefCell;
use std::rc::Rc;

use moviehub_core::observe::Subscribers;

#[test]
fn notifies_in_registration_order() {
    let subscribers: Subscribers<u32> = Subscribers::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let first_log = Rc::clone(&log);
    let _first = subscribers.subscribe(move |v| first_log.borrow_mut().push(("first", *v)));
    let second_log = Rc::clone(&log);
    let _second = subscribers.subscribe(move |v| second_log.borrow_mut().push(("second", *v)));

    subscribers.notify(&7);
    assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    assert_eq!(subscribers.len(), 2);
}

#[test]
fn unsubscribe_and_drop_both_release() {
    let subscribers: Subscribers<u32> = Subscribers::new();
    let count = Rc::new(RefCell::new(0));

    let c1 = Rc::clone(&count);
    let a = subscribers.subscribe(move |_| *c1.borrow_mut() += 1);
    let c2 = Rc::clone(&count);
    let b = subscribers.subscribe(move |_| *c2.borrow_mut() += 1);

    a.unsubscribe();
    assert_eq!(subscribers.len(), 1);
    drop(b);
    assert!(subscribers.is_empty());

    subscribers.notify(&1);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn subscription_outliving_its_source_is_harmless() {
    let subscribers: Subscribers<u32> = Subscribers::new();
    let subscription = subscribers.subscribe(|_| {});
    drop(subscribers);
    drop(subscription);
}
