use std::cell::RefCell;
use std::rc::Rc;

use velox_dom::events::{self, ClickEvent, EventRegistry};
use velox_dom::{h, text, Props};

#[test]
fn dispatch_invokes_registered_callback() {
    let vnode = h("button", Props::new().set("on:click", "inc"), vec![text("+1")]);

    let count = Rc::new(RefCell::new(0));
    let mut reg = EventRegistry::new();
    {
        let count = count.clone();
        reg.on("inc", move |_ev: &mut ClickEvent| {
            *count.borrow_mut() += 1;
        });
    }

    let mut ev = ClickEvent::primary();
    let n = events::dispatch("click", &vnode, &mut reg, &mut ev);
    assert_eq!(n, 1);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn dispatch_handles_multiple_targets() {
    let vnode = h(
        "div",
        Props::new(),
        vec![
            h("button", Props::new().set("on:click", "inc"), vec![]),
            h("button", Props::new().set("on:click", "inc"), vec![]),
        ],
    );

    let count = Rc::new(RefCell::new(0));
    let mut reg = EventRegistry::new();
    {
        let count = count.clone();
        reg.on("inc", move |_ev: &mut ClickEvent| {
            *count.borrow_mut() += 1;
        });
    }
    let n = events::dispatch("click", &vnode, &mut reg, &mut ClickEvent::primary());
    assert_eq!(n, 2);
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn handler_can_prevent_default() {
    let vnode = h("a", Props::new().set("on:click", "stop"), vec![]);
    let mut reg = EventRegistry::new();
    reg.on("stop", |ev: &mut ClickEvent| ev.prevent_default());

    let mut ev = ClickEvent::primary();
    events::dispatch("click", &vnode, &mut reg, &mut ev);
    assert!(ev.default_prevented);
}

#[test]
fn unknown_and_removed_handlers_are_skipped() {
    let vnode = h(
        "div",
        Props::new().set("on:click", "gone"),
        vec![h("span", Props::new().set("on:click", "missing"), vec![])],
    );
    let mut reg = EventRegistry::new();
    reg.on("gone", |_ev: &mut ClickEvent| {});
    assert!(reg.has("gone"));
    reg.remove("gone");
    assert!(!reg.has("gone"));

    let n = events::dispatch("click", &vnode, &mut reg, &mut ClickEvent::primary());
    assert_eq!(n, 0);
}

#[test]
fn other_event_names_do_not_fire_click_handlers() {
    let vnode = h("a", Props::new().set("on:click", "inc"), vec![]);
    let mut reg = EventRegistry::new();
    reg.on("inc", |_ev: &mut ClickEvent| {});
    assert_eq!(events::dispatch("hover", &vnode, &mut reg, &mut ClickEvent::primary()), 0);
}

#[test]
fn handler_sees_its_element_as_target() {
    let vnode = h(
        "nav",
        Props::new(),
        vec![h("a", Props::new().set("on:click", "seen"), vec![text("home")])],
    );
    let seen = Rc::new(RefCell::new(None));
    let mut reg = EventRegistry::new();
    {
        let seen = seen.clone();
        reg.on("seen", move |ev: &mut ClickEvent| {
            *seen.borrow_mut() = ev.target.clone();
        });
    }

    let mut ev = ClickEvent::primary();
    assert_eq!(ev.target, None);
    events::dispatch("click", &vnode, &mut reg, &mut ev);
    assert_eq!(seen.borrow().as_deref(), Some("a"));
    assert_eq!(ev.target.as_deref(), Some("a"));
}
