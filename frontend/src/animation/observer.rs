use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    NodeList,
};
use yew::prelude::*;

use super::reveal::{
    Intersection, RevealOptions, RevealPlan, RevealTracker, TargetId, CHILD_REVEALED_CLASS, CHILD_SELECTOR,
    TARGET_SELECTOR, VISIBLE_CLASS,
};

struct Target {
    id: TargetId,
    element: Element,
    children: Vec<Element>,
}

struct Inner {
    tracker: RevealTracker,
    targets: Vec<Target>,
    observer: Option<IntersectionObserver>,
    callback: Option<Closure<dyn FnMut(Array)>>,
    timers: Vec<Timeout>,
}

/// Reveals `[data-animate]` sections of the current document as they scroll
/// into view. Dropping the observer disconnects it and cancels every pending
/// timer.
pub struct RevealObserver {
    inner: Rc<RefCell<Inner>>,
    _mount: Timeout,
}

impl RevealObserver {
    pub fn mount(options: RevealOptions) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        reset_classes(&document);

        let mount_delay = options.mount_delay_ms;
        let inner = Rc::new(RefCell::new(Inner {
            tracker: RevealTracker::new(options),
            targets: Vec::new(),
            observer: None,
            callback: None,
            timers: Vec::new(),
        }));

        let weak = Rc::downgrade(&inner);
        let mount = Timeout::new(mount_delay, move || {
            if let Some(inner) = weak.upgrade() {
                start(&inner, &document);
            }
        });

        Some(Self {
            inner,
            _mount: mount,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(observer) = inner.observer.take() {
            observer.disconnect();
        }
        inner.callback = None;
        inner.timers.clear();
        inner.tracker.teardown();
        debug!("Scroll reveal torn down");
    }
}

fn reset_classes(document: &Document) {
    for el in elements(document.query_selector_all(TARGET_SELECTOR)) {
        let _ = el.class_list().remove_1(VISIBLE_CLASS);
    }
    for el in elements(document.query_selector_all(CHILD_SELECTOR)) {
        let _ = el.class_list().remove_1(CHILD_REVEALED_CLASS);
    }
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn supports_intersection_observer() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn start(inner_rc: &Rc<RefCell<Inner>>, document: &Document) {
    let mut inner = inner_rc.borrow_mut();
    if inner.tracker.is_torn_down() {
        return;
    }

    for element in elements(document.query_selector_all(TARGET_SELECTOR)) {
        let children = elements(element.query_selector_all(CHILD_SELECTOR));
        let id = inner.tracker.register(children.len());
        inner.targets.push(Target {
            id,
            element,
            children,
        });
    }

    let observer = if supports_intersection_observer() {
        build_observer(inner_rc, inner.tracker.options())
    } else {
        None
    };

    match observer {
        Some((observer, callback)) => {
            for target in &inner.targets {
                observer.observe(&target.element);
            }
            info!("Observing {} animated sections", inner.targets.len());
            inner.observer = Some(observer);
            inner.callback = Some(callback);
        }
        None => {
            let changed = inner.tracker.reveal_all();
            warn!(
                "IntersectionObserver unavailable, showing all {} sections",
                changed.len()
            );
            for target in &inner.targets {
                if inner.tracker.is_visible(target.id) {
                    let _ = target.element.class_list().add_1(VISIBLE_CLASS);
                }
                for (i, child) in target.children.iter().enumerate() {
                    if inner.tracker.is_child_revealed(target.id, i) {
                        let _ = child.class_list().add_1(CHILD_REVEALED_CLASS);
                    }
                }
            }
        }
    }
}

fn build_observer(
    inner_rc: &Rc<RefCell<Inner>>,
    options: &RevealOptions,
) -> Option<(IntersectionObserver, Closure<dyn FnMut(Array)>)> {
    let weak = Rc::downgrade(inner_rc);
    let callback = Closure::wrap(Box::new(move |entries: Array| {
        if let Some(inner) = weak.upgrade() {
            on_entries(&inner, &weak, entries);
        }
    }) as Box<dyn FnMut(Array)>);

    let init = IntersectionObserverInit::new();
    // The zero threshold reports first contact, which is all a target taller
    // than the viewport will ever get.
    let thresholds = Array::of2(&JsValue::from_f64(0.0), &JsValue::from_f64(options.threshold));
    init.set_threshold(&thresholds);
    init.set_root_margin(&options.root_margin());

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => Some((observer, callback)),
        Err(e) => {
            warn!("Could not create IntersectionObserver: {:?}", e);
            None
        }
    }
}

fn on_entries(inner_rc: &Rc<RefCell<Inner>>, weak: &Weak<RefCell<Inner>>, entries: Array) {
    let mut inner = inner_rc.borrow_mut();
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        let element = entry.target();
        let Some(id) = inner.targets.iter().find(|t| t.element == element).map(|t| t.id) else {
            continue;
        };
        let taller_than_root = entry
            .root_bounds()
            .map_or(false, |root| entry.bounding_client_rect().height() > root.height());
        let report = Intersection {
            is_intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
            taller_than_root,
        };
        let plan = inner.tracker.on_intersection(id, report);
        if let Some(plan) = plan {
            let _ = element.class_list().add_1(VISIBLE_CLASS);
            inner.schedule(plan, weak);
        }
    }
}

impl Inner {
    fn schedule(&mut self, plan: RevealPlan, weak: &Weak<RefCell<Inner>>) {
        let target = plan.target;
        for child in plan.children {
            let weak = weak.clone();
            let timer = Timeout::new(child.delay_ms, move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let mut inner = inner.borrow_mut();
                if inner.tracker.reveal_child(target, child.index) {
                    let el = inner
                        .targets
                        .iter()
                        .find(|t| t.id == target)
                        .and_then(|t| t.children.get(child.index));
                    if let Some(el) = el {
                        let _ = el.class_list().add_1(CHILD_REVEALED_CLASS);
                    }
                }
            });
            self.timers.push(timer);
        }
    }
}

/// Runs the scroll reveal for the calling page while it is mounted.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            let observer = RevealObserver::mount(RevealOptions::default());
            move || drop(observer)
        },
        (),
    );
}
