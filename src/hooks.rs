use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::RevealLatch;

/// Observes the element behind `node` and flips to true the first time it is
/// intersecting at `threshold`. The flag never reverts: the latch detaches its
/// observer once it fires, so later visibility changes are ignored.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |deps| {
                let (node, threshold) = deps;
                let mut observer = None;
                let mut callback = None;

                if let Some(element) = node.cast::<Element>() {
                    let latch = RefCell::new(RevealLatch::new());
                    let cb = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, obs: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if latch.borrow_mut().observe(entry.is_intersecting()) {
                                    in_view.set(true);
                                    obs.disconnect();
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(*threshold));

                    match IntersectionObserver::new_with_options(
                        cb.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some(obs);
                        }
                        Err(err) => {
                            log::warn!("intersection observer unavailable: {err:?}");
                        }
                    }
                    callback = Some(cb);
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            (node, threshold),
        );
    }

    *in_view
}

/// True `delay_ms` after `trigger` first becomes true. Drives the staged and
/// staggered entrance animations; the pending timer is cancelled if the
/// component unmounts first.
#[hook]
pub fn use_delayed_flag(trigger: bool, delay_ms: u32) -> bool {
    let flag = use_state(|| false);

    {
        let flag = flag.clone();
        use_effect_with_deps(
            move |deps| {
                let &(trigger, delay_ms) = deps;
                let pending = (trigger && !*flag)
                    .then(|| Timeout::new(delay_ms, move || flag.set(true)));
                move || drop(pending)
            },
            (trigger, delay_ms),
        );
    }

    *flag
}
