//! Viewport visibility tracking.
//!
//! [`InViewTracker`] holds the decision logic and is driven by whatever
//! produces intersection events. [`use_in_view`] wires it to a browser
//! `IntersectionObserver` for the lifetime of a component.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Observer configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the region that must be inside the viewport.
    pub threshold: f64,
    pub trigger_once: bool,
    /// CSS margin applied around the viewport, e.g. `"100px"`.
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: crate::config::site().reveal_threshold,
            trigger_once: false,
            root_margin: "0px".to_string(),
        }
    }
}

impl ObserverOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn root_margin(mut self, margin: &str) -> Self {
        self.root_margin = margin.to_string();
        self
    }

    pub fn once(mut self) -> Self {
        self.trigger_once = true;
        self
    }

    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            0.0
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }
}

/// Turns raw intersection events into an in-view signal.
#[derive(Clone, Debug)]
pub struct InViewTracker {
    threshold: f64,
    trigger_once: bool,
    in_view: bool,
    latched: bool,
}

impl InViewTracker {
    pub fn new(options: &ObserverOptions) -> Self {
        Self {
            threshold: options.clamped_threshold(),
            trigger_once: options.trigger_once,
            in_view: false,
            latched: false,
        }
    }

    /// Feed one intersection event, returns the resulting signal.
    pub fn update(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.latched {
            return true;
        }
        // A zero threshold fires on the first pixel, which browsers report
        // as intersecting with a ratio of 0.
        self.in_view = is_intersecting && (self.threshold == 0.0 || ratio >= self.threshold);
        if self.in_view && self.trigger_once {
            self.latched = true;
        }
        self.in_view
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// True once a trigger-once tracker has fired and no longer needs events.
    pub fn is_done(&self) -> bool {
        self.latched
    }
}

/// Keeps an `IntersectionObserver` registered until dropped.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Start observing `element`, invoking `on_change` whenever the in-view
/// signal changes.
pub fn observe<F>(element: &Element, options: &ObserverOptions, on_change: F) -> Result<ObserverGuard, JsValue>
where
    F: Fn(bool) + 'static,
{
    let mut tracker = InViewTracker::new(options);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let before = tracker.in_view();
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    tracker.update(entry.is_intersecting(), entry.intersection_ratio());
                }
            }
            if tracker.in_view() != before {
                on_change(tracker.in_view());
            }
            if tracker.is_done() {
                observer.disconnect();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.clamped_threshold()));
    init.set_root_margin(&options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}

/// Reports whether the element behind `node` is in the viewport. Stays
/// `false` if the node never renders.
#[hook]
pub fn use_in_view(node: NodeRef, options: ObserverOptions) -> bool {
    let in_view = use_state(|| false);
    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let guard = match node.cast::<Element>() {
                    Some(element) => {
                        let in_view = in_view.clone();
                        match observe(&element, options, move |visible| in_view.set(visible)) {
                            Ok(guard) => Some(guard),
                            Err(e) => {
                                log::warn!("IntersectionObserver unavailable: {:?}", e);
                                None
                            }
                        }
                    }
                    None => {
                        log::debug!("use_in_view: node not mounted");
                        None
                    }
                };
                move || drop(guard)
            },
            (node, options),
        );
    }
    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(threshold: f64, trigger_once: bool) -> ObserverOptions {
        ObserverOptions {
            threshold,
            trigger_once,
            root_margin: "0px".to_string(),
        }
    }

    #[test]
    fn test_below_threshold_is_not_in_view() {
        let mut tracker = InViewTracker::new(&options(0.5, false));
        assert!(!tracker.update(true, 0.2));
        assert!(tracker.update(true, 0.5));
        assert!(!tracker.update(false, 0.0));
    }

    #[test]
    fn test_zero_threshold_fires_on_any_intersection() {
        let mut tracker = InViewTracker::new(&options(0.0, false));
        assert!(tracker.update(true, 0.0));
        assert!(!tracker.update(false, 0.0));
    }

    #[test]
    fn test_trigger_once_latches() {
        let mut tracker = InViewTracker::new(&options(0.1, true));
        assert!(!tracker.update(true, 0.05));
        assert!(!tracker.is_done());
        assert!(tracker.update(true, 0.3));
        assert!(tracker.is_done());
        assert!(tracker.update(false, 0.0));
        assert!(tracker.in_view());
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(options(1.7, false).clamped_threshold(), 1.0);
        assert_eq!(options(-0.3, false).clamped_threshold(), 0.0);
        assert_eq!(options(f64::NAN, false).clamped_threshold(), 0.0);
    }

    #[test]
    fn test_builder_helpers() {
        let opts = ObserverOptions::with_threshold(0.15).root_margin("100px").once();
        assert_eq!(opts.threshold, 0.15);
        assert_eq!(opts.root_margin, "100px");
        assert!(opts.trigger_once);
    }
}
