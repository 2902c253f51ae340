use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;

/// Last pointer position over the window. The `mousemove` listener lives as
/// long as the calling component.
#[hook]
pub fn use_pointer_position() -> (i32, i32) {
    let position = use_state(|| (0, 0));
    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    EventListener::new(&window, "mousemove", move |event: &Event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            position.set((event.client_x(), event.client_y()));
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }
    *position
}

/// Emits on every page scroll and once up front.
#[hook]
pub fn use_window_scroll(on_scroll: Callback<()>) {
    use_effect_with_deps(
        move |_| {
            let listener = web_sys::window().map(|window| {
                on_scroll.emit(());
                EventListener::new(&window, "scroll", move |_| on_scroll.emit(()))
            });
            move || drop(listener)
        },
        (),
    );
}

/// Emits the element behind `node` whenever it scrolls, and once on mount.
#[hook]
pub fn use_element_scroll(node: NodeRef, on_scroll: Callback<Element>) {
    use_effect_with_deps(
        move |node: &NodeRef| {
            let listener = node.cast::<Element>().map(|element| {
                on_scroll.emit(element.clone());
                let target = element.clone();
                EventListener::new(&element, "scroll", move |_| on_scroll.emit(target.clone()))
            });
            move || drop(listener)
        },
        node,
    );
}
