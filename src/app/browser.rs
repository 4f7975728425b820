//! Browser-backed implementations of the DOM seams.

use leptos::prelude::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, ScrollRestoration, ScrollToOptions};

use crate::animation::{AnimationOptions, AnimationProps, Animator, Tween};
use crate::scroll::Viewport;

#[derive(Debug, Clone, Copy)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to(&self, x: f64, y: f64) {
        let opts = ScrollToOptions::new();
        opts.set_left(x);
        opts.set_top(y);
        opts.set_behavior(web_sys::ScrollBehavior::Instant);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}

/// Stops the browser from restoring the previous scroll offset on reload.
pub fn disable_scroll_restoration() {
    let res = window()
        .history()
        .and_then(|h| h.set_scroll_restoration(ScrollRestoration::Manual));
    if let Err(e) = res {
        log::warn!("could not disable scroll restoration: {e:?}");
    }
}

pub fn is_document_visible() -> bool {
    document().visibility_state() == web_sys::VisibilityState::Visible
}

/// Web Animations API implementation of [`Animator`].
///
/// `Element.animate` is called through reflection: the typed web-sys binding
/// sits behind `web_sys_unstable_apis`.
#[derive(Debug, Clone, Copy)]
pub struct WebAnimator;

fn set_all(target: &js_sys::Object, entries: &[(&str, JsValue)]) -> Result<(), JsValue> {
    for (key, value) in entries {
        js_sys::Reflect::set(target, &JsValue::from_str(key), value)?;
    }
    Ok(())
}

fn keyframe(props: &AnimationProps) -> Result<js_sys::Object, JsValue> {
    let frame = js_sys::Object::new();
    set_all(
        &frame,
        &[
            ("opacity", JsValue::from(props.opacity)),
            ("transform", JsValue::from(props.transform())),
        ],
    )?;
    Ok(frame)
}

fn timing(options: &AnimationOptions, index: usize) -> Result<js_sys::Object, JsValue> {
    let timing = js_sys::Object::new();
    set_all(
        &timing,
        &[
            ("duration", JsValue::from(options.duration_ms)),
            ("delay", JsValue::from(options.delay_for(index))),
            ("easing", JsValue::from_str(options.easing.css())),
            ("fill", JsValue::from_str("both")),
        ],
    )?;
    Ok(timing)
}

fn animate_element(
    el: &Element,
    frames: &js_sys::Array,
    options: &AnimationOptions,
    index: usize,
) -> Result<(), JsValue> {
    let animate: js_sys::Function = js_sys::Reflect::get(el, &JsValue::from_str("animate"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("Element.animate is not a function"))?;
    animate.call2(el, frames, &timing(options, index)?.into())?;
    Ok(())
}

impl Animator for WebAnimator {
    fn animate(&self, target: &str, tween: &Tween, options: &AnimationOptions) {
        let nodes = match document().query_selector_all(target) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("bad animation target {target}: {e:?}");
                return;
            }
        };
        let frames = match (keyframe(&tween.from), keyframe(&tween.to)) {
            (Ok(from), Ok(to)) => js_sys::Array::of2(&from, &to),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("could not build keyframes for {target}: {e:?}");
                return;
            }
        };
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if let Err(e) = animate_element(&el, &frames, options, i as usize) {
                log::warn!("animation on {target} failed: {e:?}");
            }
        }
    }
}
