use leptos::{html, prelude::*};

use crate::animation::{Entrance, Hover};
use crate::typewriter::TypewriterTimings;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
#[cfg(feature = "hydrate")]
use leptos_use::{storage::use_session_storage, use_element_visibility, use_event_listener};

#[cfg(feature = "hydrate")]
use super::browser::{self, WebAnimator, WindowViewport};
#[cfg(feature = "hydrate")]
use crate::animation::{hover_tween, reveal, run_entrance, Animator};
#[cfg(feature = "hydrate")]
use crate::scroll::{ScrollController, SessionFlag, SessionStore};
#[cfg(feature = "hydrate")]
use crate::typewriter::Typewriter;

/// `sessionStorage`-backed flags for the scroll controller.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct SignalSession {
    has_navigated: (Signal<bool>, WriteSignal<bool>),
    is_refreshing: (Signal<bool>, WriteSignal<bool>),
}

#[cfg(feature = "hydrate")]
impl SignalSession {
    fn new() -> Self {
        let flag = |flag: SessionFlag| {
            let (get, set, _) = use_session_storage::<bool, FromToStringCodec>(flag.key());
            (get, set)
        };
        Self {
            has_navigated: flag(SessionFlag::HasNavigated),
            is_refreshing: flag(SessionFlag::IsRefreshing),
        }
    }

    fn pair(&self, flag: SessionFlag) -> (Signal<bool>, WriteSignal<bool>) {
        match flag {
            SessionFlag::HasNavigated => self.has_navigated,
            SessionFlag::IsRefreshing => self.is_refreshing,
        }
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for SignalSession {
    fn get(&self, flag: SessionFlag) -> bool {
        self.pair(flag).0.get_untracked()
    }

    fn set(&self, flag: SessionFlag, value: bool) {
        self.pair(flag).1.set(value);
    }
}

/// Jumps to the top on first mount and on every route change.
pub fn use_scroll_top() {
    #[cfg(feature = "hydrate")]
    {
        use leptos_router::hooks::use_location;

        browser::disable_scroll_restoration();
        let controller = ScrollController::new(WindowViewport, SignalSession::new());
        let controller = StoredValue::new(controller);
        let pathname = use_location().pathname;

        Effect::watch(
            move || pathname.get(),
            move |path, prev, _| {
                controller.with_value(|c| {
                    if prev.is_none() {
                        c.on_load();
                    } else {
                        c.on_route_change(path);
                    }
                });
            },
            true,
        );

        let _ = use_event_listener(window(), leptos::ev::beforeunload, move |_| {
            controller.with_value(|c| c.on_before_unload());
        });
        let _ = use_event_listener(document(), leptos::ev::visibilitychange, move |_| {
            if browser::is_document_visible() {
                controller.with_value(|c| c.on_visible());
            }
        });
    }
}

/// Looping type/delete text. Stays empty during server rendering.
pub fn use_typewriter(text: &'static str, timings: TypewriterTimings) -> ReadSignal<String> {
    let (display, set_display) = signal(String::new());

    #[cfg(feature = "hydrate")]
    {
        let machine = StoredValue::new(Typewriter::new(text, timings));
        let pending = StoredValue::new(None::<TimeoutHandle>);
        let (step, set_step) = signal(0_u64);

        Effect::new(move |_| {
            step.track();
            if machine.with_value(|m| m.is_idle()) {
                return;
            }
            let delay = machine.with_value(|m| m.delay());
            let handle = set_timeout_with_handle(
                move || {
                    machine.update_value(|m| m.tick());
                    set_display.set(machine.with_value(|m| m.display()));
                    *set_step.write() += 1;
                },
                delay,
            );
            match handle {
                Ok(h) => pending.set_value(Some(h)),
                Err(e) => log::warn!("typewriter timer failed: {e:?}"),
            }
        });

        on_cleanup(move || {
            pending.try_with_value(|h| {
                if let Some(h) = h {
                    h.clear();
                }
            });
            machine.try_update_value(|m| m.restart());
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (text, timings, set_display);

    display
}

/// Runs a page's entrance sequence once, after mount.
pub fn use_entrance(plan: &'static [Entrance]) {
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| run_entrance(&WebAnimator, plan));

    #[cfg(not(feature = "hydrate"))]
    let _ = plan;
}

pub fn animate_hover(target: &str, hover: Hover) {
    #[cfg(feature = "hydrate")]
    {
        let (tween, options) = hover_tween(hover);
        WebAnimator.animate(target, &tween, &options);
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (target, hover);
}

/// A section whose direct children slide up the first time it scrolls into view.
#[component]
pub fn Reveal(
    #[prop(into)] id: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        let visible = use_element_visibility(node);
        let target = format!("#{id} > *");
        Effect::watch(
            move || visible.get(),
            move |is_visible, _, shown: Option<bool>| {
                let shown = shown.unwrap_or(false);
                if *is_visible && !shown {
                    let (target, tween, options) = reveal(&target);
                    WebAnimator.animate(&target, &tween, &options);
                    return true;
                }
                shown
            },
            false,
        );
    }

    view! {
        <section id=id class=class node_ref=node>
            {children()}
        </section>
    }
}

/// Card that lifts while hovered.
#[component]
pub fn HoverCard(
    #[prop(into)] id: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = format!("#{id}");
    let leave_target = target.clone();
    view! {
        <div
            id=id
            class=format!("hover-card rounded-xl border border-slate-700/50 bg-slate-900/60 p-6 {class}")
            on:mouseenter=move |_| animate_hover(&target, Hover::Enter)
            on:mouseleave=move |_| animate_hover(&leave_target, Hover::Leave)
        >
            {children()}
        </div>
    }
}
