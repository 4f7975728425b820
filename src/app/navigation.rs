use std::time::Duration;

use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};
use leptos_use::use_window_scroll;

use super::hooks::use_typewriter;
use super::SITE_OWNER;
use crate::nav::{active_item, NavItem, NavState, NAV_ITEMS, SCROLL_THRESHOLD};
use crate::typewriter::TypewriterTimings;

const BRAND_TIMINGS: TypewriterTimings = TypewriterTimings {
    speed: Duration::from_millis(150),
    delete_speed: Duration::from_millis(100),
    delay_between: Duration::from_millis(3000),
};

#[component]
pub fn Navigation() -> impl IntoView {
    let state = RwSignal::new(NavState::default());
    let pathname = use_location().pathname;
    let brand = use_typewriter(SITE_OWNER, BRAND_TIMINGS);

    // use_window_scroll listens passively
    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let y = scroll_y.get();
        if state.with_untracked(|s| s.scrolled) != (y > SCROLL_THRESHOLD) {
            state.update(|s| s.on_scroll(y));
        }
    });
    Effect::watch(
        move || pathname.get(),
        move |_, _, _| state.update(|s| s.on_navigate()),
        false,
    );

    let item_class = move |item: &'static NavItem, base: &'static str| {
        move || {
            if pathname.with(|p| item.is_active(p)) {
                format!("{base} text-white bg-slate-800/70")
            } else {
                format!("{base} text-slate-300 hover:text-white hover:bg-slate-800/50")
            }
        }
    };

    view! {
        <div class="fixed top-6 left-1/2 -translate-x-1/2 z-50 w-full flex justify-center px-4">
            <nav class=move || {
                if state.get().scrolled {
                    "bg-slate-900/95 shadow-2xl border border-slate-700/50 rounded-xl px-4 md:px-6 py-2 w-full max-w-7xl backdrop-blur-xl transition-all duration-300"
                } else {
                    "bg-slate-900/70 border border-slate-700/30 rounded-xl px-4 md:px-6 py-3 w-full max-w-7xl backdrop-blur-xl transition-all duration-300"
                }
            }>
                <div class="flex items-center justify-between w-full">
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 bg-gradient-to-br from-blue-500 to-purple-600 rounded-lg flex items-center justify-center shadow-lg animate-spin-pause">
                            <span class="text-white font-bold text-lg">
                                {SITE_OWNER.chars().next().map(String::from)}
                            </span>
                        </div>
                        <A href="/" attr:class="text-xl font-bold text-white hover:text-blue-400 whitespace-nowrap">
                            <span class="inline-block min-w-[120px]">
                                {brand}
                                <span class="animate-pulse text-blue-400">"|"</span>
                            </span>
                        </A>
                    </div>
                    <div class="hidden lg:flex items-center">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <A
                                        href=item.path
                                        attr:class=item_class(
                                            item,
                                            "rounded-lg text-sm font-medium whitespace-nowrap px-3 py-2 transition-all duration-300",
                                        )
                                    >
                                        {item.label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                    <span class="lg:hidden ml-auto mr-2 text-sm text-slate-400">
                        {move || pathname.with(|p| active_item(p).map(|item| item.label))}
                    </span>
                    <button
                        class="lg:hidden p-2 text-slate-300 hover:text-white hover:bg-slate-800/50 rounded-lg"
                        aria-label="Toggle menu"
                        on:click=move |_| state.update(|s| s.toggle_menu())
                    >
                        {move || if state.get().menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
            <Show when=move || state.get().menu_open>
                <div class="absolute top-full mt-3 w-11/12 max-w-sm bg-slate-900/90 backdrop-blur-xl border border-slate-700/50 rounded-xl shadow-2xl p-4 lg:hidden">
                    <div class="flex flex-col space-y-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <A
                                        href=item.path
                                        attr:class=item_class(
                                            item,
                                            "rounded-lg text-sm font-medium whitespace-nowrap px-4 py-3 transition-all duration-300",
                                        )
                                        on:click=move |_| state.update(|s| s.on_navigate())
                                    >
                                        {item.label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
