use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::footer::Footer;
use super::hooks::{use_entrance, HoverCard, Reveal};
use crate::animation::Entrance;

const ENTRANCE: &[Entrance] = &[
    Entrance::fade_up(".hero-title", 200.0, 0.0),
    Entrance::fade_up(".hero-tagline", 450.0, 0.0),
    Entrance::pop_in(".hero-cta", 700.0, 120.0),
    Entrance::pop_in(".floating-element", 500.0, 150.0),
];

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    (
        "Backend Development",
        "REST APIs, microservices and data layers built to stay fast under load.",
        "/services",
    ),
    (
        "Network Engineering",
        "Enterprise network design, Mikrotik routing and hardened security policy.",
        "/experience",
    ),
    (
        "Server Management",
        "Linux fleets with automated backups, monitoring and 99.8% uptime.",
        "/skills",
    ),
];

const STATS: &[(&str, &str)] = &[
    ("3+", "Years Experience"),
    ("50+", "Projects Completed"),
    ("100%", "Client Satisfaction"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    use_entrance(ENTRANCE);

    view! {
        <Title text="Home" />
        <div class="relative overflow-hidden">
            <div class="floating-element floating-1 absolute top-24 left-10 w-24 h-24 rounded-full bg-blue-500/20 blur-2xl"></div>
            <div class="floating-element floating-2 absolute top-64 right-16 w-32 h-32 rounded-full bg-purple-500/20 blur-2xl"></div>
            <div class="floating-element floating-3 absolute bottom-10 left-1/3 w-20 h-20 rounded-full bg-pink-500/20 blur-2xl"></div>

            <section class="max-w-5xl mx-auto px-4 py-16 text-center">
                <h1 class="hero-title text-5xl md:text-6xl font-bold mb-6">
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400">
                        "Full Stack Developer & Network Engineer"
                    </span>
                </h1>
                <p class="hero-tagline text-lg md:text-xl text-slate-300 max-w-3xl mx-auto leading-relaxed mb-10">
                    "Passionate Computer Science student with expertise in backend development, networking, and server management. Currently pursuing B.Sc. in CSE while delivering professional solutions."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <A
                        href="/contact"
                        attr:class="hero-cta px-8 py-3 rounded-lg bg-gradient-to-r from-blue-500 to-purple-600 text-white font-semibold"
                    >
                        "Start a Project"
                    </A>
                    <A
                        href="/experience"
                        attr:class="hero-cta px-8 py-3 rounded-lg border border-slate-600 text-slate-200 hover:bg-slate-800/60"
                    >
                        "View Experience"
                    </A>
                </div>
            </section>

            <Reveal id="home-stats" class="max-w-4xl mx-auto px-4 grid grid-cols-1 sm:grid-cols-3 gap-6 mb-16">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="text-center rounded-xl bg-slate-900/60 border border-slate-700/50 p-6">
                                <div class="text-3xl font-bold text-blue-400">{*value}</div>
                                <div class="text-sm text-slate-400 mt-1">{*label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </Reveal>

            <Reveal id="home-highlights" class="max-w-6xl mx-auto px-4 grid grid-cols-1 md:grid-cols-3 gap-6 mb-20">
                {HIGHLIGHTS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, blurb, href))| {
                        view! {
                            <HoverCard id=format!("highlight-{i}")>
                                <h3 class="text-xl font-semibold text-white mb-3">{*title}</h3>
                                <p class="text-slate-400 mb-4">{*blurb}</p>
                                <A href=*href attr:class="text-blue-400 hover:text-blue-300 text-sm font-medium">
                                    "Learn more →"
                                </A>
                            </HoverCard>
                        }
                    })
                    .collect_view()}
            </Reveal>
        </div>
        <Footer />
    }
}
