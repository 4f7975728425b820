use leptos::prelude::*;
use leptos_meta::Title;

use super::footer::Footer;
use super::header::PageHeader;
use super::hooks::{use_entrance, HoverCard, Reveal};
use crate::animation::Entrance;

const ENTRANCE: &[Entrance] = &[
    Entrance::fade_up(".page-header", 0.0, 0.0),
    Entrance::slide_in(".about-portrait", -80.0, 250.0),
    Entrance::slide_in(".about-bio", 80.0, 350.0),
];

const STATS: &[(&str, &str)] = &[
    ("3+", "Years Experience"),
    ("50+", "Projects Completed"),
    ("100%", "Client Satisfaction"),
];

const INTERESTS: &[&str] = &[
    "Designing APIs that stay pleasant to use as they grow",
    "Tuning networks until the graphs go flat",
    "Automating anything done twice on a server",
    "Learning a new tool every semester",
];

#[component]
pub fn AboutPage() -> impl IntoView {
    use_entrance(ENTRANCE);

    view! {
        <Title text="About" />
        <div class="max-w-6xl mx-auto px-4">
            <PageHeader title="About Me" subtitle="Get to know the person behind the code" />
            <section class="flex flex-col lg:flex-row gap-10 items-center mb-16">
                <div class="about-portrait flex-shrink-0 w-56 h-56 rounded-2xl bg-gradient-to-br from-blue-500/40 to-purple-600/40 flex items-center justify-center text-6xl font-bold text-white">
                    "SA"
                </div>
                <div class="about-bio space-y-4 text-slate-300 leading-relaxed">
                    <h2 class="text-2xl font-semibold text-white">
                        "Hello, I'm a Full Stack Developer"
                    </h2>
                    <p>
                        "I am a Computer Science and Engineering student at Varendra University with hands-on experience across the stack: from backend services and databases down to the routers and servers they run on."
                    </p>
                    <p>
                        "Alongside my studies I work professionally as a backend, network and server engineer, which keeps my coursework grounded in real production problems."
                    </p>
                </div>
            </section>

            <Reveal id="about-stats" class="grid grid-cols-1 sm:grid-cols-3 gap-6 mb-16">
                {STATS
                    .iter()
                    .enumerate()
                    .map(|(i, (value, label))| {
                        view! {
                            <HoverCard id=format!("about-stat-{i}") class="text-center">
                                <div class="text-4xl font-bold text-purple-400">{*value}</div>
                                <div class="text-slate-400 mt-2">{*label}</div>
                            </HoverCard>
                        }
                    })
                    .collect_view()}
            </Reveal>

            <Reveal id="about-interests" class="mb-20">
                <h3 class="text-xl font-semibold text-white mb-4">"What drives me"</h3>
                <ul class="space-y-2 text-slate-300">
                    {INTERESTS.iter().map(|s| view! { <li>"• " {*s}</li> }).collect_view()}
                </ul>
            </Reveal>
        </div>
        <Footer />
    }
}
