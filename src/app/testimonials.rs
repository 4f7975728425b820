use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::footer::Footer;
use super::header::PageHeader;
use super::hooks::{use_entrance, HoverCard, Reveal};
use crate::animation::Entrance;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    content: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Prof. Md. Abul Quasem",
        role: "Professor",
        company: "Rajshahi University",
        content: "Amazing coding skills! Delivered my project on time with outstanding quality.",
    },
    Testimonial {
        name: "Shabnam Sabiha",
        role: "Lecturer",
        company: "Shahdowlla Govt. College",
        content: "Reliable and thorough. Our department network has not gone down since.",
    },
    Testimonial {
        name: "Ahanf Talha",
        role: "CEO",
        company: "Nabarang Ltd.",
        content: "Took our backend from a prototype to a production service our customers trust.",
    },
];

const STATS: &[(&str, &str)] = &[
    ("50+", "Happy Clients"),
    ("98%", "Project Success Rate"),
    ("3+", "Years Experience"),
];

const ENTRANCE: &[Entrance] = &[
    Entrance::fade_up(".page-header", 0.0, 0.0),
    Entrance::fade_up(".testimonial", 250.0, 150.0),
];

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    use_entrance(ENTRANCE);

    view! {
        <Title text="Testimonials" />
        <div class="max-w-6xl mx-auto px-4">
            <PageHeader title="Testimonials" subtitle="What clients and colleagues say" />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-16">
                {TESTIMONIALS
                    .iter()
                    .enumerate()
                    .map(|(i, t)| {
                        view! {
                            <HoverCard id=format!("testimonial-{i}") class="testimonial flex flex-col">
                                <p class="text-slate-300 italic flex-grow mb-6">
                                    {format!("“{}”", t.content)}
                                </p>
                                <div class="text-white font-semibold">{t.name}</div>
                                <div class="text-sm text-slate-400">
                                    {format!("{} at {}", t.role, t.company)}
                                </div>
                            </HoverCard>
                        }
                    })
                    .collect_view()}
            </div>

            <Reveal id="testimonial-stats" class="grid grid-cols-1 sm:grid-cols-3 gap-6 mb-16">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="text-center">
                                <div class="text-4xl font-bold text-pink-400">{*value}</div>
                                <div class="text-slate-400">{*label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </Reveal>

            <Reveal id="testimonial-cta" class="mb-20 text-center">
                <h3 class="text-2xl font-semibold text-white mb-4">"Ready to Work Together?"</h3>
                <A
                    href="/contact"
                    attr:class="inline-block px-8 py-3 rounded-lg bg-gradient-to-r from-blue-500 to-purple-600 text-white font-semibold"
                >
                    "Contact Me"
                </A>
            </Reveal>
        </div>
        <Footer />
    }
}
