use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::footer::Footer;
use super::header::PageHeader;
use super::hooks::{use_entrance, HoverCard, Reveal};
use crate::animation::Entrance;

struct Service {
    title: &'static str,
    description: &'static str,
    included: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        title: "Web Design & Development",
        description: "Responsive, fast websites built with modern tooling.",
        included: &["Responsive layouts", "SEO basics", "Performance tuning"],
    },
    Service {
        title: "Backend Development",
        description: "APIs and services that scale with your product.",
        included: &["REST API design", "Database modelling", "Authentication"],
    },
    Service {
        title: "Network Engineering",
        description: "Reliable, secure networks for offices and campuses.",
        included: &["Network design", "Router configuration", "VPN setup"],
    },
    Service {
        title: "Server Management",
        description: "Linux servers that stay patched, monitored and backed up.",
        included: &["Provisioning", "Monitoring", "Automated backups"],
    },
    Service {
        title: "Full Stack Solutions",
        description: "One engineer from the database to the browser.",
        included: &["Architecture", "Implementation", "Deployment"],
    },
    Service {
        title: "Security Consulting",
        description: "Audits and hardening for servers and networks.",
        included: &["Vulnerability review", "Firewall policy", "Hardening"],
    },
];

const PROCESS: &[(&str, &str)] = &[
    ("Discovery", "Understanding your needs and project requirements"),
    ("Planning", "Creating detailed project roadmap and timeline"),
    ("Development", "Building your solution with regular updates"),
    ("Delivery", "Testing, deployment, and ongoing support"),
];

const WHY_CHOOSE: &[(&str, &str)] = &[
    ("Fast Delivery", "Quick turnaround without compromising quality"),
    ("Quality Assured", "Thoroughly tested and production-ready"),
    ("Ongoing Support", "Continued maintenance and updates"),
];

const ENTRANCE: &[Entrance] = &[
    Entrance::fade_up(".page-header", 0.0, 0.0),
    Entrance::pop_in(".service-card", 200.0, 100.0),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    use_entrance(ENTRANCE);

    view! {
        <Title text="Services" />
        <div class="max-w-6xl mx-auto px-4">
            <PageHeader
                title="Services"
                subtitle="Professional solutions for your web, backend and infrastructure needs"
            />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                {SERVICES
                    .iter()
                    .enumerate()
                    .map(|(i, service)| {
                        view! {
                            <HoverCard id=format!("service-{i}") class="service-card">
                                <h3 class="text-lg font-semibold text-white mb-2">{service.title}</h3>
                                <p class="text-slate-400 mb-4">{service.description}</p>
                                <h4 class="text-sm font-medium text-slate-200 mb-2">"What's Included:"</h4>
                                <ul class="space-y-1 text-sm text-slate-300">
                                    {service
                                        .included
                                        .iter()
                                        .map(|s| view! { <li>"✓ " {*s}</li> })
                                        .collect_view()}
                                </ul>
                            </HoverCard>
                        }
                    })
                    .collect_view()}
            </div>

            <Reveal id="services-process" class="mb-16">
                <h3 class="text-2xl font-semibold text-white text-center mb-8">"My Work Process"</h3>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    {PROCESS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, description))| {
                            view! {
                                <div class="text-center">
                                    <div class="mx-auto mb-3 w-12 h-12 rounded-full bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center text-white font-bold">
                                        {i + 1}
                                    </div>
                                    <h4 class="font-semibold text-white">{*title}</h4>
                                    <p class="text-sm text-slate-400">{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>

            <Reveal id="services-why" class="mb-16">
                <h3 class="text-2xl font-semibold text-white text-center mb-8">"Why Choose Me?"</h3>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {WHY_CHOOSE
                        .iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="rounded-xl border border-slate-700/50 bg-slate-900/60 p-5 text-center">
                                    <h4 class="font-semibold text-white mb-1">{*title}</h4>
                                    <p class="text-sm text-slate-400">{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>

            <Reveal id="services-cta" class="mb-20 text-center">
                <h3 class="text-2xl font-semibold text-white mb-4">"Ready to Start Your Project?"</h3>
                <A
                    href="/contact"
                    attr:class="inline-block px-8 py-3 rounded-lg bg-gradient-to-r from-blue-500 to-purple-600 text-white font-semibold"
                >
                    "Get in Touch"
                </A>
            </Reveal>
        </div>
        <Footer />
    }
}
