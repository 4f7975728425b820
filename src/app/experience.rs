use leptos::prelude::*;
use leptos_meta::Title;

use super::footer::Footer;
use super::header::PageHeader;
use super::hooks::{use_entrance, HoverCard, Reveal};
use crate::animation::Entrance;

struct Role {
    title: &'static str,
    period: &'static str,
    achievements: &'static [&'static str],
    stack: &'static [&'static str],
}

const ROLES: &[Role] = &[
    Role {
        title: "Senior Backend Engineer",
        period: "2021 - Present (3+ years)",
        achievements: &[
            "Designed and implemented RESTful APIs serving 10,000+ daily requests",
            "Architected microservices infrastructure using modern technologies",
            "Optimized database queries resulting in 40% performance improvement",
            "Led code reviews and established development best practices",
            "Mentored 5+ junior developers in backend technologies",
        ],
        stack: &["Node.js", "Python", "PostgreSQL", "Redis", "Docker"],
    },
    Role {
        title: "Senior Network Engineer",
        period: "2021 - 2023 (2 years)",
        achievements: &[
            "Designed network architecture for 500+ user enterprise environment",
            "Implemented security protocols reducing network vulnerabilities by 60%",
            "Optimized network performance achieving 99.9% uptime",
            "Managed Mikrotik routers and switches configuration",
            "Troubleshot complex network issues and provided 24/7 support",
        ],
        stack: &["Mikrotik", "Cisco", "VLAN", "VPN", "Firewall"],
    },
    Role {
        title: "Senior Server Engineer",
        period: "2021 - 2023 (2 years)",
        achievements: &[
            "Managed 50+ Linux servers with 99.8% uptime",
            "Implemented automated backup solutions saving 20 hours/week",
            "Set up monitoring systems for proactive issue detection",
            "Optimized server performance reducing response time by 35%",
            "Implemented security hardening protocols",
        ],
        stack: &["Linux", "Nginx", "Bash", "Prometheus", "Ansible"],
    },
];

const ENTRANCE: &[Entrance] = &[
    Entrance::fade_up(".page-header", 0.0, 0.0),
    Entrance::fade_up(".role-card", 250.0, 200.0),
];

#[component]
pub fn ExperiencePage() -> impl IntoView {
    use_entrance(ENTRANCE);

    view! {
        <Title text="Experience" />
        <div class="max-w-5xl mx-auto px-4">
            <PageHeader
                title="Professional Experience"
                subtitle="Building systems, networks and the servers underneath them"
            />
            <div class="space-y-8 mb-16">
                {ROLES
                    .iter()
                    .enumerate()
                    .map(|(i, role)| {
                        view! {
                            <HoverCard id=format!("role-{i}") class="role-card">
                                <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-4">
                                    <h3 class="text-2xl font-semibold text-white">{role.title}</h3>
                                    <span class="text-sm text-blue-400">{role.period}</span>
                                </div>
                                <h4 class="font-medium text-slate-200 mb-2">"Key Achievements:"</h4>
                                <ul class="space-y-1 text-slate-300 mb-4">
                                    {role
                                        .achievements
                                        .iter()
                                        .map(|a| view! { <li>"• " {*a}</li> })
                                        .collect_view()}
                                </ul>
                                <h4 class="font-medium text-slate-200 mb-2">"Technologies Used:"</h4>
                                <div class="flex flex-wrap gap-2">
                                    {role
                                        .stack
                                        .iter()
                                        .map(|t| {
                                            view! {
                                                <span class="px-3 py-1 rounded-full bg-slate-800 text-xs text-slate-300">
                                                    {*t}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </HoverCard>
                        }
                    })
                    .collect_view()}
            </div>

            <Reveal id="experience-summary" class="mb-20 text-center">
                <h3 class="text-2xl font-semibold text-white mb-4">"Professional Skills Summary"</h3>
                <p class="text-slate-300 max-w-3xl mx-auto">
                    "3+ years of experience in building scalable backend systems, designing resilient networks and keeping production servers healthy."
                </p>
            </Reveal>
        </div>
        <Footer />
    }
}
