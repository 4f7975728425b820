use leptos::prelude::*;
use leptos_meta::Title;

use super::footer::Footer;
use super::header::PageHeader;
use super::hooks::{use_entrance, HoverCard, Reveal};
use crate::animation::Entrance;

struct SkillGroup {
    title: &'static str,
    skills: &'static [(&'static str, u8)],
}

const GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend Development",
        skills: &[("HTML/CSS", 90), ("JavaScript", 85), ("React", 80), ("Tailwind CSS", 85)],
    },
    SkillGroup {
        title: "Backend Development",
        skills: &[("Node.js", 90), ("Python", 85), ("REST APIs", 90), ("PHP", 75)],
    },
    SkillGroup {
        title: "Database Management",
        skills: &[("PostgreSQL", 85), ("MySQL", 85), ("MongoDB", 75), ("Redis", 70)],
    },
    SkillGroup {
        title: "Network Engineering",
        skills: &[("Mikrotik", 90), ("Routing & Switching", 85), ("VPN", 80), ("Firewalls", 80)],
    },
    SkillGroup {
        title: "Server Administration",
        skills: &[("Linux", 90), ("Nginx", 85), ("Docker", 80), ("Monitoring", 80)],
    },
    SkillGroup {
        title: "Tools & Technologies",
        skills: &[("Git", 90), ("CI/CD", 75), ("Bash", 85), ("Ansible", 70)],
    },
];

const LEARNING: &[&str] = &[
    "Advanced React Patterns",
    "Cloud Infrastructure (AWS)",
    "DevOps Practices",
    "Machine Learning Basics",
    "Advanced Database Optimization",
];

const GOALS: &[&str] = &[
    "Full Stack Architecture Mastery",
    "Cloud Certification (AWS/Azure)",
    "Advanced Network Security",
    "Team Leadership Skills",
    "Open Source Contributions",
];

const ENTRANCE: &[Entrance] = &[
    Entrance::fade_up(".page-header", 0.0, 0.0),
    Entrance::pop_in(".skill-group", 200.0, 120.0),
];

#[component]
pub fn SkillsPage() -> impl IntoView {
    use_entrance(ENTRANCE);

    view! {
        <Title text="Skills" />
        <div class="max-w-6xl mx-auto px-4">
            <PageHeader title="Skills & Expertise" subtitle="Proficiency Levels" />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                {GROUPS
                    .iter()
                    .enumerate()
                    .map(|(i, group)| {
                        view! {
                            <HoverCard id=format!("skill-group-{i}") class="skill-group">
                                <h3 class="text-lg font-semibold text-white mb-4">{group.title}</h3>
                                <div class="space-y-3">
                                    {group
                                        .skills
                                        .iter()
                                        .map(|(name, level)| {
                                            view! {
                                                <div>
                                                    <div class="flex justify-between text-sm text-slate-300 mb-1">
                                                        <span>{*name}</span>
                                                        <span>{format!("{level}%")}</span>
                                                    </div>
                                                    <div class="h-2 rounded-full bg-slate-800">
                                                        <div
                                                            class="h-2 rounded-full bg-gradient-to-r from-blue-500 to-purple-600"
                                                            style=format!("width: {level}%")
                                                        ></div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </HoverCard>
                        }
                    })
                    .collect_view()}
            </div>

            <Reveal id="skills-learning" class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-20">
                <div class="rounded-xl border border-slate-700/50 p-6">
                    <h3 class="text-xl font-semibold text-white mb-4">"Currently Learning"</h3>
                    <ul class="space-y-2 text-slate-300">
                        {LEARNING.iter().map(|s| view! { <li>"• " {*s}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="rounded-xl border border-slate-700/50 p-6">
                    <h3 class="text-xl font-semibold text-white mb-4">"Professional Goals"</h3>
                    <ul class="space-y-2 text-slate-300">
                        {GOALS.iter().map(|s| view! { <li>"• " {*s}</li> }).collect_view()}
                    </ul>
                </div>
            </Reveal>
        </div>
        <Footer />
    }
}
