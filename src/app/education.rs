use leptos::prelude::*;
use leptos_meta::Title;

use super::footer::Footer;
use super::header::PageHeader;
use super::hooks::{use_entrance, HoverCard, Reveal};
use crate::animation::Entrance;

struct Degree {
    title: &'static str,
    school: &'static str,
    period: &'static str,
    detail: &'static str,
}

const DEGREES: &[Degree] = &[
    Degree {
        title: "B.Sc. in CSE",
        school: "Varendra University Rajshahi",
        period: "2022 - Present",
        detail: "Computer Science and Engineering",
    },
    Degree {
        title: "HSC",
        school: "Rajshahi Govt. School & College",
        period: "2019 - 2021",
        detail: "Science Group - Rajshahi Board",
    },
    Degree {
        title: "SSC",
        school: "Rajshahi University School & College",
        period: "2017 - 2019",
        detail: "Science Group - Rajshahi Board, GPA 5.00",
    },
    Degree {
        title: "JSC",
        school: "Rajshahi University School & College",
        period: "2014 - 2016",
        detail: "Rajshahi Board, GPA 5.00",
    },
];

const SUBJECTS: &[&str] = &[
    "Data Structures and Algorithms",
    "Database Management Systems",
    "Computer Networks",
    "Software Engineering",
    "Web Development",
    "System Administration",
];

const ACHIEVEMENTS: &[&str] = &[
    "Consistent academic excellence",
    "Perfect GPA in SSC and JSC",
    "Strong foundation in STEM subjects",
    "Active participation in tech projects",
    "Practical application of theoretical knowledge",
];

const ENTRANCE: &[Entrance] = &[
    Entrance::fade_up(".page-header", 0.0, 0.0),
    Entrance::slide_in(".degree", -60.0, 200.0),
];

#[component]
pub fn EducationPage() -> impl IntoView {
    use_entrance(ENTRANCE);

    view! {
        <Title text="Education" />
        <div class="max-w-5xl mx-auto px-4">
            <PageHeader title="Education" subtitle="My academic journey and achievements" />
            <div class="relative border-l-2 border-slate-700 pl-8 space-y-8 mb-16">
                {DEGREES
                    .iter()
                    .map(|d| {
                        view! {
                            <div class="degree relative">
                                <span class="absolute -left-[41px] top-2 w-4 h-4 rounded-full bg-gradient-to-br from-blue-500 to-purple-600"></span>
                                <h3 class="text-xl font-semibold text-white">{d.title}</h3>
                                <div class="text-blue-400">{d.school}</div>
                                <div class="text-sm text-slate-400">{d.period}</div>
                                <p class="text-slate-300 mt-1">{d.detail}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <Reveal id="education-highlights" class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-20">
                <HoverCard id="key-subjects">
                    <h3 class="text-xl font-semibold text-white mb-4">"Key Subjects"</h3>
                    <ul class="space-y-2 text-slate-300">
                        {SUBJECTS.iter().map(|s| view! { <li>"• " {*s}</li> }).collect_view()}
                    </ul>
                </HoverCard>
                <HoverCard id="achievements">
                    <h3 class="text-xl font-semibold text-white mb-4">"Achievements"</h3>
                    <ul class="space-y-2 text-slate-300">
                        {ACHIEVEMENTS.iter().map(|s| view! { <li>"• " {*s}</li> }).collect_view()}
                    </ul>
                </HoverCard>
            </Reveal>
        </div>
        <Footer />
    }
}
