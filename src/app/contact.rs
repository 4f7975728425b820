use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use super::footer::Footer;
use super::header::PageHeader;
use super::hooks::use_entrance;
use crate::animation::Entrance;
use crate::contact::{Choice, ContactForm, Field, FormStatus, BUDGETS, PROJECT_TYPES, TIMELINES};

#[cfg(feature = "hydrate")]
use crate::contact::{ContactFailure, ContactSubmission, CONFIRMATION_MS, GENERIC_FAILURE_MESSAGE};

const ENTRANCE: &[Entrance] = &[
    Entrance::fade_up(".page-header", 0.0, 0.0),
    Entrance::slide_in(".contact-info", -60.0, 250.0),
    Entrance::slide_in(".contact-form", 60.0, 350.0),
    Entrance::pop_in(".floating-element", 500.0, 200.0),
];

const CONTACT_INFO: &[(&str, &str)] = &[
    ("📧 Email", "saif.arabi@example.com"),
    ("📍 Location", "Rajshahi, Bangladesh"),
    ("⏱️ Response Time", "Within 24 hours"),
];

/// Sends a validated submission to the relay endpoint.
#[cfg(feature = "hydrate")]
async fn post_contact(submission: &ContactSubmission) -> Result<(), String> {
    use gloo_net::http::Request;

    let request = Request::post("/api/contact").json(submission).map_err(|e| {
        log::error!("could not encode contact submission: {e}");
        GENERIC_FAILURE_MESSAGE.to_string()
    })?;
    let response = request.send().await.map_err(|e| {
        log::error!("contact request failed: {e}");
        GENERIC_FAILURE_MESSAGE.to_string()
    })?;
    if response.ok() {
        return Ok(());
    }
    let message = response
        .json::<ContactFailure>()
        .await
        .map(|f| f.error)
        .unwrap_or_else(|_| GENERIC_FAILURE_MESSAGE.to_string());
    Err(message)
}

#[component]
pub fn ContactPage() -> impl IntoView {
    use_entrance(ENTRANCE);
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = post_contact(&submission).await;
            let sent = result.is_ok();
            form.update(|f| f.finish_submit(result));
            if sent {
                set_timeout(
                    move || form.update(|f| f.reset()),
                    std::time::Duration::from_millis(CONFIRMATION_MS),
                );
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    };

    view! {
        <Title text="Contact" />
        <div class="relative max-w-6xl mx-auto px-4">
            <div class="floating-element floating-1 absolute -top-4 left-4 w-20 h-20 rounded-full bg-blue-500/20 blur-2xl"></div>
            <div class="floating-element floating-2 absolute top-40 right-0 w-28 h-28 rounded-full bg-purple-500/20 blur-2xl"></div>
            <PageHeader
                title="Let's Work Together"
                subtitle="Tell me about your project and I'll get back to you shortly"
            />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 mb-20">
                <div class="contact-info space-y-4">
                    {CONTACT_INFO
                        .iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="rounded-xl border border-slate-700/50 bg-slate-900/60 p-5">
                                    <div class="text-sm text-slate-400">{*label}</div>
                                    <div class="text-white font-medium">{*value}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="contact-form lg:col-span-2 rounded-xl border border-slate-700/50 bg-slate-900/60 p-6">
                    <Show
                        when=move || form.with(|f| f.status != FormStatus::Submitted)
                        fallback=|| {
                            view! {
                                <div class="text-center py-16">
                                    <div class="text-5xl mb-4">"✅"</div>
                                    <h3 class="text-2xl font-semibold text-white mb-2">"Message Sent!"</h3>
                                    <p class="text-slate-400">
                                        "Thank you for reaching out. I'll get back to you soon."
                                    </p>
                                </div>
                            }
                        }
                    >
                        <form class="space-y-5" on:submit=on_submit>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                                <TextField form field=Field::Name label="Full Name *" placeholder="Your full name" />
                                <TextField
                                    form
                                    field=Field::Email
                                    label="Email Address *"
                                    placeholder="you@example.com"
                                    kind="email"
                                />
                                <TextField form field=Field::Phone label="Phone" placeholder="Optional" kind="tel" />
                                <TextField form field=Field::Company label="Company" placeholder="Optional" />
                            </div>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                                <SelectField
                                    form
                                    field=Field::ProjectType
                                    label="Project Type *"
                                    placeholder="Select project type"
                                    choices=PROJECT_TYPES
                                />
                                <SelectField
                                    form
                                    field=Field::Budget
                                    label="Project Budget"
                                    placeholder="Select budget range"
                                    choices=BUDGETS
                                />
                            </div>
                            <SelectField
                                form
                                field=Field::Timeline
                                label="Project Timeline"
                                placeholder="When do you need this completed?"
                                choices=TIMELINES
                            />
                            <label class="block">
                                <span class="block text-sm text-slate-300 mb-1">"Message *"</span>
                                <textarea
                                    rows="6"
                                    placeholder="Tell me about your project..."
                                    class="w-full px-4 py-2 rounded-md border border-slate-700 bg-slate-800 text-slate-100 focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    prop:value=move || form.with(|f| f.data.message.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.update(Field::Message, event_target_value(&ev)))
                                    }
                                ></textarea>
                            </label>
                            {move || {
                                form.with(|f| f.error.clone())
                                    .map(|err| {
                                        view! {
                                            <div class="rounded-md border border-red-500/40 bg-red-500/10 px-4 py-2 text-red-300 text-sm">
                                                "⚠ " {err}
                                            </div>
                                        }
                                    })
                            }}
                            <button
                                type="submit"
                                class="w-full py-3 rounded-lg bg-gradient-to-r from-blue-500 to-purple-600 text-white font-semibold disabled:opacity-60"
                                disabled=move || form.with(|f| f.is_pending())
                            >
                                {move || {
                                    if form.with(|f| f.is_pending()) { "Sending..." } else { "Send Message" }
                                }}
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
        <Footer />
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-slate-300 mb-1">{label}</span>
            <input
                type=kind
                placeholder=placeholder
                class="w-full px-4 py-2 rounded-md border border-slate-700 bg-slate-800 text-slate-100 focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || form.with(|f| f.data.field(field).to_string())
                on:input=move |ev| form.update(|f| f.update(field, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn SelectField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    choices: &'static [Choice],
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-slate-300 mb-1">{label}</span>
            <select
                class="w-full px-4 py-2 rounded-md border border-slate-700 bg-slate-800 text-slate-100 focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || form.with(|f| f.data.field(field).to_string())
                on:change=move |ev| form.update(|f| f.update(field, event_target_value(&ev)))
            >
                <option value="" disabled=true>
                    {placeholder}
                </option>
                {choices
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
