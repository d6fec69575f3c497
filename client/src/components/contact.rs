//! Contact section: quote request form plus contact details.
//!
//! The form is fully controlled: every input reads from and writes to one
//! `ContactForm` signal, keyed by the input's `name`. Submission state lives
//! in the same struct; see `state::contact` for the transitions.

use content::ContactField;
use content::site::{CONTACT_INFO, Glyph, PROMISES};
use leptos::prelude::*;

use crate::components::glyph::GlyphIcon;
use crate::state::contact::{ContactForm, SubmitStatus};
#[cfg(feature = "hydrate")]
use crate::state::toast::Toasts;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section contact" data-testid="contact-section">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title" data-testid="contact-title">"Ready to Get Started?"</h2>
                    <p class="section__lead">
                        "Tell me about your project and I'll get back to you with a free quote. "
                        "No job is too big or too small!"
                    </p>
                </header>

                <div class="contact__layout">
                    <ContactFormCard/>
                    <div class="contact__aside">
                        {CONTACT_INFO
                            .iter()
                            .enumerate()
                            .map(|(i, info)| {
                                view! {
                                    <div class="info-card" data-testid=format!("contact-info-{i}")>
                                        <span class="info-card__icon">
                                            <GlyphIcon glyph=info.glyph/>
                                        </span>
                                        <div>
                                            <p class="info-card__label">{info.label}</p>
                                            <p class="info-card__value">{info.value}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}

                        <div class="promise-card">
                            <h3 class="promise-card__title">"My Promise to You"</h3>
                            <ul class="promise-card__list">
                                {PROMISES
                                    .iter()
                                    .map(|promise| {
                                        view! {
                                            <li>
                                                <GlyphIcon glyph=Glyph::Check class="promise-card__check"/>
                                                <span>{*promise}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<Toasts>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::components::toaster::notify;
            use crate::net::api::HttpApi;
            use crate::state::contact::submit_form;

            submit_form(
                &HttpApi::from_build_env(),
                &form,
                |notice| notify(toasts, notice),
                gloo_timers::future::sleep,
            )
            .await;
        });
    };

    view! {
        <div class="form-card" data-testid="contact-form-card">
            <h3 class="form-card__title">
                <span class="form-card__title-icon">"\u{27A4}"</span>
                "Send Me a Message"
            </h3>
            <form class="contact-form" on:submit=on_submit>
                <FormField form=form field=ContactField::Name label="Your Name" placeholder="John Doe" input_type="text"/>
                <div class="contact-form__row">
                    <FormField
                        form=form
                        field=ContactField::Email
                        label="Email Address"
                        placeholder="john@example.com"
                        input_type="email"
                    />
                    <FormField
                        form=form
                        field=ContactField::Phone
                        label="Phone Number"
                        placeholder="(555) 123-4567"
                        input_type="tel"
                    />
                </div>
                <div class="contact-form__field">
                    <label for="message">"Project Details"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        required
                        placeholder="Tell me about your project - what needs fixing, remodeling, or improving?"
                        data-testid="contact-message-input"
                        prop:value=move || form.with(|f| f.value(ContactField::Message).to_owned())
                        on:input=move |ev| {
                            form.update(|f| {
                                f.edit(ContactField::Message.input_name(), event_target_value(&ev));
                            });
                        }
                    ></textarea>
                </div>

                <button
                    type="submit"
                    class="btn btn--primary btn--block"
                    data-testid="contact-submit-btn"
                    disabled=move || form.with(ContactForm::is_locked)
                >
                    {move || {
                        let status = form.with(|f| f.status);
                        let label = form.with(ContactForm::submit_label);
                        match status {
                            SubmitStatus::Idle => {
                                view! {
                                    <span class="btn__content">
                                        <span class="btn__icon">"\u{27A4}"</span>
                                        {label}
                                    </span>
                                }
                                    .into_any()
                            }
                            SubmitStatus::Submitting => {
                                view! {
                                    <span class="btn__content">
                                        <span class="spinner"></span>
                                        {label}
                                    </span>
                                }
                                    .into_any()
                            }
                            SubmitStatus::Submitted => {
                                view! {
                                    <span class="btn__content">
                                        <GlyphIcon glyph=Glyph::Check class="btn__icon"/>
                                        {label}
                                    </span>
                                }
                                    .into_any()
                            }
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

/// Labelled single-line input bound to one form field.
#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: ContactField,
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    let name = field.input_name();

    view! {
        <div class="contact-form__field">
            <label for=name>{label}</label>
            <input
                id=name
                name=name
                type=input_type
                required
                placeholder=placeholder
                data-testid=format!("contact-{name}-input")
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| {
                    form.update(|f| {
                        f.edit(name, event_target_value(&ev));
                    });
                }
            />
        </div>
    }
}
