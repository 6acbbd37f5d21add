use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::content::{self, NavSection};
use crate::toast::use_toast;

pub const CONFIRMATION_TITLE: &str = "Message sent!";
pub const CONFIRMATION_DESCRIPTION: &str = "Thank you for your message. We will contact you soon.";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=NavSection::Contact.id() class="section section-contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title" data-testid="contact-title">"Feel Free to Get in Touch"</h2>
                    <p class="section-description" data-testid="contact-subtitle">
                        "Ready to transform your career? Let's discuss your path to financial freedom"
                    </p>
                </div>
                <div class="contact-grid">
                    <ContactInfo />
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="contact-info">
            <h3 class="contact-heading" data-testid="contact-info-title">"Contact Information"</h3>

            <div class="contact-item">
                <div class="contact-icon" aria-hidden="true">"☎"</div>
                <div>
                    <div class="contact-label">"Phone:"</div>
                    <a href=content::PHONE_HREF class="contact-link" data-testid="contact-phone">
                        {content::PHONE_DISPLAY}
                    </a>
                </div>
            </div>

            <div class="contact-item">
                <div class="contact-icon" aria-hidden="true">"✉"</div>
                <div>
                    <div class="contact-label">"Email:"</div>
                    <a href=content::email_href() class="contact-link" data-testid="contact-email">
                        {content::EMAIL}
                    </a>
                </div>
            </div>

            <div class="contact-item">
                <div class="contact-icon" aria-hidden="true">"⌖"</div>
                <div>
                    <div class="contact-label">"Address:"</div>
                    <div class="contact-link" data-testid="contact-address">
                        {content::ADDRESS_LINES[0]}
                        <br />
                        {content::ADDRESS_LINES[1]}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Native validation only; submitted values never leave the page.
#[component]
fn ContactForm() -> impl IntoView {
    let toasts = use_toast();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        tracing::info!("contact form submitted");
        toasts.toast(CONFIRMATION_TITLE, CONFIRMATION_DESCRIPTION);
    };

    view! {
        <div class="card contact-card">
            <h3 class="contact-heading" data-testid="contact-form-title">"Send us a Message"</h3>
            <form class="contact-form" data-testid="contact-form" on:submit=on_submit>
                <div class="field">
                    <label for="name">"Full Name"</label>
                    <input id="name" name="name" required=true data-testid="input-name" />
                </div>
                <div class="field">
                    <label for="email">"Email Address"</label>
                    <input id="email" name="email" type="email" required=true data-testid="input-email" />
                </div>
                <div class="field">
                    <label for="phone">"Phone Number"</label>
                    <input id="phone" name="phone" type="tel" required=true data-testid="input-phone" />
                </div>
                <div class="field">
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        placeholder="Tell us about your career goals..."
                        data-testid="input-message"
                    ></textarea>
                </div>
                <button type="submit" class="btn btn-success btn-block" data-testid="button-submit">
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
