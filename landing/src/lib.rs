//! # arivamudham-landing
//!
//! Client-side rendered landing page for Arivamudham - AM's Team, built with
//! [Leptos](https://leptos.dev/) 0.8 and bundled by trunk.
//!
//! The page is one view: navbar, hero, about, services, testimonials,
//! contact form and footer. View state is local to the page:
//!
//! - [`NavState`] - mobile menu flag and scrolled-navbar flag
//! - [`ToastContext`] - the confirmation toast shown on form submit
//! - the copyright year, read once when [`App`] mounts
//!
//! Nothing is sent anywhere; the contact form only acknowledges locally.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod scroll;
pub mod sections;
pub mod styles;
pub mod toast;

use leptos::prelude::*;

pub use config::SiteConfig;
pub use error::{ConfigError, LandingError};
pub use sections::NavState;
pub use toast::ToastContext;

use sections::*;
use toast::Toaster;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let year = current_year();
    let owner = config.owner.clone();

    provide_context(ToastContext::new(config.toast_duration()));
    provide_context(RwSignal::new(NavState::default()));
    provide_context(config);

    view! {
        <style>{styles::LANDING_CSS}</style>
        <Nav />
        <main>
            <Hero />
            <About />
            <Services />
            <Testimonials />
            <Contact />
        </main>
        <Footer year=year owner=owner />
        <Toaster />
    }
}
