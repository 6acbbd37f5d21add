use leptos::prelude::*;

use super::use_section_nav;
use crate::content::NavSection;

const HERO_BACKGROUND: &str = "background-image: linear-gradient(135deg, hsl(213, 94%, 68%), hsl(213, 84%, 58%)), \
     url('https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&h=1080'); \
     background-size: cover; background-position: center;";

#[component]
pub fn Hero() -> impl IntoView {
    let go = use_section_nav();

    view! {
        <section id=NavSection::Home.id() class="hero">
            <div class="hero-backdrop" style=HERO_BACKGROUND></div>
            <div class="container hero-content">
                <h1 class="hero-title" data-testid="hero-title">
                    "Turn Your 20s into Crores! Earn ₹1 Lakh/Month!"
                </h1>
                <p class="hero-subtitle" data-testid="hero-subtitle">
                    "Build a high-income LIC career with low investment. "
                    "Proven system, full mentorship, unlimited earnings!"
                </p>
                <button
                    class="btn btn-success btn-lg"
                    data-testid="hero-cta"
                    on:click=move |_| go(NavSection::Contact)
                >
                    "Book Your Free Session!"
                </button>
            </div>
        </section>
    }
}
