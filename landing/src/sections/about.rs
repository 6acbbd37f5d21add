use leptos::prelude::*;

use crate::content::{NavSection, STATS, Stat};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=NavSection::About.id() class="section section-muted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title" data-testid="about-title">
                        "Financial Growth with Arivamudham"
                    </h2>
                    <p class="section-description" data-testid="about-subtitle">
                        "Empowering young entrepreneurs to achieve financial freedom through proven LIC career development"
                    </p>
                </div>

                <div class="about-grid">
                    <div class="about-copy">
                        <h3 class="about-heading" data-testid="about-mission-title">"Our Mission"</h3>
                        <p data-testid="about-description-1">
                            "I am Amutha K, a Development Officer at LIC India and the proud founder of "
                            "Arivamudham - AM's Team. With over 15 years of experience in the industry, "
                            "I have had the privilege of training 117 individuals, creating 23+ success "
                            "stories, and earning 30+ awards."
                        </p>
                        <p data-testid="about-description-2">
                            "At Arivamudham - AM's Team, we are dedicated to your success. Our team provides "
                            "proven training, mentoring, and support to ensure you reach your goals. Together, "
                            "we have helped countless individuals earn ₹1 lakh/month and beyond."
                        </p>
                    </div>

                    <div class="stats-grid">
                        {STATS.iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(stat: &'static Stat) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-value" data-testid=stat.test_id>{stat.value}</div>
            <div class="stat-label" data-testid=format!("{}-label", stat.test_id)>{stat.label}</div>
        </div>
    }
}
