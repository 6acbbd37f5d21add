use leptos::prelude::*;

use crate::content::{NavSection, SERVICES, Service};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=NavSection::Services.id() class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title" data-testid="services-title">"Our Success Path"</h2>
                    <p class="section-description" data-testid="services-subtitle">
                        "Comprehensive training and mentorship designed to transform your career and financial future"
                    </p>
                </div>
                <div class="services-grid">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service=service /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
        <div class="card service-card">
            <div class="service-icon" aria-hidden="true">{service.icon}</div>
            <h3 class="service-title" data-testid=format!("{}-title", service.test_id)>
                {service.title}
            </h3>
            <p class="service-description" data-testid=format!("{}-description", service.test_id)>
                {service.description}
            </p>
        </div>
    }
}
