use leptos::prelude::*;

use crate::content::{NavSection, TESTIMONIALS, Testimonial};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id=NavSection::Testimonials.id() class="section section-muted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title" data-testid="testimonials-title">
                        "What Our Students Are Saying"
                    </h2>
                    <p class="section-description" data-testid="testimonials-subtitle">
                        "Real stories of transformation and success from our community of entrepreneurs"
                    </p>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    let id = testimonial.test_id;
    view! {
        <div class="card testimonial-card">
            <div class="testimonial-mark" aria-hidden="true">"\u{201C}"</div>
            <blockquote class="testimonial-quote" data-testid=format!("{id}-text")>
                {format!("\u{201C}{}\u{201D}", testimonial.quote)}
            </blockquote>
            <div class="testimonial-author">
                <div class="avatar">{testimonial.initials()}</div>
                <div>
                    <div class="testimonial-name" data-testid=format!("{id}-name")>
                        {testimonial.name}
                    </div>
                    <div class="testimonial-role" data-testid=format!("{id}-role")>
                        {testimonial.role}
                    </div>
                </div>
            </div>
        </div>
    }
}
