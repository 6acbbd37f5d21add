use leptos::prelude::*;

/// Calendar year from the browser clock.
pub fn current_year() -> i32 {
    // JS years fit comfortably in i32
    js_sys::Date::new_0().get_full_year() as i32
}

pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("© {year} {owner}. All rights reserved.")
}

/// `year` is captured once by `App`; the footer never re-reads the clock.
#[component]
pub fn Footer(year: i32, #[prop(into)] owner: String) -> impl IntoView {
    let label = copyright_line(year, &owner);
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright" aria-label=label data-testid="footer-copyright">
                    "© "
                    <span data-testid="footer-year">{year}</span>
                    {format!(" {owner}. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
