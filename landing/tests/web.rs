//! Browser tests. Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use arivamudham_landing::scroll::{current_scroll_offset, scroll_to_section, section_scroll_top};
use arivamudham_landing::sections::{CONFIRMATION_DESCRIPTION, CONFIRMATION_TITLE, current_year};
use arivamudham_landing::{App, LandingError, SiteConfig};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Yield to the event loop so effects and renders settle.
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn fresh_container() -> HtmlElement {
    let container: HtmlElement = document().create_element("div").unwrap().unchecked_into();
    document().body().unwrap().append_child(&container).unwrap();
    container
}

fn by_test_id<T: JsCast>(root: &HtmlElement, id: &str) -> T {
    root.query_selector(&format!("[data-testid='{id}']"))
        .unwrap()
        .unwrap_or_else(|| panic!("missing [data-testid='{id}']"))
        .unchecked_into()
}

fn count_test_id(root: &HtmlElement, id: &str) -> u32 {
    root.query_selector_all(&format!("[data-testid='{id}']"))
        .unwrap()
        .length()
}

#[wasm_bindgen_test]
fn scroll_top_accounts_for_navbar() {
    let target: HtmlElement = document().create_element("div").unwrap().unchecked_into();
    target.set_id("scroll-probe");
    target
        .set_attribute("style", "position: absolute; top: 500px; height: 10px;")
        .unwrap();
    document().body().unwrap().append_child(&target).unwrap();

    assert_eq!(section_scroll_top("scroll-probe", 80.0), Ok(420.0));
    assert!(scroll_to_section("scroll-probe", 80.0));

    target.remove();
}

#[wasm_bindgen_test]
fn unknown_section_is_a_no_op() {
    let before = current_scroll_offset();

    assert_eq!(
        section_scroll_top("does-not-exist", 80.0),
        Err(LandingError::SectionNotFound("does-not-exist".into()))
    );
    assert!(!scroll_to_section("does-not-exist", 80.0));
    assert_eq!(current_scroll_offset(), before);
}

#[wasm_bindgen_test]
async fn mobile_menu_closes_after_navigation() {
    let container = fresh_container();
    let _handle = leptos::mount::mount_to(container.clone(), || {
        view! { <App config=SiteConfig::default() /> }
    });
    next_tick().await;

    assert_eq!(count_test_id(&container, "mobile-menu"), 0);
    by_test_id::<HtmlElement>(&container, "mobile-menu-toggle").click();
    next_tick().await;
    assert_eq!(count_test_id(&container, "mobile-menu"), 1);

    by_test_id::<HtmlElement>(&container, "mobile-nav-services").click();
    next_tick().await;
    assert_eq!(count_test_id(&container, "mobile-menu"), 0);

    container.remove();
}

#[wasm_bindgen_test]
async fn submitting_contact_form_shows_one_toast() {
    let container = fresh_container();
    let _handle = leptos::mount::mount_to(container.clone(), || {
        view! { <App config=SiteConfig::default() /> }
    });
    next_tick().await;

    let href_before = web_sys::window().unwrap().location().href().unwrap();

    for (id, value) in [
        ("input-name", "Amutha K"),
        ("input-email", "someone@example.com"),
        ("input-phone", "+91 90000 00000"),
    ] {
        by_test_id::<HtmlInputElement>(&container, id).set_value(value);
    }

    let form: HtmlFormElement = by_test_id(&container, "contact-form");
    form.request_submit().unwrap();
    next_tick().await;

    assert_eq!(count_test_id(&container, "toast"), 1);
    let toast: HtmlElement = by_test_id(&container, "toast");
    let text = toast.text_content().unwrap_or_default();
    assert!(text.contains(CONFIRMATION_TITLE));
    assert!(text.contains(CONFIRMATION_DESCRIPTION));

    // a second submit replaces the toast instead of stacking
    form.request_submit().unwrap();
    next_tick().await;
    assert_eq!(count_test_id(&container, "toast"), 1);

    let href_after = web_sys::window().unwrap().location().href().unwrap();
    assert_eq!(href_before, href_after);

    container.remove();
}

#[wasm_bindgen_test]
async fn empty_required_fields_block_submission() {
    let container = fresh_container();
    let _handle = leptos::mount::mount_to(container.clone(), || {
        view! { <App config=SiteConfig::default() /> }
    });
    next_tick().await;

    let form: HtmlFormElement = by_test_id(&container, "contact-form");
    assert!(!form.check_validity());
    form.request_submit().unwrap();
    next_tick().await;

    assert_eq!(count_test_id(&container, "toast"), 0);
    container.remove();
}

#[wasm_bindgen_test]
async fn footer_shows_year_captured_at_mount() {
    let container = fresh_container();
    let _handle = leptos::mount::mount_to(container.clone(), || {
        view! { <App config=SiteConfig::default() /> }
    });
    next_tick().await;

    let year: HtmlElement = by_test_id(&container, "footer-year");
    assert_eq!(year.text_content(), Some(current_year().to_string()));

    container.remove();
}
