// Landing page sections

mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod services;
mod testimonials;

pub use about::About;
pub use contact::{CONFIRMATION_DESCRIPTION, CONFIRMATION_TITLE, Contact};
pub use footer::{Footer, copyright_line, current_year};
pub use hero::Hero;
pub use nav::{Nav, NavState, use_section_nav};
pub use services::Services;
pub use testimonials::Testimonials;
