// Landing page sections

mod addons;
mod b2b;
mod faq;
mod footer;
mod hero;
mod how_it_works;
mod nav;
mod plans;

pub use addons::Addons;
pub use b2b::B2b;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use plans::Plans;
