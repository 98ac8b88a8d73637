// Page sections
// Alex Chen portfolio (c)2024

/// Version string shown in the console banner (single source of truth)
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

mod about;
mod contact;
mod dev_console;
mod footer;
mod header;
mod hero;
mod icons;
mod nav;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use dev_console::DevConsole;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
pub use skills::Skills;
