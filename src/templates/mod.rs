//! Small shared renderers used by profile header templates.

mod show_link;
mod show_logo;
mod show_people;

pub use show_link::show_link;
pub use show_logo::show_logo;
pub use show_people::show_people;
