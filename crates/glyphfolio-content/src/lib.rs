//! Static content and ASCII art for the glyphfolio page.

mod banner;
mod profile;

pub use banner::{LETTER_HEIGHT, LETTER_WIDTH, banner_width, build_banner};
pub use profile::{FormField, PROFILE, Profile, Project, Skill, Testimonial};
