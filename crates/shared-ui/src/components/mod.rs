// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;

// Primitive wrappers
pub mod label;
pub mod navbar;
pub mod switch;
pub mod toast;

// Layout chrome
pub mod footer;
pub mod profile_header;
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use footer::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use profile_header::*;
pub use sidebar::*;
pub use switch::*;
pub use toast::*;
