mod app_sidebar;
mod navbars;
mod profile;

pub use app_sidebar::AppSidebar;
pub use navbars::{sign_out, AdminNavbar, AuthNavbar, UserNavbar};
pub use profile::{fetch_profile, profile_or_default, ProfileBanner, ProfileDetails, ProfileSource};
