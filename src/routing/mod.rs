pub mod guards;
pub mod navigator;

pub use guards::{access_for_path, evaluate, guard_navigation, resolve_post_login, Guard, RouteAccess};
pub use navigator::{LocationNavigator, Navigator};
