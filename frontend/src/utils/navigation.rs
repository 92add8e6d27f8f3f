use super::storage;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Full-page navigation, same as the browser following a link.
pub fn redirect(path: &str) {
    let Ok(window) = storage::window() else {
        return;
    };
    let location = window.location();
    if let Ok(current) = location.pathname() {
        if current == path {
            return;
        }
    }
    if let Err(err) = location.set_href(path) {
        log::warn!("Failed to navigate to {}: {:?}", path, err);
    }
}
