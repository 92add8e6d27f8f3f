use crate::api::{Role, User};

/// Which view the `/dashboard` path shows for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardRoute {
    Login,
    Employee,
    Hr,
}

impl DashboardRoute {
    pub fn resolve(user: Option<&User>) -> Self {
        match user.map(|user| user.role) {
            None => DashboardRoute::Login,
            Some(Role::Hr) => DashboardRoute::Hr,
            Some(Role::Employee) => DashboardRoute::Employee,
        }
    }
}
