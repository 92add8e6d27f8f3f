#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ResignationRequest, ResignationStatus, Role, User};
    use crate::state::auth::{AuthContext, AuthState};
    use leptos::*;

    pub fn hr_user() -> User {
        User {
            username: "hana".into(),
            role: Role::Hr,
        }
    }

    pub fn employee_user() -> User {
        User {
            username: "erin".into(),
            role: Role::Employee,
        }
    }

    pub fn provide_auth(user: Option<User>) -> AuthContext {
        let state = user.map(AuthState::signed_in).unwrap_or_default();
        let (auth, set_auth) = create_signal(state);
        provide_context::<AuthContext>((auth, set_auth));
        (auth, set_auth)
    }

    pub fn resignation(id: &str, status: ResignationStatus) -> ResignationRequest {
        ResignationRequest {
            id: id.into(),
            employee_id: format!("emp-{}", id),
            lwd: "2025-01-01".into(),
            status,
        }
    }
}
