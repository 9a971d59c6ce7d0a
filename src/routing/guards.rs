use crate::models::user::{Role, User};
use crate::routing::navigator::LOGIN_PATH;
use crate::storage::{Storage, REDIRECT_AFTER_LOGIN_KEY};

/// What a route demands before it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Signed in with this exact role.
    Role(Role),
    /// Never renders: forwards to the session's role home (the `/` route).
    RoleRedirect,
}

/// Guard verdict for one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Allow,
    Redirect(String),
}

/// Access rules for the application's route table. `/` forwards by role;
/// unknown paths are public (the shell renders its not-found view there).
pub fn access_for_path(path: &str) -> RouteAccess {
    let path = path.split('?').next().unwrap_or(path);
    if path == "/" {
        return RouteAccess::RoleRedirect;
    }
    if path == "/hr" || path.starts_with("/hr/") {
        return RouteAccess::Role(Role::Hr);
    }
    if path == "/applicant" || path.starts_with("/applicant/") {
        return RouteAccess::Role(Role::Applicant);
    }
    RouteAccess::Public
}

/// The guard state machine: `Unauthenticated`, `Authenticated(hr)`,
/// `Authenticated(applicant)` against the route's requirement. Re-evaluated
/// on every navigation; there is no terminal state.
pub fn evaluate(access: RouteAccess, user: Option<&User>) -> Guard {
    match access {
        RouteAccess::Public => Guard::Allow,
        RouteAccess::Authenticated => match user {
            None => Guard::Redirect(LOGIN_PATH.to_string()),
            Some(_) => Guard::Allow,
        },
        RouteAccess::RoleRedirect => match user {
            None => Guard::Redirect(LOGIN_PATH.to_string()),
            Some(user) => Guard::Redirect(user.role.home_path().to_string()),
        },
        RouteAccess::Role(required) => match user {
            None => Guard::Redirect(LOGIN_PATH.to_string()),
            Some(user) if user.role == required => Guard::Allow,
            // Wrong role lands on the other role's home, not on /login.
            Some(user) => Guard::Redirect(user.role.home_path().to_string()),
        },
    }
}

/// Evaluates a navigation attempt and, when an unauthenticated user is sent
/// to `/login`, saves the attempted deep link for after login.
pub fn guard_navigation(storage: &dyn Storage, user: Option<&User>, attempted: &str) -> Guard {
    let verdict = evaluate(access_for_path(attempted), user);
    if user.is_none() && verdict == Guard::Redirect(LOGIN_PATH.to_string()) && attempted != LOGIN_PATH {
        storage.set(REDIRECT_AFTER_LOGIN_KEY, attempted);
    }
    verdict
}

/// Where to land after a successful login or registration: the saved deep
/// link if one exists and still fits the role, else the role home. The key
/// is consumed either way.
pub fn resolve_post_login(storage: &dyn Storage, role: Role) -> String {
    let saved = storage.get(REDIRECT_AFTER_LOGIN_KEY);
    storage.remove(REDIRECT_AFTER_LOGIN_KEY);
    match saved {
        Some(path) if is_role_appropriate(&path, role) => path,
        _ => role.home_path().to_string(),
    }
}

fn is_role_appropriate(path: &str, role: Role) -> bool {
    match access_for_path(path) {
        RouteAccess::Role(required) => required == role,
        _ => true,
    }
}
