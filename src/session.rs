//! Back-office gate. This is a UI convenience flag, not a security boundary:
//! the backend does its own authorization.

use tracing::{info, warn};

pub const LOGIN_PATH: &str = "/login";

/// Whether the current session has signed in. Passed explicitly to the guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub authenticated: bool,
}

/// Username/password pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl AuthContext {
    /// Sign in when the submitted pair matches the configured admin account
    pub fn login(&mut self, submitted: &Credentials, expected: &Credentials) -> bool {
        self.authenticated = submitted == expected;
        if self.authenticated {
            info!("Signed in as {}", submitted.username);
        } else {
            warn!("Rejected sign-in for {}", submitted.username);
        }
        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

/// Every screen of the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Listings,
    PropertyDetail { slug: String, id: String },
    Contact,
    Login,
    Dashboard,
    AddProperty,
    EditProperty { id: String },
    ManageImages { id: String },
    NotFound,
}

/// Outcome of the route guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["Property"] => Route::Listings,
            ["properties", slug, id] => Route::PropertyDetail {
                slug: slug.to_string(),
                id: id.to_string(),
            },
            ["contact-us"] => Route::Contact,
            ["login"] => Route::Login,
            ["dashboard"] => Route::Dashboard,
            ["add-property"] => Route::AddProperty,
            ["edit-property", id] => Route::EditProperty { id: id.to_string() },
            ["manage-images", id] => Route::ManageImages { id: id.to_string() },
            _ => Route::NotFound,
        }
    }

    /// Back-office screens need a signed-in session
    pub fn is_private(&self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::AddProperty | Route::EditProperty { .. } | Route::ManageImages { .. }
        )
    }
}

pub fn guard(route: &Route, auth: AuthContext) -> Access {
    if route.is_private() && !auth.authenticated {
        Access::Redirect(LOGIN_PATH)
    } else {
        Access::Allow
    }
}
