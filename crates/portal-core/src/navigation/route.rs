use std::fmt;

use crate::account::AccountId;

/// Entry points of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Posts,
    Dashboard,
    Users,
    UserProfile(AccountId),
    About,
}

impl Route {
    /// Whether entering this route requires an admitted identity.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Posts | Route::Dashboard)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Posts => "/posts".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Users => "/users".to_string(),
            Route::UserProfile(id) => format!("/users/{}", id),
            Route::About => "/about".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
