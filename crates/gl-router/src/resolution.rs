use crate::{LANDING_PATH, Route, View};

use gl_core::Identity;

/// Outcome of guarding one requested path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(View),
    Redirect { to: String },
}

impl Resolution {
    fn redirect(to: &str) -> Self {
        Self::Redirect { to: to.to_string() }
    }
}

/// Decide what to show for `path` given the current identity.
///
/// Anonymous requests only ever reach the landing view. Authenticated
/// requests for another role's dashboard are sent to the identity's own
/// dashboard; unknown paths render the not-found view.
pub fn resolve(identity: Option<&Identity>, path: &str) -> Resolution {
    let route = Route::parse(path);

    let Some(identity) = identity else {
        return match route {
            Route::Root => Resolution::Render(View::Landing),
            Route::Dashboard(_) | Route::Unknown(_) => Resolution::redirect(LANDING_PATH),
        };
    };

    let role = identity.role();
    match route {
        Route::Root => Resolution::redirect(role.home_path()),
        Route::Dashboard(required) if required == role => {
            Resolution::Render(View::Dashboard(required))
        }
        Route::Dashboard(_) => Resolution::redirect(role.home_path()),
        Route::Unknown(_) => Resolution::Render(View::NotFound),
    }
}
