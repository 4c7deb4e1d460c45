use crate::{LANDING_PATH, Resolution, Route, View, resolve};

use gl_core::Identity;

use log::{debug, warn};

const MAX_REDIRECTS: usize = 4;

/// Where the presentation layer ends up after following redirects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    pub view: View,
    pub redirected: bool,
}

/// Resolve `path` and follow redirects until a view renders. The returned
/// path is the canonical form of the rendered route.
pub fn navigate(identity: Option<&Identity>, path: &str) -> Navigation {
    let mut current = path.to_string();
    let mut redirected = false;

    for _ in 0..MAX_REDIRECTS {
        match resolve(identity, &current) {
            Resolution::Render(view) => {
                return Navigation {
                    path: Route::parse(&current).path().to_string(),
                    view,
                    redirected,
                };
            }
            Resolution::Redirect { to } => {
                debug!("Redirect {current} -> {to}");
                current = to;
                redirected = true;
            }
        }
    }

    // Unreachable while every redirect target renders directly
    warn!("Redirect limit reached resolving {path}");
    Navigation {
        path: LANDING_PATH.to_string(),
        view: View::Landing,
        redirected: true,
    }
}
