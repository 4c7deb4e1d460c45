use crate::render::render;

use gl_core::{Identity, Role};
use gl_router::navigate;

#[test]
fn test_render_landing_lists_roles() {
    let lines = render(&navigate(None, "/"), None);

    assert_eq!(lines[0], "== Green Ledger ==");
    assert!(lines.iter().any(|line| line.contains("producer|buyer|regulator")));
}

#[test]
fn test_render_dashboard_shows_identity() {
    let identity = Identity::new("b@corp.io", "Bea", Role::Buyer);

    let lines = render(&navigate(Some(&identity), "/buyer"), Some(&identity));

    assert_eq!(lines[0], "== Buyer Dashboard ==");
    assert!(lines.contains(&"Signed in as Bea <b@corp.io> [Buyer]".to_string()));
}

#[test]
fn test_render_not_found_names_path() {
    let identity = Identity::new("b@corp.io", "Bea", Role::Buyer);

    let lines = render(&navigate(Some(&identity), "/settings"), Some(&identity));

    assert_eq!(lines[0], "== Page Not Found ==");
    assert!(lines.contains(&"No page at /settings".to_string()));
}
