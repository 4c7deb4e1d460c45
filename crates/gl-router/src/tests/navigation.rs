use crate::{View, navigate};

use gl_core::{Identity, Role};

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_no_identity_when_navigate_to_dashboard_then_lands_on_landing() {
    let navigation = navigate(None, "/producer");

    assert_eq!(navigation.view, View::Landing);
    assert_eq!(navigation.path, "/");
    assert!(navigation.redirected);
}

#[test]
fn given_buyer_when_navigate_to_root_then_lands_on_buyer_dashboard() {
    let buyer = Identity::from_email("b@corp.io", Role::Buyer);

    let navigation = navigate(Some(&buyer), "/");

    assert_eq!(navigation.view, View::Dashboard(Role::Buyer));
    assert_eq!(navigation.path, "/buyer");
    assert!(navigation.redirected);
}

#[test]
fn given_producer_when_navigate_to_own_dashboard_then_no_redirect() {
    let producer = Identity::from_email("p@farm.io", Role::Producer);

    let navigation = navigate(Some(&producer), "/producer");

    assert_eq!(navigation.view, View::Dashboard(Role::Producer));
    assert!(!navigation.redirected);
}

#[test]
fn given_buyer_when_navigate_with_odd_spelling_then_path_is_canonical() {
    let buyer = Identity::from_email("b@corp.io", Role::Buyer);

    for path in ["/BUYER", "buyer", "/buyer/", "/Buyer?tab=orders"] {
        let navigation = navigate(Some(&buyer), path);

        assert_that!(navigation.path.as_str(), eq("/buyer"));
        assert_that!(navigation.view, eq(View::Dashboard(Role::Buyer)));
        assert_that!(navigation.redirected, eq(false));
    }
}

#[test]
fn given_no_identity_when_navigate_to_root_with_query_then_path_is_root() {
    let navigation = navigate(None, "/?from=email");

    assert_that!(navigation.path.as_str(), eq("/"));
    assert_that!(navigation.view, eq(View::Landing));
}

#[test]
fn test_view_titles() {
    assert_eq!(View::Dashboard(Role::Producer).title(), "Producer Dashboard");
    assert_eq!(View::Landing.title(), "Green Ledger");
    assert_eq!(View::NotFound.title(), "Page Not Found");
}
