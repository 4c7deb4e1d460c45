use gl_core::{Identity, Role};
use gl_router::{Navigation, View};

/// Text for the view the router settled on
pub fn render(navigation: &Navigation, identity: Option<&Identity>) -> Vec<String> {
    let view = navigation.view;
    let mut lines = vec![format!("== {} ==", view.title()), view.description().to_string()];

    match (view, identity) {
        (View::Landing, _) => {
            let roles = Role::ALL.map(|role| role.as_str()).join("|");
            lines.push(format!("Sign in:  login <email> <password> <{roles}>"));
            lines.push(format!(
                "Sign up:  register <name> <email> <password> <confirm> <{roles}>"
            ));
        }
        (View::Dashboard(role), Some(identity)) => {
            lines.push(format!(
                "Signed in as {} <{}> [{}]",
                identity.name(),
                identity.email(),
                role.display_name()
            ));
        }
        (View::Dashboard(_), None) => {}
        (View::NotFound, _) => {
            lines.push(format!("No page at {}", navigation.path));
        }
    }

    lines
}
