use gl_core::Role;

/// A requested location, parsed from a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Dashboard(Role),
    Unknown(String),
}

impl Route {
    /// Parse a path. Query and fragment are ignored, trailing slashes are
    /// ignored and segments match case-insensitively.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        if path.is_empty() {
            return Self::Root;
        }

        let segment = path.strip_prefix('/').unwrap_or(path);

        Role::ALL
            .into_iter()
            .find(|role| segment.eq_ignore_ascii_case(role.as_str()))
            .map(Self::Dashboard)
            .unwrap_or_else(|| Self::Unknown(path.to_string()))
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Root => crate::LANDING_PATH,
            Self::Dashboard(role) => role.home_path(),
            Self::Unknown(path) => path,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
