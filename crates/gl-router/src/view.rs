use gl_core::Role;

/// What the presentation layer renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Sign-in / sign-up forms
    Landing,
    Dashboard(Role),
    NotFound,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Green Ledger",
            Self::Dashboard(Role::Producer) => "Producer Dashboard",
            Self::Dashboard(Role::Buyer) => "Buyer Dashboard",
            Self::Dashboard(Role::Regulator) => "Regulator Dashboard",
            Self::NotFound => "Page Not Found",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Landing => "Carbon Credit Platform",
            Self::Dashboard(Role::Producer) => {
                "Record hydrogen production and generate verified carbon credits"
            }
            Self::Dashboard(Role::Buyer) => {
                "Browse and purchase carbon credits from verified producers"
            }
            Self::Dashboard(Role::Regulator) => {
                "Monitor transactions and retired credits across the platform"
            }
            Self::NotFound => "The page you requested does not exist",
        }
    }
}
