use crate::command::{ShellCommand, ShellLine, split_args};
use crate::error::{DashboardError, Result as DashboardErrorResult};
use crate::render::render;
use crate::toast::Toast;

use gl_auth::{SessionStore, SignInRequest, SignUpRequest};
use gl_core::Identity;
use gl_router::{LANDING_PATH, navigate};

use clap::Parser;
use clap::error::ErrorKind;
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const PROMPT: &str = "gl> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented presentation layer over the session and the router
pub struct Shell {
    session: SessionStore,
    location: String,
}

impl Shell {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            location: LANDING_PATH.to_string(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Path of the view currently shown
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Read commands until EOF or `quit`, then clear the session
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> DashboardErrorResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let initial = self.show(&self.location.clone()).await;
        write_lines(&mut output, &initial).await?;
        write_prompt(&mut output).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await.map_err(|e| DashboardError::Io {
            message: "Failed to read input".to_string(),
            source: e,
        })? {
            let (out, flow) = self.execute(&line).await;
            write_lines(&mut output, &out).await?;
            if flow == Flow::Quit {
                break;
            }
            write_prompt(&mut output).await?;
        }

        self.session.sign_out().await;
        Ok(())
    }

    /// Run one command line and return the text to display
    pub async fn execute(&mut self, line: &str) -> (Vec<String>, Flow) {
        let args = match split_args(line) {
            Ok(args) if args.is_empty() => return (Vec::new(), Flow::Continue),
            Ok(args) => args,
            Err(e) => return (vec![format!("error: {e}")], Flow::Continue),
        };

        let command = match ShellLine::try_parse_from(&args) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                let text = match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.render().to_string(),
                    _ => e.to_string(),
                };
                return (text.lines().map(str::to_string).collect(), Flow::Continue);
            }
        };

        debug!("Shell command: {}", args[0]);

        let out = match command {
            ShellCommand::Login {
                email,
                password,
                role,
            } => self.login(&email, &password, &role).await,
            ShellCommand::Register {
                name,
                email,
                password,
                confirm_password,
                role,
            } => {
                self.register(&name, &email, &password, &confirm_password, &role)
                    .await
            }
            ShellCommand::Logout => self.logout().await,
            ShellCommand::Open { path } => self.show(&path).await,
            ShellCommand::Whoami => self.whoami().await,
            ShellCommand::Quit => return (vec!["Goodbye.".to_string()], Flow::Quit),
        };

        (out, Flow::Continue)
    }

    async fn login(&mut self, email: &str, password: &str, role: &str) -> Vec<String> {
        if let Some(out) = self.reject_when_signed_in().await {
            return out;
        }

        let request = match SignInRequest::from_form(email, password, role) {
            Ok(request) => request,
            Err(e) => return vec![Toast::from_error(&e).to_string()],
        };

        let mut out = vec!["Signing in...".to_string()];
        match self.session.sign_in(&request).await {
            Ok(_) => {
                let toast = Toast::success("Login Successful", "Welcome back to Green Ledger!");
                out.push(toast.to_string());
                out.extend(self.show(&self.location.clone()).await);
            }
            Err(e) => out.push(Toast::from_error(&e).to_string()),
        }
        out
    }

    async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
        role: &str,
    ) -> Vec<String> {
        if let Some(out) = self.reject_when_signed_in().await {
            return out;
        }

        let request = match SignUpRequest::from_form(name, email, password, confirm_password, role)
        {
            Ok(request) => request,
            Err(e) => return vec![Toast::from_error(&e).to_string()],
        };

        let mut out = vec!["Creating account...".to_string()];
        match self.session.sign_up(&request).await {
            Ok(_) => {
                let toast = Toast::success("Registration Successful", "Welcome to Green Ledger!");
                out.push(toast.to_string());
                out.extend(self.show(&self.location.clone()).await);
            }
            Err(e) => out.push(Toast::from_error(&e).to_string()),
        }
        out
    }

    async fn logout(&mut self) -> Vec<String> {
        self.session.sign_out().await;

        let mut out = vec!["Signed out.".to_string()];
        out.extend(self.show(&self.location.clone()).await);
        out
    }

    async fn whoami(&self) -> Vec<String> {
        let busy = if self.session.is_busy() { " (busy)" } else { "" };

        match self.session.current_identity().await {
            Some(identity) => vec![format!(
                "{} <{}> role={} id={} since {}{busy}",
                identity.name(),
                identity.email(),
                identity.role(),
                identity.id(),
                identity.signed_in_at().format("%Y-%m-%d %H:%M:%S UTC"),
            )],
            None => vec![format!("Not signed in{busy}")],
        }
    }

    /// Forms live on the landing view only
    async fn reject_when_signed_in(&self) -> Option<Vec<String>> {
        let identity = self.session.current_identity().await?;
        Some(vec![format!(
            "Already signed in as {}. Use logout first.",
            identity.email()
        )])
    }

    /// Resolve `path` for the current identity and move there
    async fn show(&mut self, path: &str) -> Vec<String> {
        let identity: Option<Identity> = self.session.current_identity().await;
        let navigation = navigate(identity.as_ref(), path);

        if navigation.redirected {
            debug!("Navigation {path} settled on {}", navigation.path);
        }
        self.location = navigation.path.clone();

        render(&navigation, identity.as_ref())
    }
}

async fn write_lines<W: AsyncWrite + Unpin>(
    output: &mut W,
    lines: &[String],
) -> DashboardErrorResult<()> {
    for line in lines {
        output
            .write_all(format!("{line}\n").as_bytes())
            .await
            .map_err(|e| DashboardError::Io {
                message: "Failed to write output".to_string(),
                source: e,
            })?;
    }
    output.flush().await.map_err(|e| DashboardError::Io {
        message: "Failed to flush output".to_string(),
        source: e,
    })
}

async fn write_prompt<W: AsyncWrite + Unpin>(output: &mut W) -> DashboardErrorResult<()> {
    output
        .write_all(PROMPT.as_bytes())
        .await
        .map_err(|e| DashboardError::Io {
            message: "Failed to write prompt".to_string(),
            source: e,
        })?;
    output.flush().await.map_err(|e| DashboardError::Io {
        message: "Failed to flush output".to_string(),
        source: e,
    })
}
