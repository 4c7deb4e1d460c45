use clap::{Parser, Subcommand};

/// One line typed into the dashboard shell
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Sign in: login <email> <password> <producer|buyer|regulator>
    Login {
        #[arg(default_value = "")]
        email: String,
        #[arg(default_value = "")]
        password: String,
        #[arg(default_value = "")]
        role: String,
    },

    /// Create an account: register <name> <email> <password> <confirm> <role>
    Register {
        #[arg(default_value = "")]
        name: String,
        #[arg(default_value = "")]
        email: String,
        #[arg(default_value = "")]
        password: String,
        #[arg(default_value = "")]
        confirm_password: String,
        #[arg(default_value = "")]
        role: String,
    },

    /// Sign out of the current session
    Logout,

    /// Navigate to a path, e.g. open /buyer
    Open { path: String },

    /// Show the current identity
    Whoami,

    /// Leave the dashboard
    #[command(alias = "exit")]
    Quit,
}

/// Split a line into arguments. Double quotes group words and may be empty.
pub fn split_args(line: &str) -> Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err("unterminated quote".to_string());
    }
    if in_token {
        args.push(current);
    }

    Ok(args)
}
