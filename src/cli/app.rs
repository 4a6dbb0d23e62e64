//! Main CLI application

use crate::auth::{load_password_file, DockerConfig};
use crate::cli::completion;
use crate::error::{Result, ValidationError};
use crate::ui;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Fallback binary name when argv[0] is unusable
const DEFAULT_BIN_NAME: &str = "docker-config";

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Binary name as invoked, used for usage and completion scripts
    bin_name: String,
}

/// A fully resolved registry credential
#[derive(Debug)]
struct Credentials {
    server: String,
    username: String,
    password: String,
}

impl App {
    /// Create a new app named after the invoked binary
    pub fn new() -> Self {
        let bin_name = binary_name();
        let command = build_command(&bin_name);

        App { command, bin_name }
    }

    /// Run the application with command line arguments
    pub fn run(mut self) -> Result<()> {
        let matches = self.command.clone().get_matches();

        if matches.get_flag("version") {
            println!("{}", crate::VERSION);
            return Ok(());
        }

        // Completion short-circuits, either form; no credential flags needed
        if let Some(("completion", sub_matches)) = matches.subcommand() {
            let shell = sub_matches
                .get_one::<String>("shell")
                .expect("shell is a required argument")
                .clone();
            return completion::print_completion(&shell, &mut self.command, &self.bin_name);
        }

        if let Some(shell) = matches.get_one::<String>("completion").cloned() {
            return completion::print_completion(&shell, &mut self.command, &self.bin_name);
        }

        let credentials = resolve_credentials(&matches)?;
        let document = DockerConfig::new(
            &credentials.server,
            &credentials.username,
            &credentials.password,
        );

        println!("{}", document.render(matches.get_flag("base64"))?);
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command
fn build_command(bin_name: &str) -> Command {
    Command::new(bin_name.to_string())
        .about("Generate a docker registry auth config")
        .arg(
            Arg::new("username")
                .short('u')
                .long("username")
                .value_name("USERNAME")
                .help("Username for docker registry"),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .value_name("PASSWORD")
                .help("Password for docker registry"),
        )
        .arg(
            Arg::new("password-file")
                .short('f')
                .long("password-file")
                .value_name("FILE")
                .help("Read the password from a file (trailing newline stripped)"),
        )
        .arg(
            Arg::new("server")
                .short('s')
                .long("server")
                .value_name("SERVER")
                .help("Docker registry server"),
        )
        .arg(
            Arg::new("base64")
                .short('b')
                .long("base64")
                .help("Base64-encode the final output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completion")
                .long("completion")
                .value_name("SHELL")
                .help("Print a completion script for bash or zsh and exit"),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print the current version and exit")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("completion")
                .about("Print a completion script")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("Shell to generate for (bash or zsh)")
                        .required(true),
                ),
        )
}

/// Resolve and validate the credential triple from parsed arguments
///
/// Checks run in a fixed order so the first missing field is the one
/// reported: username, then server, then the password sources.
fn resolve_credentials(matches: &ArgMatches) -> Result<Credentials> {
    let username = matches
        .get_one::<String>("username")
        .map(String::as_str)
        .unwrap_or("");
    if username.is_empty() {
        return Err(ValidationError::MissingUsername.into());
    }

    let server = matches
        .get_one::<String>("server")
        .map(String::as_str)
        .unwrap_or("");
    if server.is_empty() {
        return Err(ValidationError::MissingServer.into());
    }

    let password_flag = matches.get_one::<String>("password");
    let password = match matches.get_one::<String>("password-file") {
        Some(file) => {
            if password_flag.map_or(false, |p| !p.is_empty()) {
                ui::print_warning(
                    "both --password and --password-file supplied; using the file",
                );
            }
            load_password_file(&PathBuf::from(file))?
        }
        None => password_flag.cloned().unwrap_or_default(),
    };

    if password.is_empty() {
        return Err(ValidationError::MissingPassword.into());
    }

    Ok(Credentials {
        server: server.to_string(),
        username: username.to_string(),
        password,
    })
}

/// Base name of argv[0], as invoked
fn binary_name() -> String {
    std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| {
            p.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| DEFAULT_BIN_NAME.to_string())
}

/// Run the CLI application with process arguments
pub fn run() -> Result<()> {
    App::new().run()
}

/// Usage line for error reporting
pub fn usage() -> String {
    let mut command = build_command(&binary_name());
    command.render_usage().to_string()
}
