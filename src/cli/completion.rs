//! Shell completion script generation

use crate::error::{DockerConfigError, Result};
use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Map a shell name to a supported completion generator
///
/// Only bash and zsh are supported; anything else is rejected rather
/// than silently printing a script nobody asked for.
pub fn parse_shell(name: &str) -> Result<Shell> {
    match name {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        other => Err(DockerConfigError::UnsupportedShell(other.to_string())),
    }
}

/// Print a completion script for the invoked binary name to stdout
pub fn print_completion(shell_name: &str, command: &mut Command, bin_name: &str) -> Result<()> {
    let shell = parse_shell(shell_name)?;
    generate(shell, command, bin_name.to_string(), &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell_bash() {
        assert!(matches!(parse_shell("bash"), Ok(Shell::Bash)));
    }

    #[test]
    fn test_parse_shell_zsh() {
        assert!(matches!(parse_shell("zsh"), Ok(Shell::Zsh)));
    }

    #[test]
    fn test_parse_shell_unsupported() {
        let err = parse_shell("fish").unwrap_err();
        assert!(matches!(err, DockerConfigError::UnsupportedShell(_)));
        assert!(err.to_string().contains("unsupported shell"));
    }
}
