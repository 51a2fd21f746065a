// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret acquisition via argument, SECDECODE_PASSWORD, or TTY prompt.

use secrecy::SecretString;

use crate::error::CliError;

/// The environment variable name for providing a password or value to encrypt.
pub const PASSWORD_ENV_VAR: &str = "SECDECODE_PASSWORD";

/// Resolve the secret to encrypt.
///
/// Priority:
/// 1. The command-line argument
/// 2. `SECDECODE_PASSWORD` environment variable (for scripts and CI)
/// 3. Interactive TTY prompt via `rpassword`
pub fn read_secret(arg: Option<String>, label: &str) -> Result<SecretString, CliError> {
    if let Some(value) = arg.filter(|v| !v.is_empty()) {
        return Ok(SecretString::from(value));
    }

    if let Ok(value) = std::env::var(PASSWORD_ENV_VAR)
        && !value.is_empty()
    {
        return Ok(SecretString::from(value));
    }

    if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        eprint!("{label}: ");
        let value = rpassword::read_password()
            .map_err(|e| CliError::Password(format!("failed to read {label}: {e}")))?;
        if value.is_empty() {
            return Err(CliError::Password(format!("empty {label} not allowed")));
        }
        return Ok(SecretString::from(value));
    }

    Err(CliError::Password(format!(
        "No {label} provided. Pass it as an argument, set {PASSWORD_ENV_VAR}, or run interactively."
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    #[test]
    #[serial]
    fn argument_wins_over_env() {
        // SAFETY: serialized with the other env-mutating tests.
        unsafe { std::env::set_var(PASSWORD_ENV_VAR, "from-env") };
        let secret = read_secret(Some("from-arg".into()), "password").unwrap();
        unsafe { std::env::remove_var(PASSWORD_ENV_VAR) };
        assert_eq!(secret.expose_secret(), "from-arg");
    }

    #[test]
    #[serial]
    fn env_is_used_without_argument() {
        unsafe { std::env::set_var(PASSWORD_ENV_VAR, "from-env") };
        let secret = read_secret(None, "password").unwrap();
        unsafe { std::env::remove_var(PASSWORD_ENV_VAR) };
        assert_eq!(secret.expose_secret(), "from-env");
    }

    #[test]
    #[serial]
    fn empty_argument_falls_back_to_env() {
        unsafe { std::env::set_var(PASSWORD_ENV_VAR, "fallback") };
        let secret = read_secret(Some(String::new()), "value").unwrap();
        unsafe { std::env::remove_var(PASSWORD_ENV_VAR) };
        assert_eq!(secret.expose_secret(), "fallback");
    }
}
