//! Command line arguments

use clap::Parser;
use redkey_core::{Credentials, KeygenConfig, OutputConfig, PemEncoding, RedkeyError, RedkeyResult};
use std::ffi::OsString;
use std::path::PathBuf;

/// Derive a deterministic Ed25519 keypair from a password and salt.
#[derive(Parser, Debug)]
#[command(name = "redkey")]
#[command(about = "Derive a deterministic Ed25519 keypair from a password and salt")]
#[command(version)]
pub struct Cli {
    /// Password for Argon2id hashing
    #[arg(short = 'p', value_name = "PASSWORD", allow_hyphen_values = true)]
    pub password: Option<String>,

    /// Salt for Argon2id hashing; must be at least 8 bytes (Argon2 minimum)
    #[arg(short = 's', value_name = "SALT", allow_hyphen_values = true)]
    pub salt: Option<String>,

    /// Write keys to hex files `public` and `private`
    #[arg(short = 'w')]
    pub write: bool,

    /// Write keys to PEM files `public.pem` and `private.pem` (also `-wp`)
    #[arg(long = "wp")]
    pub write_pem: bool,

    /// Directory for written key files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// PEM body format: raw key bytes or standard PKCS#8/SPKI
    #[arg(long, value_name = "FORMAT", default_value_t = PemEncoding::Raw)]
    pub pem_encoding: PemEncoding,

    /// Sign and verify a test message with the derived keypair
    #[arg(long)]
    pub verify: bool,

    /// Print keys as JSON instead of text lines
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration. Missing or empty credentials are a
    /// usage error.
    pub fn to_config(&self) -> RedkeyResult<KeygenConfig> {
        let password = self
            .password
            .as_deref()
            .ok_or(RedkeyError::MissingCredential("password"))?;
        let salt = self
            .salt
            .as_deref()
            .ok_or(RedkeyError::MissingCredential("salt"))?;

        let credentials = Credentials::new(password.as_bytes(), salt.as_bytes())?;

        let output = OutputConfig {
            write_hex: self.write,
            write_pem: self.write_pem,
            pem_encoding: self.pem_encoding,
            dir: self.out_dir.clone(),
        };

        Ok(KeygenConfig::new(credentials)
            .with_output(output)
            .with_verify(self.verify))
    }
}

/// Flags whose value is the next token
const VALUE_FLAGS: &[&str] = &["-p", "-s", "--out-dir", "--pem-encoding"];

/// Rewrite the single-dash long flag `-wp` to `--wp` so clap doesn't read it
/// as `-w -p`. The token after a value-taking flag is passed through as is.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut is_value = false;

    for arg in args.into_iter().map(Into::into) {
        if is_value {
            is_value = false;
            normalized.push(arg);
            continue;
        }

        is_value = VALUE_FLAGS.iter().any(|flag| arg == *flag);
        if arg == "-wp" {
            normalized.push(OsString::from("--wp"));
        } else {
            normalized.push(arg);
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(normalize_args(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_full() {
        let cli = parse(&["redkey", "-p", "pw", "-s", "saltsalt", "-w", "-wp"]);
        assert_eq!(cli.password.as_deref(), Some("pw"));
        assert_eq!(cli.salt.as_deref(), Some("saltsalt"));
        assert!(cli.write);
        assert!(cli.write_pem);
        assert_eq!(cli.pem_encoding, PemEncoding::Raw);

        let config = cli.to_config().unwrap();
        assert!(config.output.write_hex);
        assert!(config.output.write_pem);
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert!(!config.verify);
    }

    #[test]
    fn test_wp_alone_does_not_set_w() {
        let cli = parse(&["redkey", "-wp", "-p", "pw", "-s", "saltsalt"]);
        assert!(cli.write_pem);
        assert!(!cli.write);
        assert_eq!(cli.password.as_deref(), Some("pw"));
    }

    #[test]
    fn test_hyphenated_values_pass_through() {
        let cli = parse(&["redkey", "-p", "-secret", "-s", "-saltsalt"]);
        assert_eq!(cli.password.as_deref(), Some("-secret"));
        assert_eq!(cli.salt.as_deref(), Some("-saltsalt"));

        let cli = parse(&["redkey", "-p", "-wp", "-s", "saltsalt", "-wp"]);
        assert_eq!(cli.password.as_deref(), Some("-wp"));
        assert!(cli.write_pem);
        assert!(!cli.write);
    }

    #[test]
    fn test_normalize_skips_flag_values() {
        let args = normalize_args(["redkey", "-s", "-wp", "-wp"]);
        assert_eq!(args, vec!["redkey", "-s", "-wp", "--wp"]);
    }

    #[test]
    fn test_salt_help_mentions_minimum() {
        use clap::CommandFactory;

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("at least 8 bytes"));
    }

    #[test]
    fn test_missing_credentials() {
        let cli = parse(&["redkey", "-s", "saltsalt"]);
        assert!(matches!(
            cli.to_config(),
            Err(RedkeyError::MissingCredential("password"))
        ));

        let cli = parse(&["redkey", "-p", "pw"]);
        assert!(matches!(
            cli.to_config(),
            Err(RedkeyError::MissingCredential("salt"))
        ));

        let cli = parse(&["redkey", "-p", "", "-s", "saltsalt"]);
        assert!(matches!(
            cli.to_config(),
            Err(RedkeyError::MissingCredential("password"))
        ));
    }

    #[test]
    fn test_pem_encoding_flag() {
        let cli = parse(&[
            "redkey", "-p", "pw", "-s", "saltsalt", "--pem-encoding", "pkcs8", "--out-dir", "keys",
        ]);
        let config = cli.to_config().unwrap();
        assert_eq!(config.output.pem_encoding, PemEncoding::Pkcs8);
        assert_eq!(config.output.dir, PathBuf::from("keys"));

        assert!(Cli::try_parse_from(["redkey", "--pem-encoding", "der"]).is_err());
    }
}
