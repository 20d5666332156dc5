pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::ffi::OsString;

/// Arguments of the `module-detect` binary. Every token is data: there are
/// no flags, so `--help` or `-v` are classified like any other word.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "module-detect")]
#[command(about = "Report whether a module name is a known data library")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct DispatchArgs {
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

#[cfg(feature = "cli")]
impl DispatchArgs {
    /// Parses a full argument list (program name first). clap treats a
    /// leading `--` as an escape and drops it, so whenever the parsed tokens
    /// differ from the raw ones the raw tokens win.
    pub fn from_args<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let tokens: Vec<OsString> = itr.into_iter().map(Into::into).collect();
        let raw: Vec<OsString> = tokens.iter().skip(1).cloned().collect();

        match Self::try_parse_from(tokens) {
            Ok(parsed) if parsed.args == raw => parsed,
            Ok(_) | Err(_) => {
                tracing::debug!("clap rewrote the invocation, using raw arguments");
                Self { args: raw }
            }
        }
    }

    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_args_keep_every_token() {
        let parsed = DispatchArgs::from_args(["module-detect", "pandas", "--extra", "-x"]);
        assert_eq!(parsed.args, vec!["pandas", "--extra", "-x"]);
    }

    #[test]
    fn test_dispatch_args_accept_empty_invocation() {
        let parsed = DispatchArgs::try_parse_from(["module-detect"]).unwrap();
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_dispatch_args_keep_leading_double_dash() {
        let parsed = DispatchArgs::from_args(["module-detect", "--", "pandas"]);
        assert_eq!(parsed.args, vec!["--", "pandas"]);
    }

    #[test]
    fn test_dispatch_args_keep_flag_like_first_token() {
        let parsed = DispatchArgs::from_args(["module-detect", "--help"]);
        assert_eq!(parsed.args, vec!["--help"]);
    }

    #[test]
    fn test_dispatch_args_accept_empty_string() {
        let parsed = DispatchArgs::from_args(["module-detect", ""]);
        assert_eq!(parsed.args, vec![""]);
    }
}
