use crate::domain::model::{Classification, Keyword};
use crate::utils::error::Result;
use std::ffi::OsStr;
use std::io::Write;

/// Classifies an argument list (program name excluded). Only the first
/// argument is looked at; an argument that is not valid UTF-8 can never be a
/// keyword.
pub fn classify<S: AsRef<OsStr>>(args: &[S]) -> Classification {
    let Some(first) = args.first() else {
        return Classification::NoModule;
    };

    let candidate = first.as_ref().to_string_lossy();
    match first.as_ref().to_str().and_then(Keyword::from_exact) {
        Some(keyword) => Classification::Detected(keyword),
        None => Classification::Unrecognized(candidate.into_owned()),
    }
}

/// Classifies `args` and writes the matching message as a single line.
pub fn dispatch<S, W>(args: &[S], out: &mut W) -> Result<Classification>
where
    S: AsRef<OsStr>,
    W: Write,
{
    let classification = classify(args);
    tracing::debug!(?classification, extra_args = args.len().saturating_sub(1), "classified invocation");

    writeln!(out, "{}", classification.message())?;
    out.flush()?;
    Ok(classification)
}
