use clap::Parser;
use std::ffi::OsString;

/// Parses the process command line arguments.
pub fn parse_args<T: Parser>() -> Result<T, clap::Error> {
    parse_args_from(std::env::args_os())
}

/// Parses an explicit argument list; the first item is the binary name.
pub fn parse_args_from<T, I, S>(args: I) -> Result<T, clap::Error>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    T::try_parse_from(args)
}
