use std::fmt;

#[derive(Debug)]
pub enum Error {
    PasswordTooLong(usize),
    RandomSource,
    MalformedRecord(usize),
    InvalidParams(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PasswordTooLong(len) => write!(f, "password too long ({len} bytes)"),
            Error::RandomSource => write!(f, "OS random generator unavailable"),
            Error::MalformedRecord(len) => write!(f, "encoded record too short ({len} bytes)"),
            Error::InvalidParams(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
