use std::{fmt, io};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Range,
    General,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub ctx: Option<String>,
    pub msg: String,
}

impl Error {
    pub fn new(kind: ErrorKind, ctx: Option<String>, msg: &str) -> Self {
        Error {
            kind,
            ctx,
            msg: msg.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.ctx.as_ref() {
            Some(ctx) => write!(f, "{}: {}", ctx, self.msg),
            None => write!(f, "{}", self.msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::new(ErrorKind::Io, None, e.to_string().as_str())
    }
}
