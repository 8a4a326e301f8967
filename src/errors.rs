/// Handles are kept in their printed form, so the message names the handle type.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "{} is invalid.", _0)]
    NodeHandleInvalid(String),
    #[fail(display = "{} is not a camera.", _0)]
    NotACamera(String),
    #[fail(display = "Degenerated projection, {}.", _0)]
    DegenerateProjection(String),
    #[fail(display = "Failed to parse settings, {}.", _0)]
    Settings(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Settings(format!("{}", err))
    }
}

macro_rules! ensure_projection {
    ($cond:expr, $fmt:expr, $($arg:tt)+) => {
        if !($cond) {
            return Err($crate::errors::Error::DegenerateProjection(format!($fmt, $($arg)+)));
        }
    };
}
