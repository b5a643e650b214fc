use crate::exec::ExecError;
use crate::store::StoreError;

#[derive(Debug)]
pub enum ZError {
    Store(StoreError),
    Exec(ExecError),
    Io(std::io::Error),
    Readline(rustyline::error::ReadlineError),
    HomeDirNotFound,
}

impl From<StoreError> for ZError {
    fn from(err: StoreError) -> Self {
        ZError::Store(err)
    }
}

impl From<ExecError> for ZError {
    fn from(err: ExecError) -> Self {
        ZError::Exec(err)
    }
}

impl From<std::io::Error> for ZError {
    fn from(err: std::io::Error) -> Self {
        ZError::Io(err)
    }
}

impl From<rustyline::error::ReadlineError> for ZError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ZError::Readline(err)
    }
}

impl std::fmt::Display for ZError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZError::Store(e) => write!(f, "{}", e),
            ZError::Exec(e) => write!(f, "{}", e),
            ZError::Io(e) => write!(f, "IO error: {}", e),
            ZError::Readline(e) => write!(f, "Readline error: {}", e),
            ZError::HomeDirNotFound => write!(f, "Home directory not found"),
        }
    }
}

impl std::error::Error for ZError {}
