use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("signal read failed: {path}: {source}")]
    SignalRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("device tree model not available")]
    DeviceTreeMissing,

    #[error("DTS filename not recorded by firmware")]
    DtsFilenameMissing,

    #[error("unrecognized module name format: {0}")]
    ModuleNameFormat(String),

    #[error("vcgencmd not found")]
    RamToolMissing,

    #[error("vcgencmd exited with {status}")]
    RamToolFailed { status: ExitStatus },

    #[error("malformed RAM query output: {0:?}")]
    RamOutputFormat(String),

    #[error("cannot identify {vendor} board")]
    Unrecognized { vendor: &'static str },

    #[error("unknown board: no registered identifier recognized it")]
    Unknown { causes: Vec<Error> },
}

impl Error {
    /// Individual identifier failures behind an aggregate `Unknown`.
    /// For any other variant this is the error itself.
    pub fn causes(&self) -> &[Error] {
        match self {
            Error::Unknown { causes } => causes,
            other => std::slice::from_ref(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
