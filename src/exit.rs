//! Process exit codes of `dotrank`.

use std::process::{ExitCode, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    /// Reports were written, or help/version was requested
    Success = 0,
    /// Usage violation, unreadable or malformed input, or failed output
    Error = 1,
}

impl Exit {
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Termination for Exit {
    fn report(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl From<anyhow::Result<()>> for Exit {
    fn from(result: anyhow::Result<()>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(err) => {
                eprintln!("Error: {err:#}");
                Self::Error
            }
        }
    }
}
