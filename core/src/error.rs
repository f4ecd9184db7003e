use alloc::string::String;
use core::fmt;

use crate::mode::Mode;

/// Which of the two input files an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFile {
    Art,
    Translation,
}

impl InputFile {
    pub fn repr(self) -> &'static str {
        match self {
            InputFile::Art => "ASCII art",
            InputFile::Translation => "translate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    FileMissing(InputFile, String),
    IoError(embedded_io::ErrorKind),
    InvalidText(InputFile),
    StrideTooNarrow {
        x_tiles: usize,
        virt_width: usize,
    },
    BeyondBottomEdge(Mode),
    BeyondRightEdge(Mode),
    StrideOverflow {
        end: usize,
        capacity: usize,
    },
    UnknownCharacter {
        ch: char,
        x: usize,
        y: usize,
    },
}

impl Error {
    pub(crate) fn from_io_error(err: impl embedded_io::Error) -> Self {
        Self::IoError(err.kind())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileMissing(_, path) => write!(f, "File {path} does not exist"),
            Error::IoError(kind) => write!(f, "I/O error: {kind:?}"),
            Error::InvalidText(which) => write!(f, "The {} file is not valid UTF-8", which.repr()),
            Error::StrideTooNarrow { x_tiles, virt_width } => write!(
                f,
                "Horizontal tiles ({x_tiles}) cannot be greater than virtual width ({virt_width})"
            ),
            Error::BeyondBottomEdge(mode) => write!(
                f,
                "{} extends beyond the lower edge of the ASCII art file",
                mode.repr()
            ),
            Error::BeyondRightEdge(mode) => write!(
                f,
                "{} extends beyond the right edge of the ASCII art file",
                mode.repr()
            ),
            Error::StrideOverflow { end, capacity } => write!(
                f,
                "Virtual width places tile data at byte {end}, past the {capacity} byte output array"
            ),
            Error::UnknownCharacter { ch, x, y } => {
                write!(f, "Can't find '{ch}' (line {y}, column {x}) in translate file")
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
