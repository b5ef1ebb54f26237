//! Distribution point upload types.

use std::fmt;

/// Kind of file sent to the distribution point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Package,
    Ebook,
    InHouseApp,
}

impl FileType {
    /// Value of the `FILE_TYPE` header.
    pub fn code(&self) -> &'static str {
        match self {
            FileType::Package => "0",
            FileType::Ebook => "1",
            FileType::InHouseApp => "2",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileType::Package => "package",
            FileType::Ebook => "ebook",
            FileType::InHouseApp => "in-house app",
        })
    }
}

/// Target of the upload. The server only knows the default destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Destination {
    #[default]
    Default,
}

impl Destination {
    /// Value of the `DESTINATION` header.
    pub fn code(&self) -> &'static str {
        match self {
            Destination::Default => "0",
        }
    }
}
