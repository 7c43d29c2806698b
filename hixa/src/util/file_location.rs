// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use super::FileRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileLocation {
    offset: usize,
    line: usize,

    /// Counted in code points, not bytes.
    column: usize,
}

impl FileLocation {
    pub const START: Self = Self::new(0, 1, 1);

    #[must_use]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Zero based byte index
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// One-based line number
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// One-based column number
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub const fn as_zero_range(&self) -> FileRange {
        FileRange::new(*self, *self)
    }
}

impl Default for FileLocation {
    fn default() -> Self {
        Self::START
    }
}

impl Display for FileLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}:{}", self.line(), self.column()))
    }
}
