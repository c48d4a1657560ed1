use serde::{Deserialize, Serialize};

/// Severity of a log entry.
///
/// Wire codes are bit-flag values so the API could in principle combine
/// them; every entry this client submits carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Panic,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Panic,
    ];

    /// Numeric code used on the wire.
    pub const fn code(self) -> u32 {
        match self {
            Level::Debug => 1,
            Level::Info => 2,
            Level::Warning => 4,
            Level::Error => 8,
            Level::Panic => 16,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            4 => Some(Level::Warning),
            8 => Some(Level::Error),
            16 => Some(Level::Panic),
            _ => None,
        }
    }
}

/// Level field as it appears on the wire: either a recognized [`Level`] or
/// an arbitrary code carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub enum LevelCode {
    Known(Level),
    Other(u32),
}

impl LevelCode {
    /// Applies the API's submit-time rule: codes matching a recognized level
    /// collapse to the INFO default, unrecognized codes pass through
    /// unchanged.
    pub fn normalized(self) -> Self {
        match self {
            LevelCode::Known(_) => LevelCode::Known(Level::Info),
            other @ LevelCode::Other(_) => other,
        }
    }

    pub const fn code(self) -> u32 {
        match self {
            LevelCode::Known(level) => level.code(),
            LevelCode::Other(code) => code,
        }
    }
}

impl Default for LevelCode {
    fn default() -> Self {
        LevelCode::Known(Level::Info)
    }
}

impl From<u32> for LevelCode {
    fn from(code: u32) -> Self {
        match Level::from_code(code) {
            Some(level) => LevelCode::Known(level),
            None => LevelCode::Other(code),
        }
    }
}

impl From<LevelCode> for u32 {
    fn from(code: LevelCode) -> Self {
        code.code()
    }
}

impl From<Level> for LevelCode {
    fn from(level: Level) -> Self {
        LevelCode::Known(level)
    }
}
