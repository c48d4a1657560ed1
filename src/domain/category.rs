use serde::{Deserialize, Serialize};

/// Classification of a log entry, bit-flag valued like [`Level`].
///
/// [`Level`]: super::Level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Security,
    Performance,
    Business,
    Audit,
    Sql,
    Technical,
    Tracking,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Security,
        Category::Performance,
        Category::Business,
        Category::Audit,
        Category::Sql,
        Category::Technical,
        Category::Tracking,
    ];

    /// Numeric code used on the wire.
    pub const fn code(self) -> u32 {
        match self {
            Category::Security => 1,
            Category::Performance => 2,
            Category::Business => 4,
            Category::Audit => 8,
            Category::Sql => 16,
            Category::Technical => 32,
            Category::Tracking => 64,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Category::Security),
            2 => Some(Category::Performance),
            4 => Some(Category::Business),
            8 => Some(Category::Audit),
            16 => Some(Category::Sql),
            32 => Some(Category::Technical),
            64 => Some(Category::Tracking),
            _ => None,
        }
    }
}

/// Category field as it appears on the wire: either a recognized
/// [`Category`] or an arbitrary code carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub enum CategoryCode {
    Known(Category),
    Other(u32),
}

impl CategoryCode {
    /// Applies the API's submit-time rule: codes matching a recognized
    /// category collapse to the TECHNICAL default, unrecognized codes pass
    /// through unchanged.
    pub fn normalized(self) -> Self {
        match self {
            CategoryCode::Known(_) => CategoryCode::Known(Category::Technical),
            other @ CategoryCode::Other(_) => other,
        }
    }

    pub const fn code(self) -> u32 {
        match self {
            CategoryCode::Known(category) => category.code(),
            CategoryCode::Other(code) => code,
        }
    }
}

impl Default for CategoryCode {
    fn default() -> Self {
        CategoryCode::Known(Category::Technical)
    }
}

impl From<u32> for CategoryCode {
    fn from(code: u32) -> Self {
        match Category::from_code(code) {
            Some(category) => CategoryCode::Known(category),
            None => CategoryCode::Other(code),
        }
    }
}

impl From<CategoryCode> for u32 {
    fn from(code: CategoryCode) -> Self {
        code.code()
    }
}

impl From<Category> for CategoryCode {
    fn from(category: Category) -> Self {
        CategoryCode::Known(category)
    }
}
