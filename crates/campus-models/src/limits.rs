//! Widths of the `VARCHAR` columns in `migrations/`. The field rules check
//! against them so an oversized value is reported per field.

/// Names and labels, `VARCHAR(255)`.
pub const NAME_LENGTH: usize = 255;

/// Identity and employee numbers, languages and time zones, `VARCHAR(64)`.
pub const CODE_LENGTH: usize = 64;

/// Titles and file extensions, `VARCHAR(32)`.
pub const TAG_LENGTH: usize = 32;
