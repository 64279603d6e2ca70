//! Input validators backing the menu prompts.
//!
//! These are deliberately permissive where the on-disk formats are permissive:
//! the date check is structural only, and the text check accepts nothing but
//! letters (and optionally spaces), which makes names like "O'Brien" or
//! "7-Up" unrepresentable. Both limitations are long-standing behavior that
//! the persisted files depend on.

/// Accept only alphabetic characters, optionally allowing spaces.
pub fn is_valid_text(input: &str, allow_spaces: bool) -> bool {
    input.chars().all(|ch| {
        if allow_spaces && ch == ' ' {
            return true;
        }
        ch.is_alphabetic()
    })
}

/// Structural YYYY-MM-DD check: 10 bytes, hyphens at positions 4 and 7,
/// digit groups of length 4/2/2, month in [1,12], day in [1,31].
///
/// No month-length or leap-year check, so "2024-02-30" passes.
pub fn is_valid_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    let (year, month, day) = (&date[0..4], &date[5..7], &date[8..10]);
    if !year.bytes().all(|b| b.is_ascii_digit())
        || !month.bytes().all(|b| b.is_ascii_digit())
        || !day.bytes().all(|b| b.is_ascii_digit())
    {
        return false;
    }

    let m: u32 = match month.parse() {
        Ok(m) => m,
        Err(_) => return false,
    };
    let d: u32 = match day.parse() {
        Ok(d) => d,
        Err(_) => return false,
    };

    (1..=12).contains(&m) && (1..=31).contains(&d)
}
