//! Translation between the three storage coordinate systems: the linear
//! shelf code (1-30), the human label shown in pickers, and the zero-based
//! grid indices used by the interactive slot picker.
//!
//! Shelf codes 1-27 map to lettered bays A-G with four positions each
//! (G has three); codes 28-30 are the work tables MT-1..MT-3. Everything
//! here is total: out-of-range codes degrade to a generic label instead of
//! failing, so a bad row coming back from the backend never breaks a list
//! render.

/// Lowest valid shelf code.
pub const MIN_SHELF_CODE: i32 = 1;
/// Highest valid shelf code.
pub const MAX_SHELF_CODE: i32 = 30;
/// First code belonging to a work table.
pub const FIRST_WORK_TABLE_CODE: i32 = 28;

const POSITIONS_PER_BAY: i32 = 4;

/// Human label for a shelf code.
///
/// Codes 1-27 become "Estante A1".."Estante G3", codes 28-30 become
/// "Mesa MT-1".."Mesa MT-3". Any other value falls back to
/// "Estantería {code}".
pub fn label_for_shelf_code(code: i32) -> String {
    match code {
        1..=27 => {
            let bay = (b'A' + ((code - 1) / POSITIONS_PER_BAY) as u8) as char;
            let position = (code - 1) % POSITIONS_PER_BAY + 1;
            format!("Estante {bay}{position}")
        }
        28..=30 => format!("Mesa MT-{}", code - FIRST_WORK_TABLE_CODE + 1),
        _ => format!("Estantería {code}"),
    }
}

/// Same as [`label_for_shelf_code`] with the "Estante " / "Mesa " prefix
/// stripped, for compact picker rows.
pub fn short_label(code: i32) -> String {
    let label = label_for_shelf_code(code);
    label
        .strip_prefix("Estante ")
        .or_else(|| label.strip_prefix("Mesa "))
        .map(str::to_owned)
        .unwrap_or(label)
}

/// Work tables have a single valid slot (level 1, column A) and bypass the
/// level/column picker entirely.
pub fn is_work_table(code: i32) -> bool {
    (FIRST_WORK_TABLE_CODE..=MAX_SHELF_CODE).contains(&code)
}

/// Picker rows are 0-based, domain levels are 1-based.
pub fn ui_index_to_level(level_index: i32) -> i32 {
    level_index + 1
}

/// Picker columns are 0-based; column 0 is 'A'.
///
/// The grid never grows past 'D' in practice; indices beyond 'Z' saturate
/// rather than wrapping into non-letters.
pub fn column_index_to_letter(column_index: u32) -> char {
    char::from(b'A' + column_index.min(25) as u8)
}

/// 1-based ordinal of a column cell as stored on the wire.
///
/// Anything that is not a single A-Z letter (after trimming, case
/// insensitive) counts as ordinal 1. This is the only place malformed
/// column text is tolerated; it exists so shelf dimension inference over
/// existing rows never fails.
pub fn column_ordinal(text: &str) -> u32 {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            (c.to_ascii_uppercase() as u32) - ('A' as u32) + 1
        }
        _ => 1,
    }
}
