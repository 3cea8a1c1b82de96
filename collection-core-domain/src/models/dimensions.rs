use crate::models::physical_location::PhysicalLocationModel;

/// Grid size the slot picker renders for one shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfDimensions {
    pub levels: u32,
    pub columns: u32,
}

impl ShelfDimensions {
    /// Grid used when a shelf has no location rows yet.
    pub const DEFAULT_GRID: ShelfDimensions = ShelfDimensions {
        levels: 4,
        columns: 4,
    };

    /// Infers the grid from a shelf's existing location rows.
    ///
    /// Zero rows falls back to the default 4x4 grid; otherwise the observed
    /// maxima are used as-is, with no forced minimum. Malformed levels
    /// count as 1, malformed columns as ordinal 1.
    pub fn infer<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a PhysicalLocationModel>,
    {
        let mut seen = false;
        let mut levels = 1u32;
        let mut columns = 1u32;
        for row in rows {
            seen = true;
            levels = levels.max(row.level.max(1) as u32);
            columns = columns.max(row.column_ordinal());
        }
        if seen {
            ShelfDimensions { levels, columns }
        } else {
            Self::DEFAULT_GRID
        }
    }
}
