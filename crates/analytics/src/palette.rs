//! Cohort display colors
//!
//! Fixed palette assigned by cohort index so the same cohort keeps the same
//! line color across recomputations.

/// Line colors, one per cohort, cycled when cohorts outnumber entries
pub const PALETTE: [&str; 3] = [
    "rgba(75, 192, 192, 1)",
    "rgba(255, 99, 132, 1)",
    "rgba(54, 162, 235, 1)",
];

/// Color for the cohort at `index`, oldest cohort = 0
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(color_for(0), PALETTE[0]);
        assert_eq!(color_for(2), PALETTE[2]);
        assert_eq!(color_for(3), PALETTE[0]);
        assert_eq!(color_for(7), PALETTE[1]);
    }
}
