//! The chart color palette.

/// Fixed palette shared by every chart. Order matters: color index i always
/// corresponds to the i-th displayed datum after truncation.
pub const PALETTE: &[&str] = &[
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#14B8A6", "#F97316",
    "#6366F1", "#84CC16", "#06B6D4", "#E11D48", "#22C55E", "#A855F7", "#EAB308", "#0EA5E9",
    "#D946EF", "#64748B", "#FB7185", "#34D399",
];

/// First `n` palette entries, cycling when `n` exceeds the palette length.
pub fn generate_colors(n: usize) -> Vec<String> {
    (0..n).map(|i| PALETTE[i % PALETTE.len()].to_string()).collect()
}

/// Single palette entry for a displayed position.
pub fn color_at(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}
