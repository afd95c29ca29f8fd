//! Default palettes

use crate::{isoluminant_colors, ListedColormap, Rgba};

/// Nine colors of roughly equal lightness
pub const ISOLUMINANT: [&str; 9] = [
    "#bf3f76", "#577b34", "#9d6620", "#c54238", "#925b84", "#546dae", "#976a61", "#397b74",
    "#5981a3",
];

/// Seven well separated qualitative colors
pub const QUALITATIVE: [&str; 7] = [
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d",
];

const PHASE_STEPS: usize = 1000;

/// Cyclic isoluminant colormap for phases and angles
pub fn phase() -> ListedColormap {
    cyclic("phase", 45.0, 70.0)
}

/// Lighter, less saturated version of [`phase`]
pub fn phase_light() -> ListedColormap {
    cyclic("phase_light", 60.0, 45.0)
}

fn cyclic(name: &str, lum: f64, sat: f64) -> ListedColormap {
    let colors = isoluminant_colors(PHASE_STEPS, lum, sat, 90.0)
        .into_iter()
        .map(Rgba::from)
        .collect();
    ListedColormap::new(name, colors)
}

/// The isoluminant list as colors
pub fn isoluminant() -> Vec<Rgba> {
    ISOLUMINANT.iter().copied().filter_map(|h| Rgba::from_hex(h).ok()).collect()
}

/// The qualitative list as colors
pub fn qualitative() -> Vec<Rgba> {
    QUALITATIVE.iter().copied().filter_map(|h| Rgba::from_hex(h).ok()).collect()
}
