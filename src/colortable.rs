//! The DU15 network color table.
//!
//! The table maps each network id to an RGB display color. Id `0` is the background, ids `1` to `15`
//! are the 15 networks. Used as a discrete color map: label `k` is drawn with entry `k`.

use std::fmt;

/// Number of DU15 networks, not counting the background.
pub const NUM_NETWORKS: u8 = 15;

/// RGB colors indexed by network id, `0` is the background.
pub const DU15_COLORS: [[u8; 3]; 16] = [
    [170, 170, 170],
    [170, 70, 125],
    [184, 89, 251],
    [205, 61, 77],
    [27, 179, 242],
    [231, 215, 165],
    [66, 231, 206],
    [98, 206, 61],
    [73, 145, 175],
    [11, 47, 255],
    [228, 228, 0],
    [240, 147, 33],
    [10, 112, 33],
    [119, 17, 133],
    [254, 188, 235],
    [100, 49, 73],
];


#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    pub colors: Vec<[u8; 3]>,
}

impl ColorTable {
    /// The DU15 table with 16 entries.
    pub fn du15() -> ColorTable {
        ColorTable { colors: DU15_COLORS.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color for the given label. Labels without an entry get the background color at index `0`.
    pub fn rgb(&self, label: u8) -> [u8; 3] {
        self.colors
            .get(label as usize)
            .or_else(|| self.colors.first())
            .copied()
            .unwrap_or([0, 0, 0])
    }

    /// The color for the given label, normalized to the range `[0, 1]`.
    pub fn normalized(&self, label: u8) -> [f32; 3] {
        let [r, g, b] = self.rgb(label);
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }

    /// All entries normalized to `[0, 1]`, i.e., the discrete color map.
    pub fn colormap(&self) -> Vec<[f32; 3]> {
        (0..self.len()).map(|label| self.normalized(label as u8)).collect()
    }
}

impl Default for ColorTable {
    fn default() -> ColorTable {
        ColorTable::du15()
    }
}

impl fmt::Display for ColorTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Colortable for {} brain networks plus background.", self.len().saturating_sub(1))
    }
}
