//! Merging the per-network masks of one hemisphere into a single label map.
//!
//! Each network comes as a surface mask in an MGH/MGZ file holding one value per mesh vertex. A vertex is
//! part of a network if its mask value exceeds [`MASK_THRESHOLD`]. Networks are applied in ascending id
//! order and later networks overwrite earlier ones, so on overlap the highest network id wins.

use log::debug;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::colortable::{ColorTable, NUM_NETWORKS};
use crate::error::{Du15Error, Result};
use crate::fs_mgh::read_mgh;
use crate::hemi::Hemisphere;
use crate::traits::VertexColor;

/// Mask values strictly above this are part of the network.
pub const MASK_THRESHOLD: f32 = 0.5;

/// The file name of the mask for the given hemisphere and network, like `lh.DU15Net3_fsaverage5.mgz`.
pub fn mask_file_name(hemi: Hemisphere, network: u8) -> String {
    format!("{}.DU15Net{}_fsaverage5.mgz", hemi.prefix(), network)
}


/// Assigns each vertex of a hemisphere mesh to one DU15 network, or to the background (label `0`).
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMap {
    pub hemi: Hemisphere,
    pub labels: Vec<u8>,
    pub colortable: ColorTable,
}

impl LabelMap {
    /// A label map with all `num_vertices` vertices set to the background.
    pub fn new(hemi: Hemisphere, num_vertices: usize) -> LabelMap {
        LabelMap {
            hemi,
            labels: vec![0; num_vertices],
            colortable: ColorTable::du15(),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    /// Assign `network` to all vertices whose `mask` value exceeds [`MASK_THRESHOLD`].
    ///
    /// Returns the number of vertices assigned. The `source` is only used in the error.
    ///
    /// # Errors
    ///
    /// [`Du15Error::VertexCountMismatch`] if the mask does not have exactly one value per vertex. The label map is left unchanged then.
    pub fn apply_mask<P: AsRef<Path>>(&mut self, network: u8, mask: &[f32], source: P) -> Result<usize> {
        if mask.len() != self.labels.len() {
            return Err(Du15Error::VertexCountMismatch(
                source.as_ref().to_path_buf(),
                mask.len(),
                self.labels.len(),
            ));
        }
        let mut assigned = 0;
        for (label, value) in self.labels.iter_mut().zip(mask.iter()) {
            if *value > MASK_THRESHOLD {
                *label = network;
                assigned += 1;
            }
        }
        Ok(assigned)
    }

    /// Number of vertices per label, indexed by label.
    pub fn label_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; NUM_NETWORKS as usize + 1];
        for label in self.labels.iter() {
            if let Some(count) = counts.get_mut(*label as usize) {
                *count += 1;
            }
        }
        counts
    }
}

impl VertexColor for LabelMap {
    fn vertex_color_rgb(&self) -> Vec<u8> {
        let mut colors = Vec::with_capacity(self.labels.len() * 3);
        for label in self.labels.iter() {
            colors.extend_from_slice(&self.colortable.rgb(*label));
        }
        colors
    }

    fn vertex_color_rgba(&self) -> Vec<u8> {
        let mut colors = Vec::with_capacity(self.labels.len() * 4);
        for label in self.labels.iter() {
            colors.extend_from_slice(&self.colortable.rgb(*label));
            colors.push(255);
        }
        colors
    }
}

impl fmt::Display for LabelMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labeled = self.labels.iter().filter(|l| **l != 0).count();
        write!(f, "DU15 label map of the {} hemisphere: {} of {} vertices assigned to a network.", self.hemi, labeled, self.labels.len())
    }
}


/// Build the label map for one hemisphere from the 15 mask files in `roi_dir`.
///
/// `num_vertices` is the vertex count of the reference mesh. The first mask with a different number of
/// values aborts with [`Du15Error::VertexCountMismatch`] naming that file.
pub fn build_label_map<P: AsRef<Path>>(roi_dir: P, hemi: Hemisphere, num_vertices: usize) -> Result<LabelMap> {
    let mut label_map = LabelMap::new(hemi, num_vertices);

    for network in 1..=NUM_NETWORKS {
        let roi_file: PathBuf = roi_dir.as_ref().join(mask_file_name(hemi, network));
        let mask = read_mgh(&roi_file)?.values_flat();
        let assigned = label_map.apply_mask(network, &mask, &roi_file)?;
        debug!("{}: {} vertices above threshold.", roi_file.display(), assigned);
    }
    Ok(label_map)
}
