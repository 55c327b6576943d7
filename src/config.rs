//! All paths and constants of a plotting run.

use std::path::PathBuf;

use crate::crop::CropSettings;
use crate::render::RenderSettings;

pub const DEFAULT_ROI_DIR: &str = "/Users/xuerufan/DCM-Project-PhD-Study3-/output/ROI_fsaverage5";
pub const DEFAULT_OUT_DIR: &str = "/Users/xuerufan/DCM-Project-PhD-Study3-/visual";
pub const DEFAULT_FSAVERAGE_DIR: &str = "/Applications/freesurfer/subjects/fsaverage5";

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Directory with the 30 per-network masks, see [`crate::labelmap::mask_file_name`].
    pub roi_dir: PathBuf,
    /// Directory the 12 PNG files are written to. Created if missing.
    pub out_dir: PathBuf,
    /// The fsaverage5 subject directory.
    pub fsaverage_dir: PathBuf,
    pub render: RenderSettings,
    pub crop: CropSettings,
}

impl Default for PlotConfig {
    fn default() -> PlotConfig {
        PlotConfig {
            roi_dir: PathBuf::from(DEFAULT_ROI_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            fsaverage_dir: PathBuf::from(DEFAULT_FSAVERAGE_DIR),
            render: RenderSettings::default(),
            crop: CropSettings::default(),
        }
    }
}
