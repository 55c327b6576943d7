//! Render the DU15 15-network cortical parcellation onto the fsaverage5 brain surface.
//!
//! The per-network surface masks of each hemisphere are merged into one label map, drawn from six fixed views
//! on the inflated fsaverage5 mesh shaded by sulcal depth, and written as PNG files cropped to the brain.
//! The FreeSurfer file readers for surfaces, curv files and MGH volumes live here as well.

pub mod colortable;
pub mod config;
pub mod crop;
pub mod error;
pub mod fs_curv;
pub mod fs_mgh;
pub mod fs_surface;
pub mod fsaverage;
pub mod hemi;
pub mod labelmap;
pub mod pipeline;
pub mod render;
pub mod traits;
pub mod util;
pub mod view;

pub use colortable::ColorTable;
pub use config::PlotConfig;
pub use crop::{content_bounds, crop_to_content, CropRect, CropSettings};
pub use error::{Du15Error, Result};
pub use fs_curv::{read_curv, CurvHeader, FsCurv};
pub use fs_mgh::{read_mgh, FsMgh, FsMghHeader};
pub use fs_surface::{read_surf, BrainMesh, FsSurface, FsSurfaceHeader};
pub use fsaverage::{Fsaverage5, HemisphereSurface};
pub use hemi::Hemisphere;
pub use labelmap::{build_label_map, mask_file_name, LabelMap};
pub use pipeline::{output_file_name, run};
pub use render::{render_view, vertex_colors, RenderSettings};
pub use traits::VertexColor;
pub use view::{Camera, View};
