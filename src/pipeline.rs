//! The complete plotting run: label maps for both hemispheres, then six cropped views per hemisphere.

use log::{debug, info};

use std::fs;
use std::path::PathBuf;

use crate::config::PlotConfig;
use crate::crop::crop_to_content;
use crate::error::Result;
use crate::fsaverage::Fsaverage5;
use crate::hemi::Hemisphere;
use crate::labelmap::{build_label_map, LabelMap};
use crate::render::{render_view, vertex_colors};
use crate::view::View;

/// The output file name for a hemisphere and view, like `DU15_fsaverage5_LH_lateral.png`.
pub fn output_file_name(hemi: Hemisphere, view: View) -> String {
    format!("DU15_fsaverage5_{}_{}.png", hemi.tag(), view.name())
}

/// Run the whole plot and return the paths of the written images, in rendering order.
///
/// Both label maps are built before anything is rendered, so a broken mask file aborts the run without output.
pub fn run(config: &PlotConfig) -> Result<Vec<PathBuf>> {
    let fsavg = Fsaverage5::new(&config.fsaverage_dir);

    let mut label_maps: Vec<LabelMap> = Vec::with_capacity(Hemisphere::BOTH.len());
    for hemi in Hemisphere::BOTH.iter() {
        let num_vertices = fsavg.num_vertices(*hemi)?;
        let label_map = build_label_map(&config.roi_dir, *hemi, num_vertices)?;
        info!("{}", label_map);
        debug!("Vertices per label: {:?}", label_map.label_counts());
        label_maps.push(label_map);
    }

    fs::create_dir_all(&config.out_dir)?;

    let mut written: Vec<PathBuf> = Vec::with_capacity(Hemisphere::BOTH.len() * View::ALL.len());
    for label_map in label_maps.iter() {
        let hemi = label_map.hemi;
        let surface = fsavg.load_hemisphere(hemi)?;
        let colors = vertex_colors(label_map, &surface.sulc, &config.render)?;

        for view in View::ALL.iter() {
            let out_file = config.out_dir.join(output_file_name(hemi, *view));
            let img = render_view(&surface.mesh, &colors, &view.camera(hemi), &config.render)?;
            img.save(&out_file)?;
            crop_to_content(&out_file, &config.crop)?;
            info!("Wrote {} view of {} hemisphere to {}.", view, hemi, out_file.display());
            written.push(out_file);
        }
    }
    Ok(written)
}
