//! Access to the fsaverage5 template subject in a FreeSurfer subjects directory layout.

use log::debug;

use std::path::{Path, PathBuf};

use crate::error::{Du15Error, Result};
use crate::fs_curv::read_curv;
use crate::fs_surface::{read_surf, BrainMesh, FsSurfaceHeader};
use crate::hemi::Hemisphere;

/// An fsaverage5 subject directory, containing a `surf/` sub directory with the meshes and the sulcal depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Fsaverage5 {
    pub subject_dir: PathBuf,
}

/// The rendered mesh of one hemisphere together with its sulcal depth.
#[derive(Debug, Clone, PartialEq)]
pub struct HemisphereSurface {
    pub hemi: Hemisphere,
    pub mesh: BrainMesh,
    pub sulc: Vec<f32>,
}

impl Fsaverage5 {
    pub fn new<P: AsRef<Path>>(subject_dir: P) -> Fsaverage5 {
        Fsaverage5 { subject_dir: subject_dir.as_ref().to_path_buf() }
    }

    /// Path of a file in the `surf/` directory, like `surf/lh.inflated` for `name` = `inflated`.
    pub fn surf_file(&self, hemi: Hemisphere, name: &str) -> PathBuf {
        self.subject_dir.join("surf").join(format!("{}.{}", hemi.prefix(), name))
    }

    /// The reference vertex count of a hemisphere, read from the pial surface header.
    pub fn num_vertices(&self, hemi: Hemisphere) -> Result<usize> {
        let hdr = FsSurfaceHeader::from_file(self.surf_file(hemi, "pial"))?;
        Ok(hdr.num_vertices as usize)
    }

    /// Load the inflated mesh and the sulcal depth of a hemisphere.
    ///
    /// Both must match the vertex count of the pial surface.
    pub fn load_hemisphere(&self, hemi: Hemisphere) -> Result<HemisphereSurface> {
        let expected = self.num_vertices(hemi)?;

        let inflated_file = self.surf_file(hemi, "inflated");
        let mesh = read_surf(&inflated_file)?.mesh;
        if mesh.num_vertices() != expected {
            return Err(Du15Error::VertexCountMismatch(inflated_file, mesh.num_vertices(), expected));
        }

        let sulc_file = self.surf_file(hemi, "sulc");
        let sulc = read_curv(&sulc_file)?.data;
        if sulc.len() != expected {
            return Err(Du15Error::VertexCountMismatch(sulc_file, sulc.len(), expected));
        }

        debug!("Loaded {} hemisphere: {} vertices, {} faces.", hemi, mesh.num_vertices(), mesh.num_faces());
        Ok(HemisphereSurface { hemi, mesh, sulc })
    }
}
