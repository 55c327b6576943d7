//! Writers for small FreeSurfer files, used to set up test data in temporary directories.

#![allow(dead_code)]

use flate2::write::GzEncoder;
use flate2::Compression;

use std::fs;
use std::io::Write;
use std::path::Path;

use du15surf::fs_mgh::MGH_DATA_START;

fn write_maybe_gz(path: &Path, bytes: &[u8], gz: bool) {
    if gz {
        let mut encoder = GzEncoder::new(fs::File::create(path).unwrap(), Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap();
    } else {
        fs::write(path, bytes).unwrap();
    }
}

pub fn write_surf(path: &Path, vertices: &[f32], faces: &[i32], gz: bool) {
    let mut bytes: Vec<u8> = vec![0xFF, 0xFF, 0xFE];
    bytes.extend_from_slice(b"created by du15surf tests\n\n");
    bytes.extend_from_slice(&((vertices.len() / 3) as i32).to_be_bytes());
    bytes.extend_from_slice(&((faces.len() / 3) as i32).to_be_bytes());
    for v in vertices {
        bytes.extend_from_slice(&v.to_be_bytes());
    }
    for f in faces {
        bytes.extend_from_slice(&f.to_be_bytes());
    }
    write_maybe_gz(path, &bytes, gz);
}

pub fn write_curv(path: &Path, data: &[f32], gz: bool) {
    let mut bytes: Vec<u8> = vec![0xFF, 0xFF, 0xFF];
    bytes.extend_from_slice(&(data.len() as i32).to_be_bytes());
    bytes.extend_from_slice(&0i32.to_be_bytes());
    bytes.extend_from_slice(&1i32.to_be_bytes());
    for v in data {
        bytes.extend_from_slice(&v.to_be_bytes());
    }
    write_maybe_gz(path, &bytes, gz);
}

/// Write surface data as an MRI_FLOAT MGH file with shape (n, 1, 1, 1), gzipped for ".mgz" paths.
pub fn write_surface_mgh(path: &Path, values: &[f32]) {
    let mut bytes: Vec<u8> = Vec::new();
    for v in &[1i32, values.len() as i32, 1, 1, 1, 3, 0] {
        bytes.extend_from_slice(&v.to_be_bytes());
    }
    bytes.extend_from_slice(&0i16.to_be_bytes());
    bytes.resize(MGH_DATA_START as usize, 0);
    for v in values {
        bytes.extend_from_slice(&v.to_be_bytes());
    }
    let gz = path.extension().map(|e| e == "mgz").unwrap_or(false);
    write_maybe_gz(path, &bytes, gz);
}

/// A regular octahedron with radius 10, centered at the origin: 6 vertices, 8 faces.
pub fn octahedron() -> (Vec<f32>, Vec<i32>) {
    let vertices = vec![
        10.0, 0.0, 0.0,
        -10.0, 0.0, 0.0,
        0.0, 10.0, 0.0,
        0.0, -10.0, 0.0,
        0.0, 0.0, 10.0,
        0.0, 0.0, -10.0,
    ];
    let faces = vec![
        0, 2, 4,
        2, 1, 4,
        1, 3, 4,
        3, 0, 4,
        2, 0, 5,
        1, 2, 5,
        3, 1, 5,
        0, 3, 5,
    ];
    (vertices, faces)
}

/// Set up `<dir>/surf/{lh,rh}.{pial,inflated,sulc}` with the octahedron for both hemispheres.
pub fn write_fsaverage(subject_dir: &Path) {
    let surf_dir = subject_dir.join("surf");
    fs::create_dir_all(&surf_dir).unwrap();
    let (vertices, faces) = octahedron();
    for hemi in &["lh", "rh"] {
        write_surf(&surf_dir.join(format!("{}.pial", hemi)), &vertices, &faces, false);
        write_surf(&surf_dir.join(format!("{}.inflated", hemi)), &vertices, &faces, false);
        write_curv(&surf_dir.join(format!("{}.sulc", hemi)), &[-1.0, 1.0, 0.0, 0.5, -0.5, 0.0], false);
    }
}
