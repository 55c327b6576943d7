use du15surf::{read_mgh, read_surf, FsMghHeader, FsSurfaceHeader};

mod common;

#[test]
fn a_gzipped_surf_file_can_be_read() {
    let dir = tempfile::tempdir().unwrap();
    let surf_file = dir.path().join("lh.inflated.gz");
    let (vertices, faces) = common::octahedron();
    common::write_surf(&surf_file, &vertices, &faces, true);

    let surf = read_surf(&surf_file).unwrap();
    assert_eq!("created by du15surf tests", surf.header.info_line);
    assert_eq!(6, surf.mesh.num_vertices());
    assert_eq!(8, surf.mesh.num_faces());
    assert_eq!([0.0, 0.0, -10.0], surf.mesh.vertex(5));
    assert_eq!(Some([0.0, 0.0, 0.0]), surf.mesh.center());
}

#[test]
fn the_surf_header_alone_gives_the_vertex_count() {
    let dir = tempfile::tempdir().unwrap();
    let surf_file = dir.path().join("lh.pial");
    let (vertices, faces) = common::octahedron();
    common::write_surf(&surf_file, &vertices, &faces, false);

    let hdr = FsSurfaceHeader::from_file(&surf_file).unwrap();
    assert_eq!(6, hdr.num_vertices);
    assert_eq!(8, hdr.num_faces);
}

#[test]
fn an_mgz_mask_file_can_be_read() {
    let dir = tempfile::tempdir().unwrap();
    let mgz_file = dir.path().join("lh.DU15Net1_fsaverage5.mgz");
    common::write_surface_mgh(&mgz_file, &[0.0, 1.0, 1.0, 0.0]);

    let hdr = FsMghHeader::from_file(&mgz_file).unwrap();
    assert_eq!((4, 1, 1, 1), hdr.dim());

    let mgh = read_mgh(&mgz_file).unwrap();
    assert!(mgh.data_mri_float.is_some());
    assert_eq!(vec![0.0, 1.0, 1.0, 0.0], mgh.values_flat());
}

#[test]
fn an_uncompressed_mgh_file_can_be_read() {
    let dir = tempfile::tempdir().unwrap();
    let mgh_file = dir.path().join("mask.mgh");
    common::write_surface_mgh(&mgh_file, &[0.75; 3]);

    let mgh = read_mgh(&mgh_file).unwrap();
    assert_eq!(Some(3), mgh.header.num_values());
    assert_eq!(vec![0.75; 3], mgh.values_flat());
}

#[test]
fn a_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let res = read_mgh(dir.path().join("nope.mgz"));
    assert!(matches!(res, Err(du15surf::Du15Error::Io(_))));
}
