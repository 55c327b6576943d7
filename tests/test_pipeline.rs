use du15surf::{
    build_label_map, crop_to_content, mask_file_name, output_file_name, run, CropSettings, Du15Error,
    Fsaverage5, Hemisphere, PlotConfig, RenderSettings, View,
};
use image::{Rgb, RgbImage};

use std::path::Path;

mod common;

/// Write the 15 masks of one hemisphere for the 6 vertex octahedron: network n covers vertex n % 6,
/// and network 15 additionally claims vertex 0.
fn write_masks(roi_dir: &Path, hemi: Hemisphere) {
    for net in 1..=15u8 {
        let mut mask = vec![0.0f32; 6];
        mask[net as usize % 6] = 1.0;
        if net == 15 {
            mask[0] = 0.9;
        }
        common::write_surface_mgh(&roi_dir.join(mask_file_name(hemi, net)), &mask);
    }
}

fn test_config(root: &Path) -> PlotConfig {
    let roi_dir = root.join("rois");
    let fsaverage_dir = root.join("fsaverage5");
    std::fs::create_dir_all(&roi_dir).unwrap();
    common::write_fsaverage(&fsaverage_dir);
    write_masks(&roi_dir, Hemisphere::Left);
    write_masks(&roi_dir, Hemisphere::Right);

    PlotConfig {
        roi_dir,
        out_dir: root.join("visual"),
        fsaverage_dir,
        render: RenderSettings { width: 120, height: 100, margin: 0.25, ..RenderSettings::default() },
        crop: CropSettings::default(),
    }
}

#[test]
fn masks_are_merged_with_the_highest_network_winning() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let fsavg = Fsaverage5::new(&config.fsaverage_dir);

    let num_vertices = fsavg.num_vertices(Hemisphere::Left).unwrap();
    let lm = build_label_map(&config.roi_dir, Hemisphere::Left, num_vertices).unwrap();

    // Vertex k is claimed by networks k, k + 6 and k + 12 (if <= 15), the last one wins. Vertex 0 goes to 15.
    assert_eq!(vec![15, 13, 14, 15, 10, 11], lm.labels);
}

#[test]
fn a_full_run_writes_twelve_cropped_images() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let written = run(&config).unwrap();

    assert_eq!(12, written.len());
    assert_eq!(config.out_dir.join(output_file_name(Hemisphere::Left, View::Lateral)), written[0]);
    assert_eq!(config.out_dir.join(output_file_name(Hemisphere::Right, View::Ventral)), written[11]);

    let pngs = std::fs::read_dir(&config.out_dir).unwrap().count();
    assert_eq!(12, pngs);

    for path in written.iter() {
        assert!(path.is_file());
        let img = image::open(path).unwrap().to_rgb8();
        // The brain covers half of each dimension, the white margins have been cropped away.
        assert!(img.width() < 120, "{}", path.display());
        assert!(img.height() < 100, "{}", path.display());
        assert!(img.pixels().any(|p| p.0.iter().any(|c| *c <= 245)));
    }
}

#[test]
fn a_mask_with_the_wrong_vertex_count_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let bad_mask = config.roi_dir.join(mask_file_name(Hemisphere::Right, 4));
    common::write_surface_mgh(&bad_mask, &[1.0; 7]);

    let err = run(&config).unwrap_err();

    match &err {
        Du15Error::VertexCountMismatch(file, found, expected) => {
            assert_eq!(&bad_mask, file);
            assert_eq!(7, *found);
            assert_eq!(6, *expected);
        }
        other => panic!("Expected a vertex count mismatch, got: {}", other),
    }
    assert!(format!("{}", err).contains("rh.DU15Net4_fsaverage5.mgz: 7 vs 6"));
    assert!(!config.out_dir.exists());
}

#[test]
fn an_inflated_mesh_not_matching_the_pial_surface_is_a_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let fsavg = Fsaverage5::new(&config.fsaverage_dir);
    let inflated = fsavg.surf_file(Hemisphere::Left, "inflated");
    common::write_surf(&inflated, &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2], false);

    match fsavg.load_hemisphere(Hemisphere::Left) {
        Err(Du15Error::VertexCountMismatch(file, found, expected)) => {
            assert_eq!(inflated, file);
            assert_eq!(3, found);
            assert_eq!(6, expected);
        }
        other => panic!("Expected a vertex count mismatch, got: {:?}", other),
    }
    assert!(fsavg.load_hemisphere(Hemisphere::Right).is_ok());
}

#[test]
fn a_short_sulc_map_is_a_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let fsavg = Fsaverage5::new(&config.fsaverage_dir);
    let sulc = fsavg.surf_file(Hemisphere::Left, "sulc");
    common::write_curv(&sulc, &[0.0, 1.0, 0.5, -0.5], false);

    match fsavg.load_hemisphere(Hemisphere::Left) {
        Err(Du15Error::VertexCountMismatch(file, found, expected)) => {
            assert_eq!(sulc, file);
            assert_eq!(4, found);
            assert_eq!(6, expected);
        }
        other => panic!("Expected a vertex count mismatch, got: {:?}", other),
    }
    assert!(matches!(run(&config), Err(Du15Error::VertexCountMismatch(..))));
}

#[test]
fn a_missing_mask_file_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::remove_file(config.roi_dir.join(mask_file_name(Hemisphere::Left, 15))).unwrap();

    assert!(matches!(run(&config), Err(Du15Error::Io(_))));
}

#[test]
fn cropping_a_single_pixel_keeps_it_within_the_padding() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("dot.png");
    let mut img = RgbImage::from_pixel(60, 40, Rgb([255, 255, 255]));
    img.put_pixel(30, 20, Rgb([10, 20, 30]));
    img.save(&png).unwrap();

    let settings = CropSettings::default();
    assert!(crop_to_content(&png, &settings).unwrap());

    let cropped = image::open(&png).unwrap().to_rgb8();
    assert!(cropped.width() <= 2 * settings.padding + 1);
    assert!(cropped.height() <= 2 * settings.padding + 1);
    assert_eq!(Rgb([10, 20, 30]), *cropped.get_pixel(5, 5));
}

#[test]
fn cropping_an_all_background_image_leaves_the_file_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("blank.png");
    RgbImage::from_pixel(20, 20, Rgb([250, 250, 250])).save(&png).unwrap();
    let before = std::fs::read(&png).unwrap();

    assert!(!crop_to_content(&png, &CropSettings::default()).unwrap());

    assert_eq!(before, std::fs::read(&png).unwrap());
}
