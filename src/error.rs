use quick_error::quick_error;
use std::io::Error as IOError;
use std::path::PathBuf;

use image::ImageError;

quick_error! {
    /// Error type for all error variants originated by this crate.
    #[derive(Debug)]
    pub enum Du15Error {
        /// Invalid curv file: wrong magic number.
        InvalidCurvFormat {
            display("Invalid Curv file")
        }

        InvalidFsSurfaceFormat {
            display("Invalid FreeSurfer surf file")
        }

        /// Invalid MGH file: unsupported format version.
        InvalidFsMghFormat {
            display("Invalid FreeSurfer MGH file")
        }

        UnsupportedMghDataType(code: i32) {
            display("Unsupported MGH data type code {}", code)
        }

        /// Per-vertex data does not cover the reference mesh.
        VertexCountMismatch(file: PathBuf, found: usize, expected: usize) {
            display("Vertex count mismatch in {}: {} vs {}", file.display(), found, expected)
        }

        EmptyMesh {
            display("Cannot render a mesh without vertices or faces")
        }

        /// PNG encoding or decoding failed.
        Image(err: ImageError) {
            from()
            source(err)
            display("Image error: {}", err)
        }

        /// I/O Error
        Io(err: IOError) {
            from()
            source(err)
            display("I/O error: {}", err)
        }
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, Du15Error>;
