// Functions for managing FreeSurfer brain surface meshes in binary 'surf' files.
// These files store a triangular mesh, where each vertex is defined by its x,y,z coord and
// each face is defined by 3 vertices, stored as 3 indices into the vertices.


use byteordered::ByteOrdered;
use flate2::bufread::GzDecoder;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::util::{is_gz_file, prealloc_capacity, read_double_newline_terminated_string};
use crate::error::{Du15Error, Result};

pub const TRIS_MAGIC_FILE_TYPE_NUMBER: i32 = 16777214;

#[derive(Debug, Clone, PartialEq)]
pub struct FsSurfaceHeader {
    pub surf_magic: [u8; 3],
    pub info_line: String,
    pub num_vertices: i32,
    pub num_faces: i32,
}


impl Default for FsSurfaceHeader {
    fn default() -> FsSurfaceHeader {
        FsSurfaceHeader {
            surf_magic: [255; 3],
            info_line: String::from(""),
            num_vertices: 0,
            num_faces: 0
        }
    }
}

impl FsSurfaceHeader {

    /// Read an FsSurface header from a file.
    /// If the file's name ends with ".gz", the file is assumed to need GZip decoding. This is not typically the case
    /// for FreeSurfer Surf files, but very handy (and it helps us to reduce the size of our test data).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FsSurfaceHeader> {
        let gz = is_gz_file(&path);
        let mut file = BufReader::new(File::open(path)?);
        if gz {
            FsSurfaceHeader::from_reader(&mut GzDecoder::new(file))
        } else {
            FsSurfaceHeader::from_reader(&mut file)
        }
    }


    /// Read an FsSurface header from the given byte stream.
    /// It is assumed that the input is currently at the start of the
    /// FsSurface header. After this returns, the input is at the start of the vertex data.
    pub fn from_reader<S>(input: &mut S) -> Result<FsSurfaceHeader>
    where
        S: Read,
    {
        let mut hdr = FsSurfaceHeader::default();

        let mut input = ByteOrdered::be(input);

        for v in &mut hdr.surf_magic {
            *v = input.read_u8()?;
        }

        let magic: i32 = interpret_fs_int24(hdr.surf_magic[0], hdr.surf_magic[1], hdr.surf_magic[2]);
        if magic != TRIS_MAGIC_FILE_TYPE_NUMBER {
            return Err(Du15Error::InvalidFsSurfaceFormat);
        }

        hdr.info_line = read_double_newline_terminated_string(input.inner_mut())?;
        hdr.num_vertices = input.read_i32()?;
        hdr.num_faces = input.read_i32()?;

        if hdr.num_vertices < 0 || hdr.num_faces < 0 {
            return Err(Du15Error::InvalidFsSurfaceFormat);
        }
        Ok(hdr)
    }
}


/// Interpret three bytes as a single 24 bit integer, FreeSurfer style.
pub fn interpret_fs_int24(b1: u8, b2:u8, b3:u8) -> i32 {
    ((b1 as i32) << 16) + ((b2 as i32) << 8) + b3 as i32
}


/// An FsSurface object
#[derive(Debug, PartialEq, Clone)]
pub struct FsSurface {
    pub header: FsSurfaceHeader,
    pub mesh: BrainMesh,
}

/// A Brain Mesh. Vertices are stored as consecutive x,y,z triples, faces as consecutive triples of 0-based vertex indices.
#[derive(Debug, PartialEq, Clone)]
pub struct BrainMesh {
    pub vertices: Vec<f32>,
    pub faces: Vec<i32>,
}

impl BrainMesh {
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len() / 3
    }

    /// The coordinates of the vertex at index `idx`.
    ///
    /// # Panics
    ///
    /// If `idx` is out of range, see [`BrainMesh::num_vertices`].
    pub fn vertex(&self, idx: usize) -> [f32; 3] {
        [self.vertices[idx * 3], self.vertices[idx * 3 + 1], self.vertices[idx * 3 + 2]]
    }

    /// The 3 vertex indices of the face at index `idx`.
    ///
    /// # Panics
    ///
    /// If `idx` is out of range, see [`BrainMesh::num_faces`].
    pub fn face(&self, idx: usize) -> [usize; 3] {
        [self.faces[idx * 3] as usize, self.faces[idx * 3 + 1] as usize, self.faces[idx * 3 + 2] as usize]
    }

    /// Axis-aligned bounding box of the vertices as `(min, max)` corners, or `None` for a mesh without vertices.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        if self.vertices.is_empty() {
            return None;
        }
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        for coords in self.vertices.chunks_exact(3) {
            for dim in 0..3 {
                min[dim] = min[dim].min(coords[dim]);
                max[dim] = max[dim].max(coords[dim]);
            }
        }
        Some((min, max))
    }

    /// Center of the bounding box, or `None` for a mesh without vertices.
    pub fn center(&self) -> Option<[f32; 3]> {
        self.bounds().map(|(min, max)| {
            [(min[0] + max[0]) / 2.0, (min[1] + max[1]) / 2.0, (min[2] + max[2]) / 2.0]
        })
    }
}


/// Read a brain mesh from a FreeSurfer binary surface file, like `lh.inflated`.
///
/// # Examples
///
/// ```no_run
/// let surf = du15surf::read_surf("/path/to/fsaverage5/surf/lh.inflated").unwrap();
/// println!("The mesh has {} vertices.", surf.mesh.num_vertices());
/// ```
pub fn read_surf<P: AsRef<Path>>(path: P) -> Result<FsSurface> {
    FsSurface::from_file(path)
}


impl FsSurface {
    /// Read an FsSurface instance from a file.
    /// If the file's name ends with ".gz", the file is assumed to need GZip decoding. This is not typically the case
    /// for FreeSurfer Surface files, but very handy (and it helps us to reduce the size of our test data).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FsSurface> {
        let gz = is_gz_file(&path);
        let file = BufReader::new(File::open(path)?);
        if gz {
            FsSurface::from_reader(GzDecoder::new(file))
        } else {
            FsSurface::from_reader(file)
        }
    }

    /// Read an FsSurface instance from the given byte stream, which must be at the start of the header.
    pub fn from_reader<S>(mut input: S) -> Result<FsSurface>
    where
        S: Read,
    {
        let hdr = FsSurfaceHeader::from_reader(&mut input)?;
        let mesh = FsSurface::mesh_from_reader(&mut input, &hdr)?;

        Ok(FsSurface {
            header: hdr,
            mesh,
        })
    }

    /// Read the vertex and face data. The input must be positioned right after the header.
    pub fn mesh_from_reader<S>(input: &mut S, hdr: &FsSurfaceHeader) -> Result<BrainMesh>
    where
        S: Read,
    {
        let mut input = ByteOrdered::be(input);

        let num_coords = (hdr.num_vertices as usize).checked_mul(3).ok_or(Du15Error::InvalidFsSurfaceFormat)?;
        let num_indices = (hdr.num_faces as usize).checked_mul(3).ok_or(Du15Error::InvalidFsSurfaceFormat)?;

        let mut vertex_data : Vec<f32> = Vec::with_capacity(prealloc_capacity(num_coords));
        for _ in 0..num_coords {
            vertex_data.push(input.read_f32()?);
        }

        let mut face_data : Vec<i32> = Vec::with_capacity(prealloc_capacity(num_indices));
        for _ in 0..num_indices {
            let vertex_index = input.read_i32()?;
            if vertex_index < 0 || vertex_index >= hdr.num_vertices {
                return Err(Du15Error::InvalidFsSurfaceFormat);
            }
            face_data.push(vertex_index);
        }

        Ok(BrainMesh {
            vertices : vertex_data,
            faces : face_data
        })
    }
}
