//! Functions for managing FreeSurfer brain volumes in binary 'MGH' files.
//!
//! Surface-based data, like the per-network masks mapped to fsaverage5, is stored in MGH files as well:
//! the volume then has one voxel per mesh vertex along its first dimension.


use byteordered::ByteOrdered;
use flate2::bufread::GzDecoder;
use ndarray::{Array, Array4, ShapeBuilder};

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{Du15Error, Result};
use crate::util::{is_mgz_file, prealloc_capacity, skip_bytes};

pub const MGH_VERSION: i32 = 1;

pub const MGH_DATATYPE_NAMES : [&str; 4] = ["MRI_UCHAR", "MRI_INT", "MRI_FLOAT", "MRI_SHORT"];
pub const MGH_DATATYPE_CODES : [i32; 4] = [0, 1, 3, 4];
pub const MGH_DATA_START : i32 = 284; // The index in bytes where the data part starts in an MGH file.

const MRI_UCHAR: i32 = 0;
const MRI_INT: i32 = 1;
const MRI_FLOAT: i32 = 3;
const MRI_SHORT: i32 = 4;

/// Models the header of a FreeSurfer MGH file containing a brain volume.
#[derive(Debug, Clone, PartialEq)]
pub struct FsMghHeader {
    pub mgh_format_version: i32,
    pub dim1len: i32,
    pub dim2len: i32,
    pub dim3len: i32,
    pub dim4len: i32,  // aka "num_frames"
    pub dtype: i32,
    pub dof: i32,
    pub is_ras_good: i16,
    pub delta: [f32; 3],
    pub mdc_raw: [f32; 9],
    pub p_xyz_c: [f32; 3],
}


/// Models a FreeSurfer MGH file. Exactly one of the data fields is `Some`, depending on `header.dtype`.
#[derive(Debug, Clone, PartialEq)]
pub struct FsMgh {
    pub header: FsMghHeader,
    pub data_mri_uchar: Option<Array4<u8>>,
    pub data_mri_float: Option<Array4<f32>>,
    pub data_mri_int: Option<Array4<i32>>,
    pub data_mri_short: Option<Array4<i16>>,
}


impl Default for FsMghHeader {
    fn default() -> FsMghHeader {
        FsMghHeader {
            mgh_format_version: 1 as i32,
            dim1len: 0 as i32,
            dim2len: 0 as i32,
            dim3len: 0 as i32,
            dim4len: 0 as i32,
            dtype: 1 as i32,
            dof: 0 as i32,
            is_ras_good: 0 as i16,
            delta: [0.; 3],
            mdc_raw: [0.; 9],
            p_xyz_c: [0.; 3],
        }
    }
}

/// The header of an MGH/MGZ file.
impl FsMghHeader {

    /// Read an MGH header from a file. Files ending with ".mgz" or ".gz" are decompressed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FsMghHeader> {
        let gz = is_mgz_file(&path);
        let mut file = BufReader::new(File::open(path)?);
        if gz {
            FsMghHeader::from_reader(&mut GzDecoder::new(file))
        } else {
            FsMghHeader::from_reader(&mut file)
        }
    }


    /// Read an MGH header from the given byte stream.
    /// It is assumed that the input is currently at the start of the
    /// header. Only the fixed header fields are consumed, the caller has to skip to [`MGH_DATA_START`].
    pub fn from_reader<S>(input: &mut S) -> Result<FsMghHeader>
    where
        S: Read,
    {
        let mut hdr = FsMghHeader::default();

        let mut input = ByteOrdered::be(input);

        hdr.mgh_format_version = input.read_i32()?;

        if hdr.mgh_format_version != MGH_VERSION {
            return Err(Du15Error::InvalidFsMghFormat);
        }

        hdr.dim1len = input.read_i32()?;
        hdr.dim2len = input.read_i32()?;
        hdr.dim3len = input.read_i32()?;
        hdr.dim4len = input.read_i32()?;

        if hdr.dim1len < 0 || hdr.dim2len < 0 || hdr.dim3len < 0 || hdr.dim4len < 0 {
            return Err(Du15Error::InvalidFsMghFormat);
        }

        hdr.dtype = input.read_i32()?;
        hdr.dof = input.read_i32()?;

        hdr.is_ras_good = input.read_i16()?;

        if hdr.is_ras_good == 1 as i16 {
            for idx in 0..3 { hdr.delta[idx] = input.read_f32()?; }
            for idx in 0..9 { hdr.mdc_raw[idx] = input.read_f32()?; }
            for idx in 0..3 { hdr.p_xyz_c[idx] = input.read_f32()?; }
        }
        Ok(hdr)
    }

    /// Number of header bytes consumed by [`FsMghHeader::from_reader`].
    fn num_bytes_read(&self) -> i32 {
        let fixed = 7 * 4 + 2;
        if self.is_ras_good == 1 { fixed + 15 * 4 } else { fixed }
    }

    /// The shape of the data, `(dim1, dim2, dim3, frames)`.
    pub fn dim(&self) -> (usize, usize, usize, usize) {
        (self.dim1len as usize, self.dim2len as usize, self.dim3len as usize, self.dim4len as usize)
    }

    /// Total number of values in the data part, or `None` if the dimensions overflow `usize`.
    pub fn num_values(&self) -> Option<usize> {
        let (d1, d2, d3, d4) = self.dim();
        d1.checked_mul(d2)?.checked_mul(d3)?.checked_mul(d4)
    }

    /// The name of the data type, like `MRI_FLOAT`, or `None` for an unknown code.
    pub fn dtype_name(&self) -> Option<&'static str> {
        MGH_DATATYPE_CODES.iter().position(|c| *c == self.dtype).map(|idx| MGH_DATATYPE_NAMES[idx])
    }
}


impl FsMgh {

    /// Read an MGH or MGZ file. Files ending with ".mgz" or ".gz" are decompressed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FsMgh> {
        let gz = is_mgz_file(&path);
        let file = BufReader::new(File::open(path)?);
        if gz {
            FsMgh::from_reader(GzDecoder::new(file))
        } else {
            FsMgh::from_reader(file)
        }
    }

    /// Read an MGH volume from a byte stream positioned at the start of the header.
    pub fn from_reader<S>(mut input: S) -> Result<FsMgh>
    where
        S: Read,
    {
        let hdr = FsMghHeader::from_reader(&mut input)?;
        if hdr.dtype_name().is_none() {
            return Err(Du15Error::UnsupportedMghDataType(hdr.dtype));
        }

        skip_bytes(&mut input, (MGH_DATA_START - hdr.num_bytes_read()) as u64)?;

        let mut input = ByteOrdered::be(input);
        let num_values = hdr.num_values().ok_or(Du15Error::InvalidFsMghFormat)?;
        // MGH stores the first dimension fastest, hence the Fortran order shape.
        let shape = hdr.dim().f();

        let mut mgh = FsMgh {
            header: hdr.clone(),
            data_mri_uchar: None,
            data_mri_float: None,
            data_mri_int: None,
            data_mri_short: None,
        };

        match hdr.dtype {
            MRI_UCHAR => {
                let mut values: Vec<u8> = Vec::with_capacity(prealloc_capacity(num_values));
                input.inner_mut().take(num_values as u64).read_to_end(&mut values)?;
                if values.len() != num_values {
                    return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "MGH data ended early").into());
                }
                mgh.data_mri_uchar = Some(to_array(shape, values)?);
            }
            MRI_INT => {
                let mut values: Vec<i32> = Vec::with_capacity(prealloc_capacity(num_values));
                for _ in 0..num_values { values.push(input.read_i32()?); }
                mgh.data_mri_int = Some(to_array(shape, values)?);
            }
            MRI_FLOAT => {
                let mut values: Vec<f32> = Vec::with_capacity(prealloc_capacity(num_values));
                for _ in 0..num_values { values.push(input.read_f32()?); }
                mgh.data_mri_float = Some(to_array(shape, values)?);
            }
            MRI_SHORT => {
                let mut values: Vec<i16> = Vec::with_capacity(prealloc_capacity(num_values));
                for _ in 0..num_values { values.push(input.read_i16()?); }
                mgh.data_mri_short = Some(to_array(shape, values)?);
            }
            other => return Err(Du15Error::UnsupportedMghDataType(other)),
        }
        Ok(mgh)
    }

    /// The data converted to `f32`, whatever the stored type.
    pub fn data_as_f32(&self) -> Array4<f32> {
        if let Some(data) = &self.data_mri_float {
            data.clone()
        } else if let Some(data) = &self.data_mri_int {
            data.mapv(|v| v as f32)
        } else if let Some(data) = &self.data_mri_short {
            data.mapv(|v| v as f32)
        } else if let Some(data) = &self.data_mri_uchar {
            data.mapv(|v| v as f32)
        } else {
            Array4::zeros((0, 0, 0, 0))
        }
    }

    /// All values flattened to a vector in logical (C) order over the four dimensions.
    ///
    /// For surface data, this is one value per mesh vertex.
    pub fn values_flat(&self) -> Vec<f32> {
        self.data_as_f32().iter().copied().collect()
    }
}


fn to_array<T>(shape: ndarray::Shape<ndarray::Ix4>, values: Vec<T>) -> Result<Array4<T>> {
    Array::from_shape_vec(shape, values).map_err(|_| Du15Error::InvalidFsMghFormat)
}


/// Read an MGH or MGZ file.
///
/// # Examples
///
/// ```no_run
/// let mask = du15surf::read_mgh("/path/to/ROI_fsaverage5/lh.DU15Net1_fsaverage5.mgz").unwrap();
/// println!("The mask holds {} values.", mask.header.num_values().unwrap_or(0));
/// ```
pub fn read_mgh<P: AsRef<Path>>(path: P) -> Result<FsMgh> {
    FsMgh::from_file(path)
}
