//! Utility functions used in all other du15surf modules.

use std::io::{self, Read};
use std::path::Path;

use crate::error::Result;

use byteordered::byteorder::ReadBytesExt;

/// Check whether the file extension ends with ".gz".
pub fn is_gz_file<P>(path: P) -> bool
where
    P: AsRef<Path>,
{
    path.as_ref()
        .file_name()
        .map(|a| a.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false)
}

/// Check whether the file is a compressed MGH file, i.e., ends with ".mgz" or ".gz".
pub fn is_mgz_file<P>(path: P) -> bool
where
    P: AsRef<Path>,
{
    let mgz = path
        .as_ref()
        .file_name()
        .map(|a| a.to_string_lossy().ends_with(".mgz"))
        .unwrap_or(false);
    mgz || is_gz_file(path)
}

/// Read the text line that follows the magic number of a FreeSurfer surf file.
///
/// The line is terminated by two consecutive '\n' chars, both are consumed but not added to the returned String.
pub fn read_double_newline_terminated_string<S>(input: &mut S) -> Result<String>
where
    S: Read,
{
    let mut info_line = String::new();
    let mut prev_char = '\0';
    loop {
        let cur_char = input.read_u8()? as char;
        if cur_char == '\n' && prev_char == '\n' {
            info_line.pop();
            return Ok(info_line);
        }
        info_line.push(cur_char);
        prev_char = cur_char;
    }
}

/// Upper bound for capacities reserved from counts stated in file headers. Larger data grows while reading.
pub const MAX_PREALLOC_VALUES: usize = 1 << 20;

/// The capacity to reserve for `count` values announced by a header, which may be bogus.
pub fn prealloc_capacity(count: usize) -> usize {
    count.min(MAX_PREALLOC_VALUES)
}

/// Consume and discard `len` bytes. Used instead of seeking, which GZ streams do not support.
pub fn skip_bytes<S>(input: &mut S, len: u64) -> Result<()>
where
    S: Read,
{
    let skipped = io::copy(&mut input.by_ref().take(len), &mut io::sink())?;
    if skipped < len {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stream ended while skipping bytes").into());
    }
    Ok(())
}
