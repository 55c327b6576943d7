use std::fmt;

/// A brain hemisphere. The two hemispheres are processed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    Left,
    Right,
}

impl Hemisphere {
    pub const BOTH: [Hemisphere; 2] = [Hemisphere::Left, Hemisphere::Right];

    /// The FreeSurfer file name prefix, `lh` or `rh`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Hemisphere::Left => "lh",
            Hemisphere::Right => "rh",
        }
    }

    /// The tag used in output file names, `LH` or `RH`.
    pub fn tag(&self) -> &'static str {
        match self {
            Hemisphere::Left => "LH",
            Hemisphere::Right => "RH",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Hemisphere::Left => write!(f, "left"),
            Hemisphere::Right => write!(f, "right"),
        }
    }
}
