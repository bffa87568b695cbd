//! Mappings from signed integers to non-negative integers, so that the
//! unsigned-only codes can represent signed data. All three are bijections:
//! no two inputs share an output, and the outputs of a symmetric input range
//! cover an initial segment of the naturals with no gaps.

/// Selects one of the three signed-to-unsigned bijections.
///
/// For the inputs `-4, -3, -2, -1, 0, 1, 2, 3` the mappings produce:
///
/// ```text
/// Normal:      8, 6, 4, 2, 0, 1, 3, 5
/// JlsRegular:  7, 5, 3, 1, 0, 2, 4, 6
/// JlsSpecial:  6, 4, 2, 0, 1, 3, 5, 7
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SignMapping {
    /// Zero maps to zero, positive values take the odd codes.
    Normal,
    /// The JPEG-LS regular-mode ordering: non-negative values take the even
    /// codes.
    JlsRegular,
    /// The JPEG-LS run-interruption ordering: non-negative values take the
    /// odd codes.
    JlsSpecial,
}

impl SignMapping {
    /// Map 'val' to its non-negative surrogate. The 32-bit input together
    /// with the 64-bit output makes every branch overflow-free.
    pub fn apply(self, val: i32) -> u64 {
        let val = i64::from(val);
        let mapped = match self {
            SignMapping::Normal => {
                if val <= 0 {
                    -2 * val
                } else {
                    2 * val - 1
                }
            }
            SignMapping::JlsRegular => {
                if val >= 0 {
                    2 * val
                } else {
                    -2 * val - 1
                }
            }
            SignMapping::JlsSpecial => {
                if val >= 0 {
                    2 * val + 1
                } else {
                    -2 * (val + 1)
                }
            }
        };
        mapped as u64
    }

    /// Look up a mapping by its command line name.
    pub fn from_name(name: &str) -> Option<SignMapping> {
        match name {
            "normal" => Some(SignMapping::Normal),
            "jls-regular" => Some(SignMapping::JlsRegular),
            "jls-special" => Some(SignMapping::JlsSpecial),
            _ => None,
        }
    }
}
