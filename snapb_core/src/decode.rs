use crate::error::Error;
use crate::format::{read_uvarint, Element};

/// Read the uncompressed length a block declares, without decoding it.
///
/// Parses only the leading varint; the element stream is untouched. This is
/// how a caller sizes (or refuses to size) the output buffer before paying
/// for a full [`decompress`].
pub fn uncompressed_len(src: &[u8]) -> Result<usize, Error> {
    let (declared, _) = read_uvarint(src)?;
    Ok(declared as usize)
}

/// Decompress the block in `src` into `dst`, returning the number of bytes
/// produced.
///
/// The operation is all-or-nothing: on any error the contents of `dst` are
/// unspecified and nothing useful was produced. `dst` only needs to hold the
/// declared length, not its worst case.
pub fn decompress(src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
    let (declared, mut ip) = read_uvarint(src)?;
    let declared = declared as usize;
    if declared > dst.len() {
        return Err(Error::DeclaredLengthTooLarge {
            declared: declared as u64,
            capacity: dst.len() as u64,
        });
    }

    let out = &mut dst[..declared];
    let mut op = 0usize;

    while ip < src.len() {
        let (element, consumed) = Element::parse(&src[ip..])?;
        ip += consumed;
        match element {
            Element::Literal { len } => {
                if len > src.len() - ip {
                    return Err(Error::MalformedElement);
                }
                if len > out.len() - op {
                    return Err(Error::LengthMismatch {
                        declared: declared as u64,
                        produced: (op + len) as u64,
                    });
                }
                out[op..op + len].copy_from_slice(&src[ip..ip + len]);
                ip += len;
                op += len;
            }
            Element::Copy { distance, len } => {
                if distance == 0 || distance > op {
                    return Err(Error::InvalidReference {
                        distance: distance as u64,
                        produced: op as u64,
                    });
                }
                if len > out.len() - op {
                    return Err(Error::LengthMismatch {
                        declared: declared as u64,
                        produced: (op + len) as u64,
                    });
                }
                // Byte at a time: when distance < len the source region is
                // still being written as the copy proceeds, and that replay
                // is exactly how runs are encoded.
                let mut from = op - distance;
                for _ in 0..len {
                    out[op] = out[from];
                    op += 1;
                    from += 1;
                }
            }
        }
    }

    if op != declared {
        return Err(Error::LengthMismatch {
            declared: declared as u64,
            produced: op as u64,
        });
    }
    Ok(op)
}

/// Decompress the block in `src` into a fresh `Vec` sized from its header.
///
/// Callers that cannot trust `src` should check [`uncompressed_len`] against
/// their own capacity first; this allocates whatever the header declares.
pub fn decompress_to_vec(src: &[u8]) -> Result<Vec<u8>, Error> {
    let mut dst = vec![0u8; uncompressed_len(src)?];
    decompress(src, &mut dst)?;
    Ok(dst)
}
