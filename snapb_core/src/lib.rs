pub mod decode;
pub mod encode;
pub mod error;
pub mod format;

pub use decode::{decompress, decompress_to_vec, uncompressed_len};
pub use encode::{compress, compress_to_vec};
pub use error::Error;
pub use format::{max_compressed_len, Element, MAX_INPUT_LEN};
