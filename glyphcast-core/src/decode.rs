use crate::compress;
use crate::error::{Error, Result};
use crate::format::{TileHeader, TileRecord, HEADER_SIZE};

/// Parse a tile-grid byte stream back into its header and records.
///
/// Accepts both gzip-framed and raw streams; the gzip magic decides. The
/// payload must hold exactly the number of records the header declares.
pub fn read_tiles(data: &[u8]) -> Result<(TileHeader, Vec<TileRecord>)> {
    let inflated;
    let data = if compress::is_gzip(data) {
        inflated = compress::decompress(data)?;
        &inflated[..]
    } else {
        data
    };

    if data.len() < HEADER_SIZE {
        return Err(Error::Truncated {
            expected: HEADER_SIZE,
            actual: data.len(),
        });
    }
    let header_buf: [u8; HEADER_SIZE] = data[..HEADER_SIZE].try_into().unwrap();
    let header = TileHeader::from_bytes(&header_buf)?;
    if header.rows <= 0 || header.cols <= 0 {
        return Err(Error::InvalidDimension {
            cols: i64::from(header.cols),
            rows: i64::from(header.rows),
        });
    }

    let count = header.rows as usize * header.cols as usize;
    let expected = HEADER_SIZE + count * TileRecord::SIZE;
    if data.len() != expected {
        return Err(Error::Truncated {
            expected,
            actual: data.len(),
        });
    }

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let off = HEADER_SIZE + i * TileRecord::SIZE;
        records.push(TileRecord::from_bytes(&data[off..off + TileRecord::SIZE]));
    }
    Ok((header, records))
}
