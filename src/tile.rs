/// Number of bytes defining one tile (8 rows * 2 bit-planes).
pub const TILE_BYTES: usize = 16;
/// Tile width and height in pixels.
pub const TILE_DIM: usize = 8;

/// An 8x8 bitmap decoded from 2bpp planar tile data.
///
/// Row j of a tile is defined by two bytes: byte 2j holds the low bit
/// (plane 0) and byte 2j+1 the high bit (plane 1) of each pixel in the row.
/// Column i takes bit (7-i) of both bytes, so column 0 is the MSB:
///
///   plane 0:  0 1 1 1 0 1 0 1
///   plane 1:  0 0 0 0 1 0 1 1
///   pixel:    0 1 1 1 2 1 2 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub pixels: [[u8; TILE_DIM]; TILE_DIM],
}

impl Tile {
    /// Unpacks 16 bytes of planar data into per-pixel palette indices (0-3).
    pub fn decode(raw: &[u8; TILE_BYTES]) -> Self {
        let mut pixels = [[0u8; TILE_DIM]; TILE_DIM];
        for (j, row) in pixels.iter_mut().enumerate() {
            let plane0 = raw[j * 2];
            let plane1 = raw[j * 2 + 1];
            for (i, px) in row.iter_mut().enumerate() {
                let lo = (plane0 >> (7 - i)) & 1;
                let hi = (plane1 >> (7 - i)) & 1;
                *px = lo | (hi << 1);
            }
        }
        Tile { pixels }
    }

    /// Renders the tile as 8 rows of 8 characters: 'x' for any nonzero
    /// palette index, space for zero. Palette indices are not distinguished
    /// visually; this is a shape viewer, not a palette renderer.
    pub fn render(&self) -> [String; TILE_DIM] {
        std::array::from_fn(|j| {
            self.pixels[j]
                .iter()
                .map(|&px| if px != 0 { 'x' } else { ' ' })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes_decode_blank() {
        let tile = Tile::decode(&[0u8; TILE_BYTES]);
        assert_eq!(tile.pixels, [[0u8; TILE_DIM]; TILE_DIM]);
        for line in tile.render() {
            assert_eq!(line, "        ");
        }
    }

    #[test]
    fn all_ones_decode_solid() {
        let tile = Tile::decode(&[0xffu8; TILE_BYTES]);
        assert_eq!(tile.pixels, [[3u8; TILE_DIM]; TILE_DIM]);
        for line in tile.render() {
            assert_eq!(line, "xxxxxxxx");
        }
    }

    #[test]
    fn known_row_vector() {
        let mut raw = [0u8; TILE_BYTES];
        raw[0] = 0b0111_0101; // plane 0, row 0
        raw[1] = 0b0000_1011; // plane 1, row 0
        let tile = Tile::decode(&raw);
        assert_eq!(tile.pixels[0], [0, 1, 1, 1, 2, 1, 2, 3]);
        assert_eq!(tile.render()[0], " xxxxxxx");
    }

    #[test]
    fn row_bytes_are_interleaved() {
        // one byte per plane per row: row 3 must come from bytes 6 and 7
        let mut raw = [0u8; TILE_BYTES];
        raw[6] = 0x80;
        raw[7] = 0x01;
        let tile = Tile::decode(&raw);
        assert_eq!(tile.pixels[3], [1, 0, 0, 0, 0, 0, 0, 2]);
        for (j, row) in tile.pixels.iter().enumerate() {
            if j != 3 {
                assert_eq!(*row, [0u8; TILE_DIM]);
            }
        }
    }

    #[test]
    fn decode_is_pure() {
        let raw: [u8; TILE_BYTES] = [
            0x3c, 0x7e, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7e, 0x5e, 0x7e, 0x0a, 0x7c, 0x56,
            0x38, 0x7c,
        ];
        assert_eq!(Tile::decode(&raw), Tile::decode(&raw));
        assert_eq!(Tile::decode(&raw).render(), Tile::decode(&raw).render());
    }

    #[test]
    fn render_shape_and_charset() {
        let raw: [u8; TILE_BYTES] = [
            0xa5, 0x5a, 0x00, 0xff, 0xff, 0x00, 0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0,
            0x01, 0x02,
        ];
        let tile = Tile::decode(&raw);
        for row in &tile.pixels {
            for &px in row {
                assert!(px <= 3);
            }
        }
        let lines = tile.render();
        assert_eq!(lines.len(), TILE_DIM);
        for line in &lines {
            assert_eq!(line.chars().count(), TILE_DIM);
            assert!(line.chars().all(|c| c == ' ' || c == 'x'));
        }
    }
}
