use crate::Grid;

pub const BYTES_IN_PIXEL: usize = 4;

/// Live cells are transparent so that the background shows through.
pub const ALIVE_RGBA: [u8; 4] = [0, 0, 0, 0];
pub const DEAD_RGBA: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

/// Renders the field into a row-major RGBA8 image,
/// every cell becomes a `cell_width x cell_height` block of pixels.
pub fn render_to_pixels(grid: &Grid, cell_width: usize, cell_height: usize) -> Vec<u8> {
    let mut pixels = vec![];
    render_into(grid, cell_width, cell_height, &mut pixels);
    pixels
}

/// Same as [`render_to_pixels`], reusing the allocation of `dst`.
///
/// `dst` is resized to `width * cell_width * height * cell_height * 4` bytes.
pub fn render_into(grid: &Grid, cell_width: usize, cell_height: usize, dst: &mut Vec<u8>) {
    assert!(cell_width >= 1 && cell_height >= 1);

    let (width, height) = grid.size();
    let line_len = width * cell_width * BYTES_IN_PIXEL;
    dst.resize(line_len * height * cell_height, 0);

    for (py, line) in dst.chunks_exact_mut(line_len).enumerate() {
        let y = (py / cell_height) as i64;
        for (px, pixel) in line.chunks_exact_mut(BYTES_IN_PIXEL).enumerate() {
            let color = if grid.get((px / cell_width) as i64, y) {
                ALIVE_RGBA
            } else {
                DEAD_RGBA
            };
            pixel.copy_from_slice(&color);
        }
    }
}
