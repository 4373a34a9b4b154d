use cairo::{Context, ImageSurface};

pub(crate) fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

/// Alpha channel of the pixel at (x, y) on an ARGB32 surface.
pub(crate) fn pixel_alpha(surface: &mut ImageSurface, x: usize, y: usize) -> u8 {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().expect("no outstanding borrows on the surface");
    let offset = y * stride + x * 4;
    let pixel = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (pixel >> 24) as u8
}
