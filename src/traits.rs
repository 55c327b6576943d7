/// Per-vertex display colors of surface data, as `u8` values in vertex order.
pub trait VertexColor {
    /// 3 values (R, G, B) per vertex.
    fn vertex_color_rgb(&self) -> Vec<u8>;
    /// 4 values (R, G, B, A) per vertex.
    fn vertex_color_rgba(&self) -> Vec<u8>;
}
