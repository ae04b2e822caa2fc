use super::*;

/// Something that can draw polylines, e.g. a debug overlay.
pub trait LineRenderer {
    fn draw_line(&mut self, points: &[(f32, f32)], width: f32);
}

impl<S> QuadTree<S> {
    /// Outlines every leaf that currently holds at least one object.
    pub fn render<R: LineRenderer + ?Sized>(&self, renderer: &mut R, width: f32) {
        for leaf in self.leaves().filter(|leaf| leaf.object_count() > 0) {
            let extent = leaf.extent();
            let outline = [
                extent.top_left(),
                extent.top_right(),
                extent.bottom_right(),
                extent.bottom_left(),
                extent.top_left(),
            ];
            renderer.draw_line(&outline, width);
        }
    }
}
