use wriggle_engine::coords::{Vec2, Viewport};
use wriggle_engine::render::RibbonMesh;

use crate::gesture::Gesture;

/// Rebuilds `mesh` with the triangle-strip vertices for one gesture.
///
/// Each quad contributes its 4 corners in strip order. A quad crossing a
/// vertical canvas edge is re-emitted at ±width and one crossing a
/// horizontal edge at ±height, so the ribbon appears to continue across the
/// opposite edge. Corner crossings are duplicated per axis only; the
/// diagonal copy is not emitted, which leaves a visible seam when a quad
/// straddles a canvas corner.
///
/// A non-existing gesture, or one compiled from too few points, produces an
/// empty mesh.
pub fn build_mesh(gesture: &Gesture, canvas: Viewport, mesh: &mut RibbonMesh) {
    mesh.clear();

    if !gesture.exists() {
        return;
    }

    for quad in gesture.quads() {
        push_corners(mesh, &quad.corners, Vec2::zero());

        if quad.cross.horizontal() {
            push_corners(mesh, &quad.corners, Vec2::new(canvas.width, 0.0));
            push_corners(mesh, &quad.corners, Vec2::new(-canvas.width, 0.0));
        }

        if quad.cross.vertical() {
            push_corners(mesh, &quad.corners, Vec2::new(0.0, canvas.height));
            push_corners(mesh, &quad.corners, Vec2::new(0.0, -canvas.height));
        }
    }
}

fn push_corners(mesh: &mut RibbonMesh, corners: &[Vec2; 4], offset: Vec2) {
    for &corner in corners {
        mesh.push(corner + offset);
    }
}
