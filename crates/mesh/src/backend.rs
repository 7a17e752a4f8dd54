//! The seam between mesh generation and whatever draws the meshes.

use crate::builder::FrameMeshes;

/// Something that can present one frame of vertex data.
///
/// Implementations own their output surface and any per-surface state. The
/// frame loop rebuilds the meshes every frame and hands them over by
/// reference; buffers are expected to be consumed immediately.
pub trait RenderBackend {
    type Error;

    /// Draw tiles, then borders, then the farmer marker.
    fn present(&mut self, meshes: &FrameMeshes) -> Result<(), Self::Error>;
}
