use crate::View;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render backend I/O failed")]
    Io(#[from] std::io::Error),
}

/// Presents composed view trees. GPU backends turn the tree into pixels; the
/// devtools text backend prints it.
pub trait RenderBackend {
    fn frame(&mut self, root: &View) -> Result<(), RenderError>;
}
