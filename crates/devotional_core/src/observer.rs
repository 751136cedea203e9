use crate::render::DisplayModel;

/// Hook run after every render, for enhancements such as scripture
/// reference tagging. Front ends install one if they have it.
pub trait RenderObserver {
    fn after_render(&mut self, view: &DisplayModel);
}
