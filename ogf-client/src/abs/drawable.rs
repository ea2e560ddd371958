use super::{Shader, Window};

/// Anything that can render itself into a [`Window`] with a [`Shader`].
///
/// Usually invoked through [`Window::draw`].
pub trait Drawable {
    fn draw(&self, window: &Window, shader: &Shader);
}
