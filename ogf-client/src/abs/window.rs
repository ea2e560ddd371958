//! SDL2 windows with an OpenGL context.
//!
//! This module defines the [`Window`] struct which owns the SDL context, the
//! native window, its OpenGL context and the event pump.

use std::sync::Arc;

use glow::HasContext;
use ogf_core::{config::WindowConfig, math::Color};
use sdl2::video::{GLProfile, SwapInterval, WindowPos};

use super::{Drawable, Event, Shader};
use crate::{Error, Result};

/// The native window together with its GL context. The context is declared
/// first so it is destroyed before the window.
struct Surface {
    gl_context: sdl2::video::GLContext,
    window: sdl2::video::Window,
}

/// A window with an OpenGL context.
///
/// After [`Window::close`] the window is gone: getters return `None`,
/// setters and drawing do nothing.
pub struct Window {
    surface: Option<Surface>,
    gl: Arc<glow::Context>,
    event_pump: sdl2::EventPump,
    _video: sdl2::VideoSubsystem,
    _sdl: sdl2::Sdl,
}

impl Window {
    /// Opens a centered window and makes its GL context current.
    pub fn create(config: &WindowConfig) -> Result<Self> {
        let sdl = sdl2::init().map_err(Error::Sdl)?;
        let video = sdl.video().map_err(Error::Sdl)?;

        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(config.gl_version[0], config.gl_version[1]);

        let mut builder = video.window(&config.title, config.width, config.height);
        builder.opengl().position_centered();
        if config.resizable {
            builder.resizable();
        }
        let window = builder.build()?;

        let gl_context = window.gl_create_context().map_err(Error::Sdl)?;
        window.gl_make_current(&gl_context).map_err(Error::Sdl)?;

        let interval = if config.vsync {
            SwapInterval::VSync
        } else {
            SwapInterval::Immediate
        };
        if let Err(err) = video.gl_set_swap_interval(interval) {
            log::warn!("Could not set swap interval: {}", err);
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| video.gl_get_proc_address(s) as *const _)
        };
        let gl = Arc::new(gl);
        let event_pump = sdl.event_pump().map_err(Error::Sdl)?;

        log::info!(
            "Opened window {:?} ({}x{}, OpenGL {}.{} core)",
            config.title,
            config.width,
            config.height,
            config.gl_version[0],
            config.gl_version[1]
        );

        let window = Self {
            surface: Some(Surface { gl_context, window }),
            gl,
            event_pump,
            _video: video,
            _sdl: sdl,
        };

        unsafe {
            window.gl.enable(glow::DEPTH_TEST);
            window
                .gl
                .viewport(0, 0, config.width as i32, config.height as i32);
        }
        window.set_clear_color(config.clear_color);

        Ok(window)
    }

    /// Destroys the native window and its GL context. Does nothing if it is
    /// already closed.
    ///
    /// Shaders, textures and mesh buffers created from [`Window::gl`] must be
    /// dropped before this is called. Once closed, the drawing methods on
    /// this type do nothing.
    pub fn close(&mut self) {
        if self.surface.take().is_some() {
            log::info!("Window closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.surface.is_some()
    }

    pub fn make_current_context(&self) -> Result<()> {
        let surface = self.surface.as_ref().ok_or(Error::WindowClosed)?;
        surface
            .window
            .gl_make_current(&surface.gl_context)
            .map_err(Error::Sdl)
    }

    /// Returns the next pending event, skipping ones OGF does not translate.
    pub fn poll_event(&mut self) -> Option<Event> {
        while let Some(event) = self.event_pump.poll_event() {
            if let Some(event) = Event::from_sdl(&event) {
                return Some(event);
            }
            log::trace!("Ignoring SDL event {:?}", event);
        }
        None
    }

    /// Blocks until an event OGF understands arrives.
    pub fn wait_event(&mut self) -> Event {
        loop {
            let event = self.event_pump.wait_event();
            if let Some(event) = Event::from_sdl(&event) {
                return event;
            }
            log::trace!("Ignoring SDL event {:?}", event);
        }
    }

    pub fn set_clear_color(&self, color: Color) {
        if !self.is_open() {
            return;
        }
        unsafe {
            self.gl.clear_color(color.r, color.g, color.b, color.a);
        }
    }

    /// Clears the color and depth buffers.
    pub fn clear(&self) {
        if !self.is_open() {
            return;
        }
        unsafe {
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    pub fn swap_buffers(&self) {
        if let Some(surface) = &self.surface {
            surface.window.gl_swap_window();
        }
    }

    /// Resizes the GL viewport, typically after [`Event::Resized`].
    pub fn set_viewport(&self, width: u32, height: u32) {
        if !self.is_open() {
            return;
        }
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn draw<D: Drawable + ?Sized>(&self, drawable: &D, shader: &Shader) {
        if self.is_open() {
            drawable.draw(self, shader);
        }
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        match &mut self.surface {
            Some(surface) => surface
                .window
                .set_title(title)
                .map_err(|e| Error::Sdl(e.to_string())),
            None => Ok(()),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.surface.as_ref().map(|s| s.window.title())
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> Result<()> {
        match &mut self.surface {
            Some(surface) => surface
                .window
                .set_size(width, height)
                .map_err(|e| Error::Sdl(e.to_string())),
            None => Ok(()),
        }
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(|s| s.window.size())
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        if let Some(surface) = &mut self.surface {
            surface
                .window
                .set_position(WindowPos::Positioned(x), WindowPos::Positioned(y));
        }
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        self.surface.as_ref().map(|s| s.window.position())
    }

    pub fn gl(&self) -> &Arc<glow::Context> {
        &self.gl
    }
}
