//! OpenGL shader programs.
//!
//! A [`Shader`] owns one linked program and can be recompiled at any time.
//! The program handle sits behind a mutex, so a recompile never races with
//! code that is binding the program or setting uniforms.

use std::{fmt, path::Path, sync::Arc};

use glam::{Mat4, Vec2, Vec3, Vec4};
use glow::HasContext;
use ogf_core::{io::file_content, math::Color};
use parking_lot::Mutex;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderType {
    Vertex,
    Geometry,
    Fragment,
}

impl ShaderType {
    fn gl_enum(self) -> u32 {
        match self {
            ShaderType::Vertex => glow::VERTEX_SHADER,
            ShaderType::Geometry => glow::GEOMETRY_SHADER,
            ShaderType::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderType::Vertex => "vertex",
            ShaderType::Geometry => "geometry",
            ShaderType::Fragment => "fragment",
        })
    }
}

/// A single compiled stage. Deleted once it has been linked into a program.
struct ShaderStage<'a> {
    gl: &'a glow::Context,
    id: glow::Shader,
}

impl<'a> ShaderStage<'a> {
    fn compile(gl: &'a glow::Context, stage: ShaderType, source: &str) -> Result<Self> {
        unsafe {
            let shader = gl.create_shader(stage.gl_enum()).map_err(Error::Gl)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(Error::ShaderCompile { stage, log });
            }

            Ok(Self { gl, id: shader })
        }
    }
}

impl Drop for ShaderStage<'_> {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents a uniform variable in a shader program.
pub trait Uniform {
    /// Sets the value of the uniform variable in the given shader program.
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str);
}

impl Uniform for bool {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_1_i32(Some(&loc), *self as i32);
            }
        }
    }
}

impl Uniform for f32 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_1_f32(Some(&loc), *self);
            }
        }
    }
}

impl Uniform for i32 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_1_i32(Some(&loc), *self);
            }
        }
    }
}

impl Uniform for Vec2 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_2_f32(Some(&loc), self.x, self.y);
            }
        }
    }
}

impl Uniform for Vec3 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_3_f32(Some(&loc), self.x, self.y, self.z);
            }
        }
    }
}

impl Uniform for Vec4 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_4_f32(Some(&loc), self.x, self.y, self.z, self.w);
            }
        }
    }
}

impl Uniform for Color {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        Vec4::from(*self).set_uniform(gl, program, name);
    }
}

impl Uniform for Mat4 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_matrix_4_f32_slice(Some(&loc), false, self.as_ref());
            }
        }
    }
}

impl<T: Uniform> Uniform for &T {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        (*self).set_uniform(gl, program, name);
    }
}

/// An OpenGL shader program that can be (re)loaded from memory or files.
pub struct Shader {
    gl: Arc<glow::Context>,
    program: Mutex<Option<glow::Program>>,
}

impl Shader {
    /// Creates an empty shader. Nothing is bound until one of the `load_*`
    /// methods succeeds.
    pub fn new(gl: &Arc<glow::Context>) -> Self {
        Self {
            gl: Arc::clone(gl),
            program: Mutex::new(None),
        }
    }

    /// Loads a program made of a single stage.
    pub fn load_from_memory_single(&self, source: &str, stage: ShaderType) -> Result<()> {
        self.compile(&[(stage, source)])
    }

    /// Loads a vertex + fragment program.
    pub fn load_from_memory(&self, vertex: &str, fragment: &str) -> Result<()> {
        self.compile(&[(ShaderType::Vertex, vertex), (ShaderType::Fragment, fragment)])
    }

    /// Loads a vertex + geometry + fragment program.
    pub fn load_from_memory_with_geometry(
        &self,
        vertex: &str,
        geometry: &str,
        fragment: &str,
    ) -> Result<()> {
        self.compile(&[
            (ShaderType::Vertex, vertex),
            (ShaderType::Geometry, geometry),
            (ShaderType::Fragment, fragment),
        ])
    }

    pub fn load_from_file_single(&self, path: impl AsRef<Path>, stage: ShaderType) -> Result<()> {
        let source = file_content(path)?;
        self.load_from_memory_single(&source, stage)
    }

    pub fn load_from_file(
        &self,
        vertex: impl AsRef<Path>,
        fragment: impl AsRef<Path>,
    ) -> Result<()> {
        let vertex = file_content(vertex)?;
        let fragment = file_content(fragment)?;
        self.load_from_memory(&vertex, &fragment)
    }

    pub fn load_from_file_with_geometry(
        &self,
        vertex: impl AsRef<Path>,
        geometry: impl AsRef<Path>,
        fragment: impl AsRef<Path>,
    ) -> Result<()> {
        let vertex = file_content(vertex)?;
        let geometry = file_content(geometry)?;
        let fragment = file_content(fragment)?;
        self.load_from_memory_with_geometry(&vertex, &geometry, &fragment)
    }

    /// Compiles and links `stages`, replacing the current program.
    ///
    /// The old program is deleted before the new one is built, so on failure
    /// the shader is left empty.
    fn compile(&self, stages: &[(ShaderType, &str)]) -> Result<()> {
        let mut current = self.program.lock();
        let gl: &glow::Context = &self.gl;

        unsafe {
            if let Some(old) = current.take() {
                gl.delete_program(old);
            }

            let program = gl.create_program().map_err(Error::Gl)?;

            let mut compiled = Vec::with_capacity(stages.len());
            for &(stage, source) in stages {
                match ShaderStage::compile(gl, stage, source) {
                    Ok(shader) => compiled.push(shader),
                    Err(err) => {
                        gl.delete_program(program);
                        return Err(err);
                    }
                }
            }

            for shader in &compiled {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            for shader in &compiled {
                gl.detach_shader(program, shader.id);
            }

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(Error::ShaderLink(log));
            }

            gl.flush();
            *current = Some(program);
        }

        log::debug!("Linked shader program with {} stage(s)", stages.len());
        Ok(())
    }

    /// Returns the underlying OpenGL program, if one is loaded.
    pub fn native_handle(&self) -> Option<glow::Program> {
        *self.program.lock()
    }

    pub fn is_loaded(&self) -> bool {
        self.program.lock().is_some()
    }

    /// Binds the shader program for use. Unbinds if nothing is loaded.
    pub fn use_program(&self) {
        let program = self.program.lock();
        unsafe {
            self.gl.use_program(*program);
        }
    }

    /// Sets a uniform variable in the shader program.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        if let Some(program) = *self.program.lock() {
            value.set_uniform(&self.gl, program, name);
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        if let Some(program) = self.program.get_mut().take() {
            unsafe {
                self.gl.delete_program(program);
            }
        }
    }
}
