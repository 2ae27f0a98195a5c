//! draw a triangle whose vertices carry a position and an RGB color

use glow::HasContext;

use crate::backend::ShaderApi;
use crate::error::LoadError;
use crate::source::StageSources;

/// number of floats per vertex: xyz followed by rgb
pub const VTX_STRIDE: usize = 6;
const LOC_XYZ: u32 = 0;
const LOC_RGB: u32 = 1;

#[rustfmt::skip]
pub const TRIANGLE_VTX2XYZRGB: [f32; 18] = [
    -1.0, -1.0, 0.0, 1.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0, 1.0, 0.0,
    1.0, -1.0, 0.0, 0.0, 0.0, 1.0,
];

#[derive(Debug, thiserror::Error)]
pub enum DrawerError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("vertex data has {0} floats, not a multiple of {stride}", stride = VTX_STRIDE)]
    VertexLayout(usize),
    #[error("{0}")]
    Gl(String),
}

/// put `program` in `slot`, deleting the program it held before
fn replace_program<G: ShaderApi>(gl: &G, slot: &mut Option<G::Program>, program: G::Program) {
    if let Some(old) = slot.replace(program) {
        gl.delete_program(old);
    }
}

fn release_program<G: ShaderApi>(gl: &G, slot: &mut Option<G::Program>) {
    if let Some(program) = slot.take() {
        gl.delete_program(program);
    }
}

pub struct Drawer {
    pub program: Option<glow::Program>,
    vertex_array: Option<glow::VertexArray>,
    vertex_buffer: Option<glow::Buffer>,
    num_vtx: usize,
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawer {
    pub fn new() -> Self {
        Drawer {
            program: None,
            vertex_array: None,
            vertex_buffer: None,
            num_vtx: 0,
        }
    }

    /// the shader has to put position at location 0 and color at location 1
    pub fn load_program(
        &mut self,
        gl: &glow::Context,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), DrawerError> {
        let program = crate::load_program(gl, path)?;
        replace_program(gl, &mut self.program, program);
        Ok(())
    }

    pub fn compile_program(
        &mut self,
        gl: &glow::Context,
        sources: &StageSources,
    ) -> Result<(), DrawerError> {
        let program = crate::compile_program(gl, sources)?;
        replace_program(gl, &mut self.program, program);
        Ok(())
    }

    pub fn set_vtx2xyzrgb(
        &mut self,
        gl: &glow::Context,
        vtx2xyzrgb: &[f32],
    ) -> Result<(), DrawerError> {
        if vtx2xyzrgb.len() % VTX_STRIDE != 0 {
            return Err(DrawerError::VertexLayout(vtx2xyzrgb.len()));
        }
        unsafe {
            let vertex_array = match self.vertex_array {
                Some(vao) => vao,
                None => gl.create_vertex_array().map_err(DrawerError::Gl)?,
            };
            self.vertex_array = Some(vertex_array);
            let vbo = match self.vertex_buffer {
                Some(vbo) => vbo,
                None => gl.create_buffer().map_err(DrawerError::Gl)?,
            };
            self.vertex_buffer = Some(vbo);

            gl.bind_vertex_array(Some(vertex_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vtx2xyzrgb),
                glow::STATIC_DRAW,
            );
            let stride = (VTX_STRIDE * std::mem::size_of::<f32>()) as i32;
            gl.enable_vertex_attrib_array(LOC_XYZ);
            gl.vertex_attrib_pointer_f32(LOC_XYZ, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(LOC_RGB);
            gl.vertex_attrib_pointer_f32(
                LOC_RGB,
                3,
                glow::FLOAT,
                false,
                stride,
                3 * std::mem::size_of::<f32>() as i32,
            );
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
        self.num_vtx = vtx2xyzrgb.len() / VTX_STRIDE;
        log::debug!("uploaded {} vertices", self.num_vtx);
        Ok(())
    }

    pub fn num_vtx(&self) -> usize {
        self.num_vtx
    }

    pub fn paint(&self, gl: &glow::Context) {
        if self.program.is_none() || self.vertex_array.is_none() {
            return;
        }
        unsafe {
            gl.use_program(self.program);
            gl.bind_vertex_array(self.vertex_array);
            gl.draw_arrays(glow::TRIANGLES, 0, self.num_vtx as i32);
            gl.bind_vertex_array(None);
        }
    }

    pub fn destroy(&mut self, gl: &glow::Context) {
        release_program(gl, &mut self.program);
        unsafe {
            if let Some(vao) = self.vertex_array.take() {
                gl.delete_vertex_array(vao);
            }
            if let Some(vbo) = self.vertex_buffer.take() {
                gl.delete_buffer(vbo);
            }
        }
        self.num_vtx = 0;
    }
}
