use crate::backend::ShaderApi;
use crate::error::LoadError;
use crate::source::Stage;

/// A compiled, link-ready stage.
///
/// The driver object is deleted when the guard is dropped, so a stage that
/// never reaches [`crate::link_program`] is still released.
pub struct CompiledStage<'gl, G: ShaderApi> {
    gl: &'gl G,
    stage: Stage,
    shader: G::Shader,
}

impl<G: ShaderApi> CompiledStage<'_, G> {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn shader(&self) -> G::Shader {
        self.shader
    }
}

impl<G: ShaderApi> Drop for CompiledStage<'_, G> {
    fn drop(&mut self) {
        log::trace!("release {} shader {:?}", self.stage, self.shader);
        self.gl.delete_shader(self.shader);
    }
}

impl<G: ShaderApi> std::fmt::Debug for CompiledStage<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledStage")
            .field("stage", &self.stage)
            .field("shader", &self.shader)
            .finish()
    }
}

pub fn compile_stage<'gl, G: ShaderApi>(
    gl: &'gl G,
    stage: Stage,
    source: &str,
) -> Result<CompiledStage<'gl, G>, LoadError> {
    let shader = gl
        .create_shader(stage)
        .map_err(|msg| LoadError::compile(stage, msg))?;
    // from here on the guard owns the shader object
    let compiled = CompiledStage { gl, stage, shader };
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.shader_compile_status(shader) {
        let err = LoadError::compile(stage, gl.shader_info_log(shader));
        log::warn!("{err}");
        return Err(err);
    }
    log::debug!("compiled {stage} shader {shader:?}");
    Ok(compiled)
}
