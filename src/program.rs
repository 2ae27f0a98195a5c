use std::path::Path;

use crate::backend::ShaderApi;
use crate::error::LoadError;
use crate::source::{Stage, StageSources};
use crate::stage::{compile_stage, CompiledStage};

/// Link `stages` into a new program.
///
/// The stages are detached and released whatever the outcome. A program
/// that fails to link is deleted, only a linked program is handed out.
pub fn link_program<G: ShaderApi>(
    gl: &G,
    stages: Vec<CompiledStage<'_, G>>,
) -> Result<G::Program, LoadError> {
    let program = gl.create_program().map_err(LoadError::link)?;
    for stage in &stages {
        gl.attach_shader(program, stage.shader());
    }
    gl.link_program(program);
    for stage in &stages {
        gl.detach_shader(program, stage.shader());
    }
    drop(stages);

    if !gl.program_link_status(program) {
        let err = LoadError::link(gl.program_info_log(program));
        gl.delete_program(program);
        log::warn!("{err}");
        return Err(err);
    }
    log::info!("linked program {program:?}");
    Ok(program)
}

/// Compile the vertex then the fragment block and link them.
pub fn compile_program<G: ShaderApi>(
    gl: &G,
    sources: &StageSources,
) -> Result<G::Program, LoadError> {
    let stages = Stage::ALL
        .into_iter()
        .map(|stage| compile_stage(gl, stage, sources.get(stage)))
        .collect::<Result<Vec<_>, _>>()?;
    link_program(gl, stages)
}

/// Read the combined shader file at `path` and build a program from it.
pub fn load_program<G: ShaderApi>(gl: &G, path: impl AsRef<Path>) -> Result<G::Program, LoadError> {
    let path = path.as_ref();
    log::debug!("loading program from {}", path.display());
    let sources = StageSources::from_file(path)?;
    compile_program(gl, &sources)
}
