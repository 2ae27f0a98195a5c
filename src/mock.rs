use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use crate::backend::ShaderApi;
use crate::source::Stage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MockShader(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MockProgram(pub u32);

#[derive(Default)]
pub struct MockGl {
    /// compilation of this stage fails with the given log
    pub fail_compile: Option<(Stage, String)>,
    /// linking fails with the given log
    pub fail_link: Option<String>,
    pub fail_create_shader: bool,
    pub fail_create_program: bool,
    pub next_id: Cell<u32>,
    pub stages: RefCell<BTreeMap<u32, Stage>>,
    pub sources: RefCell<BTreeMap<u32, String>>,
    pub compiled: RefCell<BTreeSet<u32>>,
    pub programs: RefCell<BTreeSet<u32>>,
    pub linked: RefCell<BTreeSet<u32>>,
    pub attached: RefCell<BTreeMap<u32, Vec<u32>>>,
    pub calls: RefCell<Vec<String>>,
}

impl MockGl {
    pub fn new() -> Self {
        Self::default()
    }

    fn id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    pub fn live_shaders(&self) -> usize {
        self.stages.borrow().len()
    }

    pub fn live_programs(&self) -> usize {
        self.programs.borrow().len()
    }

    pub fn source_of(&self, shader: MockShader) -> Option<String> {
        self.sources.borrow().get(&shader.0).cloned()
    }

    pub fn attached_to(&self, program: MockProgram) -> Vec<u32> {
        self.attached
            .borrow()
            .get(&program.0)
            .cloned()
            .unwrap_or_default()
    }

    /// calls whose name starts with `prefix`, in order
    pub fn calls_named(&self, prefix: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .cloned()
            .collect()
    }
}

impl ShaderApi for MockGl {
    type Shader = MockShader;
    type Program = MockProgram;

    fn create_shader(&self, stage: Stage) -> Result<MockShader, String> {
        if self.fail_create_shader {
            return Err("out of shader objects".to_string());
        }
        let id = self.id();
        self.stages.borrow_mut().insert(id, stage);
        self.record(format!("create_shader {stage} {id}"));
        Ok(MockShader(id))
    }

    fn shader_source(&self, shader: MockShader, source: &str) {
        self.sources.borrow_mut().insert(shader.0, source.to_string());
    }

    fn compile_shader(&self, shader: MockShader) {
        self.record(format!("compile_shader {}", shader.0));
        let stage = self.stages.borrow()[&shader.0];
        let fails = matches!(&self.fail_compile, Some((s, _)) if *s == stage);
        if !fails {
            self.compiled.borrow_mut().insert(shader.0);
        }
    }

    fn shader_compile_status(&self, shader: MockShader) -> bool {
        self.compiled.borrow().contains(&shader.0)
    }

    fn shader_info_log(&self, shader: MockShader) -> String {
        if self.shader_compile_status(shader) {
            return String::new();
        }
        self.fail_compile
            .as_ref()
            .map(|(_, log)| log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: MockShader) {
        self.record(format!("delete_shader {}", shader.0));
        assert!(
            self.stages.borrow_mut().remove(&shader.0).is_some(),
            "double delete of shader {}",
            shader.0
        );
        self.compiled.borrow_mut().remove(&shader.0);
    }

    fn create_program(&self) -> Result<MockProgram, String> {
        if self.fail_create_program {
            return Err("out of program objects".to_string());
        }
        let id = self.id();
        self.programs.borrow_mut().insert(id);
        self.record(format!("create_program {id}"));
        Ok(MockProgram(id))
    }

    fn attach_shader(&self, program: MockProgram, shader: MockShader) {
        self.record(format!("attach_shader {} {}", program.0, shader.0));
        self.attached
            .borrow_mut()
            .entry(program.0)
            .or_default()
            .push(shader.0);
    }

    fn detach_shader(&self, program: MockProgram, shader: MockShader) {
        self.record(format!("detach_shader {} {}", program.0, shader.0));
        if let Some(shaders) = self.attached.borrow_mut().get_mut(&program.0) {
            shaders.retain(|&s| s != shader.0);
        }
    }

    fn link_program(&self, program: MockProgram) {
        self.record(format!("link_program {}", program.0));
        let attached = self.attached_to(program);
        let compiled = self.compiled.borrow();
        let all_compiled = attached.iter().all(|s| compiled.contains(s));
        if self.fail_link.is_none() && all_compiled && attached.len() == 2 {
            self.linked.borrow_mut().insert(program.0);
        }
    }

    fn program_link_status(&self, program: MockProgram) -> bool {
        self.linked.borrow().contains(&program.0)
    }

    fn program_info_log(&self, program: MockProgram) -> String {
        if self.program_link_status(program) {
            return String::new();
        }
        self.fail_link.clone().unwrap_or_default()
    }

    fn delete_program(&self, program: MockProgram) {
        self.record(format!("delete_program {}", program.0));
        assert!(
            self.programs.borrow_mut().remove(&program.0),
            "double delete of program {}",
            program.0
        );
        self.linked.borrow_mut().remove(&program.0);
        self.attached.borrow_mut().remove(&program.0);
    }
}
