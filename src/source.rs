use std::io::BufRead;
use std::path::Path;

use crate::error::LoadError;

pub const VERTEX_MARKER: &str = ":vertex";
pub const FRAGMENT_MARKER: &str = ":fragment";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    /// compile order of the stages of a program
    pub const ALL: [Stage; 2] = [Stage::Vertex, Stage::Fragment];

    pub fn index(self) -> usize {
        match self {
            Stage::Vertex => 0,
            Stage::Fragment => 1,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Stage::Vertex => VERTEX_MARKER,
            Stage::Fragment => FRAGMENT_MARKER,
        }
    }

    /// shader type enum passed to `glCreateShader`
    pub fn gl_enum(self) -> u32 {
        match self {
            Stage::Vertex => glow::VERTEX_SHADER,
            Stage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    fn of_marker_line(line: &str) -> Option<Self> {
        // vertex is tested first, a line holding both markers switches to vertex
        Stage::ALL
            .into_iter()
            .find(|stage| line.contains(stage.marker()))
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Vertex => f.write_str("vertex"),
            Stage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Per-stage source text of a combined shader file.
///
/// A line containing [`VERTEX_MARKER`] or [`FRAGMENT_MARKER`] switches the
/// block the following lines go to; lines before the first marker are
/// dropped. Lines are split on `\n` only and kept byte for byte, so a CRLF
/// file keeps its `\r`. Each retained line ends with `\n`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageSources {
    pub vertex: String,
    pub fragment: String,
}

impl StageSources {
    pub fn get(&self, stage: Stage) -> &str {
        match stage {
            Stage::Vertex => &self.vertex,
            Stage::Fragment => &self.fragment,
        }
    }

    fn get_mut(&mut self, stage: Stage) -> &mut String {
        match stage {
            Stage::Vertex => &mut self.vertex,
            Stage::Fragment => &mut self.fragment,
        }
    }

    pub fn parse(text: &str) -> Self {
        let mut splitter = Splitter::default();
        for line in text.split_inclusive('\n') {
            splitter.push_line(line.strip_suffix('\n').unwrap_or(line));
        }
        splitter.sources
    }

    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut splitter = Splitter::default();
        for line in reader.split(b'\n') {
            let line = String::from_utf8(line?)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            splitter.push_line(&line);
        }
        Ok(splitter.sources)
    }

    /// Read and split the file at `path`.
    ///
    /// An unreadable file is an error, it never yields two empty blocks.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let read_error = |source| LoadError::SourceRead {
            path: path.to_path_buf(),
            source,
        };
        let file = std::fs::File::open(path).map_err(read_error)?;
        let sources = Self::from_reader(std::io::BufReader::new(file)).map_err(read_error)?;
        log::debug!(
            "split {}: {} vertex bytes, {} fragment bytes",
            path.display(),
            sources.vertex.len(),
            sources.fragment.len()
        );
        Ok(sources)
    }
}

#[derive(Default)]
struct Splitter {
    current: Option<Stage>,
    sources: StageSources,
}

impl Splitter {
    fn push_line(&mut self, line: &str) {
        if let Some(stage) = Stage::of_marker_line(line) {
            self.current = Some(stage);
            return;
        }
        if let Some(stage) = self.current {
            let block = self.sources.get_mut(stage);
            block.push_str(line);
            block.push('\n');
        }
    }
}
