use crate::domain::ports::Storage;
use crate::utils::error::{DetectError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The subset of the nbformat document the tools care about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub cell_type: CellType,
    #[serde(default)]
    pub source: CellSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Code,
    Markdown,
    #[serde(other)]
    Other,
}

impl Default for CellType {
    fn default() -> Self {
        CellType::Other
    }
}

/// nbformat allows `source` to be either a list of lines or one multi-line
/// string. Each list element is one line, whether or not it keeps its
/// trailing newline.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Lines(Vec<String>),
    Text(String),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Lines(Vec::new())
    }
}

impl CellSource {
    pub fn lines(&self) -> Vec<String> {
        match self {
            CellSource::Lines(lines) => lines
                .iter()
                .map(|line| {
                    line.strip_suffix("\r\n")
                        .or_else(|| line.strip_suffix('\n'))
                        .unwrap_or(line)
                        .to_string()
                })
                .collect(),
            CellSource::Text(text) => text.lines().map(str::to_string).collect(),
        }
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

impl Notebook {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let notebook: Notebook = serde_json::from_str(content)?;
        tracing::debug!(cells = notebook.cells.len(), "parsed notebook");
        Ok(notebook)
    }

    pub fn from_file<S: Storage>(storage: &S, path: &Path) -> Result<Self> {
        let content = storage.read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| match e {
            DetectError::SerializationError(inner) => DetectError::NotebookError {
                message: format!("{}: {}", path.display(), inner),
            },
            other => other,
        })
    }

    /// Code cells paired with their index among all cells.
    pub fn code_cells(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.cell_type == CellType::Code)
    }

    /// Flattens the notebook into a Python script. Code cells are copied as
    /// is, markdown becomes `# ` comments, and every converted cell is
    /// followed by a blank line. Other cell types are dropped.
    pub fn to_python_script(&self) -> String {
        let mut script_lines: Vec<String> = Vec::new();

        for cell in &self.cells {
            match cell.cell_type {
                CellType::Code => {
                    script_lines.extend(cell.source.lines());
                    script_lines.push(String::new());
                }
                CellType::Markdown => {
                    script_lines.extend(cell.source.lines().into_iter().map(|line| format!("# {}", line)));
                    script_lines.push(String::new());
                }
                CellType::Other => {}
            }
        }

        script_lines.join("\n")
    }
}

/// Path of the script written next to `notebook_path`.
pub fn script_path_for(notebook_path: &Path) -> PathBuf {
    match notebook_path.extension().and_then(|ext| ext.to_str()) {
        Some("ipynb") => notebook_path.with_extension("py"),
        _ => {
            let mut name = notebook_path.as_os_str().to_owned();
            name.push(".py");
            PathBuf::from(name)
        }
    }
}

/// Converts the notebook at `notebook_path` and writes the script beside it.
pub fn convert_notebook<S: Storage>(storage: &S, notebook_path: &Path) -> Result<PathBuf> {
    let notebook = Notebook::from_file(storage, notebook_path)?;
    let script = notebook.to_python_script();
    let output_path = script_path_for(notebook_path);

    storage.write_file(&output_path, script.as_bytes())?;
    tracing::info!(
        notebook = %notebook_path.display(),
        script = %output_path.display(),
        cells = notebook.cells.len(),
        "notebook converted"
    );

    Ok(output_path)
}
