use std::io;

use serde::{Deserialize, Serialize};

pub mod vina;

/// [Template] for the fixed portion of a docking parameter file. Per-job
/// fields are filled in by [Program::build_input]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub header: String,
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Self {
            header: String::from(s),
        }
    }
}

/// the parsed outcome of one docking run
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramResult {
    /// best binding affinity in kcal/mol, the first row of the result table
    pub best_affinity: f64,

    /// number of binding modes reported
    pub modes: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgramError {
    FileNotFound(String),
    ErrorInOutput(String),
    AffinityNotFound(String),
    AffinityParseError(String),
    SpawnFailure(String),
    NonZeroExit(String),
}

pub trait Program {
    /// the extension recognized for ligand files
    const EXT: &'static str;

    fn new(
        name: String,
        template: Template,
        receptor: String,
        ligand_dir: String,
        out_dir: String,
    ) -> Self;

    /// the ligand name, without directory or extension
    fn name(&self) -> String;

    fn template(&self) -> &Template;

    /// the parameter [Template] used when none is configured
    fn default_template() -> Template;

    /// path of the ligand input file
    fn ligand_file(&self) -> String;

    /// path of the predicted pose file written by the external program
    fn out_file(&self) -> String;

    /// path of the log file written by the external program
    fn log_file(&self) -> String;

    /// render the parameter file contents for this job
    fn build_input(&self) -> String;

    /// write the rendered parameter file to `path`, truncating any previous
    /// contents
    fn write_input(&self, path: &str) -> io::Result<()> {
        std::fs::write(path, self.build_input())
    }

    /// command-line arguments for one invocation reading the parameter file
    /// at `config_file`
    fn run_args(&self, config_file: &str) -> Vec<String> {
        vec![
            String::from("--config"),
            String::from(config_file),
            String::from("--log"),
            self.log_file(),
        ]
    }

    fn read_output(filename: &str) -> Result<ProgramResult, ProgramError>;

    /// Return all the filenames associated with the Program
    fn associated_files(&self) -> Vec<String> {
        vec![self.out_file(), self.log_file()]
    }
}

/// one docking invocation against a single ligand file
#[derive(Debug, Clone)]
pub struct Job<P: Program> {
    pub program: P,

    /// the ligand filename as listed, extension included
    pub ligand: String,
}

impl<P: Program> Job<P> {
    pub fn new(program: P, ligand: String) -> Self {
        Self { program, ligand }
    }
}
