use std::{fs::read_to_string, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Program, ProgramError, ProgramResult, Template};


static INPUT_CELL: OnceLock<[Regex; 3]> = OnceLock::new();
static LOG_CELL: OnceLock<[Regex; 3]> = OnceLock::new();

/// Vina holds the information needed to write the parameter file for one
/// AutoDock Vina run. `name` is the ligand file stem: `.pdbqt` is appended
/// for the ligand input, and `_out.pdbqt` and `_log.txt` are appended for
/// the files the external program writes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vina {
    name: String,
    template: Template,
    receptor: String,
    ligand_dir: String,
    out_dir: String,
}

impl Program for Vina {
    const EXT: &'static str = "pdbqt";

    fn new(
        name: String,
        template: Template,
        receptor: String,
        ligand_dir: String,
        out_dir: String,
    ) -> Self {
        Self {
            name,
            template,
            receptor,
            ligand_dir,
            out_dir,
        }
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn template(&self) -> &Template {
        &self.template
    }

    /// In line with [Go templates](https://pkg.go.dev/text/template),
    /// `{{.receptor}}`, `{{.ligand}}`, and `{{.out}}` are replaced per job
    /// by [build_input](Program::build_input). The search box and search
    /// parameters are part of the fixed text
    fn default_template() -> Template {
        Template::from(
            "receptor = {{.receptor}}
ligand = {{.ligand}}
out = {{.out}}

center_x = 19.543
center_y = 24.708
center_z = 15.191

size_x = 62.0
size_y = 66.0
size_z = 66.0

exhaustiveness = 8
num_modes = 9
energy_range = 3
",
        )
    }

    fn ligand_file(&self) -> String {
        format!("{}/{}.{}", self.ligand_dir, self.name, Self::EXT)
    }

    fn out_file(&self) -> String {
        format!("{}/{}_out.pdbqt", self.out_dir, self.name)
    }

    fn log_file(&self) -> String {
        format!("{}/{}_log.txt", self.out_dir, self.name)
    }

    fn build_input(&self) -> String {
        let body = self.template().clone().header;
        let [receptor_re, ligand_re, out_re] = INPUT_CELL.get_or_init(|| {
            [
                Regex::new(r"\{\{.receptor\}\}").unwrap(),
                Regex::new(r"\{\{.ligand\}\}").unwrap(),
                Regex::new(r"\{\{.out\}\}").unwrap(),
            ]
        });
        let ligand = self.ligand_file();
        let out = self.out_file();
        let body = receptor_re.replace(&body, self.receptor.as_str());
        let body = ligand_re.replace(&body, ligand.as_str());
        out_re.replace(&body, out.as_str()).to_string()
    }

    /// Reads a Vina log file. The affinity of the first row of the result
    /// table is taken as the best affinity since the external program sorts
    /// the table best-first. Lines after the table are ignored
    fn read_output(filename: &str) -> Result<ProgramResult, ProgramError> {
        let contents = match read_to_string(filename) {
            Ok(s) => s,
            Err(_) => {
                return Err(ProgramError::FileNotFound(filename.to_owned()));
            }
        };
        let [error_re, sep_re, row_re] = LOG_CELL.get_or_init(|| {
            [
                Regex::new(r"(?i)^\s*error\b").unwrap(),
                Regex::new(r"^-+\+-+").unwrap(),
                Regex::new(r"^\s*\d+\s+").unwrap(),
            ]
        });
        let mut best = None;
        let mut modes = 0;
        let mut in_table = false;
        for line in contents.lines() {
            if error_re.is_match(line) {
                return Err(ProgramError::ErrorInOutput(filename.to_owned()));
            } else if sep_re.is_match(line) {
                in_table = true;
            } else if in_table {
                if !row_re.is_match(line) {
                    break;
                }
                // rows look like `   1         -7.5      0.000      0.000`
                let affinity = line.split_whitespace().nth(1);
                match affinity.map(str::parse::<f64>) {
                    Some(Ok(v)) => {
                        if best.is_none() {
                            best = Some(v);
                        }
                        modes += 1;
                    }
                    _ => {
                        return Err(ProgramError::AffinityParseError(
                            filename.to_owned(),
                        ));
                    }
                }
            }
        }
        match best {
            Some(best_affinity) => Ok(ProgramResult {
                best_affinity,
                modes,
            }),
            None => Err(ProgramError::AffinityNotFound(filename.to_owned())),
        }
    }
}
