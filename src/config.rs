use std::{fs::read_to_string, io, path::Path};

use serde::{Deserialize, Serialize};

/// BatchConfig holds the batch-level settings for a docking run. Relative
/// paths are resolved against the current working directory, and the
/// defaults reproduce a stock layout: ligands under `ligands`, results
/// under `results`, and `vina` looked up on `$PATH`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// receptor structure shared by every job in the batch
    pub receptor: String,

    /// directory scanned for ligand files
    pub ligand_dir: String,

    /// directory receiving pose and log files, created if absent
    pub out_dir: String,

    /// the docking executable to invoke
    pub vina_cmd: String,

    /// the shared parameter file, truncated before every job
    pub config_file: String,

    /// optional override for the parameter file template; `None` means the
    /// engine default
    pub template: Option<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            receptor: String::from("receptor/3poz.pdbqt"),
            ligand_dir: String::from("ligands"),
            out_dir: String::from("results"),
            vina_cmd: String::from("vina"),
            config_file: String::from("config.txt"),
            template: None,
        }
    }
}

impl BatchConfig {
    /// load a config from the JSON file at `path`. missing keys fall back
    /// to their [Default] values
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let contents = read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
