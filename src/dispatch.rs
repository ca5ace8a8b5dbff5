use std::{fmt::Display, fs, io, process::Command};

use log::{info, warn};

use crate::config::BatchConfig;
use crate::program::{Job, Program, ProgramError, ProgramResult, Template};


/// Dispatcher runs one docking job per ligand file in
/// [BatchConfig::ligand_dir], sequentially. All jobs share a single
/// parameter file at [BatchConfig::config_file], truncated before each
/// invocation, so the file holds the last job's parameters after the run
#[derive(Debug)]
pub struct Dispatcher {
    pub config: BatchConfig,
}

/// per-batch accounting returned by [Dispatcher::run]
#[derive(Debug, Default, PartialEq)]
pub struct BatchSummary {
    /// ligand filenames attempted, in dispatch order
    pub dispatched: Vec<String>,

    /// ligands whose invocation failed, with the reason
    pub failures: Vec<(String, ProgramError)>,
}

impl Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} jobs dispatched, {} failed",
            self.dispatched.len(),
            self.failures.len()
        )
    }
}

impl Dispatcher {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// the ligand filenames under [BatchConfig::ligand_dir] with extension
    /// [Program::EXT]. directory order is filesystem-dependent, so sort for
    /// a reproducible dispatch order
    pub fn ligands<P: Program>(&self) -> io::Result<Vec<String>> {
        let ext = format!(".{}", P::EXT);
        let mut ret = Vec::new();
        for entry in fs::read_dir(&self.config.ligand_dir)? {
            let name = entry?.file_name().to_string_lossy().to_string();
            if name.ends_with(&ext) {
                ret.push(name);
            }
        }
        ret.sort();
        Ok(ret)
    }

    /// build one [Job] per ligand file, in sorted order
    pub fn jobs<P: Program>(&self) -> io::Result<Vec<Job<P>>> {
        let ext = format!(".{}", P::EXT);
        let template = match &self.config.template {
            Some(t) => Template::from(t.as_str()),
            None => P::default_template(),
        };
        let mut jobs = Vec::new();
        for ligand in self.ligands::<P>()? {
            let name = ligand.strip_suffix(&ext).unwrap().to_owned();
            let program = P::new(
                name,
                template.clone(),
                self.config.receptor.clone(),
                self.config.ligand_dir.clone(),
                self.config.out_dir.clone(),
            );
            jobs.push(Job::new(program, ligand));
        }
        Ok(jobs)
    }

    /// run the whole batch: write the shared parameter file and invoke the
    /// external program once per ligand, waiting for each invocation to
    /// finish. invocation failures are recorded in the returned
    /// [BatchSummary] and do not stop the batch; filesystem errors do
    pub fn run<P: Program>(&self) -> io::Result<BatchSummary> {
        fs::create_dir_all(&self.config.out_dir)?;
        let jobs = self.jobs::<P>()?;
        info!("dispatching {} jobs", jobs.len());
        let mut summary = BatchSummary::default();
        for job in &jobs {
            job.program.write_input(&self.config.config_file)?;
            match Command::new(&self.config.vina_cmd)
                .args(job.program.run_args(&self.config.config_file))
                .status()
            {
                Ok(status) if status.success() => {}
                Ok(status) => {
                    warn!("{} failed with {status}", job.ligand);
                    summary.failures.push((
                        job.ligand.clone(),
                        ProgramError::NonZeroExit(status.to_string()),
                    ));
                }
                Err(e) => {
                    warn!(
                        "failed to spawn {} for {} with {e}",
                        self.config.vina_cmd, job.ligand
                    );
                    summary.failures.push((
                        job.ligand.clone(),
                        ProgramError::SpawnFailure(e.to_string()),
                    ));
                }
            }
            println!("Docking completed for {}", job.ligand);
            summary.dispatched.push(job.ligand.clone());
        }
        println!("My docking for all ligand is complete");
        Ok(summary)
    }

    /// read back the per-ligand log files and return the best affinity for
    /// each ligand currently listed. per-ligand read errors are returned in
    /// place of a result rather than ending the collection
    pub fn collect<P: Program>(
        &self,
    ) -> io::Result<Vec<(String, Result<ProgramResult, ProgramError>)>> {
        let mut ret = Vec::new();
        for job in self.jobs::<P>()? {
            let res = P::read_output(&job.program.log_file());
            ret.push((job.ligand, res));
        }
        Ok(ret)
    }
}
