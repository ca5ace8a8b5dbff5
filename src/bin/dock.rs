use dockq::config::BatchConfig;
use dockq::dispatch::Dispatcher;
use dockq::program::vina::Vina;
use log::{info, warn};

fn main() {
    env_logger::init();
    let config = match std::env::args().nth(1) {
        Some(path) => match BatchConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load config file {path} with {e}");
                std::process::exit(1);
            }
        },
        None => BatchConfig::default(),
    };
    let dispatcher = Dispatcher::new(config);
    let summary = match dispatcher.run::<Vina>() {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("docking batch failed with {e}");
            std::process::exit(1);
        }
    };
    info!("{summary}");
    for (ligand, e) in &summary.failures {
        warn!("{ligand} failed with {e:?}");
    }
    match dispatcher.collect::<Vina>() {
        Ok(results) => {
            for (ligand, res) in results {
                match res {
                    Ok(res) => info!(
                        "{ligand}: best affinity {:.1} kcal/mol in {} modes",
                        res.best_affinity, res.modes
                    ),
                    Err(e) => warn!("no affinity for {ligand}: {e:?}"),
                }
            }
        }
        Err(e) => warn!("failed to collect results with {e}"),
    }
}
