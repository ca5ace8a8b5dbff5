use dockq::program::{vina::Vina, Program};

fn main() {
    for filename in std::env::args().skip(1) {
        match Vina::read_output(&filename) {
            Ok(res) => println!(
                "{filename}: {:.1} kcal/mol in {} modes",
                res.best_affinity, res.modes
            ),
            Err(e) => eprintln!("failed to read {filename} with {e:?}"),
        }
    }
}
