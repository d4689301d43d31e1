use outbreak_sim::runner::run_with_args;

fn main() {
    match run_with_args() {
        Ok(_) => {}
        Err(error) => {
            eprintln!("Simulation failure: {error}");
            std::process::exit(1);
        }
    }
}
