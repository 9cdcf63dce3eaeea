#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = insight::run_from_env() {
        eprintln!("insight: {error}");
        std::process::exit(error.exit_code());
    }
}
