use std::process;

fn main() {
    if let Err(e) = docpress::cli::run() {
        log::error!("{}", e);
        process::exit(1);
    }
}
