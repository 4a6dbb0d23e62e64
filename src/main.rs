use std::process;

fn main() {
    if let Err(e) = docker_config::cli::run() {
        docker_config::ui::print_error(&e);
        if e.wants_usage() {
            eprintln!("{}", docker_config::cli::usage());
        }
        process::exit(1);
    }
}
