//! `modelprobe` binary: runs a CLI command and exits 1 on any error.

use modelprobe::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
