fn main() {
    if let Err(err) = roster_loader::run() {
        eprintln!("roster-loader: {}", err);
        std::process::exit(1);
    }
}
