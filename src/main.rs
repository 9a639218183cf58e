fn main() {
    if let Err(e) = gridsearch::solver() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
