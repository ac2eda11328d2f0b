fn main() {
    if let Err(e) = packcrafter_lib::run() {
        eprintln!("packcrafter: {}", e);
        std::process::exit(1);
    }
}
