fn main() {
    match eightpuzzle::solver() {
        Ok(_) => {}
        Err(e) => eprintln!("{:#}", e),
    }
}
