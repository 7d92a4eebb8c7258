fn main() -> Result<(), Box<dyn std::error::Error>> {
    codegraph_cli::run()
}
