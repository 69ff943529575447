fn main() {
    touca::app::cli::run();
}
