fn main() {
    verpin::app::cli::run();
}
