fn main() {
    cielo::app::cli::run();
}
