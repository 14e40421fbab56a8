fn main() {
    dec::cli::run();
}
