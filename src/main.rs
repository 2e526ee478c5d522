fn main() {
    aksara::cli::run();
}
