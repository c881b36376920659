fn main() {
    pkgroot::app::cli::run();
}
