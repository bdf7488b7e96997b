fn main() {
    inkly_frontend::run();
}
