fn main() {
    outreach::app::cli::run();
}
