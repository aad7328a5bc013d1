fn main() -> anyhow::Result<()> {
    quiz_compare_cli::run()
}
