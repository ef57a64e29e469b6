fn main() -> anyhow::Result<()> {
    poc_assistant::run()
}
