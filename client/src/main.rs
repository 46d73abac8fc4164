fn main() -> anyhow::Result<()> {
    lobby_client::run()
}
