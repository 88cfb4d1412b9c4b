fn main() -> anyhow::Result<()> {
    glproj::run()
}
