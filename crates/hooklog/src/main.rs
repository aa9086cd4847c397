//! Entrypoint.

fn main() -> anyhow::Result<()> {
    hooklog::initialize_command_line()
}
