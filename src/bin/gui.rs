fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let command = canvas_explorer::RunGuiCommand::new("My window", 800, 600);

    command.execute()?;

    Ok(())
}
