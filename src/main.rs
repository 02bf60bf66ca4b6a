fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let presenter = canvas_explorer::PpmFilePresenter::new();
    let mut controller = canvas_explorer::HeadlessDemoController::new(presenter);

    controller.run()?;

    std::fs::create_dir_all("output")?;
    controller.write_pointer_trace("output/pointer_trace.ppm")?;
    controller.write_shape_scene("output/shape_scene.ppm")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
