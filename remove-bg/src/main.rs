use anyhow::{Context, Result};

const IMAGE_PATH: &str = "public/image.png";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let summary = background_remover::remove_white_background(IMAGE_PATH)
        .with_context(|| format!("remove background of {IMAGE_PATH} failed"))?;

    log::info!(
        "{}x{}: {} of {} pixels are now transparent",
        summary.width,
        summary.height,
        summary.stripped_pixels,
        summary.total_pixels
    );

    println!("✓ Logo background removed - transparent PNG created");
    Ok(())
}
