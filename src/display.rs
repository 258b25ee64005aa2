use log::info;
use minifb::{Key, Window, WindowOptions};

use crate::error::Result;
use crate::framebuffer::FrameBuffer;

/// Shows a finished frame until the window is closed or Escape is pressed.
pub fn show(framebuffer: &FrameBuffer, title: &str) -> Result<()> {
    let mut window = Window::new(
        title,
        framebuffer.width,
        framebuffer.height,
        WindowOptions::default(),
    )?;
    window.set_target_fps(30);
    info!("showing {}x{} image, press Esc to close", framebuffer.width, framebuffer.height);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&framebuffer.data, framebuffer.width, framebuffer.height)?;
    }
    Ok(())
}
