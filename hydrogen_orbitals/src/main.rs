//! Hydrogen Orbital Visualizer
//!
//! Asks for quantum numbers on the console and shows the probability
//! density of the orbital in the x-z plane. Type `exit` at any prompt to quit.
//!
//! Usage: `hydrogen_orbitals [PALETTE]` (default `mako`; e.g. `rocket`, `viridis`, `magma_r`)

use hydrogen_orbitals::figure::FigureStyle;
use hydrogen_orbitals::input::read_request;
use hydrogen_orbitals::palette::{Palette, DEFAULT_PALETTE};
use hydrogen_orbitals::renderer::{visualize, RenderError};
use hydrogen_orbitals::Sampler;
use std::io;
use winit::event_loop::EventLoop;

fn main() -> Result<(), RenderError> {
    env_logger::init();

    let palette = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PALETTE.to_string());
    if let Err(err) = Palette::by_name(&palette) {
        let known: Vec<&str> = Palette::names().collect();
        log::warn!("{err}; known palettes: {}", known.join(", "));
    }

    let style = FigureStyle {
        palette,
        ..FigureStyle::default()
    };
    let sampler = Sampler::default();
    let mut event_loop = EventLoop::new()?;

    println!("Started \"{}\"", style.title);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    loop {
        let request = match read_request(&mut input, &mut output) {
            Ok(Some(request)) => request,
            Ok(None) => break,
            Err(err) => {
                log::error!("Failed to read input: {err}");
                break;
            }
        };

        println!();
        println!("---------------------------------------------------------");
        println!();

        if let Err(err) = visualize(&mut event_loop, &sampler, request, &style) {
            log::error!("Visualization of {} failed: {err}", request.state);
        }
    }

    println!("Thank you for using the program!");
    Ok(())
}
