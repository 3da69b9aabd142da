use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use anyhow::{Context, Result};
use vellum_engine::logging::{init_logging, LoggingConfig};
use vellum_engine::record::{DrawCmd, DrawList};
use vellum_graphics::prelude::*;

/// Stands in for a window: counts redraw requests coming up from the scene.
#[derive(Default)]
struct Window {
    redraws: AtomicUsize,
}

impl GraphicsObserver for Window {
    fn graphic_changed(&self, _changed: &dyn GraphicsObject) {
        self.redraws.fetch_add(1, Ordering::Relaxed);
    }
}

fn build_scene() -> (Arc<GraphicsGroup>, Arc<GraphicsGroup>, Arc<Ellipse>) {
    let scene = GraphicsGroup::new();

    let backdrop = Rectangle::new(0.0, 0.0, 320.0, 200.0)
        .with_fill(Color::from_srgb_u8(24, 26, 33, 255));
    scene.add(Arc::new(backdrop));

    let card = GraphicsGroup::at(40.0, 30.0);
    card.add(Arc::new(
        Rectangle::new(0.0, 0.0, 160.0, 100.0)
            .with_fill(Color::from_srgb_u8(58, 64, 82, 255))
            .with_stroke(Stroke::new(2.0, Color::white())),
    ));
    let knob = Arc::new(Ellipse::circle(0.0, 0.0, 12.0).with_fill(Color::from_srgb_u8(230, 120, 60, 255)));
    card.add_at(knob.clone(), 30.0, 50.0);
    scene.add(card.clone());

    (scene, card, knob)
}

fn main() -> Result<()> {
    // Show membership changes unless the user picked a filter.
    let logging = match std::env::var_os("RUST_LOG") {
        Some(_) => LoggingConfig::default(),
        None => LoggingConfig::with_filter("info,vellum_graphics=debug"),
    };
    init_logging(logging);

    let (scene, card, knob) = build_scene();
    let window = Arc::new(Window::default());
    let weak: Weak<Window> = Arc::downgrade(&window);
    scene.add_observer(weak);

    let mut frame = DrawList::new(320, 200);
    scene.draw(&mut frame);
    log::info!("frame 1: {} command(s), scene bounds {:?}", frame.len(), scene.bounds());

    for (x, y) in [(70.0, 80.0), (100.0, 50.0), (300.0, 190.0), (500.0, 500.0)] {
        match scene.element_at(x, y) {
            Some(hit) if same_object(hit.as_ref(), card.as_ref()) => {
                let inner = card
                    .element_at(x, y)
                    .context("card reported a hit but none of its members did")?;
                let what = if same_object(inner.as_ref(), knob.as_ref()) { "knob" } else { "card body" };
                log::info!("pick ({x}, {y}) -> {what}");
            }
            Some(_) => log::info!("pick ({x}, {y}) -> backdrop"),
            None => log::info!("pick ({x}, {y}) -> nothing"),
        }
    }

    knob.move_by(100.0, 0.0);
    card.set_position(60.0, 40.0);

    frame.reset();
    scene.draw(&mut frame);
    let ellipses = frame
        .commands()
        .filter(|c| matches!(c, DrawCmd::Ellipse(_)))
        .count();
    log::info!(
        "frame 2: {} command(s), {ellipses} ellipse(s), {} redraw request(s)",
        frame.len(),
        window.redraws.load(Ordering::Relaxed),
    );
    log::info!("{card}");

    card.remove(knob.as_ref()).context("knob should still be on the card")?;
    if let Err(e) = card.remove(knob.as_ref()) {
        log::warn!("second removal rejected: {e}");
    }

    scene.remove_all();
    log::info!("cleared scene; bounds now {:?}", scene.bounds());
    Ok(())
}
