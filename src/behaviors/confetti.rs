//! Short-lived falling squares spawned by the easter egg.
//!
//! Each particle is drawn just above the viewport, then one scheduling tick
//! later given its end state so the CSS transition animates the fall. Removal
//! is a separate timer and does not wait for the transition to finish.

use rand::Rng;

use crate::config::EasterEgg;
use crate::page::{Page, Viewport};
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub color: String,
    pub left: f64,
    pub rotation: f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R, palette: &[String], viewport: Viewport) -> Self {
        let color = palette[rng.gen_range(0..palette.len())].clone();
        Self {
            color,
            left: rng.gen::<f64>() * viewport.width,
            rotation: rng.gen::<f64>() * 360.0,
        }
    }
}

pub fn spawn<P: Page, S: Scheduler>(page: &P, scheduler: &S, particle: Particle, egg: &EasterEgg) {
    let Some(node) = page.append_overlay() else {
        return;
    };
    let size = format!("{}px", egg.confetti_size_px);
    page.set_style(&node, "position", "fixed");
    page.set_style(&node, "width", &size);
    page.set_style(&node, "height", &size);
    page.set_style(&node, "background-color", &particle.color);
    page.set_style(&node, "left", &format!("{}px", particle.left));
    page.set_style(&node, "top", &format!("-{}", size));
    page.set_style(&node, "opacity", "1");
    page.set_style(&node, "transition", &egg.fall_transition);
    page.set_style(&node, "z-index", "9999");
    page.set_style(&node, "pointer-events", "none");

    {
        let page = page.clone();
        let node = node.clone();
        let rotation = particle.rotation;
        scheduler.after(
            egg.settle_delay_ms,
            Box::new(move || {
                let bottom = page.viewport().height;
                page.set_style(&node, "top", &format!("{}px", bottom));
                page.set_style(&node, "opacity", "0");
                page.set_style(&node, "transform", &format!("rotate({}deg)", rotation));
            }),
        );
    }

    let page = page.clone();
    scheduler.after(egg.confetti_lifetime_ms, Box::new(move || page.remove(&node)));
}

pub fn burst<P: Page, S: Scheduler, R: Rng>(page: &P, scheduler: &S, rng: &mut R, egg: &EasterEgg) {
    let viewport = page.viewport();
    for _ in 0..egg.confetti_count {
        let particle = Particle::random(rng, &egg.confetti_palette, viewport);
        spawn(page, scheduler, particle, egg);
    }
}
