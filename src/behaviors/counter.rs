//! Counts a stat up from zero once its card scrolls into view.

use std::ops::ControlFlow;

use log::debug;

use crate::config::CounterTiming;
use crate::page::Page;
use crate::scheduler::Scheduler;

/// Reads the leading integer of `text` the way a browser's `parseInt` does:
/// optional whitespace and sign, then at least one decimal digit.
/// Anything else, the `∞` sentinel included, yields `None`. Digit runs too
/// long for an integer type still parse, losing precision like `parseInt`.
pub fn parse_target(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }
    let value: f64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    target: f64,
    increment: f64,
    current: f64,
    suffix: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub text: String,
    pub done: bool,
}

impl Counter {
    pub fn new(target: f64, timing: &CounterTiming) -> Self {
        let steps = f64::from(timing.duration_ms) / f64::from(timing.tick_ms.max(1));
        Self {
            target,
            increment: target / steps,
            current: 0.0,
            suffix: timing.suffix.clone(),
        }
    }

    pub fn step(&mut self) -> Tick {
        self.current += self.increment;
        if self.current >= self.target {
            Tick { text: format!("{}{}", self.target, self.suffix), done: true }
        } else {
            Tick { text: format!("{}{}", self.current.floor(), self.suffix), done: false }
        }
    }
}

/// Side-table of cards that already ran their animation.
#[derive(Debug, Clone)]
pub struct AnimatedSet<N> {
    nodes: Vec<N>,
}

impl<N: PartialEq> AnimatedSet<N> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    pub fn mark(&mut self, node: N) {
        if !self.contains(&node) {
            self.nodes.push(node);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N: PartialEq> Default for AnimatedSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resets `number` to `0+` and ticks it up to `target+`.
pub fn animate<P: Page, S: Scheduler>(page: &P, scheduler: &S, number: &P::Node, target: f64, timing: &CounterTiming) {
    page.set_text(number, &format!("0{}", timing.suffix));
    let mut counter = Counter::new(target, timing);
    let page = page.clone();
    let number = number.clone();
    scheduler.every(
        timing.tick_ms,
        Box::new(move || {
            let tick = counter.step();
            page.set_text(&number, &tick.text);
            if tick.done {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }),
    );
}

/// Starts the counter of every newly visible card. A card is marked only once
/// its number parsed, so unparsable cards stay untouched on every crossing.
pub fn on_batch<P: Page, S: Scheduler>(
    page: &P,
    scheduler: &S,
    animated: &mut AnimatedSet<P::Node>,
    entries: &[(P::Node, bool)],
    number_selector: &str,
    timing: &CounterTiming,
) {
    for (card, intersecting) in entries {
        if !intersecting || animated.contains(card) {
            continue;
        }
        let Some(number) = page.query_in(card, number_selector) else {
            continue;
        };
        if let Some(target) = parse_target(&page.text(&number)) {
            debug!("Animating stat counter to {}", target);
            animate(page, scheduler, &number, target, timing);
            animated.mark(card.clone());
        }
    }
}
