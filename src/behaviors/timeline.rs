use crate::behaviors::reveal;
use crate::page::Page;
use crate::scheduler::Scheduler;

/// Reveal delay per intersecting entry. The index is the entry's position in
/// the notification batch, non-intersecting entries included.
pub fn stagger_delays(intersecting: &[bool], step_ms: u32) -> Vec<(usize, u32)> {
    intersecting
        .iter()
        .enumerate()
        .filter(|(_, hit)| **hit)
        .map(|(index, _)| (index, index as u32 * step_ms))
        .collect()
}

pub fn on_batch<P: Page, S: Scheduler>(page: &P, scheduler: &S, entries: &[(P::Node, bool)], step_ms: u32) {
    let flags: Vec<bool> = entries.iter().map(|(_, hit)| *hit).collect();
    for (index, delay) in stagger_delays(&flags, step_ms) {
        let page = page.clone();
        let item = entries[index].0.clone();
        scheduler.after(delay, Box::new(move || reveal::show(&page, &item)));
    }
}
