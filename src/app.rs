use std::cell::{Cell, RefCell};

use log::{debug, info};
use rand::rngs::StdRng;

use crate::behaviors::{
    accents, active_link, anchors, confetti, counter, external_links, hover, konami, load_fade, logo, navbar,
    parallax, reveal, shortcuts, timeline,
};
use crate::config::FxConfig;
use crate::page::Page;
use crate::scheduler::Scheduler;

/// All page behaviors plus the little state they keep between events.
pub struct Portfolio<P: Page, S: Scheduler> {
    page: P,
    scheduler: S,
    config: FxConfig,
    navbar: Option<P::Node>,
    hero: Option<P::Node>,
    sections: Vec<P::Node>,
    nav_links: Vec<P::Node>,
    last_scroll: Cell<f64>,
    keys: RefCell<konami::KeyHistory>,
    animated: RefCell<counter::AnimatedSet<P::Node>>,
    headline_text: RefCell<Option<String>>,
    rng: RefCell<StdRng>,
}

impl<P: Page, S: Scheduler> Portfolio<P, S> {
    pub fn new(page: P, scheduler: S, config: FxConfig, rng: StdRng) -> Self {
        let navbar = page.query(&config.selectors.navbar);
        let hero = page.query(&config.selectors.hero);
        let sections = page.query_all(&config.selectors.sections);
        let nav_links = page.query_all(&config.selectors.nav_links);
        let keys = konami::KeyHistory::new(config.easter_egg.sequence.len());
        Self {
            page,
            scheduler,
            config,
            navbar,
            hero,
            sections,
            nav_links,
            last_scroll: Cell::new(0.0),
            keys: RefCell::new(keys),
            animated: RefCell::new(counter::AnimatedSet::new()),
            headline_text: RefCell::new(None),
            rng: RefCell::new(rng),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    /// One-time passes over the markup. Returns the elements each visibility
    /// watcher should observe.
    pub fn init(&self) -> Watched<P::Node> {
        let page = &self.page;
        let sel = &self.config.selectors;

        let revealed = reveal::prepare(page, &sel.reveal, &self.config.motion.reveal_transition);
        let timeline_items = page.query_all(&sel.timeline_items);
        for item in &timeline_items {
            reveal::hide(page, item, &self.config.motion.reveal_transition);
        }

        accents::paint(page, &page.query_all(&sel.accent_cards), &self.config.accent_palette);
        if let Some(brand) = page.query(&sel.brand) {
            logo::prepare(page, &brand);
        }
        if let Some(body) = page.body() {
            load_fade::hide(page, &body);
        }
        let hardened = external_links::harden(page, &page.query_all(&sel.external_links));
        if let Some(headline) = page.query(&sel.headline) {
            *self.headline_text.borrow_mut() = Some(page.text(&headline));
        }

        let watched = Watched {
            revealed,
            stat_cards: page.query_all(&sel.stat_cards),
            timeline_items,
        };
        info!(
            "Page effects ready: {} reveal blocks, {} stat cards, {} timeline items, {} external links",
            watched.revealed.len(),
            watched.stat_cards.len(),
            watched.timeline_items.len(),
            hardened
        );
        watched
    }

    pub fn on_scroll(&self) {
        let page = &self.page;
        let motion = &self.config.motion;
        let offset = page.scroll_y();
        self.last_scroll.set(offset);

        if let Some(nav) = &self.navbar {
            navbar::update(page, nav, offset, motion.scrolled_threshold);
        }

        let navbar_height = self.navbar_height();
        let position = active_link::probe_position(offset, navbar_height, motion.active_lookahead);
        active_link::update(page, &self.sections, &self.nav_links, position);

        if let Some(hero) = &self.hero {
            parallax::update(page, hero, motion.parallax_speed);
        }
    }

    /// Default navigation must already be suppressed by the caller.
    pub fn on_anchor_click(&self, link: &P::Node) {
        if let Some(top) = anchors::follow(&self.page, link, self.navbar.as_ref()) {
            debug!("Smooth scrolling to {}", top);
        }
    }

    pub fn on_logo_click(&self) {
        logo::scroll_home(&self.page);
    }

    pub fn on_hover(&self, tag: &P::Node, entered: bool) {
        hover::apply(&self.page, tag, entered, self.config.motion.hover_scale);
    }

    /// Offset seen by the most recent scroll event.
    pub fn last_scroll(&self) -> f64 {
        self.last_scroll.get()
    }

    /// Runs the load fade right away when the document finished loading
    /// before mount. Returns whether the caller still has to wait for `load`.
    pub fn on_mounted(&self, ready_state: &str) -> bool {
        if load_fade::is_complete(ready_state) {
            self.on_load();
            false
        } else {
            true
        }
    }

    pub fn on_load(&self) {
        if let Some(body) = self.page.body() {
            load_fade::fade_in(&self.page, &self.scheduler, &body, &self.config.load_fade);
        }
    }

    pub fn on_keydown(&self, key: &str) {
        if shortcuts::is_home_key(key, &self.config.home_key) {
            self.page.smooth_scroll_to(0.0);
        }

        let matched = {
            let mut keys = self.keys.borrow_mut();
            keys.push(key);
            keys.matches(&self.config.easter_egg.sequence)
        };
        if matched {
            self.celebrate();
        }
    }

    pub fn on_reveal_batch(&self, entries: &[(P::Node, bool)]) {
        reveal::on_batch(&self.page, entries);
    }

    pub fn on_stat_batch(&self, entries: &[(P::Node, bool)]) {
        counter::on_batch(
            &self.page,
            &self.scheduler,
            &mut self.animated.borrow_mut(),
            entries,
            &self.config.selectors.stat_number,
            &self.config.counter,
        );
    }

    pub fn on_timeline_batch(&self, entries: &[(P::Node, bool)]) {
        timeline::on_batch(&self.page, &self.scheduler, entries, self.config.motion.stagger_ms);
    }

    fn navbar_height(&self) -> f64 {
        self.navbar.as_ref().map(|n| self.page.offset_height(n)).unwrap_or(0.0)
    }

    fn celebrate(&self) {
        info!("Konami code entered");
        let egg = &self.config.easter_egg;

        if let Some(headline) = self.page.query(&self.config.selectors.headline) {
            let original = self
                .headline_text
                .borrow()
                .clone()
                .unwrap_or_else(|| self.page.text(&headline));
            self.page.set_text(&headline, &egg.alternate_text);
            let page = self.page.clone();
            self.scheduler.after(
                egg.restore_after_ms,
                Box::new(move || page.set_text(&headline, &original)),
            );
        }

        confetti::burst(&self.page, &self.scheduler, &mut *self.rng.borrow_mut(), egg);
    }
}

/// Elements handed to the three visibility watchers.
#[derive(Debug, Clone, PartialEq)]
pub struct Watched<N> {
    pub revealed: Vec<N>,
    pub stat_cards: Vec<N>,
    pub timeline_items: Vec<N>,
}
