//! Landing-page template
//!
//! A full page assembled from the catalog: a hand-sequenced hero, a
//! scroll-revealed feature grid with staggered cards, hover-lift
//! showcase cards, and a call-to-action pair of animated buttons. It
//! doubles as the integration example for driving many components from
//! one host loop.

use std::sync::Arc;

use kinetic_animation::spring::SpringConfig;
use kinetic_animation::stagger::StaggerGroup;
use kinetic_core::events::InputEvent;
use kinetic_core::motion_policy::MotionPreference;

use crate::{FadeUp, HoverCard, MagneticButton, ScaleButton, ScrollReveal, StaggeredList};

/// Hero entrance timing: a slower fade with hand-offset lines.
const HERO_DURATION: f32 = 0.8;
const HERO_DELAY_STEP: f32 = 0.1;
const HERO_LINES: usize = 3;

/// Feature-grid stagger.
const FEATURE_INCREMENT: f32 = 0.15;
const FEATURE_BASE_DELAY: f32 = 0.1;
const FEATURE_THRESHOLD: f32 = 0.2;

pub struct LandingPage {
    hero: Vec<FadeUp>,
    features_reveal: ScrollReveal,
    features: StaggeredList,
    showcase: Vec<HoverCard>,
    cta_primary: ScaleButton,
    cta_magnetic: MagneticButton,
}

impl LandingPage {
    pub fn new(feature_count: usize, showcase_count: usize) -> Self {
        let hero = (0..HERO_LINES)
            .map(|line| FadeUp::with_timing(HERO_DURATION, line as f32 * HERO_DELAY_STEP))
            .collect();
        let showcase = (0..showcase_count)
            .map(|_| HoverCard::with_spring(SpringConfig::new(200.0, 20.0)))
            .collect();
        let features = StaggeredList::with_stagger(
            feature_count,
            StaggerGroup::new(FEATURE_INCREMENT).base_delay(FEATURE_BASE_DELAY),
        );
        Self {
            hero,
            features_reveal: ScrollReveal::new().threshold(FEATURE_THRESHOLD),
            features,
            showcase,
            cta_primary: ScaleButton::new(),
            cta_magnetic: MagneticButton::new(),
        }
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        for line in &mut self.hero {
            line.set_motion_preference(preference.clone());
        }
        self.features_reveal.set_motion_preference(preference.clone());
        self.features.set_motion_preference(preference.clone());
        for card in &mut self.showcase {
            card.set_motion_preference(preference.clone());
        }
        self.cta_primary.set_motion_preference(preference.clone());
        self.cta_magnetic.set_motion_preference(preference);
    }

    /// Page mounted: the hero plays immediately, everything below the
    /// fold waits for its viewport trigger.
    pub fn mounted(&mut self) {
        for line in &mut self.hero {
            line.mounted();
        }
    }

    /// Visibility update for the feature section.
    pub fn features_in_view(&mut self, fraction: f32) {
        self.features_reveal
            .handle_event(&InputEvent::ViewportUpdate { fraction });
        // The wrapper reveal gates the children's stagger; the mount
        // trigger inside the list keeps this idempotent.
        if fraction >= FEATURE_THRESHOLD {
            self.features.mounted();
        }
    }

    pub fn showcase_event(&mut self, index: usize, event: &InputEvent) {
        if let Some(card) = self.showcase.get_mut(index) {
            card.handle_event(event);
        }
    }

    pub fn cta_primary_event(&mut self, event: &InputEvent) {
        self.cta_primary.handle_event(event);
    }

    pub fn cta_magnetic_event(&mut self, event: &InputEvent) {
        self.cta_magnetic.handle_event(event);
    }

    pub fn take_cta_clicked(&mut self) -> bool {
        let primary = self.cta_primary.take_clicked();
        let magnetic = self.cta_magnetic.take_clicked();
        primary || magnetic
    }

    /// Advance the whole page. Returns true once everything settled.
    pub fn update(&mut self, dt: f32) -> bool {
        let mut done = true;
        for line in &mut self.hero {
            done &= line.update(dt);
        }
        done &= self.features_reveal.update(dt);
        done &= self.features.update(dt);
        for card in &mut self.showcase {
            done &= card.update(dt);
        }
        done &= self.cta_primary.update(dt);
        done &= self.cta_magnetic.update(dt);
        done
    }

    pub fn hero_line(&self, index: usize) -> Option<&FadeUp> {
        self.hero.get(index)
    }

    pub fn features_reveal(&self) -> &ScrollReveal {
        &self.features_reveal
    }

    pub fn features(&self) -> &StaggeredList {
        &self.features
    }

    pub fn showcase_card(&self, index: usize) -> Option<&HoverCard> {
        self.showcase.get(index)
    }

    pub fn cta_primary(&self) -> &ScaleButton {
        &self.cta_primary
    }

    pub fn cta_magnetic(&self) -> &MagneticButton {
        &self.cta_magnetic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::geometry::{Point, Rect};
    use kinetic_core::motion_policy::StaticPreference;

    fn run_for(page: &mut LandingPage, seconds: f32) {
        let mut elapsed = 0.0;
        while elapsed < seconds {
            page.update(1.0 / 60.0);
            elapsed += 1.0 / 60.0;
        }
    }

    #[test]
    fn hero_lines_enter_in_sequence() {
        let mut page = LandingPage::new(3, 2);
        page.mounted();
        // Inside line 2's delay: line 0 is moving, line 2 is not.
        run_for(&mut page, 0.15);
        let first = page.hero_line(0).unwrap().style();
        let last = page.hero_line(2).unwrap().style();
        assert!(first.opacity > 0.0);
        assert_eq!(last.opacity, 0.0);

        run_for(&mut page, 1.2);
        for i in 0..3 {
            assert_eq!(page.hero_line(i).unwrap().style().opacity, 1.0);
        }
    }

    #[test]
    fn features_wait_for_scroll() {
        let mut page = LandingPage::new(2, 0);
        page.mounted();
        run_for(&mut page, 1.5);
        assert_eq!(page.features().child_style(0).unwrap().opacity, 0.0);

        page.features_in_view(0.5);
        // Base delay 0.1 plus one increment plus the child duration.
        run_for(&mut page, 1.0);
        assert_eq!(page.features().child_style(0).unwrap().opacity, 1.0);
        assert_eq!(page.features().child_style(1).unwrap().opacity, 1.0);
        assert_eq!(page.features_reveal().style().opacity, 1.0);
    }

    #[test]
    fn scroll_out_does_not_hide_features() {
        let mut page = LandingPage::new(1, 0);
        page.features_in_view(0.5);
        run_for(&mut page, 1.0);
        page.features_in_view(0.0);
        run_for(&mut page, 1.0);
        assert_eq!(page.features_reveal().style().opacity, 1.0);
    }

    #[test]
    fn cta_pair_reports_clicks() {
        let mut page = LandingPage::new(0, 0);
        page.cta_primary_event(&InputEvent::PointerEnter { bounds: None });
        page.cta_primary_event(&InputEvent::PointerDown);
        page.cta_primary_event(&InputEvent::PointerUp);
        assert!(page.take_cta_clicked());
        assert!(!page.take_cta_clicked());

        page.cta_magnetic_event(&InputEvent::PointerEnter {
            bounds: Some(Rect::new(0.0, 0.0, 120.0, 48.0)),
        });
        page.cta_magnetic_event(&InputEvent::PointerMove {
            position: Point::new(80.0, 24.0),
        });
        page.cta_magnetic_event(&InputEvent::PointerDown);
        page.cta_magnetic_event(&InputEvent::PointerUp);
        assert!(page.take_cta_clicked());
    }

    #[test]
    fn reduced_motion_settles_the_whole_page_fast() {
        let mut page = LandingPage::new(2, 1);
        page.set_motion_preference(Arc::new(StaticPreference::new(true)));
        page.mounted();
        page.features_in_view(1.0);
        // Stagger delays still gate delivery; a few frames flush them.
        run_for(&mut page, 0.5);
        assert!(page.update(1.0 / 60.0));
        assert_eq!(page.hero_line(0).unwrap().style().opacity, 1.0);
        assert_eq!(page.features().child_style(1).unwrap().opacity, 1.0);
    }
}
