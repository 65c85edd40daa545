use {
    eframe::egui::{Pos2, Rect},
    strum::IntoEnumIterator,
    strum_macros::{Display, EnumIter},
};

use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ControlKind {
    #[strum(to_string = "theme dropdown")]
    Theme,
    #[strum(to_string = "wallet dropdown")]
    Wallet,
    #[strum(to_string = "settings dropdown")]
    Settings,
    #[strum(to_string = "whitelist modal")]
    Whitelist,
}

/// Open/closed state of one dropdown or modal.
///
/// The anchor is the screen region that counts as "inside" for dismissal:
/// trigger button plus popup for a dropdown, the window for a modal. It is
/// refreshed by the UI every frame the control is laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct Disclosure {
    open: bool,
    enabled: bool,
    anchor: Option<Rect>,
}

impl Disclosure {
    pub fn new(enabled: bool) -> Self {
        Self {
            open: false,
            enabled,
            anchor: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// No-op on a disabled control.
    pub fn open(&mut self) {
        if self.enabled {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn anchor(&self) -> Option<Rect> {
        self.anchor
    }

    pub fn set_anchor(&mut self, rect: Rect) {
        self.anchor = Some(rect);
    }

    /// Grows the anchor to also cover `rect` (popup next to its button).
    pub fn extend_anchor(&mut self, rect: Rect) {
        self.anchor = Some(match self.anchor {
            Some(a) => a.union(rect),
            None => rect,
        });
    }

    /// True when an outside interaction at `point` should close this control.
    /// Never laid out means nothing to be outside of.
    fn is_outside(&self, point: Pos2) -> bool {
        self.anchor.is_some_and(|a| !a.contains(point))
    }
}

/// The one-of-each set of controls living on the terminal view.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    theme: Disclosure,
    wallet: Disclosure,
    settings: Disclosure,
    whitelist: Disclosure,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            theme: Disclosure::new(true),
            // No wallet integration: both stay permanently disabled.
            wallet: Disclosure::new(false),
            settings: Disclosure::new(false),
            whitelist: Disclosure::new(true),
        }
    }
}

impl Controls {
    pub fn get(&self, kind: ControlKind) -> &Disclosure {
        match kind {
            ControlKind::Theme => &self.theme,
            ControlKind::Wallet => &self.wallet,
            ControlKind::Settings => &self.settings,
            ControlKind::Whitelist => &self.whitelist,
        }
    }

    pub fn get_mut(&mut self, kind: ControlKind) -> &mut Disclosure {
        match kind {
            ControlKind::Theme => &mut self.theme,
            ControlKind::Wallet => &mut self.wallet,
            ControlKind::Settings => &mut self.settings,
            ControlKind::Whitelist => &mut self.whitelist,
        }
    }

    pub fn is_open(&self, kind: ControlKind) -> bool {
        self.get(kind).is_open()
    }

    pub fn open(&mut self, kind: ControlKind) {
        self.get_mut(kind).open();
        self.log_state(kind);
    }

    pub fn close(&mut self, kind: ControlKind) {
        self.get_mut(kind).close();
        self.log_state(kind);
    }

    pub fn toggle(&mut self, kind: ControlKind) {
        self.get_mut(kind).toggle();
        self.log_state(kind);
    }

    /// Document-level observer: a press at `point` closes every open control
    /// whose anchor does not contain it. Returns what it closed.
    pub fn dismiss_outside(&mut self, point: Pos2) -> Vec<ControlKind> {
        let closed: Vec<ControlKind> = ControlKind::iter()
            .filter(|&k| {
                let d = self.get(k);
                d.is_open() && d.is_outside(point)
            })
            .collect();
        for &kind in &closed {
            self.get_mut(kind).close();
            if DF.log_controls {
                log::info!("{} dismissed by outside press at {:?}", kind, point);
            }
        }
        closed
    }

    /// Escape: closes everything that is open.
    pub fn dismiss_all(&mut self) -> Vec<ControlKind> {
        let closed: Vec<ControlKind> = ControlKind::iter().filter(|&k| self.is_open(k)).collect();
        for &kind in &closed {
            self.get_mut(kind).close();
        }
        closed
    }

    fn log_state(&self, kind: ControlKind) {
        if DF.log_controls {
            log::info!("{} open = {}", kind, self.is_open(kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        eframe::egui::{pos2, vec2},
        proptest::prelude::*,
    };

    fn button() -> Rect {
        Rect::from_min_size(pos2(100.0, 10.0), vec2(80.0, 24.0))
    }

    fn popup() -> Rect {
        Rect::from_min_size(pos2(100.0, 34.0), vec2(160.0, 120.0))
    }

    #[test]
    fn open_close_toggle() {
        let mut d = Disclosure::new(true);
        d.toggle();
        assert!(d.is_open());
        d.open();
        assert!(d.is_open());
        d.toggle();
        assert!(!d.is_open());
        d.close();
        assert!(!d.is_open());
    }

    #[test]
    fn disabled_controls_never_open() {
        let mut controls = Controls::default();
        for kind in [ControlKind::Wallet, ControlKind::Settings] {
            controls.open(kind);
            controls.toggle(kind);
            assert!(!controls.is_open(kind), "{kind} opened");
            assert!(!controls.get(kind).is_enabled());
        }
    }

    #[test]
    fn outside_press_closes_open_control() {
        let mut controls = Controls::default();
        controls.open(ControlKind::Theme);
        controls.get_mut(ControlKind::Theme).set_anchor(button());
        controls.get_mut(ControlKind::Theme).extend_anchor(popup());

        // Inside the popup: stays open.
        assert!(controls.dismiss_outside(pos2(150.0, 100.0)).is_empty());
        assert!(controls.is_open(ControlKind::Theme));

        let closed = controls.dismiss_outside(pos2(600.0, 400.0));
        assert_eq!(closed, vec![ControlKind::Theme]);
        assert!(!controls.is_open(ControlKind::Theme));

        // Already closed: no effect.
        assert!(controls.dismiss_outside(pos2(600.0, 400.0)).is_empty());
    }

    #[test]
    fn opening_one_does_not_close_another() {
        let mut controls = Controls::default();
        controls.open(ControlKind::Theme);
        controls.open(ControlKind::Whitelist);
        assert!(controls.is_open(ControlKind::Theme));
        assert!(controls.is_open(ControlKind::Whitelist));
        assert_eq!(controls.dismiss_all().len(), 2);
        assert!(!controls.is_open(ControlKind::Theme));
    }

    #[test]
    fn unanchored_control_is_not_dismissed() {
        let mut controls = Controls::default();
        controls.open(ControlKind::Whitelist);
        assert!(controls.dismiss_outside(pos2(0.0, 0.0)).is_empty());
        assert!(controls.is_open(ControlKind::Whitelist));
    }

    proptest! {
        #[test]
        fn presses_only_close_when_outside(x in -100.0f32..1000.0, y in -100.0f32..1000.0, open in any::<bool>()) {
            let mut controls = Controls::default();
            if open {
                controls.open(ControlKind::Theme);
            }
            controls.get_mut(ControlKind::Theme).set_anchor(button());
            let point = pos2(x, y);
            let closed = controls.dismiss_outside(point);
            let inside = button().contains(point);
            prop_assert_eq!(controls.is_open(ControlKind::Theme), open && inside);
            prop_assert_eq!(closed.len(), usize::from(open && !inside));
        }
    }
}
