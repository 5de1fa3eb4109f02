/// One-way switch behind the "Reveal Offer" button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OfferReveal {
    #[default]
    Hidden,
    Revealed,
}

impl OfferReveal {
    /// Moves to `Revealed`. Returns `true` only on the first call.
    pub fn reveal(&mut self) -> bool {
        let changed = *self == OfferReveal::Hidden;
        *self = OfferReveal::Revealed;
        changed
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, OfferReveal::Revealed)
    }

    /// The banner needs both the reveal and an eligible business.
    pub fn shows_banner(&self, has_special_rate: bool) -> bool {
        self.is_revealed() && has_special_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let state = OfferReveal::default();
        assert!(!state.is_revealed());
        assert!(!state.shows_banner(true));
    }

    #[test]
    fn reveal_is_one_way() {
        let mut state = OfferReveal::default();
        assert!(state.reveal());
        assert!(state.is_revealed());

        assert!(!state.reveal());
        assert_eq!(state, OfferReveal::Revealed);
    }

    #[test]
    fn banner_requires_eligibility() {
        let mut state = OfferReveal::Hidden;
        state.reveal();
        assert!(state.shows_banner(true));
        assert!(!state.shows_banner(false));
    }
}
