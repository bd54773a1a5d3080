//! Exaltation points, own signs and natural friendship (BPHS tables).

use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

/// Exaltation degree (sidereal) for sapta grahas. Returns None for Rahu/Ketu.
///
/// Sun 10 Ari=10, Moon 3 Tau=33, Mars 28 Cap=298,
/// Mercury 15 Vir=165, Jupiter 5 Can=95, Venus 27 Pis=357, Saturn 20 Lib=200.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),
        Graha::Chandra => Some(33.0),
        Graha::Mangal => Some(298.0),
        Graha::Buddh => Some(165.0),
        Graha::Guru => Some(95.0),
        Graha::Shukra => Some(357.0),
        Graha::Shani => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Own-sign rashis. Empty for Rahu/Ketu.
pub fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

pub fn is_own_sign(graha: Graha, rashi: Rashi) -> bool {
    own_signs(graha).contains(&rashi)
}

/// Natural (naisargika) friends of a graha.
pub fn natural_friends(graha: Graha) -> &'static [Graha] {
    use Graha::*;
    match graha {
        Surya => &[Chandra, Mangal, Guru],
        Chandra => &[Surya, Buddh],
        Mangal => &[Surya, Chandra, Guru],
        Buddh => &[Surya, Shukra],
        Guru => &[Surya, Chandra, Mangal],
        Shukra => &[Buddh, Shani],
        Shani => &[Buddh, Shukra],
        Rahu => &[Buddh, Shukra, Shani],
        Ketu => &[Mangal, Shukra, Shani],
    }
}

/// Whether `other` is in `graha`'s natural friend set. Not symmetric.
pub fn is_natural_friend(graha: Graha, other: Graha) -> bool {
    natural_friends(graha).contains(&other)
}

/// Whether the lord of `rashi` is a natural friend of `graha`.
pub fn in_friendly_sign(graha: Graha, rashi: Rashi) -> bool {
    is_natural_friend(graha, rashi_lord(rashi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::{ALL_GRAHAS, SAPTA_GRAHAS};

    #[test]
    fn exaltation_only_for_sapta_grahas() {
        for g in SAPTA_GRAHAS {
            assert!(exaltation_degree(g).is_some());
        }
        assert!(exaltation_degree(Graha::Rahu).is_none());
        assert!(exaltation_degree(Graha::Ketu).is_none());
    }

    #[test]
    fn own_signs_are_ruled_by_the_graha() {
        for g in SAPTA_GRAHAS {
            for r in own_signs(g) {
                assert_eq!(rashi_lord(*r), g);
            }
        }
        assert!(own_signs(Graha::Rahu).is_empty());
    }

    #[test]
    fn nobody_is_own_friend() {
        for g in ALL_GRAHAS {
            assert!(!is_natural_friend(g, g));
        }
    }

    #[test]
    fn friendship_not_symmetric() {
        // Mercury counts the Moon neutral, the Moon counts Mercury a friend
        assert!(is_natural_friend(Graha::Chandra, Graha::Buddh));
        assert!(!is_natural_friend(Graha::Buddh, Graha::Chandra));
    }

    #[test]
    fn node_friends() {
        assert_eq!(
            natural_friends(Graha::Rahu),
            &[Graha::Buddh, Graha::Shukra, Graha::Shani]
        );
        assert_eq!(
            natural_friends(Graha::Ketu),
            &[Graha::Mangal, Graha::Shukra, Graha::Shani]
        );
    }

    #[test]
    fn friendly_sign_uses_sign_lord() {
        // Sun in Aries: lord Mars is a friend
        assert!(in_friendly_sign(Graha::Surya, Rashi::Mesha));
        // Sun in Capricorn: lord Saturn is not
        assert!(!in_friendly_sign(Graha::Surya, Rashi::Makara));
    }
}
