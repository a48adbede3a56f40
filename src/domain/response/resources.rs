//! Curated mental-health resources.
//!
//! Static helpline and self-care data served by the resources endpoint.

/// A crisis helpline contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Helpline {
    pub name: &'static str,
    pub number: &'static str,
}

/// Curated helplines, warning signs, and self-care suggestions.
#[derive(Debug, Clone, Copy)]
pub struct SupportResources {
    pub helplines: &'static [Helpline],
    pub emergency_signs: &'static [&'static str],
    pub self_care_tips: &'static [&'static str],
}

/// The curated resource set.
pub const CURATED: SupportResources = SupportResources {
    helplines: &[
        Helpline {
            name: "AASRA Suicide Prevention",
            number: "91-22-27546669",
        },
        Helpline {
            name: "iCall Psychosocial Helpline",
            number: "9152987821",
        },
        Helpline {
            name: "Vandrevala Foundation",
            number: "9999666555",
        },
    ],
    emergency_signs: &[
        "Thoughts of harming yourself or baby",
        "Severe anxiety or panic attacks",
        "Inability to care for yourself or baby",
        "Hearing voices or seeing things",
    ],
    self_care_tips: &[
        "Rest whenever baby sleeps",
        "Accept help from family/friends",
        "Gentle walks in fresh air",
        "Connect with other new mothers",
        "Practice deep breathing",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_set_is_populated() {
        assert_eq!(CURATED.helplines.len(), 3);
        assert_eq!(CURATED.emergency_signs.len(), 4);
        assert_eq!(CURATED.self_care_tips.len(), 5);
    }

    #[test]
    fn aasra_helpline_is_listed() {
        assert!(CURATED
            .helplines
            .iter()
            .any(|h| h.name.contains("AASRA") && h.number == "91-22-27546669"));
    }
}
