//! Static item catalog
//!
//! Pure data: which logos can fall, what they are worth, and the names the
//! audio collaborator keys its sounds on.

/// A catchable logo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logo {
    pub name: &'static str,
    pub points: u32,
    /// Shown in the tooltip when caught
    pub tooltip: &'static str,
}

pub const LOGOS: &[Logo] = &[
    Logo {
        name: "OpenAI",
        points: 10,
        tooltip: "OpenAI: Leading AI research and deployment.",
    },
    Logo {
        name: "Google AI",
        points: 10,
        tooltip: "Google AI: Advancing AI for everyone.",
    },
    Logo {
        name: "Microsoft AI",
        points: 10,
        tooltip: "Microsoft AI: Empowering innovation with AI.",
    },
    Logo {
        name: "Meta AI",
        points: 10,
        tooltip: "Meta AI: Building the future of connection with AI.",
    },
];

/// Look up a logo by catalog index (wraps, so any index is valid)
pub fn logo(index: usize) -> &'static Logo {
    &LOGOS[index % LOGOS.len()]
}

/// Sound names, one per feedback event
pub mod sounds {
    pub const CATCH: &str = "catch";
    pub const HIT: &str = "hit";
    pub const GAME_OVER: &str = "gameover";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_nonempty_and_scored() {
        assert!(!LOGOS.is_empty());
        assert!(LOGOS.iter().all(|l| l.points > 0 && !l.tooltip.is_empty()));
    }

    #[test]
    fn test_logo_index_wraps() {
        assert_eq!(logo(LOGOS.len()).name, LOGOS[0].name);
    }
}
