//! Avatar gradient palette and initials derivation

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A from/to gradient pair for a cheer avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarGradient {
    pub from: &'static str,
    pub to: &'static str,
}

/// The six fixed gradient pairs; one is chosen pseudo-randomly per submission
pub const AVATAR_PALETTE: [AvatarGradient; 6] = [
    AvatarGradient { from: "from-pink-400", to: "to-rose-500" },
    AvatarGradient { from: "from-purple-400", to: "to-indigo-500" },
    AvatarGradient { from: "from-blue-400", to: "to-cyan-500" },
    AvatarGradient { from: "from-green-400", to: "to-emerald-500" },
    AvatarGradient { from: "from-yellow-400", to: "to-orange-500" },
    AvatarGradient { from: "from-teal-400", to: "to-blue-500" },
];

impl AvatarGradient {
    /// Pick a gradient with the given RNG
    #[must_use]
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        AVATAR_PALETTE[rng.gen_range(0..AVATAR_PALETTE.len())]
    }

    /// Pick a gradient with the thread-local RNG
    #[must_use]
    pub fn random() -> Self {
        Self::pick(&mut rand::thread_rng())
    }
}

/// Derive display initials from an author name: first two characters, uppercased
#[must_use]
pub fn initials_of(author: &str) -> String {
    author.chars().take(2).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_first_two_chars_uppercased() {
        assert_eq!(initials_of("Ji-Soo Park"), "JI");
        assert_eq!(initials_of("mk"), "MK");
        assert_eq!(initials_of("a"), "A");
        assert_eq!(initials_of(""), "");
    }

    #[test]
    fn test_initials_respects_char_boundaries() {
        // Multibyte author names must not panic on byte slicing
        assert_eq!(initials_of("지수"), "지수");
    }

    #[test]
    fn test_pick_stays_in_palette() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let g = AvatarGradient::pick(&mut rng);
            assert!(AVATAR_PALETTE.contains(&g));
        }
    }
}
