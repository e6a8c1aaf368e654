//! Letter sets used to fill the grid.

use rand::Rng;
use serde::{Deserialize, Serialize};

const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ARABIC: &str = "ابتثجحخدذرزسشصضطظعغفقكلمنهوي";

/// Letters the generator draws filler from, and that words may use.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// Uppercase A-Z.
    #[default]
    Latin,
    /// The 28 base letters of the Arabic script.
    Arabic,
    /// Any other symbol set.
    Custom(String),
}

impl Alphabet {
    fn source(&self) -> &str {
        match self {
            Alphabet::Latin => LATIN,
            Alphabet::Arabic => ARABIC,
            Alphabet::Custom(letters) => letters,
        }
    }

    pub fn letters(&self) -> Vec<char> {
        self.source().chars().collect()
    }

    pub fn len(&self) -> usize {
        self.source().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.source().is_empty()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.source().contains(letter)
    }

    /// Pick a letter uniformly at random. `None` for an empty alphabet.
    pub fn random_letter<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.source().chars().nth(rng.random_range(0..len))
    }
}

impl std::str::FromStr for Alphabet {
    type Err = std::convert::Infallible;

    /// `latin` and `arabic` name the built-in sets; anything else is used
    /// verbatim as a custom set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "latin" => Alphabet::Latin,
            "arabic" => Alphabet::Arabic,
            _ => Alphabet::Custom(s.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_sizes() {
        assert_eq!(Alphabet::Latin.len(), 26);
        assert_eq!(Alphabet::Arabic.len(), 28);
    }

    #[test]
    fn test_contains() {
        assert!(Alphabet::Latin.contains('Q'));
        assert!(!Alphabet::Latin.contains('q'));
        assert!(Alphabet::Arabic.contains('ب'));
        assert!(Alphabet::Custom("XO".into()).contains('O'));
    }

    #[test]
    fn test_random_letter_stays_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        let alphabet = Alphabet::Arabic;
        for _ in 0..200 {
            let letter = alphabet.random_letter(&mut rng).unwrap();
            assert!(alphabet.contains(letter));
        }
    }

    #[test]
    fn test_empty_custom_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);
        let alphabet = Alphabet::Custom(String::new());
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.random_letter(&mut rng), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Latin".parse::<Alphabet>().unwrap(), Alphabet::Latin);
        assert_eq!("arabic".parse::<Alphabet>().unwrap(), Alphabet::Arabic);
        assert_eq!("ABC".parse::<Alphabet>().unwrap(), Alphabet::Custom("ABC".into()));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Alphabet::Arabic).unwrap();
        assert_eq!(json, r#""arabic""#);
        let custom: Alphabet = serde_json::from_str(r#"{"custom":"XYZ"}"#).unwrap();
        assert_eq!(custom, Alphabet::Custom("XYZ".into()));
    }
}
