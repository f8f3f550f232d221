//! Fact retrieval for Faktum.
//!
//! The `FactProvider` resolves a requested category to a concrete animal,
//! attempts one remote lookup, and falls back to the bundled catalog on
//! any failure. It never fails and never returns empty text.

pub mod fallback;
mod remote;

pub use remote::RemoteFactSource;

use crate::config::FactsSettings;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Requested fact category. `Random` is resolved to a concrete animal
/// before any lookup and is never carried further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactCategory {
    Cat,
    Dog,
    Random,
}

impl std::str::FromStr for FactCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cat" => Ok(FactCategory::Cat),
            "dog" => Ok(FactCategory::Dog),
            "random" | "any" => Ok(FactCategory::Random),
            _ => Err(format!("Unknown fact category: {}", s)),
        }
    }
}

/// A concrete animal, post-resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animal {
    Cat,
    Dog,
}

impl std::fmt::Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Animal::Cat => write!(f, "cat"),
            Animal::Dog => write!(f, "dog"),
        }
    }
}

/// Where a fact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactOrigin {
    Remote,
    Fallback,
}

/// A retrieved fact. Always populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    pub text: String,
    pub animal: Animal,
    pub origin: FactOrigin,
}

impl Fact {
    /// Human-readable source label, matching the tool's output contract.
    pub fn source_label(&self) -> &'static str {
        match (self.origin, self.animal) {
            (FactOrigin::Remote, Animal::Cat) => "Cat Facts API",
            (FactOrigin::Remote, Animal::Dog) => "Dog Facts API",
            (FactOrigin::Fallback, _) => "Local fallback data",
        }
    }
}

/// Injectable randomness source so category resolution and fallback
/// selection can be made deterministic in tests.
pub trait Randomness: Send + Sync {
    /// Uniform 50/50 coin flip.
    fn coin_flip(&self) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Thread-local RNG backed randomness.
pub struct ThreadRandomness;

impl Randomness for ThreadRandomness {
    fn coin_flip(&self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }

    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Fact provider with remote lookup and local fallback.
pub struct FactProvider {
    remote: RemoteFactSource,
    rng: Arc<dyn Randomness>,
}

impl FactProvider {
    /// Create a provider with thread-local randomness.
    pub fn new(settings: &FactsSettings) -> Self {
        Self::with_randomness(settings, Arc::new(ThreadRandomness))
    }

    /// Create a provider with a custom randomness source.
    pub fn with_randomness(settings: &FactsSettings, rng: Arc<dyn Randomness>) -> Self {
        Self {
            remote: RemoteFactSource::new(settings),
            rng,
        }
    }

    /// Resolve a category to a concrete animal.
    pub fn resolve(&self, category: FactCategory) -> Animal {
        match category {
            FactCategory::Cat => Animal::Cat,
            FactCategory::Dog => Animal::Dog,
            FactCategory::Random => {
                if self.rng.coin_flip() {
                    Animal::Cat
                } else {
                    Animal::Dog
                }
            }
        }
    }

    /// Get a fact for the requested category.
    ///
    /// Attempts one remote lookup; any failure (network error, non-success
    /// status, malformed payload) selects from the fallback catalog instead.
    pub async fn get_fact(&self, category: FactCategory) -> Fact {
        let animal = self.resolve(category);

        match self.remote.fetch(animal).await {
            Ok(text) => Fact {
                text,
                animal,
                origin: FactOrigin::Remote,
            },
            Err(e) => {
                debug!("Remote {} lookup failed, using fallback: {}", animal, e);
                self.fallback_fact(animal)
            }
        }
    }

    fn fallback_fact(&self, animal: Animal) -> Fact {
        let facts = fallback::facts_for(animal);
        let index = self.rng.pick_index(facts.len());

        Fact {
            text: facts[index].to_string(),
            animal,
            origin: FactOrigin::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Deterministic randomness: alternating coin flips, fixed index.
    struct ScriptedRandomness {
        flips: AtomicUsize,
        index: usize,
    }

    impl ScriptedRandomness {
        fn new(index: usize) -> Self {
            Self {
                flips: AtomicUsize::new(0),
                index,
            }
        }
    }

    impl Randomness for ScriptedRandomness {
        fn coin_flip(&self) -> bool {
            self.flips.fetch_add(1, Ordering::SeqCst) % 2 == 0
        }

        fn pick_index(&self, len: usize) -> usize {
            self.index.min(len - 1)
        }
    }

    fn offline_provider(rng: Arc<dyn Randomness>) -> FactProvider {
        // Unreachable endpoints with a short timeout force the fallback path.
        let settings = FactsSettings {
            cat_api_url: "http://127.0.0.1:1/facts/random".to_string(),
            dog_api_url: "http://127.0.0.1:1/api/v1/resources/dogs".to_string(),
            timeout_seconds: 1,
        };
        FactProvider::with_randomness(&settings, rng)
    }

    #[test]
    fn test_random_resolves_to_concrete_animal() {
        let provider = offline_provider(Arc::new(ScriptedRandomness::new(0)));
        assert_eq!(provider.resolve(FactCategory::Random), Animal::Cat);
        assert_eq!(provider.resolve(FactCategory::Random), Animal::Dog);
        assert_eq!(provider.resolve(FactCategory::Cat), Animal::Cat);
        assert_eq!(provider.resolve(FactCategory::Dog), Animal::Dog);
    }

    #[test]
    fn test_random_split_is_uniform() {
        let provider = offline_provider(Arc::new(ThreadRandomness));
        let cats = (0..1000)
            .filter(|_| provider.resolve(FactCategory::Random) == Animal::Cat)
            .count();
        // Binomial(1000, 0.5) stays comfortably inside this band.
        assert!((350..=650).contains(&cats), "split was {}/1000", cats);
    }

    #[tokio::test]
    async fn test_fallback_on_unreachable_remote() {
        let provider = offline_provider(Arc::new(ScriptedRandomness::new(3)));

        for category in [FactCategory::Cat, FactCategory::Dog] {
            let fact = provider.get_fact(category).await;
            assert_eq!(fact.origin, FactOrigin::Fallback);
            assert!(!fact.text.is_empty());
            assert!(fallback::facts_for(fact.animal).contains(&fact.text.as_str()));
        }
    }

    #[tokio::test]
    async fn test_fallback_selection_is_deterministic_with_scripted_rng() {
        let provider = offline_provider(Arc::new(ScriptedRandomness::new(0)));
        let fact = provider.get_fact(FactCategory::Dog).await;
        assert_eq!(fact.text, fallback::facts_for(Animal::Dog)[0]);
        assert_eq!(fact.source_label(), "Local fallback data");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("cat".parse::<FactCategory>().unwrap(), FactCategory::Cat);
        assert_eq!("DOG".parse::<FactCategory>().unwrap(), FactCategory::Dog);
        assert_eq!(
            "random".parse::<FactCategory>().unwrap(),
            FactCategory::Random
        );
        assert!("fish".parse::<FactCategory>().is_err());
    }
}
