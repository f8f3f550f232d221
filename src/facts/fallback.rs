//! Bundled fallback fact catalog.
//!
//! Used whenever a remote lookup fails. Loaded once, immutable for the
//! lifetime of the process.

use super::Animal;

/// Fallback facts for the cat category.
pub const CAT_FACTS: &[&str] = &[
    "Octopuses have three hearts: two pump blood through the gills, while the third pumps it through the rest of the body.",
    "Koalas sleep up to 22 hours a day to conserve energy from their low-nutrition eucalyptus diet.",
    "Pangolins are the only mammals wholly covered in keratin scales.",
    "Axolotls can regenerate entire limbs, spinal cord, heart, and other organs throughout their lives.",
    "Tardigrades can survive the vacuum of space, extreme radiation, and temperatures from near absolute zero to 150°C.",
    "Platypuses are one of the few venomous mammals; males have venomous spurs on their hind legs.",
    "The narwhal's tusk is actually an elongated upper left canine tooth that can grow up to 10 feet long.",
    "Honey badgers have loose skin that allows them to twist and bite even when held in an attacker's jaws.",
    "Cuttlefish can change color and texture in less than a second to camouflage or communicate.",
    "Flamingos are born white or gray; their pink color comes from carotenoid pigments in their diet.",
    "Archerfish shoot jets of water to knock insects off leaves into the water to eat.",
    "Sloths move so slowly that algae grows on their fur, providing camouflage and nutrition.",
    "Komodo dragons have venom that causes prey to bleed out after a bite.",
    "Mantis shrimp strike with claws at speeds up to 51 mph, strong enough to break aquarium glass.",
    "Elephants have the longest pregnancy of any land mammal, lasting nearly 22 months.",
    "Humpback whales sing complex songs that can last 20 minutes and travel hundreds of miles underwater.",
    "Ravens can solve puzzles and use tools with intelligence comparable to a 7-year-old child.",
    "Sea otters hold hands while sleeping to avoid drifting apart in ocean currents.",
    "A giraffe's neck can be over 6 feet long but has only 7 vertebrae, the same as a human.",
    "The immortal jellyfish can revert to an earlier life stage after maturity, potentially living forever.",
];

/// Fallback facts for the dog category.
pub const DOG_FACTS: &[&str] = &[
    "A blue whale's heart is so large that a human could swim through its arteries.",
    "Ostriches can run faster than horses, reaching speeds up to 45 mph.",
    "The pistol shrimp snaps its claw to create a cavitation bubble that reaches 4,700°C—hotter than the sun's surface.",
    "Penguins propose with a pebble; the female accepts by placing it in her nest.",
    "A group of crows is called a murder, but a group of ravens is called an unkindness.",
    "Dolphins have names for each other—unique whistles they respond to like human names.",
    "The turquoise-browed motmot digs burrows up to 15 feet long for nesting.",
    "Cheetahs can accelerate from 0 to 60 mph in under 3 seconds.",
    "The star-nosed mole has 25,000 sensory receptors on its nose and can identify prey in 8 milliseconds.",
    "Albatrosses can fly for years without landing, sleeping while gliding.",
    "The mimic octopus can impersonate over 15 different marine animals, including lionfish and sea snakes.",
    "A newborn kangaroo is the size of a lima bean and crawls into the pouch unaided.",
    "The bowerbird male builds elaborate decorated structures to attract females.",
    "Electric eels can generate 600-volt shocks strong enough to stun a horse.",
    "The proboscis monkey's nose amplifies calls and attracts mates; the bigger, the better.",
    "Wombats produce cube-shaped poop to prevent it from rolling away when marking territory.",
    "The lyrebird can perfectly mimic chainsaws, camera shutters, and other birds.",
    "Gorillas hum and sing while eating to express contentment.",
    "The glass frog has translucent skin; you can see its beating heart and organs.",
    "A single spoonful of a neutron star would weigh about 6 billion tons.",
];

/// Get the fallback fact list for an animal.
pub fn facts_for(animal: Animal) -> &'static [&'static str] {
    match animal {
        Animal::Cat => CAT_FACTS,
        Animal::Dog => DOG_FACTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_are_non_empty() {
        assert!(!facts_for(Animal::Cat).is_empty());
        assert!(!facts_for(Animal::Dog).is_empty());
    }

    #[test]
    fn test_no_empty_entries() {
        for fact in CAT_FACTS.iter().chain(DOG_FACTS.iter()) {
            assert!(!fact.trim().is_empty());
        }
    }
}
