//! The sorting hat quiz.

use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;

use crate::state::House;

/// One answer and the house it votes for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortingOption {
    pub label: String,
    pub house: House,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortingQuestion {
    pub prompt: String,
    pub options: Vec<SortingOption>,
}

impl SortingQuestion {
    /// Builds a question whose options are listed in [`House`] order.
    pub fn per_house(prompt: impl Into<String>, labels: [&str; 4]) -> Self {
        Self {
            prompt: prompt.into(),
            options: House::iter()
                .zip(labels)
                .map(|(house, label)| SortingOption {
                    label: label.to_string(),
                    house,
                })
                .collect(),
        }
    }

    /// House voted for by the option at `choice`, if it exists.
    pub fn answer(&self, choice: usize) -> Option<House> {
        self.options.get(choice).map(|option| option.house)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SortingQuiz {
    questions: Vec<SortingQuestion>,
}

impl SortingQuiz {
    pub fn new(questions: Vec<SortingQuestion>) -> Self {
        Self { questions }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            SortingQuestion::per_house(
                "Which quality do you value most?",
                ["Courage", "Ambition", "Loyalty", "Wisdom"],
            ),
            SortingQuestion::per_house(
                "Which pet would you bring to Hogwarts?",
                ["Lion", "Snake", "Badger", "Eagle"],
            ),
            SortingQuestion::per_house(
                "How would you like to be remembered?",
                ["The Bold", "The Great", "The Good", "The Wise"],
            ),
        ])
    }

    pub fn questions(&self) -> &[SortingQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for SortingQuiz {
    fn default() -> Self {
        Self::standard()
    }
}

/// Vote counter for the quiz.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortingHat {
    votes: [u32; 4],
}

impl SortingHat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vote(&mut self, house: House) {
        self.votes[slot(house)] += 1;
    }

    pub fn votes(&self, house: House) -> u32 {
        self.votes[slot(house)]
    }

    /// Houses sharing the highest vote count, in [`House`] order.
    pub fn leaders(&self) -> Vec<House> {
        let max = self.votes.iter().copied().max().unwrap_or(0);
        House::iter()
            .filter(|house| self.votes(*house) == max)
            .collect()
    }

    /// The house with the most votes; ties are broken uniformly at random.
    pub fn decide<R: Rng + ?Sized>(&self, rng: &mut R) -> House {
        self.leaders()
            .choose(rng)
            .copied()
            .unwrap_or(House::Gryffindor)
    }
}

fn slot(house: House) -> usize {
    match house {
        House::Gryffindor => 0,
        House::Slytherin => 1,
        House::Hufflepuff => 2,
        House::Ravenclaw => 3,
    }
}
