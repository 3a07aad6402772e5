use super::domain::Career;
use std::collections::HashMap;
use tracing::warn;

/// Fixed set of careers for the process lifetime, with O(1) lookup by name.
///
/// Iteration order is insertion order and doubles as the ranking tie-break for
/// equal scores.
#[derive(Debug, Clone)]
pub struct CareerRegistry {
    careers: Vec<Career>,
    index: HashMap<String, usize>,
}

impl CareerRegistry {
    /// Build a registry from an arbitrary list. Later duplicates of a name are dropped.
    pub fn new(careers: Vec<Career>) -> Self {
        let mut unique = Vec::with_capacity(careers.len());
        let mut index = HashMap::with_capacity(careers.len());

        for mut career in careers {
            if index.contains_key(&career.name) {
                warn!(career = %career.name, "duplicate career name ignored");
                continue;
            }
            career.score = 0;
            index.insert(career.name.clone(), unique.len());
            unique.push(career);
        }

        Self {
            careers: unique,
            index,
        }
    }

    pub fn standard() -> Self {
        Self::new(standard_careers())
    }

    /// Zero every score. Badge state lives on the session and is cleared there.
    pub fn reset(&mut self) {
        for career in &mut self.careers {
            career.score = 0;
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Career> {
        self.index.get(name).and_then(|&slot| self.careers.get(slot))
    }

    pub(crate) fn lookup_mut(&mut self, name: &str) -> Option<&mut Career> {
        let slot = *self.index.get(name)?;
        self.careers.get_mut(slot)
    }

    pub fn all(&self) -> &[Career] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

impl Default for CareerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_careers() -> Vec<Career> {
    vec![
        Career::new(
            "Software Engineer",
            "Designs, builds and maintains the software systems people rely on every day.",
            "$90,000 - $160,000",
        ),
        Career::new(
            "Data Scientist",
            "Turns raw data into models and insights that drive product and business decisions.",
            "$95,000 - $165,000",
        ),
        Career::new(
            "UX Designer",
            "Researches user needs and shapes interfaces that feel intuitive and accessible.",
            "$75,000 - $130,000",
        ),
        Career::new(
            "Product Manager",
            "Aligns engineering, design and business around what to build next and why.",
            "$100,000 - $170,000",
        ),
    ]
}
