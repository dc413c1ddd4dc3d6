use super::species::{Measure, RiskLevel, Species, SpeciesId};

/// Authoritative, insertion-ordered store of species records.
///
/// Names are not unique. Name lookups that mutate apply to every match;
/// [`by_name`](Self::by_name) returns the first.
#[derive(Debug, Clone, Default)]
pub struct SpeciesRegistry {
    species: Vec<Species>,
}

impl SpeciesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(
        &mut self,
        id: SpeciesId,
        name: String,
        risk_level: RiskLevel,
        measure: Measure,
    ) -> &Species {
        self.species.push(Species::new(id, name, risk_level, measure));
        &self.species[self.species.len() - 1]
    }

    /// All species, in insertion order.
    pub fn all(&self) -> &[Species] {
        &self.species
    }

    pub fn by_name(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.name == name)
    }

    pub fn by_id(&self, id: SpeciesId) -> Option<&Species> {
        self.species.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name(name).is_some()
    }

    pub(crate) fn matching_mut<'a>(
        &'a mut self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a mut Species> + 'a {
        self.species.iter_mut().filter(move |s| s.name == name)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Species> {
        self.species.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(v: u8) -> RiskLevel {
        RiskLevel::new(v).unwrap()
    }

    #[test]
    fn keeps_insertion_order() {
        let mut reg = SpeciesRegistry::new();
        reg.insert(1, "Owl".to_string(), risk(2), Measure::Population(5));
        reg.insert(2, "Mouse".to_string(), risk(4), Measure::Population(300));
        let names: Vec<_> = reg.all().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Owl", "Mouse"]);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn by_name_returns_first_match() {
        let mut reg = SpeciesRegistry::new();
        reg.insert(1, "Fox".to_string(), risk(2), Measure::Population(5));
        reg.insert(2, "Fox".to_string(), risk(3), Measure::Population(9));
        assert_eq!(reg.by_name("Fox").map(|s| s.id), Some(1));
        assert!(reg.by_name("fox").is_none());
        assert_eq!(reg.by_id(2).map(|s| s.population), Some(9));
    }

    #[test]
    fn matching_mut_covers_duplicates() {
        let mut reg = SpeciesRegistry::new();
        reg.insert(1, "Fox".to_string(), risk(2), Measure::Population(5));
        reg.insert(2, "Hare".to_string(), risk(3), Measure::Population(9));
        reg.insert(3, "Fox".to_string(), risk(3), Measure::Population(7));
        for s in reg.matching_mut("Fox") {
            s.apply_births(1);
        }
        let pops: Vec<_> = reg.all().iter().map(|s| s.population).collect();
        assert_eq!(pops, [6, 9, 8]);
    }
}
