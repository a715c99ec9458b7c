use crate::error::{RentifyError, Result};
use crate::models::{Location, Subdivision};
use serde::{Deserialize, Serialize};

/// One level of the region → province → city → barangay cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Region,
    Province,
    City,
    Barangay,
}

#[derive(Debug, Clone)]
struct City {
    name: &'static str,
    barangays: &'static [&'static str],
}

#[derive(Debug, Clone)]
struct Province {
    name: &'static str,
    cities: &'static [City],
}

#[derive(Debug, Clone)]
struct Region {
    name: &'static str,
    provinces: &'static [Province],
}

const REFERENCE: &[Region] = &[
    Region {
        name: "NCR",
        provinces: &[Province {
            name: "Metro Manila",
            cities: &[
                City { name: "Makati", barangays: &["Poblacion", "Bel-Air", "San Lorenzo"] },
                City { name: "Quezon City", barangays: &["Diliman", "Cubao", "Loyola Heights"] },
                City { name: "Taguig", barangays: &["Fort Bonifacio", "Ususan"] },
            ],
        }],
    },
    Region {
        name: "Region IV-A",
        provinces: &[
            Province {
                name: "Cavite",
                cities: &[
                    City { name: "Bacoor", barangays: &["Molino I", "Talaba"] },
                    City { name: "Imus", barangays: &["Anabu I-A", "Bucandala"] },
                ],
            },
            Province {
                name: "Laguna",
                cities: &[
                    City { name: "Santa Rosa", barangays: &["Balibago", "Tagapo"] },
                    City { name: "Calamba", barangays: &["Real", "Parian"] },
                ],
            },
        ],
    },
    Region {
        name: "Region VII",
        provinces: &[
            Province {
                name: "Cebu",
                cities: &[
                    City { name: "Cebu City", barangays: &["Lahug", "Mabolo", "Guadalupe"] },
                    City { name: "Mandaue", barangays: &["Banilad", "Subangdaku"] },
                ],
            },
            Province {
                name: "Bohol",
                cities: &[City { name: "Tagbilaran", barangays: &["Cogon", "Dao"] }],
            },
        ],
    },
];

/// Immutable lookup tree behind the cascading location dropdowns
#[derive(Debug, Clone, Copy)]
pub struct LocationTree {
    regions: &'static [Region],
}

impl Default for LocationTree {
    fn default() -> Self {
        Self::reference()
    }
}

impl LocationTree {
    pub fn reference() -> Self {
        Self { regions: REFERENCE }
    }

    fn region(&self, name: &str) -> Option<&'static Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    fn province(&self, region: &str, name: &str) -> Option<&'static Province> {
        self.region(region)?.provinces.iter().find(|p| p.name == name)
    }

    fn city(&self, region: &str, province: &str, name: &str) -> Option<&'static City> {
        self.province(region, province)?.cities.iter().find(|c| c.name == name)
    }

    pub fn regions(&self) -> Vec<&'static str> {
        self.regions.iter().map(|r| r.name).collect()
    }

    pub fn provinces(&self, region: &str) -> Vec<&'static str> {
        self.region(region)
            .map(|r| r.provinces.iter().map(|p| p.name).collect())
            .unwrap_or_default()
    }

    pub fn cities(&self, region: &str, province: &str) -> Vec<&'static str> {
        self.province(region, province)
            .map(|p| p.cities.iter().map(|c| c.name).collect())
            .unwrap_or_default()
    }

    pub fn barangays(&self, region: &str, province: &str, city: &str) -> Vec<&'static str> {
        self.city(region, province, city)
            .map(|c| c.barangays.to_vec())
            .unwrap_or_default()
    }

    /// Options a dropdown at `level` offers given the current selection.
    /// Empty when a parent level is still unselected.
    pub fn options(&self, selection: &LocationSelection, level: Level) -> Vec<&'static str> {
        let region = selection.region.as_deref();
        let province = selection.province.as_deref();
        let city = selection.city.as_deref();

        match (level, region, province, city) {
            (Level::Region, _, _, _) => self.regions(),
            (Level::Province, Some(r), _, _) => self.provinces(r),
            (Level::City, Some(r), Some(p), _) => self.cities(r, p),
            (Level::Barangay, Some(r), Some(p), Some(c)) => self.barangays(r, p, c),
            _ => Vec::new(),
        }
    }

    /// Select `value` at `level`, checking it against the options derived
    /// from the parent selection. Lower levels are cleared.
    pub fn select(
        &self,
        selection: &LocationSelection,
        level: Level,
        value: &str,
    ) -> Result<LocationSelection> {
        if !self.options(selection, level).iter().any(|option| *option == value) {
            return Err(RentifyError::validation(
                "location",
                format!("'{}' is not a valid {:?} for the current selection", value, level),
            ));
        }
        Ok(selection.with(level, Some(value.to_string())))
    }
}

/// Current choice at each cascade level; `None` means "any"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSelection {
    pub region: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub barangay: Option<String>,
}

impl LocationSelection {
    /// Set one level and clear everything below it
    pub fn with(&self, level: Level, value: Option<String>) -> Self {
        let mut next = self.clone();
        match level {
            Level::Region => {
                next.region = value;
                next.province = None;
                next.city = None;
                next.barangay = None;
            }
            Level::Province => {
                next.province = value;
                next.city = None;
                next.barangay = None;
            }
            Level::City => {
                next.city = value;
                next.barangay = None;
            }
            Level::Barangay => next.barangay = value,
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.province.is_none()
            && self.city.is_none()
            && self.barangay.is_none()
    }

    /// Every selected level must equal the matching field. Flat locations
    /// only match an empty selection.
    pub fn matches(&self, location: &Location) -> bool {
        if self.is_empty() {
            return true;
        }
        match location.subdivision() {
            Some(sub) => self.matches_subdivision(sub),
            None => false,
        }
    }

    fn matches_subdivision(&self, sub: &Subdivision) -> bool {
        fn level_ok(selected: &Option<String>, actual: &str) -> bool {
            selected.as_deref().map_or(true, |s| s == actual)
        }

        level_ok(&self.region, &sub.region)
            && level_ok(&self.province, &sub.province)
            && level_ok(&self.city, &sub.city)
            && level_ok(&self.barangay, &sub.barangay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_selection(tree: &LocationTree) -> LocationSelection {
        let s = LocationSelection::default();
        let s = tree.select(&s, Level::Region, "NCR").unwrap();
        let s = tree.select(&s, Level::Province, "Metro Manila").unwrap();
        let s = tree.select(&s, Level::City, "Makati").unwrap();
        tree.select(&s, Level::Barangay, "Poblacion").unwrap()
    }

    #[test]
    fn new_region_clears_lower_levels() {
        let tree = LocationTree::reference();
        let selected = full_selection(&tree);
        assert_eq!(selected.barangay.as_deref(), Some("Poblacion"));

        let moved = tree.select(&selected, Level::Region, "Region VII").unwrap();
        assert_eq!(moved.region.as_deref(), Some("Region VII"));
        assert!(moved.province.is_none());
        assert!(moved.city.is_none());
        assert!(moved.barangay.is_none());

        assert_eq!(tree.options(&moved, Level::Province), vec!["Cebu", "Bohol"]);
        assert!(tree.options(&moved, Level::City).is_empty());
    }

    #[test]
    fn changing_city_keeps_region_and_province() {
        let tree = LocationTree::reference();
        let selected = full_selection(&tree);
        let moved = tree.select(&selected, Level::City, "Taguig").unwrap();
        assert_eq!(moved.region.as_deref(), Some("NCR"));
        assert_eq!(moved.province.as_deref(), Some("Metro Manila"));
        assert!(moved.barangay.is_none());
        assert_eq!(tree.options(&moved, Level::Barangay), vec!["Fort Bonifacio", "Ususan"]);
    }

    #[test]
    fn select_rejects_values_outside_parent() {
        let tree = LocationTree::reference();
        let s = tree
            .select(&LocationSelection::default(), Level::Region, "NCR")
            .unwrap();
        assert!(tree.select(&s, Level::Province, "Cebu").is_err());
        assert!(tree
            .select(&LocationSelection::default(), Level::City, "Makati")
            .is_err());
    }

    #[test]
    fn matching_respects_each_selected_level() {
        let tree = LocationTree::reference();
        let makati = Location::Structured(Subdivision {
            region: "NCR".into(),
            province: "Metro Manila".into(),
            city: "Makati".into(),
            barangay: "Poblacion".into(),
            street: None,
        });

        assert!(LocationSelection::default().matches(&makati));
        assert!(full_selection(&tree).matches(&makati));

        let other_city = full_selection(&tree).with(Level::City, Some("Taguig".into()));
        assert!(!other_city.matches(&makati));

        let flat = Location::Flat("Makati".into());
        assert!(LocationSelection::default().matches(&flat));
        assert!(!full_selection(&tree).matches(&flat));
    }
}
