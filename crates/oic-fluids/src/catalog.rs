use crate::Species;
use serde::Serialize;

/// Broad application family, used to pick sensible defaults and for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FluidFamily {
    /// Condensing working fluid used in vapour-compression cycles.
    Refrigerant,
    /// Process gas compressed without phase change.
    Gas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidCatalogEntry {
    pub species: Species,
    pub display_name: &'static str,
    pub family: FluidFamily,
    pub aliases: &'static [&'static str],
}

impl FluidCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.species.key().to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }

    /// Exact (case-insensitive) match against the key, CoolProp name or an alias.
    pub fn is_named(&self, name: &str) -> bool {
        let name = name.trim();
        self.species.key().eq_ignore_ascii_case(name)
            || self.species.coolprop_name().eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

const CATALOG: [FluidCatalogEntry; 18] = [
    FluidCatalogEntry {
        species: Species::R134a,
        display_name: "R134a",
        family: FluidFamily::Refrigerant,
        aliases: &["HFC-134a", "tetrafluoroethane"],
    },
    FluidCatalogEntry {
        species: Species::R32,
        display_name: "R32",
        family: FluidFamily::Refrigerant,
        aliases: &["HFC-32", "difluoromethane"],
    },
    FluidCatalogEntry {
        species: Species::R125,
        display_name: "R125",
        family: FluidFamily::Refrigerant,
        aliases: &["HFC-125", "pentafluoroethane"],
    },
    FluidCatalogEntry {
        species: Species::R152a,
        display_name: "R152a",
        family: FluidFamily::Refrigerant,
        aliases: &["HFC-152a"],
    },
    FluidCatalogEntry {
        species: Species::R245fa,
        display_name: "R245fa",
        family: FluidFamily::Refrigerant,
        aliases: &["HFC-245fa"],
    },
    FluidCatalogEntry {
        species: Species::R1234yf,
        display_name: "R1234yf",
        family: FluidFamily::Refrigerant,
        aliases: &["HFO-1234yf"],
    },
    FluidCatalogEntry {
        species: Species::Ammonia,
        display_name: "Ammonia",
        family: FluidFamily::Refrigerant,
        aliases: &["R717", "NH3"],
    },
    FluidCatalogEntry {
        species: Species::Propane,
        display_name: "Propane",
        family: FluidFamily::Refrigerant,
        aliases: &["R290", "C3H8"],
    },
    FluidCatalogEntry {
        species: Species::Isobutane,
        display_name: "Isobutane",
        family: FluidFamily::Refrigerant,
        aliases: &["R600a"],
    },
    FluidCatalogEntry {
        species: Species::Propylene,
        display_name: "Propylene",
        family: FluidFamily::Refrigerant,
        aliases: &["R1270", "C3H6"],
    },
    FluidCatalogEntry {
        species: Species::CO2,
        display_name: "Carbon Dioxide",
        family: FluidFamily::Refrigerant,
        aliases: &["R744", "carbon dioxide"],
    },
    FluidCatalogEntry {
        species: Species::Air,
        display_name: "Air",
        family: FluidFamily::Gas,
        aliases: &["atmosphere"],
    },
    FluidCatalogEntry {
        species: Species::N2,
        display_name: "Nitrogen",
        family: FluidFamily::Gas,
        aliases: &["N2"],
    },
    FluidCatalogEntry {
        species: Species::O2,
        display_name: "Oxygen",
        family: FluidFamily::Gas,
        aliases: &["O2"],
    },
    FluidCatalogEntry {
        species: Species::H2,
        display_name: "Hydrogen",
        family: FluidFamily::Gas,
        aliases: &["H2"],
    },
    FluidCatalogEntry {
        species: Species::He,
        display_name: "Helium",
        family: FluidFamily::Gas,
        aliases: &["He"],
    },
    FluidCatalogEntry {
        species: Species::Ar,
        display_name: "Argon",
        family: FluidFamily::Gas,
        aliases: &["Ar"],
    },
    FluidCatalogEntry {
        species: Species::CH4,
        display_name: "Methane",
        family: FluidFamily::Gas,
        aliases: &["CH4", "natural gas"],
    },
];

pub fn catalog() -> &'static [FluidCatalogEntry] {
    &CATALOG
}

pub fn filter_catalog(query: &str) -> Vec<FluidCatalogEntry> {
    CATALOG
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Look up the entry whose key, CoolProp name or alias equals `name`.
pub fn resolve(name: &str) -> Option<&'static FluidCatalogEntry> {
    CATALOG.iter().find(|entry| entry.is_named(name))
}

pub fn entry_for(species: Species) -> &'static FluidCatalogEntry {
    // Every species has exactly one entry; see `every_species_has_an_entry`.
    CATALOG
        .iter()
        .find(|entry| entry.species == species)
        .unwrap_or(&CATALOG[0])
}
