use std::fmt;

/// Classification of the open `propertyType` tag. Matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    House,
    Apartment,
    Office,
    Store,
    Land,
    Building,
    Warehouse,
    Other(String),
}

/// Which numeric fact a [`Fact`] carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactKind {
    Bedrooms,
    Bathrooms,
    Spaces,
    FloorLevel,
    Area,
}

/// One entry of the detail-page fact line, e.g. "3 Dhoma"
#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    pub kind: FactKind,
    pub label: &'static str,
    pub value: Option<String>,
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value.as_deref().unwrap_or("-"), self.label)
    }
}

const RESIDENTIAL: &[(FactKind, &str)] = &[
    (FactKind::Bedrooms, "Dhoma"),
    (FactKind::Bathrooms, "Banjo"),
    (FactKind::FloorLevel, "Kati"),
    (FactKind::Area, "m²"),
];

const HOUSE: &[(FactKind, &str)] = &[
    (FactKind::Bedrooms, "Dhoma"),
    (FactKind::Bathrooms, "Banjo"),
    (FactKind::FloorLevel, "Katet"),
    (FactKind::Area, "m²"),
];

const COMMERCIAL: &[(FactKind, &str)] = &[
    (FactKind::Spaces, "Hapësira"),
    (FactKind::Bathrooms, "Banjo"),
    (FactKind::FloorLevel, "Kati"),
    (FactKind::Area, "m²"),
];

const BUILDING: &[(FactKind, &str)] = &[
    (FactKind::Spaces, "Hapësira"),
    (FactKind::FloorLevel, "Kati"),
    (FactKind::Area, "m²"),
];

const LAND: &[(FactKind, &str)] = &[(FactKind::Area, "m²")];

impl PropertyKind {
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        match tag.to_lowercase().as_str() {
            "house" => Self::House,
            "apartment" => Self::Apartment,
            "office" => Self::Office,
            "store" => Self::Store,
            "land" => Self::Land,
            "building" => Self::Building,
            "warehouse" => Self::Warehouse,
            _ => Self::Other(tag.to_string()),
        }
    }

    /// Localized name shown on cards and map popups
    pub fn display_name(&self) -> &str {
        match self {
            Self::House => "Shtëpi",
            Self::Apartment => "Banesa",
            Self::Office => "Zyrë",
            Self::Store => "Lokal",
            Self::Land => "Toka",
            Self::Building => "Objekte",
            Self::Warehouse => "Depo",
            Self::Other(tag) => tag,
        }
    }

    pub fn fact_kinds(&self) -> &'static [(FactKind, &'static str)] {
        match self {
            Self::House => HOUSE,
            Self::Apartment => RESIDENTIAL,
            Self::Office | Self::Store => COMMERCIAL,
            Self::Land => LAND,
            Self::Building => BUILDING,
            Self::Warehouse | Self::Other(_) => &[],
        }
    }
}
